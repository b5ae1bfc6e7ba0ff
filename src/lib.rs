pub mod loaders;
pub mod model;
pub mod render;
pub mod transform;
pub mod views;

use std::io;

use model::dataset::Dataset;
use model::selection::Selection;
use render::json_renderer::JsonRenderer;

/// Loads the dataset once and runs a single render pass for the given
/// selection, writing the resulting view artifacts to stdout as JSON.
pub fn run(file_path: String, selection: Selection) -> Result<(), String> {
    let dataset = Dataset::load(&file_path).map_err(|e| e.to_string())?;

    log::info!(
        "Loaded {} movies ({} expanded genre rows) from {}",
        dataset.movies.len(),
        dataset.expanded.len(),
        file_path
    );

    let artifacts = render::dispatcher::render(&selection, &dataset);

    let mut renderer = JsonRenderer::new(io::stdout());
    renderer.render(&artifacts)?;

    log::info!(
        "Rendered {:?} chart by {:?} and the year {} panel",
        selection.chart,
        selection.category,
        selection.year
    );

    Ok(())
}

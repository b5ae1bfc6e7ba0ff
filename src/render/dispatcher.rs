use serde::Serialize;

use crate::model::dataset::Dataset;
use crate::model::movie::{ExpandedGenreRow, MovieRecord};
use crate::model::selection::{Category, ChartKind, Selection};
use crate::views::category_view;
use crate::views::year_view::{self, GenreCount};

/// Display labels for the category selector.
pub fn category_label(category: Category) -> &'static str {
    match category {
        Category::Genre => "Genre",
        Category::Budget => "Budget (in billions)",
        Category::Certificate => "Certificate",
        Category::RunTime => "Run Time",
    }
}

/// Spec for the "Film Rating by {category}" chart: rating on the y axis,
/// the selected category on the x axis and as the color grouping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChartSpec {
    pub kind: ChartKind,
    pub x: &'static str,
    pub y: &'static str,
    pub color: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub title: String,
}

impl CategoryChartSpec {
    pub fn new(kind: ChartKind, category: Category) -> Self {
        let label = category_label(category);
        CategoryChartSpec {
            kind,
            x: category.field_name(),
            y: "rating",
            color: category.field_name(),
            x_label: label,
            y_label: "Rating",
            title: format!("Film Rating by {}", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearBarChartSpec {
    pub x: &'static str,
    pub y: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl YearBarChartSpec {
    fn new() -> Self {
        YearBarChartSpec {
            x: "genre",
            y: "count",
            x_label: "Genre",
            y_label: "Number of Films",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearPieChartSpec {
    pub values: &'static str,
    pub labels: &'static str,
}

impl YearPieChartSpec {
    fn new() -> Self {
        YearPieChartSpec {
            values: "count",
            labels: "genre",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart<'a> {
    pub spec: CategoryChartSpec,
    pub rows: &'a [ExpandedGenreRow],
}

/// The year tab renders both a bar and a pie chart, with no chart-kind
/// toggle. When nothing matches the year it carries a message instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum YearPanel {
    Charts {
        year: u32,
        top_movies: Vec<MovieRecord>,
        genre_counts: Vec<GenreCount>,
        bar: YearBarChartSpec,
        pie: YearPieChartSpec,
    },
    Empty {
        year: u32,
        message: String,
    },
}

/// Everything one render pass hands to the render collaborator: the full
/// selected-column table, one category chart, and the year panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewArtifacts<'a> {
    pub table: &'a [MovieRecord],
    pub category_chart: CategoryChart<'a>,
    pub year_panel: YearPanel,
}

/// Pure render pass: recomputes every artifact from the immutable dataset and
/// the current selection. No caching between passes.
pub fn render<'a>(selection: &Selection, dataset: &'a Dataset) -> ViewArtifacts<'a> {
    let category = category_view::category_view(dataset, selection.category);
    let category_chart = CategoryChart {
        spec: CategoryChartSpec::new(selection.chart, category.category),
        rows: category.rows,
    };

    let year_panel = match year_view::year_view(dataset, selection.year) {
        Some(view) => YearPanel::Charts {
            year: view.year,
            top_movies: view.top_movies,
            genre_counts: view.genre_counts,
            bar: YearBarChartSpec::new(),
            pie: YearPieChartSpec::new(),
        },
        None => YearPanel::Empty {
            year: selection.year,
            message: format!(
                "No films available for the selected year {}.",
                selection.year
            ),
        },
    };

    ViewArtifacts {
        table: &dataset.movies,
        category_chart,
        year_panel,
    }
}

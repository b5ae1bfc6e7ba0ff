use std::io::Write;

use crate::render::dispatcher::ViewArtifacts;

/// Render collaborator that serializes a render pass as JSON. The binary
/// points it at stdout; tests point it at a buffer.
pub struct JsonRenderer<W: Write> {
    sink: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(sink: W) -> Self {
        JsonRenderer { sink }
    }

    pub fn render(&mut self, artifacts: &ViewArtifacts) -> Result<(), String> {
        if let Err(e) = serde_json::to_writer_pretty(&mut self.sink, artifacts) {
            return Err(format!("Error when serializing view artifacts. {:?}", e));
        }

        if let Err(e) = writeln!(self.sink) {
            return Err(format!("Error when writing to the render sink. {:?}", e));
        }

        if let Err(e) = self.sink.flush() {
            return Err(format!("Error when flushing the render sink. {:?}", e));
        }

        Ok(())
    }
}

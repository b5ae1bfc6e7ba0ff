pub mod dispatcher;
pub mod json_renderer;

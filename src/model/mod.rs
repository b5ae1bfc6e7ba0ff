pub mod dataset;
pub mod movie;
pub mod selection;

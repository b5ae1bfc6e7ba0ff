pub mod budget;
pub mod genres;

use crate::loaders::dataset_loader::{self, LoadError};
use crate::model::movie::{ExpandedGenreRow, MovieRecord};
use crate::transform::genres;

/// The loaded table and its genre-expanded projection. Built once at startup
/// and treated as immutable for the rest of the session; every render pass
/// borrows it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub movies: Vec<MovieRecord>,
    pub expanded: Vec<ExpandedGenreRow>,
}

impl Dataset {
    pub fn load(file_path: &str) -> Result<Dataset, LoadError> {
        let movies = dataset_loader::load_movies(file_path)?;
        Ok(Dataset::from_movies(movies))
    }

    pub fn from_movies(movies: Vec<MovieRecord>) -> Dataset {
        let expanded = genres::expand_genres(&movies);
        Dataset { movies, expanded }
    }
}

use std::fs::File;

use serde::Deserialize;
use thiserror::Error;

use crate::model::movie::MovieRecord;
use crate::transform::budget;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not open dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed row in dataset file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Raw CSV row. Only the columns the app uses are listed here; anything else
/// in the source file is dropped on deserialization. Budget stays a string
/// until the normalizer has had a look at it.
#[derive(Debug, Deserialize)]
struct RawMovieRow {
    rank: u32,
    name: String,
    rating: f32,
    genre: String,
    certificate: String,
    year: u32,
    budget: Option<String>,
    run_time: u32,
}

impl RawMovieRow {
    fn into_record(self) -> MovieRecord {
        let budget = budget::normalize_budget(self.budget.as_deref());
        MovieRecord {
            rank: self.rank,
            name: self.name,
            rating: self.rating,
            genre: self.genre,
            certificate: self.certificate,
            year: self.year,
            budget,
            run_time: self.run_time,
        }
    }
}

pub fn load_movies(file_path: &str) -> Result<Vec<MovieRecord>, LoadError> {
    let file = File::open(file_path).map_err(|e| LoadError::Io {
        path: file_path.to_string(),
        source: e,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut movies = vec![];
    for row in reader.deserialize::<RawMovieRow>() {
        let raw = row.map_err(|e| LoadError::Parse {
            path: file_path.to_string(),
            source: e,
        })?;
        movies.push(raw.into_record());
    }

    Ok(movies)
}

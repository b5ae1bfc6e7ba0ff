use serde::Serialize;

/// One row of the Top 250 table, restricted to the columns the app uses.
/// Budget is in billions and absent when the source value was missing or
/// unparseable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    pub rank: u32,
    pub name: String,
    pub rating: f32,
    pub genre: String,
    pub certificate: String,
    pub year: u32,
    pub budget: Option<f64>,
    pub run_time: u32,
}

/// A movie record with its comma-joined genre field replaced by a single
/// trimmed genre token. A record with k genres expands to k of these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedGenreRow {
    pub rank: u32,
    pub name: String,
    pub rating: f32,
    pub genre: String,
    pub certificate: String,
    pub year: u32,
    pub budget: Option<f64>,
    pub run_time: u32,
}

impl ExpandedGenreRow {
    pub fn from_record(record: &MovieRecord, genre: String) -> Self {
        ExpandedGenreRow {
            rank: record.rank,
            name: record.name.clone(),
            rating: record.rating,
            genre,
            certificate: record.certificate.clone(),
            year: record.year,
            budget: record.budget,
            run_time: record.run_time,
        }
    }
}

use crate::model::movie::{ExpandedGenreRow, MovieRecord};

/// Splits each record's comma-joined genre field into one row per genre,
/// preserving record order and then genre order within the record. Tokens are
/// trimmed. An empty genre field still yields one row with an empty token,
/// which is what splitting an empty string produces.
pub fn expand_genres(movies: &[MovieRecord]) -> Vec<ExpandedGenreRow> {
    movies
        .iter()
        .flat_map(|movie| {
            movie
                .genre
                .split(',')
                .map(move |token| ExpandedGenreRow::from_record(movie, token.trim().to_string()))
        })
        .collect()
}

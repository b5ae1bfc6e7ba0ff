use serde::Serialize;

use crate::model::dataset::Dataset;
use crate::model::movie::MovieRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: u32,
}

/// The "trending films in year" query mode: the movies released in the
/// selected year plus a genre frequency table over them.
#[derive(Debug, Clone, PartialEq)]
pub struct YearView {
    pub year: u32,
    /// At most TOP_MOVIES entries, in rank order.
    pub top_movies: Vec<MovieRecord>,
    /// At most TOP_GENRES entries, descending by count. Equally frequent
    /// genres keep first-encountered order.
    pub genre_counts: Vec<GenreCount>,
}

impl YearView {
    /// Display truncation inherited from the product: only the first five
    /// rank-ordered movies of a year are shown.
    pub const TOP_MOVIES: usize = 5;
    pub const TOP_GENRES: usize = 10;
}

/// Returns None when no movie matches the year, so the render layer can show
/// an informational message instead of a chart.
pub fn year_view(dataset: &Dataset, year: u32) -> Option<YearView> {
    let year_rows: Vec<_> = dataset
        .expanded
        .iter()
        .filter(|row| row.year == year)
        .collect();
    if year_rows.is_empty() {
        return None;
    }

    // The source table is rank-ordered and filtering preserves that order.
    let top_movies: Vec<MovieRecord> = dataset
        .movies
        .iter()
        .filter(|movie| movie.year == year)
        .take(YearView::TOP_MOVIES)
        .cloned()
        .collect();

    let mut genre_counts: Vec<GenreCount> = vec![];
    for row in &year_rows {
        match genre_counts.iter_mut().find(|c| c.genre == row.genre) {
            Some(entry) => entry.count += 1,
            None => genre_counts.push(GenreCount {
                genre: row.genre.clone(),
                count: 1,
            }),
        }
    }
    // Stable sort, so ties stay in first-encountered order.
    genre_counts.sort_by(|a, b| b.count.cmp(&a.count));
    genre_counts.truncate(YearView::TOP_GENRES);

    Some(YearView {
        year,
        top_movies,
        genre_counts,
    })
}

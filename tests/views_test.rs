#[cfg(test)]
mod tests {

    use top250explorer::model::dataset::Dataset;
    use top250explorer::model::movie::MovieRecord;
    use top250explorer::model::selection::Category;
    use top250explorer::views::category_view::category_view;
    use top250explorer::views::year_view::{year_view, YearView};

    fn movie(rank: u32, year: u32, genre: &str) -> MovieRecord {
        MovieRecord {
            rank,
            name: format!("Movie {}", rank),
            rating: 8.0,
            genre: genre.to_string(),
            certificate: "R".to_string(),
            year,
            budget: None,
            run_time: 120,
        }
    }

    #[test]
    fn category_view_passes_the_full_expanded_table_through() {
        let dataset = Dataset::from_movies(vec![
            movie(1, 1994, "Drama"),
            movie(2, 1972, "Crime, Drama"),
        ]);

        let view = category_view(&dataset, Category::Certificate);
        assert_eq!(view.category, Category::Certificate);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows, dataset.expanded.as_slice());
    }

    #[test]
    fn year_view_counts_genres_in_descending_order() {
        let dataset = Dataset::from_movies(vec![
            movie(1, 2020, "Drama, Crime"),
            movie(2, 2020, "Drama"),
            movie(3, 2020, "Crime, Drama"),
            movie(4, 2020, "Action"),
            movie(5, 1994, "Drama"),
        ]);

        let view = year_view(&dataset, 2020).expect("year 2020 should not be empty");
        let counts: Vec<(&str, u32)> = view
            .genre_counts
            .iter()
            .map(|c| (c.genre.as_str(), c.count))
            .collect();
        assert_eq!(counts, vec![("Drama", 3), ("Crime", 2), ("Action", 1)]);
    }

    #[test]
    fn equally_frequent_genres_keep_first_encountered_order() {
        let dataset = Dataset::from_movies(vec![
            movie(1, 2019, "Thriller, Drama"),
            movie(2, 2019, "Comedy, Thriller"),
            movie(3, 2019, "Drama, Comedy"),
        ]);

        let view = year_view(&dataset, 2019).expect("year 2019 should not be empty");
        let genres: Vec<&str> = view.genre_counts.iter().map(|c| c.genre.as_str()).collect();
        assert_eq!(genres, vec!["Thriller", "Drama", "Comedy"]);
    }

    #[test]
    fn genre_count_table_is_capped_at_ten() {
        let dataset = Dataset::from_movies(vec![
            movie(1, 2018, "G1, G2, G3, G4, G5, G6, G7"),
            movie(2, 2018, "G8, G9, G10, G11, G12"),
            movie(3, 2018, "G1, G2"),
        ]);

        let view = year_view(&dataset, 2018).expect("year 2018 should not be empty");
        assert_eq!(view.genre_counts.len(), YearView::TOP_GENRES);
        assert_eq!(view.genre_counts[0].genre, "G1");
        assert_eq!(view.genre_counts[0].count, 2);
        assert_eq!(view.genre_counts[1].genre, "G2");
    }

    #[test]
    fn top_movies_list_is_truncated_to_five_in_rank_order() {
        let mut movies: Vec<MovieRecord> =
            (1..=7).map(|rank| movie(rank, 2010, "Drama")).collect();
        movies.push(movie(8, 2011, "Drama"));

        let dataset = Dataset::from_movies(movies);
        let view = year_view(&dataset, 2010).expect("year 2010 should not be empty");

        assert_eq!(view.top_movies.len(), YearView::TOP_MOVIES);
        let ranks: Vec<u32> = view.top_movies.iter().map(|m| m.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn year_with_no_movies_signals_empty() {
        let dataset = Dataset::from_movies(vec![movie(1, 1994, "Drama")]);
        assert_eq!(year_view(&dataset, 1921), None);
    }

    #[test]
    fn movie_with_empty_genre_still_counts_once() {
        let dataset = Dataset::from_movies(vec![movie(1, 1930, "")]);

        let view = year_view(&dataset, 1930).expect("year 1930 should not be empty");
        assert_eq!(view.genre_counts.len(), 1);
        assert_eq!(view.genre_counts[0].genre, "");
        assert_eq!(view.genre_counts[0].count, 1);
    }
}

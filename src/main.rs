use std::{env, io, io::prelude::*, process};

use top250explorer::model::selection::{Category, ChartKind, Selection};

mod logging;

fn get_dataset_path() -> String {
    match env::args().nth(1) {
        None => {
            print!("Please, enter the path to the Top 250 movies CSV file: ");
            io::stdout().flush().expect("could not flush stdout");
            let mut user_input = String::new();
            io::stdin()
                .read_line(&mut user_input)
                .expect("Failed to read user input");
            user_input.trim().to_string()
        }
        Some(path) => path,
    }
}

fn get_selection() -> Result<Selection, String> {
    let category = match env::args().nth(2) {
        Some(key) => Category::from_key(&key)?,
        None => Category::Genre,
    };
    let chart = match env::args().nth(3) {
        Some(key) => ChartKind::from_key(&key)?,
        None => ChartKind::Bar,
    };
    let year = match env::args().nth(4) {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| format!("Could not parse year '{}'", raw))?,
        None => 2020,
    };

    Selection::new(category, chart, year)
}

fn main() {
    logging::setup_logging();

    let selection = match get_selection() {
        Ok(selection) => selection,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = top250explorer::run(get_dataset_path(), selection) {
        log::error!("{}", e);
        process::exit(1);
    }
}

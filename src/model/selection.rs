use serde::Serialize;

/// The four columns a chart can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Genre,
    Budget,
    Certificate,
    RunTime,
}

impl Category {
    pub fn from_key(key: &str) -> Result<Category, String> {
        match key {
            "genre" => Ok(Category::Genre),
            "budget" => Ok(Category::Budget),
            "certificate" => Ok(Category::Certificate),
            "run_time" => Ok(Category::RunTime),
            other => Err(format!(
                "Unknown category '{}'. Expected one of: genre, budget, certificate, run_time",
                other
            )),
        }
    }

    /// Column name of this category in the dataset.
    pub fn field_name(&self) -> &'static str {
        match self {
            Category::Genre => "genre",
            Category::Budget => "budget",
            Category::Certificate => "certificate",
            Category::RunTime => "run_time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Box,
}

impl ChartKind {
    pub fn from_key(key: &str) -> Result<ChartKind, String> {
        match key {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "scatter" => Ok(ChartKind::Scatter),
            "box" => Ok(ChartKind::Box),
            other => Err(format!(
                "Unknown chart type '{}'. Expected one of: bar, line, scatter, box",
                other
            )),
        }
    }
}

pub const MIN_YEAR: u32 = 1920;
pub const MAX_YEAR: u32 = 2021;

/// Current widget state: one category, one chart kind, one year. Owned by the
/// caller and re-read on every render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub category: Category,
    pub chart: ChartKind,
    pub year: u32,
}

impl Selection {
    pub fn new(category: Category, chart: ChartKind, year: u32) -> Result<Selection, String> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(format!(
                "Year {} is out of range. Expected a year between {} and {}",
                year, MIN_YEAR, MAX_YEAR
            ));
        }
        Ok(Selection {
            category,
            chart,
            year,
        })
    }
}

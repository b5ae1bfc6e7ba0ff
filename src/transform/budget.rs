/// Turns a raw budget field like "$1,234,567,890" into billions. Absent input
/// stays absent (never zero), and anything that does not parse as a number
/// after stripping the currency formatting degrades to absent as well.
pub fn normalize_budget(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    let stripped = raw.replace('$', "").replace(',', "");
    match stripped.trim().parse::<f64>() {
        Ok(value) => Some(value / 1e9),
        Err(_e) => None,
    }
}

//! Placeholder formatting for table cells.
//!
//! Missing or null fields render as a literal `N/A` everywhere a table is
//! shown; present values render as-is. Zero is a value, not a placeholder.

use chrono::NaiveDate;

/// The placeholder shown for missing/null fields.
pub const NA: &str = "N/A";

/// Renders an optional displayable value, falling back to [`NA`].
pub fn cell<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NA.to_string(),
    }
}

/// Renders an optional string slice, treating empty strings as missing.
pub fn text_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NA.to_string(),
    }
}

/// Renders an optional date as `YYYY-MM-DD`, falling back to [`NA`].
pub fn date_cell(value: Option<NaiveDate>) -> String {
    match value {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => NA.to_string(),
    }
}

/// Renders an optional day count with zero decimal places, falling back
/// to [`NA`]. Used for the server-computed TAT column.
pub fn days_cell(value: Option<f64>) -> String {
    match value {
        Some(d) => format!("{d:.0}"),
        None => NA.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cell_present_and_missing() {
        assert_eq!(cell(Some(42)), "42");
        assert_eq!(cell::<i64>(None), "N/A");
    }

    #[test]
    fn test_cell_zero_is_not_placeholder() {
        assert_eq!(cell(Some(0)), "0");
    }

    #[test]
    fn test_text_cell_empty_is_missing() {
        assert_eq!(text_cell(Some("")), "N/A");
        assert_eq!(text_cell(Some("Finance")), "Finance");
        assert_eq!(text_cell(None), "N/A");
    }

    #[test]
    fn test_date_cell_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_cell(Some(date)), "2024-03-07");
        assert_eq!(date_cell(None), "N/A");
    }

    #[test]
    fn test_days_cell_rounds_to_whole_days() {
        assert_eq!(days_cell(Some(12.0)), "12");
        assert_eq!(days_cell(Some(3.6)), "4");
        assert_eq!(days_cell(None), "N/A");
    }
}

//! Report filter state.
//!
//! The filter controller owns the selected-status set explicitly; the fetch
//! and the filtered export both consume [`ReportFilters::query_pairs`], so
//! their query strings cannot drift apart.

use chrono::NaiveDate;
use shared::query::QueryPairs;

/// Filter inputs on the report page. Empty text fields, an unset date and
/// an empty status selection are all "no filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilters {
    pub request_no: String,
    pub department: String,
    pub category: String,
    pub request_date: Option<NaiveDate>,
    pub statuses: Vec<String>,
}

impl ReportFilters {
    /// Builds the query pairs for this filter state. Absent fields are
    /// omitted entirely; each selected status appends one repeated
    /// `current_status` parameter.
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_nonempty("request_no", &self.request_no);
        pairs.push_nonempty("department", &self.department);
        pairs.push_nonempty("category", &self.category);
        if let Some(date) = self.request_date {
            pairs.push_nonempty("request_date", &date.format("%Y-%m-%d").to_string());
        }
        pairs.push_repeated("current_status", self.statuses.iter().cloned());
        pairs
    }

    /// Resets every input and the status selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of selected statuses, shown next to the status dropdown.
    pub fn selected_status_count(&self) -> usize {
        self.statuses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_pairs() {
        let filters = ReportFilters::default();
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn test_omitted_fields_never_appear() {
        let filters = ReportFilters {
            department: "Cards".to_string(),
            ..Default::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.pairs()[0].0, "department");
    }

    #[test]
    fn test_n_statuses_append_n_repeated_parameters() {
        let filters = ReportFilters {
            statuses: vec![
                "Open".to_string(),
                "In Development".to_string(),
                "In UAT".to_string(),
            ],
            ..Default::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.pairs().iter().all(|(k, _)| *k == "current_status"));
    }

    #[test]
    fn test_clear_resets_to_zero_parameters() {
        let mut filters = ReportFilters {
            request_no: "CR-7".to_string(),
            category: "Bug".to_string(),
            request_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            statuses: vec!["Open".to_string()],
            ..Default::default()
        };
        assert_eq!(filters.query_pairs().len(), 4);
        filters.clear();
        assert!(filters.query_pairs().is_empty());
        assert_eq!(filters.selected_status_count(), 0);
    }

    #[test]
    fn test_date_filter_formats_as_iso_day() {
        let filters = ReportFilters {
            request_date: NaiveDate::from_ymd_opt(2024, 11, 30),
            ..Default::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(pairs.pairs()[0], ("request_date", "2024-11-30".to_string()));
    }
}

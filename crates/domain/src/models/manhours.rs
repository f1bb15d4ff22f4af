//! Actual man-hour entries and the per-request role breakdown.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Role;

/// One booked man-hour entry, as listed on the man-hours page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManHourActualEntry {
    pub request_no: String,
    #[serde(default)]
    pub task_date: Option<NaiveDate>,
    pub stakeholder_name: String,
    pub actual_man_hours: i64,
}

/// One row of the role-scoped breakdown shown in the drill-down modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManHourBreakdownEntry {
    pub stakeholder_name: String,
    pub stakeholder_role: Role,
    pub actual_man_hours: i64,
    #[serde(default)]
    pub task_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_actual_entry_with_null_task_date() {
        let entry: ManHourActualEntry = serde_json::from_value(json!({
            "request_no": "CR-2024-003",
            "task_date": null,
            "stakeholder_name": "A. Menon",
            "actual_man_hours": 6
        }))
        .unwrap();
        assert!(entry.task_date.is_none());
        assert_eq!(entry.actual_man_hours, 6);
    }

    #[test]
    fn test_breakdown_entry_deserialize() {
        let entry: ManHourBreakdownEntry = serde_json::from_value(json!({
            "stakeholder_name": "P. Ghosh",
            "stakeholder_role": "Tester",
            "actual_man_hours": 4,
            "task_date": "2024-04-18"
        }))
        .unwrap();
        assert_eq!(entry.stakeholder_role, Role::Tester);
        assert_eq!(
            entry.task_date,
            Some(NaiveDate::from_ymd_opt(2024, 4, 18).unwrap())
        );
    }
}

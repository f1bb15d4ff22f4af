//! The denormalized report projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One consolidated report row, computed and returned by the remote API.
/// Read-only on the client; `request_internal_id` is the drill-down key and
/// always resolves to an existing change request server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub request_internal_id: i64,
    pub request_no: String,
    #[serde(default)]
    pub current_status: Option<String>,
    pub requested_by: String,
    pub department: String,
    pub category: String,
    pub request_date: NaiveDate,
    pub request_title: String,

    #[serde(default)]
    pub srs_sent_date: Option<NaiveDate>,
    #[serde(default)]
    pub srs_approval_date: Option<NaiveDate>,
    #[serde(default)]
    pub estimation_received_date: Option<NaiveDate>,
    #[serde(default)]
    pub indent_sent_date: Option<NaiveDate>,
    #[serde(default)]
    pub signed_indent_received_date: Option<NaiveDate>,

    #[serde(default)]
    pub estimated_man_hours_ba: Option<i64>,
    #[serde(default)]
    pub estimated_man_hours_developers: Option<i64>,
    #[serde(default)]
    pub estimated_man_hours_tester: Option<i64>,
    #[serde(default)]
    pub actual_man_hours_ba: Option<i64>,
    #[serde(default)]
    pub actual_man_hours_developers: Option<i64>,
    #[serde(default)]
    pub actual_man_hours_tester: Option<i64>,

    #[serde(default)]
    pub total_estimated: Option<i64>,
    #[serde(default)]
    pub total_actual: Option<i64>,
    #[serde(default)]
    pub difference_man_hours: Option<i64>,

    #[serde(default)]
    pub development_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub uat_mail_date: Option<NaiveDate>,
    #[serde(default)]
    pub uat_confirmation_date: Option<NaiveDate>,

    /// Turnaround days (UAT mail date minus development start date),
    /// computed server-side; null until both dates exist.
    #[serde(default)]
    pub tat_days: Option<f64>,
}

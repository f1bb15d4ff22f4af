//! Full request detail and the partial lifecycle update payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full detail for one request: the master fields joined with whatever
/// lifecycle progress has been recorded so far. Lifecycle fields are null
/// until populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDetail {
    pub id: i64,
    pub request_no: String,
    pub requested_by: String,
    pub department: String,
    pub category: String,
    pub request_date: NaiveDate,
    pub request_title: String,
    #[serde(default)]
    pub description: Option<String>,

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
    pub estimated_man_hours_dev: Option<i64>,
    #[serde(default)]
    pub estimated_man_hours_tester: Option<i64>,
    #[serde(default)]
    pub development_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub uat_mail_date: Option<NaiveDate>,
    #[serde(default)]
    pub uat_confirmation_date: Option<NaiveDate>,
    #[serde(default)]
    pub current_status: Option<String>,
}

/// Partial update of lifecycle, status and estimate fields.
///
/// The API contract requires every field to be present in the body, with
/// empty inputs sent as explicit JSON nulls — so no field here is skipped
/// during serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LifecycleUpdate {
    pub srs_sent_date: Option<NaiveDate>,
    pub srs_approval_date: Option<NaiveDate>,
    pub estimation_received_date: Option<NaiveDate>,
    pub indent_sent_date: Option<NaiveDate>,
    pub signed_indent_received_date: Option<NaiveDate>,
    pub estimated_man_hours_ba: Option<i64>,
    pub estimated_man_hours_dev: Option<i64>,
    pub estimated_man_hours_tester: Option<i64>,
    pub development_start_date: Option<NaiveDate>,
    pub uat_mail_date: Option<NaiveDate>,
    pub uat_confirmation_date: Option<NaiveDate>,
    pub current_status: Option<String>,
}

impl From<&RequestDetail> for LifecycleUpdate {
    fn from(detail: &RequestDetail) -> Self {
        Self {
            srs_sent_date: detail.srs_sent_date,
            srs_approval_date: detail.srs_approval_date,
            estimation_received_date: detail.estimation_received_date,
            indent_sent_date: detail.indent_sent_date,
            signed_indent_received_date: detail.signed_indent_received_date,
            estimated_man_hours_ba: detail.estimated_man_hours_ba,
            estimated_man_hours_dev: detail.estimated_man_hours_dev,
            estimated_man_hours_tester: detail.estimated_man_hours_tester,
            development_start_date: detail.development_start_date,
            uat_mail_date: detail.uat_mail_date,
            uat_confirmation_date: detail.uat_confirmation_date,
            current_status: detail.current_status.clone().filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_deserialize_with_null_lifecycle() {
        let detail: RequestDetail = serde_json::from_value(json!({
            "id": 42,
            "request_no": "CR-2024-042",
            "requested_by": "S. Pillai",
            "department": "Cards",
            "category": "Enhancement",
            "request_date": "2024-03-01",
            "request_title": "Limit alerts",
            "description": "SMS alerts for limit breach",
            "srs_sent_date": null,
            "srs_approval_date": null,
            "estimation_received_date": null,
            "indent_sent_date": null,
            "signed_indent_received_date": null,
            "estimated_man_hours_ba": null,
            "estimated_man_hours_dev": null,
            "estimated_man_hours_tester": null,
            "development_start_date": null,
            "uat_mail_date": null,
            "uat_confirmation_date": null,
            "current_status": null
        }))
        .unwrap();
        assert!(detail.srs_sent_date.is_none());
        assert!(detail.current_status.is_none());
    }

    #[test]
    fn test_update_serializes_unset_fields_as_null() {
        let update = LifecycleUpdate {
            srs_sent_date: Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
            estimated_man_hours_dev: Some(40),
            current_status: Some("In Development".to_string()),
            ..Default::default()
        };

        let body = serde_json::to_value(&update).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 12);
        assert_eq!(body["srs_sent_date"], "2024-03-05");
        assert_eq!(body["estimated_man_hours_dev"], 40);
        assert_eq!(body["current_status"], "In Development");
        assert!(body["srs_approval_date"].is_null());
        assert!(body["uat_confirmation_date"].is_null());
        assert!(body["estimated_man_hours_ba"].is_null());
    }

    #[test]
    fn test_update_from_detail_blanks_empty_status() {
        let detail: RequestDetail = serde_json::from_value(json!({
            "id": 1,
            "request_no": "CR-1",
            "requested_by": "x",
            "department": "y",
            "category": "z",
            "request_date": "2024-01-01",
            "request_title": "t",
            "current_status": ""
        }))
        .unwrap();
        let update = LifecycleUpdate::from(&detail);
        assert!(update.current_status.is_none());
    }
}

//! Change request records and the create/edit payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A tracked unit of requested software work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRequest {
    pub id: i64,
    pub request_no: String,
    pub requested_by: String,
    pub department: String,
    pub category: String,
    pub request_date: NaiveDate,
    pub request_title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Bound form fields for creating or updating a change request.
///
/// Every field except `description` is required; validation runs before any
/// network call is made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct RequestPayload {
    #[validate(length(min = 1, message = "Request No is required"))]
    pub request_no: String,

    #[validate(length(min = 1, message = "Requested By is required"))]
    pub requested_by: String,

    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(required(message = "Request Date is required"))]
    pub request_date: Option<NaiveDate>,

    #[validate(length(min = 1, message = "Request Title is required"))]
    pub request_title: String,

    #[serde(default)]
    pub description: String,
}

impl From<&ChangeRequest> for RequestPayload {
    fn from(record: &ChangeRequest) -> Self {
        Self {
            request_no: record.request_no.clone(),
            requested_by: record.requested_by.clone(),
            department: record.department.clone(),
            category: record.category.clone(),
            request_date: Some(record.request_date),
            request_title: record.request_title.clone(),
            description: record.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    fn sample_record() -> ChangeRequest {
        ChangeRequest {
            id: 7,
            request_no: "CR-2024-007".to_string(),
            requested_by: "R. Iyer".to_string(),
            department: "Treasury".to_string(),
            category: "Enhancement".to_string(),
            request_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
            request_title: "Add settlement date column".to_string(),
            description: Some("Column missing from EOD extract".to_string()),
        }
    }

    #[test]
    fn test_change_request_deserialize() {
        let record: ChangeRequest = serde_json::from_value(json!({
            "id": 3,
            "request_no": "CR-2024-003",
            "requested_by": "M. Rao",
            "department": "Retail",
            "category": "Bug",
            "request_date": "2024-01-09",
            "request_title": "Fix rounding",
            "description": null
        }))
        .unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.request_date, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
        assert!(record.description.is_none());
    }

    #[test]
    fn test_payload_from_record_round_trips_field_set() {
        let record = sample_record();
        let payload = RequestPayload::from(&record);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["request_no"], record.request_no);
        assert_eq!(body["requested_by"], record.requested_by);
        assert_eq!(body["department"], record.department);
        assert_eq!(body["category"], record.category);
        assert_eq!(body["request_date"], "2024-02-14");
        assert_eq!(body["request_title"], record.request_title);
        assert_eq!(body["description"], "Column missing from EOD extract");
    }

    #[test]
    fn test_payload_missing_request_no_fails_validation() {
        let mut payload = RequestPayload::from(&sample_record());
        payload.request_no.clear();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_missing_date_fails_validation() {
        let mut payload = RequestPayload::from(&sample_record());
        payload.request_date = None;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_empty_description_is_valid() {
        let mut payload = RequestPayload::from(&sample_record());
        payload.description.clear();
        assert!(payload.validate().is_ok());
    }
}

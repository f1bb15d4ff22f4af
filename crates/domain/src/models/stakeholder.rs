//! Stakeholder records and roles.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

/// Role a stakeholder plays on a change request.
///
/// The report breakdown and dashboard aggregations are keyed by exactly
/// these three roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "BA")]
    Ba,
    Developer,
    Tester,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Ba, Role::Developer, Role::Tester];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ba => "BA",
            Self::Developer => "Developer",
            Self::Tester => "Tester",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a role string is not one of the known roles.
#[derive(Debug, Error)]
#[error("unknown stakeholder role: {0}")]
pub struct RoleParseError(String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BA" => Ok(Self::Ba),
            "Developer" => Ok(Self::Developer),
            "Tester" => Ok(Self::Tester),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// A person who books man-hours against change requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

/// Bound form fields for creating or updating a stakeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct StakeholderPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(required(message = "Role is required"))]
    pub role: Option<Role>,
}

impl From<&Stakeholder> for StakeholderPayload {
    fn from(record: &Stakeholder) -> Self {
        Self {
            name: record.name.clone(),
            role: Some(record.role),
        }
    }
}

//! Dashboard aggregate data.

use serde::{Deserialize, Deserializer, Serialize};

use super::Role;

/// Request count for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Estimated vs. actual hours for one role, summed across all requests.
/// The API reports null for a role with no entries; that is a zero sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleHours {
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub estimated: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub actual: i64,
}

/// Aggregated data behind the dashboard charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub requests_by_category: Vec<CategoryCount>,
    #[serde(default)]
    pub man_hours_comparison: Vec<RoleHours>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

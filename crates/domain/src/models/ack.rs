//! Mutation acknowledgement shape.

use serde::{Deserialize, Serialize};

/// Body returned by every successful mutating endpoint: a human-readable
/// `message`, optionally the created record's `id`, and — for batch
/// operations — the identifiers of rows that failed while the rest of the
/// batch succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationAck {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_rows: Vec<String>,
}

impl MutationAck {
    /// True when the batch succeeded overall but some rows were rejected.
    pub fn is_partial_failure(&self) -> bool {
        !self.failed_rows.is_empty()
    }
}

//! Console error types and notification message mapping.
//!
//! Three error classes reach the user: local validation errors (caught
//! before any network call), transport errors, and server rejections. All
//! three land in the same banner surface with kind=error; only the message
//! text differs.

use gateway::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Gateway(#[from] GatewayError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Banner text for a failed form mutation: server-supplied text for a
/// rejection, a generic transport message otherwise.
pub fn mutation_error_message(err: &GatewayError) -> String {
    match err {
        GatewayError::Rejected { message, .. } => message.clone(),
        other => format!("An unexpected error occurred. {other}"),
    }
}

/// Banner text for a failed upload. `flavor` names the operation the way
/// the page does ("upload" or "bulk upload").
pub fn upload_error_message(err: &GatewayError, flavor: &str) -> String {
    match err {
        GatewayError::Rejected { message, .. } => message.clone(),
        other => format!("An unexpected error occurred during {flavor}. {other}"),
    }
}

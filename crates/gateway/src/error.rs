//! Gateway error taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

/// Fallback shown when a rejection body carries no usable `error` text.
pub const GENERIC_ERROR: &str = "An error occurred.";

/// Errors crossing the gateway boundary.
///
/// `Rejected` carries the server-supplied message from a non-2xx `{error}`
/// body; everything else is a local or transport-level failure. Nothing is
/// retried here — callers surface the error once and wait for the user.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed (connect failure, timeout, aborted body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unreadable response: {0}")]
    Decode(String),

    /// A file selected for upload could not be read.
    #[error("could not read file: {0}")]
    File(#[from] std::io::Error),
}

impl GatewayError {
    /// True for server rejections, whose message text is shown verbatim.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

//! HTTP gateway to the remote change-request tracking API.
//!
//! The client consumes the API only through the typed methods here: one
//! method per endpoint, JSON in and out, and the shared mutation contract
//! (`{message}` on success, `{error}` on failure, `{failed_rows}` alongside
//! success for partially failed batches). Export endpoints are exposed as
//! URL constructors plus a byte-for-byte stream-to-disk helper, mirroring
//! navigation downloads.

pub mod client;
pub mod download;
pub mod error;

pub use client::ApiGateway;
pub use error::GatewayError;

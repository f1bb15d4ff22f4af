//! Navigation-style downloads.
//!
//! The browser original navigated to export endpoints and let the transport
//! save the attachment. Here the gateway streams the response body to disk
//! untouched; the file name comes from the `Content-Disposition` header the
//! server sets, falling back to the last URL path segment.

use std::path::{Path, PathBuf};

use reqwest::header::CONTENT_DISPOSITION;
use tracing::info;
use url::Url;

use crate::client::ApiGateway;
use crate::error::{GatewayError, GENERIC_ERROR};

impl ApiGateway {
    /// Fetches `url` and writes the body into `dest_dir`, returning the
    /// written path. The body is never inspected.
    pub async fn download_to(&self, url: Url, dest_dir: &Path) -> Result<PathBuf, GatewayError> {
        let response = self.http_get(url.clone()).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status,
                message: GENERIC_ERROR.to_string(),
            });
        }

        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_file_name)
            .unwrap_or_else(|| fallback_file_name(&url));

        let bytes = response.bytes().await?;
        let dest = dest_dir.join(&file_name);
        tokio::fs::write(&dest, &bytes).await?;
        info!(file = %dest.display(), bytes = bytes.len(), "download saved");
        Ok(dest)
    }
}

/// Extracts `filename=...` from a `Content-Disposition: attachment` value.
fn attachment_file_name(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let name = rest
        .split(';')
        .next()
        .unwrap_or(rest)
        .trim()
        .trim_matches('"');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Last path segment of the export URL, with a spreadsheet extension.
fn fallback_file_name(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut s| s.next_back())
        .filter(|s| !s.is_empty())
        .unwrap_or("export");
    format!("{segment}.xlsx")
}

//! Bulk spreadsheet import.
//!
//! A submit with no selected file is a local error and never reaches the
//! network. A successful upload shows the server summary, clears the
//! selection and asks the caller to reload the related table; when the
//! response also carries `failed_rows`, a secondary error banner enumerates
//! them — a batch can partially succeed, so success and failure surfaces
//! are not mutually exclusive. A rejected upload keeps the selection and
//! triggers no reload.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::info;

use domain::models::MutationAck;
use gateway::GatewayError;

use crate::error::upload_error_message;
use crate::notify::{Banner, BannerKind};

/// File-upload controller for one import area.
#[derive(Debug, Clone, Default)]
pub struct BulkImport {
    selected: Option<PathBuf>,
}

impl BulkImport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, file: impl Into<PathBuf>) {
        self.selected = Some(file.into());
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Submits the selected file through `upload`. Returns true when the
    /// owning page should reload its table.
    ///
    /// `missing_file_message` is the local error for an empty selection;
    /// `flavor` names the operation in transport-error text; `separator`
    /// joins the failed-row identifiers in the secondary banner.
    pub async fn submit<F, Fut>(
        &mut self,
        message_box: &Banner,
        error_box: &Banner,
        missing_file_message: &str,
        flavor: &str,
        separator: &str,
        upload: F,
    ) -> bool
    where
        F: FnOnce(PathBuf) -> Fut,
        Fut: Future<Output = Result<MutationAck, GatewayError>>,
    {
        let Some(file) = self.selected.clone() else {
            error_box.show(missing_file_message, BannerKind::Error);
            return false;
        };

        match upload(file).await {
            Ok(ack) => {
                info!(
                    failed_rows = ack.failed_rows.len(),
                    "bulk import accepted"
                );
                message_box.show(ack.message.clone(), BannerKind::Success);
                self.clear();
                if ack.is_partial_failure() {
                    error_box.show(
                        format!(
                            "Some rows failed to upload: {}",
                            ack.failed_rows.join(separator)
                        ),
                        BannerKind::Error,
                    );
                }
                true
            }
            Err(err) => {
                error_box.show(upload_error_message(&err, flavor), BannerKind::Error);
                false
            }
        }
    }
}

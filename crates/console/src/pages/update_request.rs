//! Update-request page: pick a request, review its current detail, record
//! lifecycle progress, and bulk-update via spreadsheet.

use tracing::info;
use url::Url;

use domain::models::{ChangeRequest, LifecycleUpdate, RequestDetail};
use gateway::ApiGateway;
use shared::placeholder;

use crate::bulk::BulkImport;
use crate::error::mutation_error_message;
use crate::form::FormBinding;
use crate::notify::{Banner, BannerKind};
use crate::table::{DataTable, LoadOutcome};

pub const SELECTION_COLUMNS: &[&str] = &["Request"];

pub const NO_SELECTABLE_REQUESTS: &str = "No requests found.";

fn selection_cells(record: &ChangeRequest) -> Vec<String> {
    vec![format!(
        "{} - {} (Req by: {})",
        record.request_no, record.request_title, record.requested_by
    )]
}

pub struct UpdateRequestPage {
    gateway: ApiGateway,
    /// Selection list of all requests; the row index resolves the record
    /// whose detail gets loaded.
    pub selection: DataTable<ChangeRequest>,
    pub detail: Option<RequestDetail>,
    pub form: FormBinding<LifecycleUpdate>,
    pub import: BulkImport,
    pub message_box: Banner,
    pub error_box: Banner,
    pub upload_message: Banner,
    pub upload_error: Banner,
}

impl UpdateRequestPage {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            gateway,
            selection: DataTable::new(SELECTION_COLUMNS, selection_cells),
            detail: None,
            form: FormBinding::new(),
            import: BulkImport::new(),
            message_box: Banner::new(),
            error_box: Banner::new(),
            upload_message: Banner::new(),
            upload_error: Banner::new(),
        }
    }

    pub async fn load(&self) -> LoadOutcome {
        self.selection
            .load(
                "requests for selection",
                &self.error_box,
                self.gateway.list_requests(),
            )
            .await
    }

    /// Selects a request and loads its full detail, populating the
    /// lifecycle form. `None` clears the selection, detail panel and form.
    pub async fn select(&mut self, request_id: Option<i64>) -> bool {
        let Some(id) = request_id else {
            self.detail = None;
            self.form.reset();
            return false;
        };

        match self.gateway.request_details(id).await {
            Ok(detail) => {
                self.form
                    .enter_edit_mode(detail.id, LifecycleUpdate::from(&detail));
                self.detail = Some(detail);
                true
            }
            Err(err) => {
                self.error_box.show(
                    format!("Failed to load request details. {err}"),
                    BannerKind::Error,
                );
                self.detail = None;
                self.form.reset();
                false
            }
        }
    }

    /// Label/value pairs for the read-only detail panel, with `N/A` for
    /// missing fields.
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let Some(detail) = &self.detail else {
            return Vec::new();
        };
        vec![
            ("Request No", detail.request_no.clone()),
            ("Requested By", detail.requested_by.clone()),
            ("Department", detail.department.clone()),
            ("Category", detail.category.clone()),
            (
                "Request Date",
                detail.request_date.format("%Y-%m-%d").to_string(),
            ),
            ("Request Title", detail.request_title.clone()),
            (
                "Description",
                placeholder::text_cell(detail.description.as_deref()),
            ),
            (
                "Current Status",
                placeholder::text_cell(detail.current_status.as_deref()),
            ),
        ]
    }

    /// Submits the lifecycle form for the selected request. Empty fields
    /// are sent as explicit nulls; success re-fetches the detail so the
    /// panel and form reflect the stored state.
    pub async fn submit(&mut self) -> bool {
        let Some(id) = self.form.record_id() else {
            self.error_box
                .show("Please select a request to update.", BannerKind::Error);
            return false;
        };

        match self.gateway.update_request_details(id, self.form.draft()).await {
            Ok(ack) => {
                info!(id, "request details updated");
                self.message_box.show(ack.message, BannerKind::Success);
                self.select(Some(id)).await;
                true
            }
            Err(err) => {
                self.error_box
                    .show(mutation_error_message(&err), BannerKind::Error);
                false
            }
        }
    }

    /// Submits the selected spreadsheet to the bulk lifecycle-update
    /// endpoint; on success the current detail (if any) is re-fetched.
    pub async fn upload(&mut self) -> bool {
        let gateway = self.gateway.clone();
        let reload = self
            .import
            .submit(
                &self.upload_message,
                &self.upload_error,
                "Please select an Excel file for bulk update.",
                "bulk upload",
                "; ",
                move |file| async move { gateway.bulk_upload_request_updates(&file).await },
            )
            .await;
        if reload {
            if let Some(id) = self.form.record_id() {
                self.select(Some(id)).await;
            }
        }
        reload
    }

    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    pub fn download_url(&self) -> Url {
        self.gateway.update_request_download_url()
    }

    pub fn template_url(&self) -> Url {
        self.gateway.update_request_template_url()
    }
}

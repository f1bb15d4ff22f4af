//! Requests page: change-request master list, create/edit form, delete
//! with confirmation, and spreadsheet import/export.

use tracing::info;
use url::Url;

use domain::models::{ChangeRequest, RequestPayload};
use gateway::ApiGateway;

use crate::bulk::BulkImport;
use crate::error::mutation_error_message;
use crate::form::FormBinding;
use crate::modal::{confirm, ConfirmDialog, ConfirmOutcome};
use crate::notify::{Banner, BannerKind};
use crate::table::{DataTable, LoadOutcome};

pub const REQUEST_COLUMNS: &[&str] = &[
    "Request No",
    "Requested By",
    "Department",
    "Category",
    "Request Date",
    "Request Title",
];

pub const NO_REQUESTS: &str = "No requests found.";

fn request_cells(record: &ChangeRequest) -> Vec<String> {
    vec![
        record.request_no.clone(),
        record.requested_by.clone(),
        record.department.clone(),
        record.category.clone(),
        record.request_date.format("%Y-%m-%d").to_string(),
        record.request_title.clone(),
    ]
}

pub struct RequestsPage {
    gateway: ApiGateway,
    pub table: DataTable<ChangeRequest>,
    pub form: FormBinding<RequestPayload>,
    pub import: BulkImport,
    pub message_box: Banner,
    pub error_box: Banner,
    pub upload_message: Banner,
    pub upload_error: Banner,
}

impl RequestsPage {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            gateway,
            table: DataTable::new(REQUEST_COLUMNS, request_cells),
            form: FormBinding::new(),
            import: BulkImport::new(),
            message_box: Banner::new(),
            error_box: Banner::new(),
            upload_message: Banner::new(),
            upload_error: Banner::new(),
        }
    }

    /// Fetches the collection and replaces the table.
    pub async fn load(&self) -> LoadOutcome {
        self.table
            .load("requests", &self.error_box, self.gateway.list_requests())
            .await
    }

    /// Populates the form from the record behind `id` and enters edit mode.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        match self.table.find_record(|r| r.id == id) {
            Some(record) => {
                self.form
                    .enter_edit_mode(record.id, RequestPayload::from(&record));
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    /// Validates and submits the form: POST in create mode, PUT in edit
    /// mode. Success resets the form, shows the server message and reloads
    /// the table; failure leaves the form untouched for correction.
    pub async fn submit_form(&mut self) -> bool {
        if self.form.validate().is_err() {
            self.error_box
                .show("Please fill in all required fields.", BannerKind::Error);
            return false;
        }

        let result = match self.form.record_id() {
            Some(id) => self.gateway.update_request(id, self.form.draft()).await,
            None => self.gateway.create_request(self.form.draft()).await,
        };

        match result {
            Ok(ack) => {
                info!(id = ?ack.id, "request saved");
                self.message_box.show(ack.message, BannerKind::Success);
                self.form.reset();
                self.load().await;
                true
            }
            Err(err) => {
                self.error_box
                    .show(mutation_error_message(&err), BannerKind::Error);
                false
            }
        }
    }

    /// Deletes a request after the confirm dialog resolves confirmed.
    /// `present` hands the dialog to the front end; cancellation or
    /// dismissal issues no request at all.
    pub async fn delete(&mut self, id: i64, present: impl FnOnce(ConfirmDialog)) -> bool {
        let (dialog, outcome) = confirm(
            "Are you sure you want to delete this request? This action cannot be undone.",
        );
        present(dialog);
        if outcome.await != ConfirmOutcome::Confirmed {
            return false;
        }

        match self.gateway.delete_request(id).await {
            Ok(ack) => {
                info!(id, "request deleted");
                self.message_box.show(ack.message, BannerKind::Success);
                self.load().await;
                true
            }
            Err(err) => {
                self.error_box
                    .show(mutation_error_message(&err), BannerKind::Error);
                false
            }
        }
    }

    /// Submits the selected spreadsheet to the bulk-create endpoint and
    /// reloads the table on success.
    pub async fn upload(&mut self) -> bool {
        let gateway = self.gateway.clone();
        let reload = self
            .import
            .submit(
                &self.upload_message,
                &self.upload_error,
                "Please select an Excel file to upload.",
                "upload",
                ", ",
                move |file| async move { gateway.upload_requests(&file).await },
            )
            .await;
        if reload {
            self.load().await;
        }
        reload
    }

    pub fn download_url(&self) -> Url {
        self.gateway.requests_download_url()
    }

    pub fn template_url(&self) -> Url {
        self.gateway.requests_template_url()
    }

    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }
}

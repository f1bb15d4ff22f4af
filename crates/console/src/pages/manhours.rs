//! Man-hours page: booked actuals listing and spreadsheet import/export.

use url::Url;

use domain::models::ManHourActualEntry;
use gateway::ApiGateway;
use shared::placeholder;

use crate::bulk::BulkImport;
use crate::notify::Banner;
use crate::table::{DataTable, LoadOutcome};

pub const MANHOUR_COLUMNS: &[&str] = &[
    "Request No",
    "Task Date",
    "Stakeholder Name",
    "Actual Man-Hours",
];

pub const NO_MANHOURS: &str = "No actual man-hours found.";

fn manhour_cells(entry: &ManHourActualEntry) -> Vec<String> {
    vec![
        entry.request_no.clone(),
        placeholder::date_cell(entry.task_date),
        entry.stakeholder_name.clone(),
        entry.actual_man_hours.to_string(),
    ]
}

pub struct ManHoursPage {
    gateway: ApiGateway,
    pub table: DataTable<ManHourActualEntry>,
    pub import: BulkImport,
    pub message_box: Banner,
    pub error_box: Banner,
}

impl ManHoursPage {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            gateway,
            table: DataTable::new(MANHOUR_COLUMNS, manhour_cells),
            import: BulkImport::new(),
            message_box: Banner::new(),
            error_box: Banner::new(),
        }
    }

    pub async fn load(&self) -> LoadOutcome {
        self.table
            .load(
                "actual man-hours",
                &self.error_box,
                self.gateway.list_actual_manhours(),
            )
            .await
    }

    /// Uploads the selected spreadsheet of actual entries and reloads the
    /// listing on success.
    pub async fn upload(&mut self) -> bool {
        let gateway = self.gateway.clone();
        let reload = self
            .import
            .submit(
                &self.message_box,
                &self.error_box,
                "Please select an Excel file to upload.",
                "upload",
                "; ",
                move |file| async move { gateway.upload_actual_manhours(&file).await },
            )
            .await;
        if reload {
            self.load().await;
        }
        reload
    }

    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    pub fn download_url(&self) -> Url {
        self.gateway.actual_manhours_download_url()
    }

    pub fn template_url(&self) -> Url {
        self.gateway.actual_manhours_template_url()
    }
}

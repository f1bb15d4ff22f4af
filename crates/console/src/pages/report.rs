//! Report page: the consolidated filtered report, per-role man-hour
//! drill-down, and the filtered export.

use url::Url;

use domain::filters::ReportFilters;
use domain::models::{ReportRow, Role};
use gateway::ApiGateway;
use shared::placeholder;

use crate::modal::BreakdownModal;
use crate::notify::Banner;
use crate::table::{DataTable, LoadOutcome};

pub const REPORT_COLUMNS: &[&str] = &[
    "Request No",
    "Current Status",
    "Requested By",
    "Department",
    "Category",
    "Request Date",
    "Request Title",
    "SRS Sent Date",
    "SRS Approval Date",
    "Estimation Received Date",
    "Indent Sent Date",
    "Signed Indent Received Date",
    "Est. MH BA",
    "Actual MH BA",
    "Est. MH Dev",
    "Actual MH Dev",
    "Est. MH Tester",
    "Actual MH Tester",
    "Total Estimated",
    "Total Actual",
    "Difference",
    "Dev Start Date",
    "UAT Mail Date",
    "UAT Conf. Date",
    "TAT (Days)",
];

pub const NO_REPORT_DATA: &str = "No report data found.";

pub const NO_BREAKUP_DATA: &str = "No man-hours data available for this role.";

fn report_cells(row: &ReportRow) -> Vec<String> {
    vec![
        row.request_no.clone(),
        placeholder::text_cell(row.current_status.as_deref()),
        row.requested_by.clone(),
        row.department.clone(),
        row.category.clone(),
        row.request_date.format("%Y-%m-%d").to_string(),
        row.request_title.clone(),
        placeholder::date_cell(row.srs_sent_date),
        placeholder::date_cell(row.srs_approval_date),
        placeholder::date_cell(row.estimation_received_date),
        placeholder::date_cell(row.indent_sent_date),
        placeholder::date_cell(row.signed_indent_received_date),
        placeholder::cell(row.estimated_man_hours_ba),
        placeholder::cell(row.actual_man_hours_ba),
        placeholder::cell(row.estimated_man_hours_developers),
        placeholder::cell(row.actual_man_hours_developers),
        placeholder::cell(row.estimated_man_hours_tester),
        placeholder::cell(row.actual_man_hours_tester),
        placeholder::cell(row.total_estimated),
        placeholder::cell(row.total_actual),
        placeholder::cell(row.difference_man_hours),
        placeholder::date_cell(row.development_start_date),
        placeholder::date_cell(row.uat_mail_date),
        placeholder::date_cell(row.uat_confirmation_date),
        placeholder::days_cell(row.tat_days),
    ]
}

pub struct ReportPage {
    gateway: ApiGateway,
    pub table: DataTable<ReportRow>,
    /// Filter state owned by the page and passed into every fetch.
    pub filters: ReportFilters,
    pub breakdown: Option<BreakdownModal>,
    pub error_box: Banner,
}

impl ReportPage {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            gateway,
            table: DataTable::new(REPORT_COLUMNS, report_cells),
            filters: ReportFilters::default(),
            breakdown: None,
            error_box: Banner::new(),
        }
    }

    /// Fetches the report with the current filter state.
    pub async fn load(&self) -> LoadOutcome {
        self.table
            .load(
                "report",
                &self.error_box,
                self.gateway.fetch_report(&self.filters),
            )
            .await
    }

    /// Resets all filter inputs and the status selection, then reloads
    /// with no filters.
    pub async fn clear_filters(&mut self) -> LoadOutcome {
        self.filters.clear();
        self.load().await
    }

    /// Export URL built from the identical query pairs as the fetch.
    pub fn download_url(&self) -> Url {
        self.gateway.report_download_url(&self.filters)
    }

    /// Opens the role-scoped breakdown for the report row of a request.
    /// The drill-down key comes from the typed row index, not from
    /// rendered text.
    pub async fn open_breakdown(&mut self, request_internal_id: i64, role: Role) -> bool {
        let Some(record) = self
            .table
            .find_record(|r| r.request_internal_id == request_internal_id)
        else {
            return false;
        };

        match BreakdownModal::open(
            &self.gateway,
            record.request_internal_id,
            &record.request_no,
            role,
            &self.error_box,
        )
        .await
        {
            Some(modal) => {
                self.breakdown = Some(modal);
                true
            }
            None => false,
        }
    }

    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    /// Closes the breakdown modal if open.
    pub fn close_breakdown(&mut self) {
        if let Some(modal) = self.breakdown.take() {
            modal.close();
        }
    }
}

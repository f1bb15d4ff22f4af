//! Command-line front end.
//!
//! One subcommand per page action. Each invocation builds the page
//! controller, drives it the same way the interactive UI would, renders
//! the resulting table model, and echoes whatever banners the action
//! raised.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use cr_console::config::Config;
use cr_console::modal::{ConfirmDialog, BREAKDOWN_COLUMNS};
use cr_console::notify::{Banner, BannerKind};
use cr_console::pages::dashboard::{
    CATEGORY_COLUMNS, COMPARISON_COLUMNS, NO_DASHBOARD_DATA,
};
use cr_console::pages::manhours::{MANHOUR_COLUMNS, NO_MANHOURS};
use cr_console::pages::report::{NO_BREAKUP_DATA, NO_REPORT_DATA, REPORT_COLUMNS};
use cr_console::pages::requests::{NO_REQUESTS, REQUEST_COLUMNS};
use cr_console::pages::stakeholders::{NO_STAKEHOLDERS, STAKEHOLDER_COLUMNS};
use cr_console::pages::update_request::{NO_SELECTABLE_REQUESTS, SELECTION_COLUMNS};
use cr_console::pages::{
    DashboardPage, ManHoursPage, ReportPage, RequestsPage, StakeholdersPage, UpdateRequestPage,
};
use cr_console::render::render_table;
use domain::filters::ReportFilters;
use domain::models::{LifecycleUpdate, RequestPayload, Role, StakeholderPayload};
use gateway::ApiGateway;

#[derive(Debug, Parser)]
#[command(
    name = "cr-console",
    about = "Administrative console for the change-request tracker",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summary charts: requests by category, estimated vs actual hours
    Dashboard,
    /// Change-request master: list, add, edit, delete, import, export
    Requests {
        #[command(subcommand)]
        action: RequestsAction,
    },
    /// Stakeholder master: list, add, edit, delete
    Stakeholders {
        #[command(subcommand)]
        action: StakeholdersAction,
    },
    /// Consolidated report with filters, drill-down and export
    Report {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(subcommand)]
        action: Option<ReportAction>,
    },
    /// Actual man-hours: list, import, export
    Manhours {
        #[command(subcommand)]
        action: ManhoursAction,
    },
    /// Lifecycle updates: show detail, apply fields, bulk import, export
    UpdateRequest {
        #[command(subcommand)]
        action: UpdateRequestAction,
    },
}

#[derive(Debug, Subcommand)]
enum RequestsAction {
    List,
    Add(RequestFields),
    Edit {
        id: i64,
        #[command(flatten)]
        fields: RequestFields,
    },
    Delete {
        id: i64,
        /// Answer the confirmation prompt with yes
        #[arg(long)]
        yes: bool,
    },
    Upload { file: PathBuf },
    Download,
    Template,
}

#[derive(Debug, Args, Default)]
struct RequestFields {
    #[arg(long)]
    request_no: Option<String>,
    #[arg(long)]
    requested_by: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    request_date: Option<NaiveDate>,
    #[arg(long)]
    request_title: Option<String>,
    #[arg(long)]
    description: Option<String>,
}

impl RequestFields {
    fn apply(self, draft: &mut RequestPayload) {
        if let Some(v) = self.request_no {
            draft.request_no = v;
        }
        if let Some(v) = self.requested_by {
            draft.requested_by = v;
        }
        if let Some(v) = self.department {
            draft.department = v;
        }
        if let Some(v) = self.category {
            draft.category = v;
        }
        if let Some(v) = self.request_date {
            draft.request_date = Some(v);
        }
        if let Some(v) = self.request_title {
            draft.request_title = v;
        }
        if let Some(v) = self.description {
            draft.description = v;
        }
    }
}

#[derive(Debug, Subcommand)]
enum StakeholdersAction {
    List,
    Add {
        #[arg(long)]
        name: Option<String>,
        /// BA, Developer or Tester
        #[arg(long)]
        role: Option<Role>,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<Role>,
    },
    Delete {
        id: i64,
        /// Answer the confirmation prompt with yes
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args, Default)]
struct FilterArgs {
    #[arg(long)]
    request_no: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    request_date: Option<NaiveDate>,
    /// Repeatable status filter, e.g. --status Open --status "In UAT"
    #[arg(long = "status")]
    statuses: Vec<String>,
}

impl FilterArgs {
    fn into_filters(self) -> ReportFilters {
        ReportFilters {
            request_no: self.request_no.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            request_date: self.request_date,
            statuses: self.statuses,
        }
    }
}

#[derive(Debug, Subcommand)]
enum ReportAction {
    List,
    /// Per-role man-hour breakdown for one request
    Breakdown {
        /// Internal request id from the report
        id: i64,
        /// BA, Developer or Tester
        #[arg(long)]
        role: Role,
    },
    /// Export the filtered report
    Download,
}

#[derive(Debug, Subcommand)]
enum ManhoursAction {
    List,
    Upload { file: PathBuf },
    Download,
    Template,
}

#[derive(Debug, Subcommand)]
enum UpdateRequestAction {
    List,
    Show { id: i64 },
    Apply {
        id: i64,
        #[command(flatten)]
        fields: LifecycleFields,
    },
    Upload { file: PathBuf },
    Download,
    Template,
}

#[derive(Debug, Args, Default)]
struct LifecycleFields {
    #[arg(long)]
    srs_sent_date: Option<NaiveDate>,
    #[arg(long)]
    srs_approval_date: Option<NaiveDate>,
    #[arg(long)]
    estimation_received_date: Option<NaiveDate>,
    #[arg(long)]
    indent_sent_date: Option<NaiveDate>,
    #[arg(long)]
    signed_indent_received_date: Option<NaiveDate>,
    #[arg(long)]
    estimated_man_hours_ba: Option<i64>,
    #[arg(long)]
    estimated_man_hours_dev: Option<i64>,
    #[arg(long)]
    estimated_man_hours_tester: Option<i64>,
    #[arg(long)]
    development_start_date: Option<NaiveDate>,
    #[arg(long)]
    uat_mail_date: Option<NaiveDate>,
    #[arg(long)]
    uat_confirmation_date: Option<NaiveDate>,
    #[arg(long)]
    current_status: Option<String>,
}

impl LifecycleFields {
    fn apply(self, draft: &mut LifecycleUpdate) {
        if let Some(v) = self.srs_sent_date {
            draft.srs_sent_date = Some(v);
        }
        if let Some(v) = self.srs_approval_date {
            draft.srs_approval_date = Some(v);
        }
        if let Some(v) = self.estimation_received_date {
            draft.estimation_received_date = Some(v);
        }
        if let Some(v) = self.indent_sent_date {
            draft.indent_sent_date = Some(v);
        }
        if let Some(v) = self.signed_indent_received_date {
            draft.signed_indent_received_date = Some(v);
        }
        if let Some(v) = self.estimated_man_hours_ba {
            draft.estimated_man_hours_ba = Some(v);
        }
        if let Some(v) = self.estimated_man_hours_dev {
            draft.estimated_man_hours_dev = Some(v);
        }
        if let Some(v) = self.estimated_man_hours_tester {
            draft.estimated_man_hours_tester = Some(v);
        }
        if let Some(v) = self.development_start_date {
            draft.development_start_date = Some(v);
        }
        if let Some(v) = self.uat_mail_date {
            draft.uat_mail_date = Some(v);
        }
        if let Some(v) = self.uat_confirmation_date {
            draft.uat_confirmation_date = Some(v);
        }
        if let Some(v) = self.current_status {
            draft.current_status = Some(v);
        }
    }
}

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let base = config.api_base()?;
    let gateway = ApiGateway::new(base, Duration::from_secs(config.api.request_timeout_secs))?;
    let downloads = PathBuf::from(&config.downloads.dir);

    match cli.command {
        Command::Dashboard => dashboard(gateway).await,
        Command::Requests { action } => requests(gateway, &downloads, action).await,
        Command::Stakeholders { action } => stakeholders(gateway, action).await,
        Command::Report { filters, action } => report(gateway, &downloads, filters, action).await,
        Command::Manhours { action } => manhours(gateway, &downloads, action).await,
        Command::UpdateRequest { action } => update_request(gateway, &downloads, action).await,
    }
}

async fn dashboard(gateway: ApiGateway) -> Result<()> {
    let mut page = DashboardPage::new(gateway);
    if page.load().await {
        println!("Requests by Category");
        println!(
            "{}",
            render_table(CATEGORY_COLUMNS, &page.category_rows(), NO_DASHBOARD_DATA)?
        );
        println!("Estimated vs Actual Man-hours");
        println!(
            "{}",
            render_table(COMPARISON_COLUMNS, &page.comparison_rows(), NO_DASHBOARD_DATA)?
        );
    }
    print_banners(&[&page.error_box]);
    Ok(())
}

async fn requests(gateway: ApiGateway, downloads: &Path, action: RequestsAction) -> Result<()> {
    let mut page = RequestsPage::new(gateway);

    match action {
        RequestsAction::List => {
            page.load().await;
            println!(
                "{}",
                render_table(REQUEST_COLUMNS, &page.table.rows(), NO_REQUESTS)?
            );
        }
        RequestsAction::Add(fields) => {
            fields.apply(page.form.draft_mut());
            page.submit_form().await;
        }
        RequestsAction::Edit { id, fields } => {
            page.load().await;
            if !page.begin_edit(id) {
                anyhow::bail!("request {id} not found");
            }
            fields.apply(page.form.draft_mut());
            page.submit_form().await;
        }
        RequestsAction::Delete { id, yes } => {
            page.delete(id, present_confirm(yes)).await;
        }
        RequestsAction::Upload { file } => {
            page.import.select(file);
            page.upload().await;
        }
        RequestsAction::Download => {
            let url = page.download_url();
            let saved = page.gateway().download_to(url, downloads).await?;
            println!("Saved {}", saved.display());
        }
        RequestsAction::Template => {
            let url = page.template_url();
            let saved = page.gateway().download_to(url, downloads).await?;
            println!("Saved {}", saved.display());
        }
    }

    print_banners(&[
        &page.message_box,
        &page.error_box,
        &page.upload_message,
        &page.upload_error,
    ]);
    Ok(())
}

async fn stakeholders(gateway: ApiGateway, action: StakeholdersAction) -> Result<()> {
    let mut page = StakeholdersPage::new(gateway);

    match action {
        StakeholdersAction::List => {
            page.load().await;
            println!(
                "{}",
                render_table(STAKEHOLDER_COLUMNS, &page.table.rows(), NO_STAKEHOLDERS)?
            );
        }
        StakeholdersAction::Add { name, role } => {
            *page.form.draft_mut() = StakeholderPayload {
                name: name.unwrap_or_default(),
                role,
            };
            page.submit_form().await;
        }
        StakeholdersAction::Edit { id, name, role } => {
            page.load().await;
            if !page.begin_edit(id) {
                anyhow::bail!("stakeholder {id} not found");
            }
            if let Some(name) = name {
                page.form.draft_mut().name = name;
            }
            if let Some(role) = role {
                page.form.draft_mut().role = Some(role);
            }
            page.submit_form().await;
        }
        StakeholdersAction::Delete { id, yes } => {
            page.delete(id, present_confirm(yes)).await;
        }
    }

    print_banners(&[&page.message_box, &page.error_box]);
    Ok(())
}

async fn report(
    gateway: ApiGateway,
    downloads: &Path,
    filters: FilterArgs,
    action: Option<ReportAction>,
) -> Result<()> {
    let mut page = ReportPage::new(gateway);
    page.filters = filters.into_filters();

    match action.unwrap_or(ReportAction::List) {
        ReportAction::List => {
            page.load().await;
            println!(
                "{}",
                render_table(REPORT_COLUMNS, &page.table.rows(), NO_REPORT_DATA)?
            );
        }
        ReportAction::Breakdown { id, role } => {
            page.load().await;
            if page.open_breakdown(id, role).await {
                if let Some(modal) = &page.breakdown {
                    println!("{}", modal.title());
                    println!(
                        "{}",
                        render_table(BREAKDOWN_COLUMNS, modal.rows(), NO_BREAKUP_DATA)?
                    );
                }
                page.close_breakdown();
            } else if !page.error_box.visible() {
                anyhow::bail!("request {id} not found in the current report");
            }
        }
        ReportAction::Download => {
            let url = page.download_url();
            let saved = page.gateway().download_to(url, downloads).await?;
            println!("Saved {}", saved.display());
        }
    }

    print_banners(&[&page.error_box]);
    Ok(())
}

async fn manhours(gateway: ApiGateway, downloads: &Path, action: ManhoursAction) -> Result<()> {
    let mut page = ManHoursPage::new(gateway);

    match action {
        ManhoursAction::List => {
            page.load().await;
            println!(
                "{}",
                render_table(MANHOUR_COLUMNS, &page.table.rows(), NO_MANHOURS)?
            );
        }
        ManhoursAction::Upload { file } => {
            page.import.select(file);
            page.upload().await;
        }
        ManhoursAction::Download => {
            let url = page.download_url();
            let saved = page.gateway().download_to(url, downloads).await?;
            println!("Saved {}", saved.display());
        }
        ManhoursAction::Template => {
            let url = page.template_url();
            let saved = page.gateway().download_to(url, downloads).await?;
            println!("Saved {}", saved.display());
        }
    }

    print_banners(&[&page.message_box, &page.error_box]);
    Ok(())
}

async fn update_request(
    gateway: ApiGateway,
    downloads: &Path,
    action: UpdateRequestAction,
) -> Result<()> {
    let mut page = UpdateRequestPage::new(gateway);

    match action {
        UpdateRequestAction::List => {
            page.load().await;
            println!(
                "{}",
                render_table(SELECTION_COLUMNS, &page.selection.rows(), NO_SELECTABLE_REQUESTS)?
            );
        }
        UpdateRequestAction::Show { id } => {
            if page.select(Some(id)).await {
                for (label, value) in page.detail_rows() {
                    println!("{label}: {value}");
                }
            }
        }
        UpdateRequestAction::Apply { id, fields } => {
            if page.select(Some(id)).await {
                fields.apply(page.form.draft_mut());
                page.submit().await;
            }
        }
        UpdateRequestAction::Upload { file } => {
            page.import.select(file);
            page.upload().await;
        }
        UpdateRequestAction::Download => {
            let url = page.download_url();
            let saved = page.gateway().download_to(url, downloads).await?;
            println!("Saved {}", saved.display());
        }
        UpdateRequestAction::Template => {
            let url = page.template_url();
            let saved = page.gateway().download_to(url, downloads).await?;
            println!("Saved {}", saved.display());
        }
    }

    print_banners(&[
        &page.message_box,
        &page.error_box,
        &page.upload_message,
        &page.upload_error,
    ]);
    Ok(())
}

/// Terminal presenter for the confirm dialog. `--yes` confirms without
/// prompting; any answer other than y/yes cancels; a failed prompt drops
/// the dialog, which counts as dismissal.
fn present_confirm(assume_yes: bool) -> impl FnOnce(ConfirmDialog) {
    move |dialog| {
        if assume_yes {
            dialog.confirm();
            return;
        }
        print!("{} [y/N] ", dialog.message());
        if io::stdout().flush().is_err() {
            return;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return;
        }
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
            dialog.confirm();
        } else {
            dialog.cancel();
        }
    }
}

fn print_banners(banners: &[&Banner]) {
    for banner in banners {
        if let Some((kind, message)) = banner.current() {
            match kind {
                BannerKind::Success => println!("[ok] {message}"),
                BannerKind::Error => eprintln!("[error] {message}"),
            }
        }
    }
}

//! Page controllers.
//!
//! One module per page of the original dashboard, each composing the
//! generic components: a data table, optionally a bound form, a bulk
//! import area, and its notification banners.

pub mod dashboard;
pub mod manhours;
pub mod report;
pub mod requests;
pub mod stakeholders;
pub mod update_request;

pub use dashboard::DashboardPage;
pub use manhours::ManHoursPage;
pub use report::ReportPage;
pub use requests::RequestsPage;
pub use stakeholders::StakeholdersPage;
pub use update_request::UpdateRequestPage;

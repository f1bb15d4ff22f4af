//! Entity records and mutation payloads.
//!
//! One file per entity. All records are plain JSON shapes owned by the
//! remote API; the client holds no authoritative state beyond the page
//! currently rendered from them.

mod ack;
mod dashboard;
mod manhours;
mod report;
mod request;
mod request_detail;
mod stakeholder;

pub use ack::MutationAck;
pub use dashboard::{CategoryCount, DashboardData, RoleHours};
pub use manhours::{ManHourActualEntry, ManHourBreakdownEntry};
pub use report::ReportRow;
pub use request::{ChangeRequest, RequestPayload};
pub use request_detail::{LifecycleUpdate, RequestDetail};
pub use stakeholder::{Role, RoleParseError, Stakeholder, StakeholderPayload};

//! Modal dialogs: confirm prompts and the man-hours breakdown.
//!
//! Both are built per invocation and dropped when done; no dialog state
//! survives between calls.

use tokio::sync::oneshot;

use domain::models::{ManHourBreakdownEntry, Role};
use gateway::ApiGateway;
use shared::placeholder;

use crate::notify::{Banner, BannerKind};

/// What the user decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

/// A pending confirm dialog. Present it to the user, then call
/// [`confirm`](ConfirmDialog::confirm) or [`cancel`](ConfirmDialog::cancel);
/// dropping it undecided counts as a dismissal and resolves cancelled.
#[derive(Debug)]
pub struct ConfirmDialog {
    message: String,
    decision: Option<oneshot::Sender<ConfirmOutcome>>,
}

impl ConfirmDialog {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn confirm(mut self) {
        if let Some(tx) = self.decision.take() {
            let _ = tx.send(ConfirmOutcome::Confirmed);
        }
    }

    pub fn cancel(mut self) {
        if let Some(tx) = self.decision.take() {
            let _ = tx.send(ConfirmOutcome::Cancelled);
        }
    }
}

/// Builds a confirm dialog. Returns the disposable dialog handle and a
/// future resolving to the outcome; the awaiting action must not proceed
/// unless the outcome is [`ConfirmOutcome::Confirmed`].
pub fn confirm(
    message: impl Into<String>,
) -> (ConfirmDialog, impl std::future::Future<Output = ConfirmOutcome>) {
    let (tx, rx) = oneshot::channel();
    let dialog = ConfirmDialog {
        message: message.into(),
        decision: Some(tx),
    };
    let outcome = async move { rx.await.unwrap_or(ConfirmOutcome::Cancelled) };
    (dialog, outcome)
}

/// Columns of the breakdown table.
pub const BREAKDOWN_COLUMNS: &[&str] = &["Stakeholder", "Role", "Task Date", "Actual Man-Hours"];

/// Drill-down modal showing the per-role man-hour breakdown for one
/// request. Stays open until explicitly closed.
#[derive(Debug)]
pub struct BreakdownModal {
    title: String,
    entries: Vec<ManHourBreakdownEntry>,
    rows: Vec<Vec<String>>,
}

impl BreakdownModal {
    /// Fetches the breakdown and opens the modal. A fetch failure routes to
    /// the error banner and opens nothing.
    pub async fn open(
        gateway: &ApiGateway,
        request_id: i64,
        request_no: &str,
        role: Role,
        error_box: &Banner,
    ) -> Option<Self> {
        match gateway.manhours_breakup(request_id, role).await {
            Ok(entries) => Some(Self::build(request_no, role, entries)),
            Err(err) => {
                error_box.show(
                    format!("Failed to load man-hours breakup. {err}"),
                    BannerKind::Error,
                );
                None
            }
        }
    }

    fn build(request_no: &str, role: Role, entries: Vec<ManHourBreakdownEntry>) -> Self {
        let rows = entries
            .iter()
            .map(|entry| {
                vec![
                    entry.stakeholder_name.clone(),
                    entry.stakeholder_role.to_string(),
                    placeholder::date_cell(entry.task_date),
                    entry.actual_man_hours.to_string(),
                ]
            })
            .collect();
        Self {
            title: format!("{request_no} (Role: {role})"),
            entries,
            rows,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// True when the "no data" placeholder is shown instead of rows.
    pub fn placeholder_visible(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn entries(&self) -> &[ManHourBreakdownEntry] {
        &self.entries
    }

    /// Explicitly closes (consumes) the modal.
    pub fn close(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_confirm_resolves_confirmed() {
        let (dialog, outcome) = confirm("Are you sure?");
        assert_eq!(dialog.message(), "Are you sure?");
        dialog.confirm();
        assert_eq!(outcome.await, ConfirmOutcome::Confirmed);
    }

    #[tokio::test]
    async fn test_cancel_resolves_cancelled() {
        let (dialog, outcome) = confirm("Are you sure?");
        dialog.cancel();
        assert_eq!(outcome.await, ConfirmOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_dismissal_resolves_cancelled() {
        let (dialog, outcome) = confirm("Are you sure?");
        drop(dialog);
        assert_eq!(outcome.await, ConfirmOutcome::Cancelled);
    }

    #[test]
    fn test_breakdown_rows_and_title() {
        let entries = vec![ManHourBreakdownEntry {
            stakeholder_name: "P. Ghosh".to_string(),
            stakeholder_role: Role::Developer,
            actual_man_hours: 6,
            task_date: NaiveDate::from_ymd_opt(2024, 4, 18),
        }];
        let modal = BreakdownModal::build("CR-2024-042", Role::Developer, entries);
        assert_eq!(modal.title(), "CR-2024-042 (Role: Developer)");
        assert!(!modal.placeholder_visible());
        assert_eq!(
            modal.rows()[0],
            vec!["P. Ghosh", "Developer", "2024-04-18", "6"]
        );
    }

    #[test]
    fn test_breakdown_empty_shows_placeholder() {
        let modal = BreakdownModal::build("CR-1", Role::Ba, vec![]);
        assert!(modal.placeholder_visible());
        assert!(modal.rows().is_empty());
    }
}

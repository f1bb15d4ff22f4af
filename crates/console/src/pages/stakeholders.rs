//! Stakeholders page: reference-entity CRUD with a two-field form.

use tracing::info;

use domain::models::{Stakeholder, StakeholderPayload};
use gateway::ApiGateway;

use crate::error::mutation_error_message;
use crate::form::FormBinding;
use crate::modal::{confirm, ConfirmDialog, ConfirmOutcome};
use crate::notify::{Banner, BannerKind};
use crate::table::{DataTable, LoadOutcome};

pub const STAKEHOLDER_COLUMNS: &[&str] = &["Name", "Role"];

pub const NO_STAKEHOLDERS: &str = "No stakeholders found.";

fn stakeholder_cells(record: &Stakeholder) -> Vec<String> {
    vec![record.name.clone(), record.role.to_string()]
}

pub struct StakeholdersPage {
    gateway: ApiGateway,
    pub table: DataTable<Stakeholder>,
    pub form: FormBinding<StakeholderPayload>,
    pub message_box: Banner,
    pub error_box: Banner,
}

impl StakeholdersPage {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            gateway,
            table: DataTable::new(STAKEHOLDER_COLUMNS, stakeholder_cells),
            form: FormBinding::new(),
            message_box: Banner::new(),
            error_box: Banner::new(),
        }
    }

    pub async fn load(&self) -> LoadOutcome {
        self.table
            .load(
                "stakeholders",
                &self.error_box,
                self.gateway.list_stakeholders(),
            )
            .await
    }

    pub fn begin_edit(&mut self, id: i64) -> bool {
        match self.table.find_record(|s| s.id == id) {
            Some(record) => {
                self.form
                    .enter_edit_mode(record.id, StakeholderPayload::from(&record));
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    pub async fn submit_form(&mut self) -> bool {
        if self.form.validate().is_err() {
            self.error_box
                .show("Please fill in all fields.", BannerKind::Error);
            return false;
        }

        let result = match self.form.record_id() {
            Some(id) => self.gateway.update_stakeholder(id, self.form.draft()).await,
            None => self.gateway.create_stakeholder(self.form.draft()).await,
        };

        match result {
            Ok(ack) => {
                info!(id = ?ack.id, "stakeholder saved");
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

    pub async fn delete(&mut self, id: i64, present: impl FnOnce(ConfirmDialog)) -> bool {
        let (dialog, outcome) = confirm(
            "Are you sure you want to delete this stakeholder? This action cannot be undone.",
        );
        present(dialog);
        if outcome.await != ConfirmOutcome::Confirmed {
            return false;
        }

        match self.gateway.delete_stakeholder(id).await {
            Ok(ack) => {
                info!(id, "stakeholder deleted");
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
}

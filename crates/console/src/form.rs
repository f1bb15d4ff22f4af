//! Form binding with create/edit mode.
//!
//! The hidden record id decides the mode: absent means create (submit label
//! "Add"), present means edit (label "Update"). Exactly one of the two is
//! active at any time. Validation runs on the draft before any network
//! call; the page owning the form decides what to do with the result.

use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Bound form state for payload type `P`.
#[derive(Debug, Clone)]
pub struct FormBinding<P> {
    draft: P,
    record_id: Option<i64>,
}

impl<P: Validate + Default + Clone> FormBinding<P> {
    pub fn new() -> Self {
        Self {
            draft: P::default(),
            record_id: None,
        }
    }

    pub fn draft(&self) -> &P {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut P {
        &mut self.draft
    }

    pub fn mode(&self) -> FormMode {
        if self.record_id.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            FormMode::Create => "Add",
            FormMode::Edit => "Update",
        }
    }

    /// Populates every bound field from a record and switches to edit mode.
    pub fn enter_edit_mode(&mut self, record_id: i64, populated: P) {
        self.record_id = Some(record_id);
        self.draft = populated;
    }

    /// Clears the fields and the hidden id, restoring create mode.
    pub fn reset(&mut self) {
        self.draft = P::default();
        self.record_id = None;
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.draft.validate()
    }
}

impl<P: Validate + Default + Clone> Default for FormBinding<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::{RequestPayload, StakeholderPayload};

    #[test]
    fn test_starts_in_create_mode() {
        let form: FormBinding<RequestPayload> = FormBinding::new();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.submit_label(), "Add");
        assert!(form.record_id().is_none());
    }

    #[test]
    fn test_enter_edit_mode_switches_label() {
        let mut form: FormBinding<StakeholderPayload> = FormBinding::new();
        form.enter_edit_mode(
            12,
            StakeholderPayload {
                name: "A. Menon".to_string(),
                role: Some(domain::models::Role::Developer),
            },
        );
        assert_eq!(form.mode(), FormMode::Edit);
        assert_eq!(form.submit_label(), "Update");
        assert_eq!(form.record_id(), Some(12));
        assert_eq!(form.draft().name, "A. Menon");
    }

    #[test]
    fn test_reset_restores_create_mode_and_clears_fields() {
        let mut form: FormBinding<StakeholderPayload> = FormBinding::new();
        form.enter_edit_mode(
            3,
            StakeholderPayload {
                name: "B. Das".to_string(),
                role: Some(domain::models::Role::Ba),
            },
        );
        form.reset();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.submit_label(), "Add");
        assert!(form.draft().name.is_empty());
        assert!(form.draft().role.is_none());
    }

    #[test]
    fn test_validate_runs_on_draft() {
        let form: FormBinding<RequestPayload> = FormBinding::new();
        assert!(form.validate().is_err());
    }
}

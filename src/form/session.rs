use crate::domain::ProductId;

use super::outcome::{DeleteResult, SaveResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    New,
    Bound(ProductId),
    Closed,
}

/// Editor-side bookkeeping for one form session: which row the form is bound
/// to and whether the user has touched anything since the last save.
///
/// A bound session never goes back to `New`, and `Closed` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    state: FormState,
    changed: bool,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            state: FormState::New,
            changed: false,
        }
    }

    pub fn editing(id: ProductId) -> Self {
        Self {
            state: FormState::Bound(id),
            changed: false,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn bound_id(&self) -> Option<ProductId> {
        match self.state {
            FormState::Bound(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state == FormState::Closed
    }

    pub fn title(&self) -> &'static str {
        match self.state {
            FormState::New => "Add a Product",
            _ => "Edit Product",
        }
    }

    /// Delete and order actions only make sense for a stored product.
    pub fn can_delete(&self) -> bool {
        matches!(self.state, FormState::Bound(_))
    }

    pub fn mark_changed(&mut self) {
        if !self.is_closed() {
            self.changed = true;
        }
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Leaving now would throw edits away.
    pub fn needs_discard_confirmation(&self) -> bool {
        self.changed && !self.is_closed()
    }

    pub fn apply_save(&mut self, result: &SaveResult) {
        match (self.state, result) {
            (FormState::New, SaveResult::Inserted(id)) => {
                self.state = FormState::Bound(*id);
                self.changed = false;
            }
            (FormState::Bound(_), SaveResult::Updated) => self.changed = false,
            _ => {}
        }
    }

    /// The editor closes after a delete attempt whether or not a row went away.
    pub fn apply_delete(&mut self, _result: &DeleteResult) {
        self.close();
    }

    pub fn close(&mut self) {
        self.state = FormState::Closed;
        self.changed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_binds_a_new_form() {
        let mut session = FormSession::new();
        assert_eq!(session.title(), "Add a Product");
        assert!(!session.can_delete());

        session.mark_changed();
        assert!(session.needs_discard_confirmation());

        session.apply_save(&SaveResult::Inserted(9));
        assert_eq!(session.state(), FormState::Bound(9));
        assert_eq!(session.bound_id(), Some(9));
        assert!(!session.has_changed());
        assert!(session.can_delete());
        assert_eq!(session.title(), "Edit Product");
    }

    #[test]
    fn bound_form_stays_bound() {
        let mut session = FormSession::editing(4);
        session.apply_save(&SaveResult::Updated);
        session.apply_save(&SaveResult::UpdateFailed);
        session.apply_save(&SaveResult::Inserted(11));
        assert_eq!(session.state(), FormState::Bound(4));
    }

    #[test]
    fn failed_save_keeps_pending_changes() {
        let mut session = FormSession::new();
        session.mark_changed();
        session.apply_save(&SaveResult::InsertFailed);
        assert_eq!(session.state(), FormState::New);
        assert!(session.needs_discard_confirmation());

        session.apply_save(&SaveResult::Skipped);
        assert_eq!(session.state(), FormState::New);
    }

    #[test]
    fn closed_is_terminal() {
        let mut session = FormSession::editing(4);
        session.apply_delete(&DeleteResult::DeleteFailed);
        assert!(session.is_closed());
        assert_eq!(session.bound_id(), None);

        session.mark_changed();
        session.apply_save(&SaveResult::Inserted(5));
        assert!(session.is_closed());
        assert!(!session.needs_discard_confirmation());
    }
}

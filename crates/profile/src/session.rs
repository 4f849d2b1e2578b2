//! Submission lifecycle around a single draft.

use serde::Serialize;
use strum::Display;
use tracing::debug;

use crate::draft::ProfileDraft;
use crate::field::Field;
use crate::interest::Interest;
use crate::progress;
use crate::validate::{self, ErrorMap};

/// Where the form is in its lifecycle. Exactly one phase at a time; the only
/// transitions are `Editing -> Submitting -> Submitted` plus `reset` back to
/// `Editing` from anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// What `Session::submit` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was valid; the session moved to `Submitting`.
    Accepted,
    /// Validation failed; the messages are in `errors()`.
    Rejected,
    /// Submission already under way or finished.
    Ignored,
}

/// One profile entry session: the draft being edited, the validation messages
/// currently on display, and the phase of the submission lifecycle.
///
/// Mutators are phase-gated: while `Submitting` or `Submitted` the draft is
/// frozen until `reset`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    draft: ProfileDraft,
    errors: ErrorMap,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn progress(&self) -> u8 {
        progress::percent(&self.draft)
    }

    /// Replace a text entry with what the user typed so far.
    ///
    /// Whatever message that entry was showing disappears with the edit;
    /// messages on other entries stay until the next submit attempt.
    pub fn edit_text(&mut self, field: Field, value: impl Into<String>) {
        if self.phase != Phase::Editing {
            return;
        }
        self.draft.set_text(field, value);
        self.errors.remove(&field);
    }

    /// Toggle an interest selection. The interests message is dropped as soon
    /// as the selection is non-empty again.
    pub fn toggle_interest(&mut self, interest: Interest) {
        if self.phase != Phase::Editing {
            return;
        }
        self.draft.toggle_interest(interest);
        if !self.draft.interests.is_empty() {
            self.errors.remove(&Field::Interests);
        }
    }

    /// Validate the whole draft and, if it passes, move to `Submitting`.
    ///
    /// The message map is replaced wholesale on every attempt, so messages
    /// cleared by edits come back while the underlying value is still bad.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != Phase::Editing {
            return SubmitOutcome::Ignored;
        }
        self.errors = validate::validate(&self.draft);
        if self.errors.is_empty() {
            self.phase = Phase::Submitting;
            debug!("draft accepted for submission");
            SubmitOutcome::Accepted
        } else {
            debug!(count = self.errors.len(), "draft rejected with errors");
            SubmitOutcome::Rejected
        }
    }

    /// The simulated backend came back; only meaningful while `Submitting`.
    /// A completion that arrives after a reset hits the phase guard and
    /// changes nothing.
    pub fn complete_submission(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Submitted;
            debug!("submission completed");
        }
    }

    /// Back to an empty draft in `Editing`, from any phase.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

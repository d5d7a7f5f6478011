// ── Form session controller ──
//
// Holds the in-progress draft and its validation errors, and turns a
// submit attempt into a finalized record via the trim → validate →
// assign-id cycle.

use crate::ids::IdGenerator;
use crate::model::{Gender, User};
use crate::validate::{FormField, UserValidator, Validator};

use std::collections::BTreeMap;

/// Whether the session is creating a new record or editing a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// A finalized, validated record together with the mode it was
/// submitted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub user: User,
    pub mode: FormMode,
}

/// The form session: draft state, field errors, and Create/Edit mode.
///
/// Validation failures never leave the session as errors-in-the-Rust-
/// sense; they are stored on the session for the view to render, and
/// the draft is kept so the user can correct it.
#[derive(Debug, Default)]
pub struct FormSession {
    mode: FormMode,
    draft: User,
    errors: BTreeMap<FormField, String>,
    validator: UserValidator,
    ids: IdGenerator,
}

impl FormSession {
    /// A fresh session in Create mode with a blank draft.
    pub fn new() -> Self {
        Self::default()
    }

    // ── State transitions ────────────────────────────────────────────

    /// Load a stored record for editing. Clears any previous errors.
    pub fn load_for_edit(&mut self, user: &User) {
        self.mode = FormMode::Edit;
        self.draft = user.clone();
        self.errors.clear();
    }

    /// Reset to a blank Create-mode draft. Clears any previous errors.
    pub fn load_blank(&mut self) {
        self.mode = FormMode::Create;
        self.draft = User::draft();
        self.errors.clear();
    }

    /// Overwrite one text field of the draft. No validation runs here;
    /// errors only change on submit.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.draft.name = value,
            FormField::Email => self.draft.email = value,
            FormField::Phone => self.draft.phone = value,
        }
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
    }

    /// Attempt to finalize the draft.
    ///
    /// Trims the text fields on a copy, validates, and always replaces
    /// the stored errors with the fresh result. On failure the draft is
    /// retained unchanged and `None` is returned. On success the
    /// finalized record is returned (with a newly assigned id in Create
    /// mode) and the session resets to a blank Create draft.
    pub fn submit(&mut self) -> Option<Submission> {
        let mut candidate = self.draft.clone();
        candidate.name = candidate.name.trim().to_owned();
        candidate.email = candidate.email.trim().to_owned();
        candidate.phone = candidate.phone.trim().to_owned();

        let result = self.validator.validate(&candidate);
        self.errors = result.errors;
        if !self.errors.is_empty() {
            return None;
        }

        if self.mode == FormMode::Create {
            candidate.id = self.ids.next();
        }

        let mode = self.mode;
        self.load_blank();
        Some(Submission {
            user: candidate,
            mode,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &User {
        &self.draft
    }

    /// Field errors from the most recent submit attempt.
    pub fn errors(&self) -> &BTreeMap<FormField, String> {
        &self.errors
    }
}

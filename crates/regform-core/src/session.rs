use crate::draft::RegistrationDraft;
use crate::error::Result;
use crate::field::FieldName;
use crate::submit::{SubmissionRecord, SubmitHandler};
use crate::validator::{FieldError, FormValidator, ValidationErrors};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft passed and was handed to the submit handler.
    Submitted(SubmissionRecord),
    /// The draft failed validation; the handler was not called.
    Rejected(ValidationErrors),
}

/// Owns the single in-flight draft of a form view.
///
/// Every change re-validates the whole draft, so `errors()` always reflects
/// the current values.
#[derive(Debug)]
pub struct FormSession {
    draft: RegistrationDraft,
    errors: ValidationErrors,
    validator: FormValidator,
}

impl FormSession {
    pub fn new() -> Self {
        Self::with_validator(FormValidator::new())
    }

    pub fn with_validator(validator: FormValidator) -> Self {
        let draft = RegistrationDraft::default();
        let errors = validator.validate(&draft);
        Self {
            draft,
            errors,
            validator,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Apply one input change and return the field's error after re-validation.
    ///
    /// A value the input cannot hold leaves the draft untouched.
    pub fn set(&mut self, field: FieldName, value: &str) -> Result<Option<&FieldError>> {
        self.draft.set(field, value)?;
        self.revalidate();
        Ok(self.errors.get(field))
    }

    /// Replace all values at once, e.g. from a loaded document.
    pub fn replace(&mut self, draft: RegistrationDraft) -> &ValidationErrors {
        self.draft = draft;
        self.revalidate()
    }

    pub fn revalidate(&mut self) -> &ValidationErrors {
        self.errors = self.validator.validate(&self.draft);
        &self.errors
    }

    /// Validate once more and submit when clean.
    ///
    /// A submitted draft is discarded and the session starts over with a
    /// blank one. A rejected draft is kept for correction.
    pub fn submit<H: SubmitHandler>(&mut self, handler: &mut H) -> SubmitOutcome {
        self.revalidate();
        if !self.errors.is_empty() {
            tracing::warn!(failing = self.errors.len(), "submit rejected");
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let record = handler.submit(&self.draft);
        self.reset();
        SubmitOutcome::Submitted(record)
    }

    /// Discard the draft.
    pub fn reset(&mut self) {
        self.draft = RegistrationDraft::default();
        self.revalidate();
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::draft::RegistrationDraft;

/// Shown in place of password values in submission records.
pub const MASK: &str = "********";

/// What a submit handler observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub submitted_at: DateTime<Utc>,
    pub values: RegistrationDraft,
}

impl SubmissionRecord {
    /// Snapshot `draft` with both password fields masked.
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        let mut values = draft.clone();
        mask(&mut values.password);
        mask(&mut values.confirm_password);
        Self {
            submitted_at: Utc::now(),
            values,
        }
    }
}

fn mask(value: &mut String) {
    if !value.is_empty() {
        *value = MASK.to_string();
    }
}

/// Consumes a draft that already passed validation.
///
/// Handlers do not validate again and cannot fail.
pub trait SubmitHandler {
    fn submit(&mut self, draft: &RegistrationDraft) -> SubmissionRecord;
}

/// Emits each submission as a `tracing` event.
#[derive(Debug, Default)]
pub struct TracingSubmitHandler {
    submitted: u64,
}

impl TracingSubmitHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of drafts submitted through this handler.
    pub fn submitted(&self) -> u64 {
        self.submitted
    }
}

impl SubmitHandler for TracingSubmitHandler {
    fn submit(&mut self, draft: &RegistrationDraft) -> SubmissionRecord {
        let record = SubmissionRecord::from_draft(draft);
        let values =
            serde_json::to_string(&record.values).unwrap_or_else(|_| "{}".to_string());
        self.submitted += 1;

        tracing::info!(
            submitted_at = %record.submitted_at,
            values = %values,
            "form submitted"
        );
        record
    }
}

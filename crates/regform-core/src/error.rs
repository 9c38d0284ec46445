use std::path::PathBuf;

use crate::field::FieldName;

/// Errors raised while loading or mutating a draft.
///
/// Rule violations are not errors: they are reported as values through
/// [`crate::ValidationErrors`].
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Reading the draft document failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document exceeds the configured size limit.
    #[error("document too large (more than {limit} bytes)")]
    TooLarge { limit: usize },

    /// The embedded draft schema could not be compiled.
    #[error("failed to compile draft schema: {0}")]
    CompileFailed(String),

    /// The document does not have the shape of a registration draft.
    #[error("draft document rejected: {0}")]
    InvalidDocument(String),

    /// The document is not valid JSON.
    #[error("draft is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// No form field has the given name.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The value cannot be stored in the field (unknown option, not a boolean).
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: FieldName, value: String },
}

pub type Result<T> = std::result::Result<T, FormError>;

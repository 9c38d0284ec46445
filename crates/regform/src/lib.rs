//! Registration form validation.
//!
//! # Crate Structure
//!
//! - [`form`] — Draft model, rule table, validator, session and submit handler
//!
//! The `regform` binary (behind the `cli` feature) validates and submits draft
//! documents and runs an interactive form session on stdin.

/// Re-export form types.
pub mod form {
    pub use regform_core::*;
}

pub use regform_core::{
    FieldName, FormSession, FormValidator, RegistrationDraft, SubmitHandler, SubmitOutcome,
    ValidationErrors,
};

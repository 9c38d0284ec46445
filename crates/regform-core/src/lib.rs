//! Registration form model, validation rules and submit contract.
//!
//! A [`RegistrationDraft`] is checked by [`FormValidator`] against a static
//! rule table and handed to a [`SubmitHandler`] once it is clean.
//! [`FormSession`] owns the single in-flight draft and re-validates it on
//! every field change.

pub mod config;
pub mod document;
pub mod draft;
pub mod error;
pub mod field;
pub mod rules;
pub mod session;
pub mod submit;
pub mod validator;

pub use config::{LoadConfig, ValidatorConfig};
pub use document::DraftLoader;
pub use draft::{FileHandle, RegistrationDraft};
pub use error::{FormError, Result};
pub use field::{Country, FieldName, Gender};
pub use rules::{ErrorKind, RULE_TABLE};
pub use session::{FormSession, SubmitOutcome};
pub use submit::{SubmissionRecord, SubmitHandler, TracingSubmitHandler};
pub use validator::{FieldError, FormValidator, ValidationErrors};

use std::fmt;
use std::io;

use regform_core::FormError;

pub const SUCCESS: i32 = 0;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => USAGE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn form_error(context: &str, err: FormError) -> CliError {
    match err {
        FormError::Io { source, .. } => io_error(context, source),
        FormError::InvalidJson(_) | FormError::InvalidDocument(_) | FormError::TooLarge { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        FormError::UnknownField(_) | FormError::InvalidValue { .. } => {
            CliError::new(USAGE, format!("{context}: {err}"))
        }
        FormError::CompileFailed(_) => CliError::new(INTERNAL, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use regform_core::FieldName;

    #[test]
    fn document_problems_map_to_data_invalid() {
        let err = form_error("load", FormError::InvalidDocument("bad".to_string()));
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(err.to_string(), "load: draft document rejected: bad");
    }

    #[test]
    fn bad_field_input_maps_to_usage() {
        let err = form_error(
            "set",
            FormError::InvalidValue {
                field: FieldName::Terms,
                value: "maybe".to_string(),
            },
        );
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn io_permission_denied_maps_to_50() {
        let err = io_error(
            "read",
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }

    #[test]
    fn draft_read_failures_use_io_codes() {
        let read_err = |kind| FormError::Io {
            path: PathBuf::from("draft.json"),
            source: io::Error::new(kind, "boom"),
        };

        let missing = form_error("failed loading draft.json", read_err(io::ErrorKind::NotFound));
        assert_eq!(missing.code, USAGE);
        assert_eq!(missing.to_string(), "failed loading draft.json: boom");

        let denied = form_error("load", read_err(io::ErrorKind::PermissionDenied));
        assert_eq!(denied.code, PERMISSION_DENIED);

        let other = form_error("load", read_err(io::ErrorKind::Other));
        assert_eq!(other.code, INTERNAL);
    }

    #[test]
    fn oversized_documents_map_to_data_invalid() {
        let err = form_error("load", FormError::TooLarge { limit: 16 });
        assert_eq!(err.code, DATA_INVALID);
    }
}

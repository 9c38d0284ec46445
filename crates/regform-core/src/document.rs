//! Loading drafts from JSON documents.
//!
//! Documents are checked against the embedded draft schema before they are
//! deserialized, so a wrongly typed value is reported as a document problem
//! rather than a field rule violation.

use std::io::Read;
use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;

use crate::config::LoadConfig;
use crate::draft::RegistrationDraft;
use crate::error::{FormError, Result};

/// JSON Schema describing the shape of a draft document.
pub const DRAFT_SCHEMA: &str = include_str!("../schemas/registration-draft.schema.json");

/// Compiled draft schema plus load limits.
pub struct DraftLoader {
    validator: Validator,
    config: LoadConfig,
}

impl DraftLoader {
    /// Create a loader with default config.
    pub fn new() -> Result<Self> {
        Self::with_config(LoadConfig::default())
    }

    /// Create a loader with explicit config.
    pub fn with_config(config: LoadConfig) -> Result<Self> {
        let mut schema: Value = serde_json::from_str(DRAFT_SCHEMA)?;
        if config.strict_mode {
            if let Value::Object(map) = &mut schema {
                map.insert("additionalProperties".to_string(), Value::Bool(false));
            }
        }

        let validator = jsonschema::validator_for(&schema)
            .map_err(|err| FormError::CompileFailed(err.to_string()))?;

        Ok(Self { validator, config })
    }

    /// Parse a draft from a JSON string.
    pub fn load_str(&self, json: &str) -> Result<RegistrationDraft> {
        self.load_slice(json.as_bytes())
    }

    /// Parse a draft from JSON bytes.
    pub fn load_slice(&self, bytes: &[u8]) -> Result<RegistrationDraft> {
        if bytes.len() > self.config.max_document_size {
            return Err(FormError::TooLarge {
                limit: self.config.max_document_size,
            });
        }

        let value: Value = serde_json::from_slice(bytes)?;
        self.check_shape(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Read and parse a draft file.
    pub fn load_path(&self, path: &Path) -> Result<RegistrationDraft> {
        let file = std::fs::File::open(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_from(file, path)
    }

    /// Read and parse a draft from any reader, up to the configured size.
    ///
    /// Read failures are reported against the path `-`.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<RegistrationDraft> {
        self.read_from(reader, Path::new("-"))
    }

    fn read_from<R: Read>(&self, reader: R, path: &Path) -> Result<RegistrationDraft> {
        let max_bytes = self.config.max_document_size;
        let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
        let mut content = Vec::new();
        reader
            .take(read_limit)
            .read_to_end(&mut content)
            .map_err(|source| FormError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        self.load_slice(&content)
    }

    /// Get loader configuration.
    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    fn check_shape(&self, value: &Value) -> Result<()> {
        let mut errors = self.validator.iter_errors(value);
        if let Some(first) = errors.next() {
            let mut message = first.to_string();
            for err in errors.take(3) {
                message.push_str("; ");
                message.push_str(&err.to_string());
            }
            return Err(FormError::InvalidDocument(message));
        }
        Ok(())
    }
}

/// Thresholds used by the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Minimum age in whole years on the day of validation.
    pub min_age_years: u32,
    /// Minimum password length in characters.
    pub min_password_len: usize,
    /// Exact number of decimal digits in a phone number.
    pub phone_digits: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_age_years: 18,
            min_password_len: 6,
            phone_digits: 10,
        }
    }
}

/// Controls how draft documents are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    /// When true, documents with keys that are not form fields are rejected.
    pub strict_mode: bool,
    /// Maximum bytes read from a draft file.
    pub max_document_size: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            max_document_size: 64 * 1024,
        }
    }
}

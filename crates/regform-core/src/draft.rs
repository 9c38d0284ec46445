use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FormError, Result};
use crate::field::{Country, FieldName, Gender};

/// Name of a file picked in the upload input. Never validated or read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileHandle(String);

impl FileHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Candidate values of the registration form.
///
/// Text inputs hold exactly what was typed; `dob` is kept as the raw
/// `YYYY-MM-DD` input and only interpreted by the rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub dob: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub gender: Option<Gender>,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub country: Option<Country>,
    pub file: Option<FileHandle>,
    pub terms: bool,
}

/// Borrowed view of one field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Choice(Option<&'static str>),
    Flag(bool),
    Attachment(Option<&'a FileHandle>),
}

impl FieldValue<'_> {
    /// Whether the input is blank: empty text, nothing selected or no file.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Choice(choice) => choice.is_none(),
            Self::Flag(_) => false,
            Self::Attachment(file) => file.is_none(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl RegistrationDraft {
    /// Current value of `field`.
    pub fn value(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::FullName => FieldValue::Text(&self.full_name),
            FieldName::Email => FieldValue::Text(&self.email),
            FieldName::PhoneNumber => FieldValue::Text(&self.phone_number),
            FieldName::Dob => FieldValue::Text(&self.dob),
            FieldName::Gender => FieldValue::Choice(self.gender.map(Gender::as_str)),
            FieldName::Password => FieldValue::Text(&self.password),
            FieldName::ConfirmPassword => FieldValue::Text(&self.confirm_password),
            FieldName::Address => FieldValue::Text(&self.address),
            FieldName::Country => FieldValue::Choice(self.country.map(Country::as_str)),
            FieldName::File => FieldValue::Attachment(self.file.as_ref()),
            FieldName::Terms => FieldValue::Flag(self.terms),
        }
    }

    /// Apply one input change, as typed into or selected in the form.
    ///
    /// An empty value clears a selection or the picked file. `terms` takes
    /// `true`/`false`.
    pub fn set(&mut self, field: FieldName, value: &str) -> Result<()> {
        match field {
            FieldName::FullName => self.full_name = value.to_string(),
            FieldName::Email => self.email = value.to_string(),
            FieldName::PhoneNumber => self.phone_number = value.to_string(),
            FieldName::Dob => self.dob = value.to_string(),
            FieldName::Gender => self.gender = parse_choice(value)?,
            FieldName::Password => self.password = value.to_string(),
            FieldName::ConfirmPassword => self.confirm_password = value.to_string(),
            FieldName::Address => self.address = value.to_string(),
            FieldName::Country => self.country = parse_choice(value)?,
            FieldName::File => {
                self.file = (!value.is_empty()).then(|| FileHandle::new(value));
            }
            FieldName::Terms => {
                self.terms = value.parse().map_err(|_| FormError::InvalidValue {
                    field,
                    value: value.to_string(),
                })?;
            }
        }
        Ok(())
    }
}

fn parse_choice<T>(value: &str) -> Result<Option<T>>
where
    T: FromStr<Err = FormError>,
{
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}

fn empty_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Fields of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    PhoneNumber,
    Dob,
    Gender,
    Password,
    ConfirmPassword,
    Address,
    Country,
    File,
    Terms,
}

impl FieldName {
    pub const ALL: [FieldName; 11] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::PhoneNumber,
        FieldName::Dob,
        FieldName::Gender,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Address,
        FieldName::Country,
        FieldName::File,
        FieldName::Terms,
    ];

    /// Stable name matching serde's `rename_all = "camelCase"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Dob => "dob",
            Self::Gender => "gender",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Address => "address",
            Self::Country => "country",
            Self::File => "file",
            Self::Terms => "terms",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Dob => "Date of Birth",
            Self::Gender => "Gender",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Address => "Address",
            Self::Country => "Country",
            Self::File => "Upload File",
            Self::Terms => "I accept the terms and conditions",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(FormError::InvalidValue {
                field: FieldName::Gender,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Usa,
    Canada,
    Uk,
}

impl Country {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Usa => "usa",
            Self::Canada => "canada",
            Self::Uk => "uk",
        }
    }

    /// Option text shown in the country selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Canada => "Canada",
            Self::Uk => "UK",
        }
    }
}

impl FromStr for Country {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "usa" => Ok(Self::Usa),
            "canada" => Ok(Self::Canada),
            "uk" => Ok(Self::Uk),
            _ => Err(FormError::InvalidValue {
                field: FieldName::Country,
                value: s.to_string(),
            }),
        }
    }
}

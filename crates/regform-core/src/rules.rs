//! Declarative rule table for the registration form.
//!
//! Each field owns an ordered list of rules. Within a field the first failing
//! rule produces the field's error; fields are evaluated independently.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ValidatorConfig;
use crate::draft::{FieldValue, RegistrationDraft};
use crate::field::FieldName;

/// Local part and dot-separated domain labels, as accepted by browser email inputs.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// Input format of the date of birth field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Category of a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingField,
    FormatError,
    RangeError,
    MismatchError,
    ConsentError,
}

impl ErrorKind {
    /// Stable string representation matching serde's `rename_all = "snake_case"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::FormatError => "format_error",
            Self::RangeError => "range_error",
            Self::MismatchError => "mismatch_error",
            Self::ConsentError => "consent_error",
        }
    }
}

/// Everything a rule may look at: the whole draft snapshot, the date the
/// draft is validated on and the configured thresholds.
pub struct RuleContext<'a> {
    pub draft: &'a RegistrationDraft,
    pub today: NaiveDate,
    pub config: &'a ValidatorConfig,
}

/// Returns true when the value passes.
pub type Check = fn(FieldValue<'_>, &RuleContext<'_>) -> bool;

pub struct Rule {
    pub name: &'static str,
    pub kind: ErrorKind,
    pub check: Check,
}

pub struct FieldRules {
    pub field: FieldName,
    pub rules: &'static [Rule],
}

const REQUIRED: Rule = Rule {
    name: "required",
    kind: ErrorKind::MissingField,
    check: required,
};

pub static RULE_TABLE: &[FieldRules] = &[
    FieldRules {
        field: FieldName::FullName,
        rules: &[REQUIRED],
    },
    FieldRules {
        field: FieldName::Email,
        rules: &[
            REQUIRED,
            Rule {
                name: "email",
                kind: ErrorKind::FormatError,
                check: email_shape,
            },
        ],
    },
    FieldRules {
        field: FieldName::PhoneNumber,
        rules: &[
            REQUIRED,
            Rule {
                name: "digits",
                kind: ErrorKind::FormatError,
                check: phone_digits,
            },
        ],
    },
    FieldRules {
        field: FieldName::Dob,
        rules: &[
            REQUIRED,
            Rule {
                name: "date",
                kind: ErrorKind::FormatError,
                check: calendar_date,
            },
            Rule {
                name: "min_age",
                kind: ErrorKind::RangeError,
                check: old_enough,
            },
        ],
    },
    FieldRules {
        field: FieldName::Gender,
        rules: &[REQUIRED],
    },
    FieldRules {
        field: FieldName::Password,
        rules: &[
            REQUIRED,
            Rule {
                name: "min_length",
                kind: ErrorKind::RangeError,
                check: long_enough,
            },
        ],
    },
    FieldRules {
        field: FieldName::ConfirmPassword,
        rules: &[
            REQUIRED,
            Rule {
                name: "matches_password",
                kind: ErrorKind::MismatchError,
                check: matches_password,
            },
        ],
    },
    FieldRules {
        field: FieldName::Address,
        rules: &[REQUIRED],
    },
    FieldRules {
        field: FieldName::Country,
        rules: &[REQUIRED],
    },
    FieldRules {
        field: FieldName::Terms,
        rules: &[Rule {
            name: "accepted",
            kind: ErrorKind::ConsentError,
            check: accepted,
        }],
    },
];

/// Rules registered for `field`; empty for fields nobody validates (`file`).
pub fn rules_for(field: FieldName) -> &'static [Rule] {
    RULE_TABLE
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| entry.rules)
        .unwrap_or(&[])
}

/// Error text shown under the input for a failed rule.
pub fn message(field: FieldName, kind: ErrorKind, config: &ValidatorConfig) -> String {
    match (field, kind) {
        (FieldName::FullName, ErrorKind::MissingField) => "Full name is required".to_string(),
        (FieldName::Email, ErrorKind::MissingField) => "Email is required".to_string(),
        (FieldName::Email, ErrorKind::FormatError) => "Invalid email format".to_string(),
        (FieldName::PhoneNumber, ErrorKind::MissingField) => {
            "Phone number is required".to_string()
        }
        (FieldName::PhoneNumber, ErrorKind::FormatError) => format!(
            "Phone number must be exactly {} digits",
            config.phone_digits
        ),
        (FieldName::Dob, ErrorKind::MissingField) => "Date of birth is required".to_string(),
        (FieldName::Dob, ErrorKind::FormatError) => {
            "Date of birth must be a valid date".to_string()
        }
        (FieldName::Dob, ErrorKind::RangeError) => format!(
            "You must be at least {} years old",
            config.min_age_years
        ),
        (FieldName::Gender, ErrorKind::MissingField) => "Gender is required".to_string(),
        (FieldName::Password, ErrorKind::MissingField) => "Password is required".to_string(),
        (FieldName::Password, ErrorKind::RangeError) => format!(
            "Password must be at least {} characters",
            config.min_password_len
        ),
        (FieldName::ConfirmPassword, ErrorKind::MissingField) => {
            "Confirm password is required".to_string()
        }
        (FieldName::ConfirmPassword, ErrorKind::MismatchError) => {
            "Passwords must match".to_string()
        }
        (FieldName::Address, ErrorKind::MissingField) => "Address is required".to_string(),
        (FieldName::Country, ErrorKind::MissingField) => "Country is required".to_string(),
        (FieldName::Terms, ErrorKind::ConsentError) => {
            "You must accept the terms and conditions".to_string()
        }
        (field, kind) => format!("{} is invalid ({})", field.label(), kind.as_str()),
    }
}

/// Parse the raw date of birth input.
pub fn parse_dob(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn required(value: FieldValue<'_>, _ctx: &RuleContext<'_>) -> bool {
    !value.is_empty()
}

fn email_shape(value: FieldValue<'_>, _ctx: &RuleContext<'_>) -> bool {
    value.as_text().is_some_and(|text| EMAIL_RE.is_match(text))
}

fn phone_digits(value: FieldValue<'_>, ctx: &RuleContext<'_>) -> bool {
    value.as_text().is_some_and(|text| {
        text.len() == ctx.config.phone_digits && text.bytes().all(|b| b.is_ascii_digit())
    })
}

fn calendar_date(value: FieldValue<'_>, _ctx: &RuleContext<'_>) -> bool {
    value.as_text().and_then(parse_dob).is_some()
}

// A dob in the future has no age and fails.
fn old_enough(value: FieldValue<'_>, ctx: &RuleContext<'_>) -> bool {
    value
        .as_text()
        .and_then(parse_dob)
        .and_then(|dob| ctx.today.years_since(dob))
        .is_some_and(|age| age >= ctx.config.min_age_years)
}

fn long_enough(value: FieldValue<'_>, ctx: &RuleContext<'_>) -> bool {
    value
        .as_text()
        .is_some_and(|text| text.chars().count() >= ctx.config.min_password_len)
}

fn matches_password(value: FieldValue<'_>, ctx: &RuleContext<'_>) -> bool {
    value.as_text() == Some(ctx.draft.password.as_str())
}

fn accepted(value: FieldValue<'_>, _ctx: &RuleContext<'_>) -> bool {
    value == FieldValue::Flag(true)
}

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::draft::RegistrationDraft;
use crate::field::FieldName;
use crate::rules::{message, rules_for, ErrorKind, RuleContext, RULE_TABLE};

/// A failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Field-keyed errors of one validation pass. Empty means the draft is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldName, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Whether `field` failed with `kind`.
    pub fn has(&self, field: FieldName, kind: ErrorKind) -> bool {
        self.get(field).is_some_and(|err| err.kind == kind)
    }

    /// Failing fields and their errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }
}

/// Evaluates the rule table against a draft.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    config: ValidatorConfig,
}

impl FormValidator {
    /// Create a validator with default thresholds.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create a validator with explicit thresholds.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate against the local calendar date at call time.
    ///
    /// Age checks near the cutoff therefore give different answers on
    /// different days for the same draft.
    pub fn validate(&self, draft: &RegistrationDraft) -> ValidationErrors {
        self.validate_on(draft, Local::now().date_naive())
    }

    /// Validate as if today were `today`.
    pub fn validate_on(&self, draft: &RegistrationDraft, today: NaiveDate) -> ValidationErrors {
        let ctx = RuleContext {
            draft,
            today,
            config: &self.config,
        };

        let errors: BTreeMap<FieldName, FieldError> = RULE_TABLE
            .iter()
            .filter_map(|entry| {
                self.first_failure(entry.field, &ctx)
                    .map(|err| (entry.field, err))
            })
            .collect();

        tracing::debug!(failing = errors.len(), %today, "draft validated");
        ValidationErrors(errors)
    }

    /// Get validator configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn first_failure(&self, field: FieldName, ctx: &RuleContext<'_>) -> Option<FieldError> {
        let value = ctx.draft.value(field);
        rules_for(field)
            .iter()
            .find(|rule| !(rule.check)(value, ctx))
            .map(|rule| FieldError {
                kind: rule.kind,
                message: message(field, rule.kind, &self.config),
            })
    }
}

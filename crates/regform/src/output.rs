use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use regform_core::{FieldError, FieldName, SubmissionRecord, ValidationErrors};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    report: &'static str,
    valid: bool,
    errors: &'a ValidationErrors,
}

#[derive(Serialize)]
struct SubmissionOutput<'a> {
    report: &'static str,
    submitted: bool,
    #[serde(flatten)]
    record: &'a SubmissionRecord,
}

#[derive(Serialize)]
struct FieldOutput<'a> {
    report: &'static str,
    field: FieldName,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a FieldError>,
}

pub fn print_validation(errors: &ValidationErrors, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ValidationOutput {
                report: "validation",
                valid: errors.is_empty(),
                errors,
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            if errors.is_empty() {
                println!("All fields valid.");
                return;
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "KIND", "MESSAGE"]);
            for (field, err) in errors.iter() {
                table.add_row(vec![
                    field.as_str().to_string(),
                    err.kind.as_str().to_string(),
                    err.message.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            if errors.is_empty() {
                println!("valid: all fields pass");
            }
            for (field, err) in errors.iter() {
                println!("{:<16} {}", field.label(), err.message);
            }
        }
        OutputFormat::Raw => {
            for (field, err) in errors.iter() {
                println!("{field}\t{}", err.message);
            }
        }
    }
}

pub fn print_submission(record: &SubmissionRecord, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = SubmissionOutput {
                report: "submission",
                submitted: true,
                record,
            };
            print_json(&out);
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("Form submitted at {}", record.submitted_at.to_rfc3339());
            println!("  Full name: {}", record.values.full_name);
            println!("  Email:     {}", record.values.email);
            if let Some(country) = record.values.country {
                println!("  Country:   {}", country.label());
            }
        }
        OutputFormat::Raw => {
            println!(
                "{}",
                serde_json::to_string(&record.values).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}

/// One line per field change in an interactive session.
pub fn print_field(field: FieldName, error: Option<&FieldError>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = FieldOutput {
                report: "field",
                field,
                valid: error.is_none(),
                error,
            };
            print_json(&out);
        }
        OutputFormat::Table | OutputFormat::Pretty => match error {
            Some(err) => println!("{:<16} {}", field.label(), err.message),
            None => println!("{:<16} ok", field.label()),
        },
        OutputFormat::Raw => match error {
            Some(err) => println!("{field}\t{}", err.message),
            None => println!("{field}\tok"),
        },
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

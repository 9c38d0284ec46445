use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use regform_core::rules::message;
use regform_core::{ErrorKind, FieldName, ValidatorConfig, RULE_TABLE};
use serde::Serialize;

use crate::cmd::RulesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct RuleRow {
    field: FieldName,
    rule: &'static str,
    kind: ErrorKind,
    message: String,
}

#[derive(Debug, Serialize)]
struct RulesOutput {
    report: &'static str,
    rules: Vec<RuleRow>,
}

pub fn run(_args: RulesArgs, format: OutputFormat) -> CliResult<i32> {
    let out = RulesOutput {
        report: "rules",
        rules: rule_rows(&ValidatorConfig::default()),
    };
    print_rules(&out, format);
    Ok(SUCCESS)
}

fn rule_rows(config: &ValidatorConfig) -> Vec<RuleRow> {
    RULE_TABLE
        .iter()
        .flat_map(|entry| {
            entry.rules.iter().map(move |rule| RuleRow {
                field: entry.field,
                rule: rule.name,
                kind: rule.kind,
                message: message(entry.field, rule.kind, config),
            })
        })
        .collect()
}

fn print_rules(out: &RulesOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "RULE", "KIND", "MESSAGE"]);
            for row in &out.rules {
                table.add_row(vec![
                    row.field.as_str().to_string(),
                    row.rule.to_string(),
                    row.kind.as_str().to_string(),
                    row.message.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for row in &out.rules {
                println!(
                    "{}\t{}\t{}\t{}",
                    row.field,
                    row.rule,
                    row.kind.as_str(),
                    row.message
                );
            }
        }
    }
}

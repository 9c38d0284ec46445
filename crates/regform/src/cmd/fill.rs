use std::io::BufRead;

use regform_core::{FieldName, FormSession, SubmitOutcome, TracingSubmitHandler};

use crate::cmd::{load_draft, FillArgs};
use crate::exit::{form_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_field, print_submission, print_validation, OutputFormat};

#[derive(Debug, PartialEq, Eq)]
enum Directive {
    Set(FieldName, String),
    Show,
    Reset,
    Submit,
}

pub fn run(args: FillArgs, format: OutputFormat) -> CliResult<i32> {
    let mut session = FormSession::new();
    if let Some(path) = &args.from {
        let draft = load_draft(path, false)?;
        print_validation(session.replace(draft), format);
    }

    let mut handler = TracingSubmitHandler::new();
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| io_error("failed reading stdin", err))?;
        let directive = match parse_line(&line) {
            Ok(Some(directive)) => directive,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(line = %line, "ignored input line");
                eprintln!("error: {err}");
                continue;
            }
        };

        if let Err(err) = apply(&mut session, &mut handler, directive, format) {
            eprintln!("error: {err}");
        }
    }

    tracing::debug!(submitted = handler.submitted(), "session ended");
    Ok(SUCCESS)
}

fn apply(
    session: &mut FormSession,
    handler: &mut TracingSubmitHandler,
    directive: Directive,
    format: OutputFormat,
) -> CliResult<()> {
    match directive {
        Directive::Set(field, value) => {
            let error = session
                .set(field, &value)
                .map_err(|err| form_error("rejected change", err))?;
            print_field(field, error, format);
        }
        Directive::Show => print_validation(session.errors(), format),
        Directive::Reset => {
            session.reset();
            print_validation(session.errors(), format);
        }
        Directive::Submit => match session.submit(handler) {
            SubmitOutcome::Submitted(record) => print_submission(&record, format),
            SubmitOutcome::Rejected(errors) => print_validation(&errors, format),
        },
    }
    Ok(())
}

/// Blank lines and `#` comments yield `None`.
fn parse_line(line: &str) -> CliResult<Option<Directive>> {
    let line = line.trim_end_matches('\r');
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    if let Some((name, value)) = line.split_once('=') {
        let field = name
            .trim()
            .parse::<FieldName>()
            .map_err(|err| form_error("bad input line", err))?;
        return Ok(Some(Directive::Set(field, value.to_string())));
    }

    match trimmed {
        "show" => Ok(Some(Directive::Show)),
        "reset" => Ok(Some(Directive::Reset)),
        "submit" => Ok(Some(Directive::Submit)),
        other => Err(CliError::new(
            USAGE,
            format!("expected field=value, show, reset or submit: {other}"),
        )),
    }
}

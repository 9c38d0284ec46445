use regform_core::{FormSession, SubmitOutcome, TracingSubmitHandler};

use crate::cmd::{load_draft, DocumentArgs};
use crate::exit::{CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_submission, print_validation, OutputFormat};

pub fn run(args: DocumentArgs, format: OutputFormat) -> CliResult<i32> {
    let draft = load_draft(&args.path, args.strict)?;

    let mut session = FormSession::new();
    session.replace(draft);

    let mut handler = TracingSubmitHandler::new();
    match session.submit(&mut handler) {
        SubmitOutcome::Submitted(record) => {
            print_submission(&record, format);
            Ok(SUCCESS)
        }
        SubmitOutcome::Rejected(errors) => {
            print_validation(&errors, format);
            Ok(DATA_INVALID)
        }
    }
}

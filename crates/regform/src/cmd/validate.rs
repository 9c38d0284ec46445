use regform_core::FormValidator;

use crate::cmd::{load_draft, DocumentArgs};
use crate::exit::{CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_validation, OutputFormat};

pub fn run(args: DocumentArgs, format: OutputFormat) -> CliResult<i32> {
    let draft = load_draft(&args.path, args.strict)?;
    let errors = FormValidator::new().validate(&draft);

    print_validation(&errors, format);

    if errors.is_empty() {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}

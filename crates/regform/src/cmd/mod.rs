use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use regform_core::{DraftLoader, LoadConfig, RegistrationDraft};

use crate::exit::{form_error, CliResult};
use crate::output::OutputFormat;

pub mod fill;
pub mod rules;
pub mod submit;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a draft document and print per-field errors.
    Validate(DocumentArgs),
    /// Validate a draft document and submit it when clean.
    Submit(DocumentArgs),
    /// Fill the form interactively from `field=value` lines on stdin.
    Fill(FillArgs),
    /// Print the validation rule table.
    Rules(RulesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Submit(args) => submit::run(args, format),
        Command::Fill(args) => fill::run(args, format),
        Command::Rules(args) => rules::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Draft JSON file, or `-` for stdin.
    pub path: PathBuf,
    /// Reject documents with keys that are not form fields.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct FillArgs {
    /// Start from the values of a draft JSON file.
    #[arg(long, value_name = "PATH")]
    pub from: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct RulesArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Load a draft document from a file or stdin (`-`).
pub fn load_draft(path: &Path, strict: bool) -> CliResult<RegistrationDraft> {
    let loader = DraftLoader::with_config(LoadConfig {
        strict_mode: strict,
        ..LoadConfig::default()
    })
    .map_err(|err| form_error("draft schema", err))?;

    if path.as_os_str() == "-" {
        loader
            .load_reader(std::io::stdin().lock())
            .map_err(|err| form_error("failed loading draft from stdin", err))
    } else {
        loader
            .load_path(path)
            .map_err(|err| form_error(&format!("failed loading {}", path.display()), err))
    }
}

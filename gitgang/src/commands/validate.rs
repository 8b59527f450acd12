// gitgang/src/commands/validate.rs
//! `gitgang validate`: structure, format and duplicate checks without moderation.

use anyhow::Result;
use log::info;

use gitgang_core::{validate_submission, GitGangError, ValidationReport};

use crate::cli::{SubmissionFiles, ValidateCommand};
use crate::commands::AppContext;
use crate::utils::fs::{read_document, read_document_or_empty};

/// Shown when the entry section holds neither grammar. `check` keeps the
/// shorter one-line parse message.
const NO_ENTRY_FOUND: &str = "No valid entry found. Please add your name using the simple format:\n\
Name: Your Name\n\
Username: your-username\n\
Message: Optional message";

/// Staging and ledger text for a submission. The ledger may be missing.
pub(crate) fn read_submission(files: &SubmissionFiles) -> Result<(String, String)> {
    let staging = read_document(&files.staging)?;
    let ledger = read_document_or_empty(&files.ledger);
    Ok((staging, ledger))
}

/// Message published when reading the inputs fails unexpectedly.
pub(crate) fn unexpected_failure(err: &anyhow::Error) -> String {
    format!("Validation failed: {:#}", err)
}

pub fn run_validate(args: &ValidateCommand, ctx: &AppContext) -> Result<bool> {
    info!("Validating {}", args.files.staging.display());

    let (staging, ledger) = match read_submission(&args.files) {
        Ok(docs) => docs,
        Err(e) => return ctx.fail(&unexpected_failure(&e)),
    };

    match validate_submission(&staging, &ledger, &ctx.config) {
        Ok(entry) => {
            let report = ValidationReport::success(entry, None);
            ctx.sink.set_all(&report.outputs())?;
            ctx.reporter.success("Contribution format is valid");
            Ok(true)
        }
        Err(GitGangError::Parse) => ctx.fail(NO_ENTRY_FOUND),
        Err(e) => ctx.fail(&e.to_string()),
    }
}

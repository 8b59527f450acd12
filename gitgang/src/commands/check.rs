// gitgang/src/commands/check.rs
//! `gitgang check`: full validation including the profanity screen.

use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};

use gitgang_core::{validate_submission_with_moderation, ProfanityChecker, ValidationReport};

use crate::cli::CheckCommand;
use crate::commands::validate::{read_submission, unexpected_failure};
use crate::commands::AppContext;

pub async fn run_check(args: &CheckCommand, ctx: &AppContext) -> Result<bool> {
    info!("Running comprehensive validation of {}", args.files.staging.display());

    let report = match read_submission(&args.files) {
        Ok((staging, ledger)) => {
            let moderation = ctx.moderation(args.moderation_url.as_deref());
            let checker = ProfanityChecker::from_config(&moderation);
            validate_submission_with_moderation(&staging, &ledger, &ctx.config, &checker).await
        }
        Err(e) => ValidationReport::failure(unexpected_failure(&e)),
    };

    publish(&report, args.json, ctx)?;
    announce(&report, ctx);
    Ok(report.valid)
}

fn publish(report: &ValidationReport, json: bool, ctx: &AppContext) -> Result<()> {
    if json {
        let rendered = report.to_json().context("Failed to serialize report")?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", rendered)?;
        return Ok(());
    }
    ctx.sink.set_all(&report.outputs())
}

fn announce(report: &ValidationReport, ctx: &AppContext) {
    if let Some(message) = &report.error_message {
        ctx.reporter.error(message);
        return;
    }

    match report.profanity {
        Some(verdict) if verdict.has_profanity => {
            ctx.reporter.warn("Potential profanity detected in contribution");
            if verdict.profanity_in_name {
                ctx.reporter.warn("  - Detected in name field");
            }
            if verdict.profanity_in_message {
                ctx.reporter.warn("  - Detected in message field");
            }
        }
        _ => ctx.reporter.success("Contribution validated successfully"),
    }
}

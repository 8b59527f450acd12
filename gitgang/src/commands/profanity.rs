// gitgang/src/commands/profanity.rs
//! `gitgang check-profanity`: screens an already formatted entry for a pull request.
//!
//! The check itself always succeeds; a positive or fail-closed verdict is
//! reported through the outputs so the workflow can route the PR to review.

use anyhow::Result;
use log::debug;

use gitgang_core::{display_fields, ProfanityChecker};

use crate::cli::CheckProfanityCommand;
use crate::commands::AppContext;

pub async fn run_check_profanity(args: &CheckProfanityCommand, ctx: &AppContext) -> Result<bool> {
    let (name, message) = display_fields(&args.entry);
    debug!("Screening entry for @{} (PR #{})", args.username, args.pr_number);

    let moderation = ctx.moderation(args.moderation_url.as_deref());
    let checker = ProfanityChecker::from_config(&moderation);
    let verdict = checker.check_entry(&name, &message).await;

    if verdict.has_profanity {
        ctx.reporter.warn("Profanity detected");
        ctx.reporter.info(format!("Entry: {}", args.entry));
        ctx.reporter.info(format!("Username: {}", args.username));
        ctx.reporter.info(format!("PR: #{}", args.pr_number));
        ctx.sink.set_all(&[
            ("profanity_detected", "true"),
            ("profanity_in_name", bool_str(verdict.profanity_in_name)),
            ("profanity_in_message", bool_str(verdict.profanity_in_message)),
            ("entry", args.entry.as_str()),
            ("username", args.username.as_str()),
            ("pr_number", args.pr_number.as_str()),
        ])?;
    } else {
        ctx.reporter.info("No profanity detected");
        ctx.sink.set("profanity_detected", "false")?;
    }
    Ok(true)
}

fn bool_str(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}

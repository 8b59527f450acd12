// gitgang/src/commands/process.rs
//! `gitgang process`: appends an accepted entry to the ledger.

use anyhow::Result;
use log::info;

use gitgang_core::{process_entry, GitGangError};

use crate::cli::ProcessCommand;
use crate::commands::AppContext;
use crate::utils::fs::{read_document, write_atomic};

pub fn run_process(args: &ProcessCommand, ctx: &AppContext) -> Result<bool> {
    if args.entry.trim().is_empty() {
        ctx.reporter.error("No entry found to process");
        return Ok(false);
    }

    let ledger = match read_document(&args.ledger) {
        Ok(text) => text,
        Err(e) => {
            ctx.reporter.error(format!("Failed to add entry to contributors: {:#}", e));
            return Ok(false);
        }
    };

    match process_entry(&args.entry, &ledger, &ctx.config) {
        Ok((validated, updated)) => {
            write_atomic(&args.ledger, &updated)?;
            info!("Appended {}", validated.ledger_line());
            ctx.reporter.info("Entry added to contributors!");
            Ok(true)
        }
        Err(e @ GitGangError::Format(_)) => {
            ctx.reporter.error(format!("Invalid entry format: {}", e));
            Ok(false)
        }
        Err(e) => {
            ctx.reporter.error(format!("Failed to add entry to contributors: {}", e));
            Ok(false)
        }
    }
}

// gitgang/src/commands/sort.rs
//! `gitgang sort`: maintainers first, everyone else by first name.

use anyhow::Result;

use gitgang_core::sort_ledger;

use crate::cli::SortCommand;
use crate::commands::AppContext;
use crate::utils::fs::{read_document, write_atomic};

pub fn run_sort(args: &SortCommand, ctx: &AppContext) -> Result<bool> {
    let sorted = read_document(&args.ledger).and_then(|text| Ok(sort_ledger(&text, &ctx.config)?));

    match sorted {
        Ok((document, summary)) => {
            write_atomic(&args.ledger, &document)?;
            ctx.reporter.info(format!(
                "Contributors sorted ({} total: {} maintainers, {} regular)",
                summary.total, summary.maintainers, summary.regular
            ));
            Ok(true)
        }
        Err(e) => {
            ctx.reporter.error(format!("Failed to sort contributors: {:#}", e));
            Ok(false)
        }
    }
}

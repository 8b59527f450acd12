// gitgang/src/commands/badge.rs
//! `gitgang update-badge`: copies the ledger total into the README badge.

use anyhow::Result;
use log::debug;

use gitgang_core::{contributor_count, update_badge, BadgeUpdate};

use crate::cli::UpdateBadgeCommand;
use crate::commands::AppContext;
use crate::utils::fs::{read_document, write_atomic};

fn refresh_badge(args: &UpdateBadgeCommand, ctx: &AppContext) -> Result<BadgeUpdate> {
    let ledger = read_document(&args.ledger)?;
    let count = contributor_count(&ledger, &ctx.config.ledger.total_prefix);
    debug!("Ledger reports {} contributors", count);

    let readme = read_document(&args.readme)?;
    let update = update_badge(&readme, count);
    if let BadgeUpdate::Updated { readme, .. } = &update {
        write_atomic(&args.readme, readme)?;
    }
    Ok(update)
}

pub fn run_update_badge(args: &UpdateBadgeCommand, ctx: &AppContext) -> Result<bool> {
    match refresh_badge(args, ctx) {
        Ok(BadgeUpdate::Updated { count, .. }) => {
            ctx.reporter.info(format!("Badge updated to show {} contributors", count));
            Ok(true)
        }
        Ok(BadgeUpdate::Unchanged { count }) => {
            ctx.reporter.info(format!("Badge already shows {} contributors (no update needed)", count));
            Ok(true)
        }
        Err(e) => {
            ctx.reporter.error(format!("Failed to update badge: {:#}", e));
            Ok(false)
        }
    }
}

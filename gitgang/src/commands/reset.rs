// gitgang/src/commands/reset.rs
//! `gitgang reset`: restores the empty staging template.

use anyhow::Result;

use gitgang_core::render_template;

use crate::cli::ResetCommand;
use crate::commands::AppContext;
use crate::utils::fs::write_atomic;

pub fn run_reset(args: &ResetCommand, ctx: &AppContext) -> Result<bool> {
    let written = render_template(&ctx.config.staging).and_then(|template| write_atomic(&args.staging, &template));

    match written {
        Ok(()) => {
            ctx.reporter.info("Staging file reset to template");
            Ok(true)
        }
        Err(e) => {
            ctx.reporter.error(format!("Failed to reset staging file: {:#}", e));
            Ok(false)
        }
    }
}

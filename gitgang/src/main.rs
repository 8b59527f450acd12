// gitgang/src/main.rs
//! gitgang entry point.
//!
//! Loads `.env`, parses arguments, sets up logging and runs the selected
//! subcommand on a single-threaded runtime. Exit status is 0 on success and
//! 1 on any failure.

use clap::Parser;
use std::process::ExitCode;

use gitgang::cli::Cli;
use gitgang::logger;
use gitgang::ui::Reporter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Must run before parsing so `.env` values reach clap's `env` fallbacks.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    let reporter = Reporter::new(cli.quiet);

    match gitgang::run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            reporter.error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

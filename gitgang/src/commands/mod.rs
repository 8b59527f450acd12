// gitgang/src/commands/mod.rs
//! Subcommand implementations.
//!
//! Each command returns `Ok(true)` on success and `Ok(false)` when it reported
//! a failure itself; `Err` is left for failures nobody has reported yet.

use anyhow::{Context, Result};
use log::debug;

use gitgang_core::{GitGangConfig, ModerationConfig};

use crate::cli::{Cli, Commands};
use crate::ui::Reporter;
use crate::utils::output::OutputSink;

pub mod badge;
pub mod check;
pub mod process;
pub mod profanity;
pub mod reset;
pub mod sort;
pub mod validate;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: GitGangConfig,
    pub sink: OutputSink,
    pub reporter: Reporter,
}

impl AppContext {
    pub fn new(config: GitGangConfig, sink: OutputSink, reporter: Reporter) -> Self {
        Self { config, sink, reporter }
    }

    /// Publishes `valid=false` plus the message, and echoes it on stderr.
    pub fn fail(&self, message: &str) -> Result<bool> {
        self.sink.set_all(&[("valid", "false"), ("error_message", message)])?;
        self.reporter.error(message);
        Ok(false)
    }

    /// Moderation settings with an optional endpoint override applied.
    pub fn moderation(&self, endpoint_override: Option<&str>) -> ModerationConfig {
        let mut moderation = self.config.moderation.clone();
        if let Some(url) = endpoint_override.filter(|u| !u.trim().is_empty()) {
            debug!("Using moderation endpoint override {}", url);
            moderation.endpoint = url.to_string();
        }
        moderation
    }
}

/// Loads the configuration file when given, defaults otherwise.
pub fn load_config(cli: &Cli) -> Result<GitGangConfig> {
    match &cli.config {
        Some(path) => GitGangConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(GitGangConfig::default()),
    }
}

/// Runs the selected subcommand.
pub async fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;
    let ctx = AppContext::new(config, OutputSink::from_env(), Reporter::new(cli.quiet));

    match cli.command {
        Commands::Validate(args) => validate::run_validate(&args, &ctx),
        Commands::Check(args) => check::run_check(&args, &ctx).await,
        Commands::Process(args) => process::run_process(&args, &ctx),
        Commands::Sort(args) => sort::run_sort(&args, &ctx),
        Commands::Reset(args) => reset::run_reset(&args, &ctx),
        Commands::UpdateBadge(args) => badge::run_update_badge(&args, &ctx),
        Commands::CheckProfanity(args) => profanity::run_check_profanity(&args, &ctx).await,
    }
}

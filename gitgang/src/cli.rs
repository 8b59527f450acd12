// gitgang/src/cli.rs
//! This file defines the command-line interface (CLI) for the gitgang application,
//! one subcommand per step of the contribution workflow.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_STAGING_FILE: &str = "ADD_YOUR_NAME.md";
pub const DEFAULT_LEDGER_FILE: &str = "CONTRIBUTORS.md";
pub const DEFAULT_README_FILE: &str = "README.md";

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "gitgang",
    author = "Git Gang Maintainers",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and publish Git Gang contributor entries",
    long_about = "gitgang runs the \"add your name\" contribution workflow from CI: it validates the entry a contributor wrote into the staging file, screens it for profanity, appends it to the contributors ledger, keeps the ledger sorted and the README badge in sync, and resets the staging file for the next contributor. Results are written as key=value pairs to $GITHUB_OUTPUT, or to stdout when it is not set.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration file.
    #[arg(long = "config", value_name = "FILE", global = true, env = "GITGANG_CONFIG", help = "Path to a custom YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `gitgang` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates the staging file: structure, format and duplicates.
    #[command(about = "Validates the staging file: structure, format and duplicates.")]
    Validate(ValidateCommand),

    /// Full validation including the profanity check.
    #[command(about = "Validates the staging file and screens the entry for profanity.")]
    Check(CheckCommand),

    /// Appends a validated entry to the ledger.
    #[command(about = "Validates an entry and appends it to the contributors ledger.")]
    Process(ProcessCommand),

    /// Sorts the ledger, maintainers first.
    #[command(about = "Sorts the contributors ledger: maintainers first, then by first name.")]
    Sort(SortCommand),

    /// Rewrites the staging file from the template.
    #[command(about = "Resets the staging file to the empty template.")]
    Reset(ResetCommand),

    /// Syncs the README badge with the ledger count.
    #[command(about = "Updates the README contributors badge from the ledger count.")]
    UpdateBadge(UpdateBadgeCommand),

    /// Screens an already formatted entry for profanity.
    #[command(about = "Checks a formatted entry for profanity and reports the result for a pull request.")]
    CheckProfanity(CheckProfanityCommand),
}

/// Staging and ledger locations shared by `validate` and `check`.
#[derive(Args, Debug, Clone)]
pub struct SubmissionFiles {
    /// The staging file a contributor edits.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_STAGING_FILE, help = "Path to the staging file.")]
    pub staging: PathBuf,

    /// The contributors ledger used for duplicate detection.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LEDGER_FILE, help = "Path to the contributors ledger.")]
    pub ledger: PathBuf,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub files: SubmissionFiles,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub files: SubmissionFiles,

    /// Overrides the moderation endpoint from the configuration.
    #[arg(long = "moderation-url", value_name = "URL", env = "GITGANG_MODERATION_URL", help = "Override the profanity API endpoint.")]
    pub moderation_url: Option<String>,

    /// Print the report as JSON on stdout instead of key=value pairs.
    #[arg(long, help = "Print the validation report as JSON on stdout.")]
    pub json: bool,
}

/// Arguments for the `process` command.
#[derive(Args, Debug)]
pub struct ProcessCommand {
    /// The entry to add, as produced by `validate`.
    #[arg(value_name = "ENTRY")]
    pub entry: String,

    #[arg(long, value_name = "FILE", default_value = DEFAULT_LEDGER_FILE, help = "Path to the contributors ledger.")]
    pub ledger: PathBuf,
}

/// Arguments for the `sort` command.
#[derive(Args, Debug)]
pub struct SortCommand {
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LEDGER_FILE, help = "Path to the contributors ledger.")]
    pub ledger: PathBuf,
}

/// Arguments for the `reset` command.
#[derive(Args, Debug)]
pub struct ResetCommand {
    #[arg(long, value_name = "FILE", default_value = DEFAULT_STAGING_FILE, help = "Path to the staging file.")]
    pub staging: PathBuf,
}

/// Arguments for the `update-badge` command.
#[derive(Args, Debug)]
pub struct UpdateBadgeCommand {
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LEDGER_FILE, help = "Path to the contributors ledger.")]
    pub ledger: PathBuf,

    #[arg(long, value_name = "FILE", default_value = DEFAULT_README_FILE, help = "Path to the README holding the badge.")]
    pub readme: PathBuf,
}

/// Arguments for the `check-profanity` command.
#[derive(Args, Debug)]
pub struct CheckProfanityCommand {
    /// A formatted entry: `[Name](https://github.com/user) - message`.
    #[arg(value_name = "ENTRY")]
    pub entry: String,

    #[arg(value_name = "USERNAME")]
    pub username: String,

    #[arg(value_name = "PR_NUMBER")]
    pub pr_number: String,

    #[arg(long = "moderation-url", value_name = "URL", env = "GITGANG_MODERATION_URL", help = "Override the profanity API endpoint.")]
    pub moderation_url: Option<String>,
}

// gitgang/src/logger.rs
//! Logging setup for the gitgang binary.
//!
//! Logs go to stderr; stdout is reserved for `key=value` results. `RUST_LOG`
//! is honoured unless a level override is given.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes `env_logger`. `level_override` wins over `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_target(false);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized; keeping the existing one.");
    }
}

/// Maps the `--quiet`/`--debug` flags to a level override. Quiet wins.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

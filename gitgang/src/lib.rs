// gitgang/src/lib.rs
//! # Git Gang CLI
//!
//! Command-line front end for `gitgang-core`. Each subcommand is one step of
//! the contribution workflow run from CI; the library half exists so the
//! commands can be exercised from tests without spawning the binary.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::run;

//! errors.rs - Custom error types for the gitgang-core library.
//!
//! Every failure that ends a validation attempt is one of the variants below.
//! Moderation failures have their own type because they never escape the
//! retry loop: callers only ever see the final verdict.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Reasons a parsed entry fails format validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Format is incorrect. Use format: Name: Your Name, Username: yourusername, Message: Your message")]
    MissingEntry,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Invalid GitHub username format")]
    InvalidUsername,
}

/// This enum represents all terminal error types in the `gitgang-core` library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GitGangError {
    /// Required template markers are missing from the staging document.
    #[error("{0}")]
    Structural(String),

    #[error("Your entry is not in the correct format. Please use: Name: Your Name, Username: your-username, Message: Optional message (or the markdown link format)")]
    Parse,

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("@{username} has already been added to the contributors list.")]
    Duplicate { username: String },

    #[error("Ledger is malformed: {0}")]
    Ledger(String),

    /// A configuration that parsed but cannot drive the workflow.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Failure of a single moderation attempt.
#[derive(Error, Debug)]
pub enum ModerationError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0:?}")]
    UnexpectedBody(String),

    #[error("{0}")]
    Other(String),
}

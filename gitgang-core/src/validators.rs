// File: gitgang-core/src/validators.rs
//! Programmatic validation of contributor entries.
//!
//! GitHub login syntax needs a look-ahead (`[-_](?=[A-Za-z0-9])`) that the
//! `regex` crate does not support, so usernames are checked by a small scanner
//! with the same accept set as
//! `^[A-Za-z0-9](?:[A-Za-z0-9]|[-_](?=[A-Za-z0-9])){0,38}$`.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

use crate::entry::{Entry, ParsedEntry};
use crate::errors::FormatError;
use crate::sanitizers::shell::sanitize_input;

/// Longest login GitHub accepts.
pub const MAX_USERNAME_LENGTH: usize = 39;

/// Returns `true` if `username` is a syntactically valid GitHub login.
///
/// Rules: ASCII alphanumerics separated by single `-` or `_`, no separator at
/// either end, at most 39 characters.
pub fn is_valid_github_username(username: &str) -> bool {
    let bytes = username.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_USERNAME_LENGTH {
        return false;
    }

    let is_separator = |b: u8| b == b'-' || b == b'_';
    let mut previous_was_separator = true; // rejects a leading separator

    for &b in bytes {
        if b.is_ascii_alphanumeric() {
            previous_was_separator = false;
        } else if is_separator(b) && !previous_was_separator {
            previous_was_separator = true;
        } else {
            return false;
        }
    }

    !previous_was_separator
}

/// An entry that passed validation, with its canonical markdown form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedEntry {
    pub name: String,
    pub username: String,
    pub message: String,
    /// `[name](https://github.com/username) - message`, the persisted form.
    pub entry: String,
}

impl ValidatedEntry {
    /// The line as it is written into the ledger.
    pub fn ledger_line(&self) -> String {
        format!("- {}", self.entry)
    }
}

/// Validates an entry and builds its canonical line.
///
/// The username is checked as submitted, trimmed but never sanitized, so a
/// malformed login is rejected rather than rewritten into another account.
/// Name and message are sanitized before use. Checks run in order: name,
/// username presence, username syntax.
pub fn validate_entry(entry: &Entry) -> Result<ValidatedEntry, FormatError> {
    let name = sanitize_input(&entry.name);
    let username = entry.username.trim();

    if name.is_empty() {
        return Err(FormatError::EmptyName);
    }
    if username.is_empty() {
        return Err(FormatError::EmptyUsername);
    }
    if !is_valid_github_username(username) {
        return Err(FormatError::InvalidUsername);
    }

    let accepted = Entry::new(name, username, sanitize_input(&entry.message));
    let entry = accepted.to_markdown();
    Ok(ValidatedEntry {
        name: accepted.name,
        username: accepted.username,
        message: accepted.message,
        entry,
    })
}

/// Validates the output of [`crate::entry::parse_entry`].
pub fn validate_parsed(parsed: &ParsedEntry) -> Result<ValidatedEntry, FormatError> {
    match parsed.entry() {
        Some(entry) => validate_entry(entry),
        None => Err(FormatError::MissingEntry),
    }
}

/// Validates a raw line the way the `process` step receives it: list format
/// or a legacy markdown link.
pub fn validate_format(text: &str) -> Result<ValidatedEntry, FormatError> {
    validate_parsed(&crate::entry::parse_entry(text))
}

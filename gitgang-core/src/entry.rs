//! entry.rs - Contributor entry model and the two input grammars.
//!
//! A staging document carries a single entry in one of two shapes:
//!
//! * the list format, one field per line:
//!   ```text
//!   - Name: Jane Doe
//!   - Username: janedoe
//!   - Message: hello
//!   ```
//! * the legacy markdown link: `[Jane Doe](https://github.com/janedoe) - hello`
//!
//! [`parse_entry`] is the single dispatch point over both grammars and returns a
//! [`ParsedEntry`]. Nothing here validates; see [`crate::validators`].
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::sanitizers::names::capitalize_words;

/// Base URL of a GitHub profile, shared by every canonical entry.
pub const GITHUB_PROFILE_URL: &str = "https://github.com/";

static NAME_FIELD: Lazy<Regex> = Lazy::new(|| field_regex("name"));
static USERNAME_FIELD: Lazy<Regex> = Lazy::new(|| field_regex("username"));
static MESSAGE_FIELD: Lazy<Regex> = Lazy::new(|| field_regex("message"));

/// `[name](https://github.com/username)` with an optional ` - message` tail.
pub static LEGACY_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([^\]]+)\]\(https://github\.com/([^)]+)\)(?: - (.+))?$")
        .expect("legacy entry pattern is valid")
});

static DISPLAY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\]").expect("display name pattern is valid"));
static TRAILING_MESSAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" - (.+)$").expect("trailing message pattern is valid"));

/// Builds a case-insensitive, line-anchored matcher for `(- )?<label>: <value>`.
fn field_regex(label: &str) -> Regex {
    Regex::new(&format!(r"(?im)^[ \t]*(?:-[ \t]*)?{}:[ \t]*(.*?)[ \t]*\r?$", label))
        .expect("field pattern is valid")
}

/// One contributor's name/username/message triple.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub message: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, username: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            message: message.into(),
        }
    }

    /// Renders the single-line markdown link form. Callers should only persist
    /// the output of [`crate::validators::validate_entry`], which calls this.
    pub(crate) fn to_markdown(&self) -> String {
        let mut line = format!("[{}]({}{})", self.name, GITHUB_PROFILE_URL, self.username);
        if !self.message.is_empty() {
            line.push_str(" - ");
            line.push_str(&self.message);
        }
        line
    }
}

/// Result of scanning a text block for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEntry {
    /// Fields found in the list format. The name is already capitalized.
    Simple(Entry),
    /// A markdown link line, kept verbatim alongside its captured fields.
    Legacy { line: String, entry: Entry },
    NoMatch,
}

impl ParsedEntry {
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            ParsedEntry::Simple(entry) | ParsedEntry::Legacy { entry, .. } => Some(entry),
            ParsedEntry::NoMatch => None,
        }
    }
}

fn first_field<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|value| !value.is_empty())
}

/// Parses the list format. Requires non-blank `Name:` and `Username:` lines.
pub fn parse_simple_format(text: &str) -> Option<Entry> {
    let name = first_field(&NAME_FIELD, text)?;
    let username = first_field(&USERNAME_FIELD, text)?;
    let message = first_field(&MESSAGE_FIELD, text).unwrap_or_default();

    let username = username.strip_prefix('@').unwrap_or(username);

    Some(Entry::new(capitalize_words(name), username.trim(), message))
}

/// Matches one line against the legacy markdown link grammar.
pub fn parse_legacy_line(line: &str) -> Option<Entry> {
    let caps = LEGACY_ENTRY.captures(line.trim())?;
    Some(Entry::new(
        &caps[1],
        &caps[2],
        caps.get(3).map(|m| m.as_str()).unwrap_or_default(),
    ))
}

/// Resolves which grammar a text block uses.
///
/// The list format wins when both `Name:` and `Username:` carry values.
/// Otherwise the non-blank lines are scanned from the bottom and the last
/// legacy line is taken.
pub fn parse_entry(text: &str) -> ParsedEntry {
    if let Some(entry) = parse_simple_format(text) {
        debug!("Parsed list-format entry for username '{}'.", entry.username);
        return ParsedEntry::Simple(entry);
    }

    let legacy = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .rev()
        .find_map(|line| parse_legacy_line(line).map(|entry| (line, entry)));

    match legacy {
        Some((line, entry)) => {
            debug!("Parsed legacy entry line for username '{}'.", entry.username);
            ParsedEntry::Legacy { line: line.to_string(), entry }
        }
        None => {
            debug!("No entry found in {} bytes of text.", text.len());
            ParsedEntry::NoMatch
        }
    }
}

/// Pulls the display name and message out of an entry line for moderation.
///
/// Lenient on purpose: a line that is not a full legacy entry still yields
/// whatever name/message segments it has, empty strings otherwise.
pub fn display_fields(line: &str) -> (String, String) {
    let line = line.trim();
    let name = DISPLAY_NAME
        .captures(line)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    let message = TRAILING_MESSAGE
        .captures(line)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    (name, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_format_with_dashes() {
        let parsed = parse_entry("- Name: jane doe\n- Username: janedoe\n- Message: hello");
        assert_eq!(
            parsed,
            ParsedEntry::Simple(Entry::new("Jane Doe", "janedoe", "hello"))
        );
    }

    #[test]
    fn test_simple_format_without_dashes_and_mixed_case() {
        let parsed = parse_simple_format("NAME: o'brien\nusername: @obrien\n").unwrap();
        assert_eq!(parsed, Entry::new("O'Brien", "obrien", ""));
    }

    #[test]
    fn test_simple_format_handles_crlf() {
        let parsed = parse_simple_format("- Name: Ann\r\n- Username: ann\r\n- Message: hi there\r\n").unwrap();
        assert_eq!(parsed, Entry::new("Ann", "ann", "hi there"));
    }

    #[test]
    fn test_username_line_does_not_satisfy_name() {
        assert!(parse_simple_format("- Username: janedoe\n- Message: hi").is_none());
    }

    #[test]
    fn test_blank_name_is_not_simple_format() {
        assert!(parse_simple_format("- Name: \n- Username: janedoe\n- Message: ").is_none());
    }

    #[test]
    fn test_legacy_fallback_takes_last_match() {
        let text = "[First](https://github.com/first)\n\nnoise\n[Second](https://github.com/second) - hey\n";
        match parse_entry(text) {
            ParsedEntry::Legacy { line, entry } => {
                assert_eq!(line, "[Second](https://github.com/second) - hey");
                assert_eq!(entry, Entry::new("Second", "second", "hey"));
            }
            other => panic!("expected legacy entry, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_names_are_not_recapitalized() {
        let entry = parse_legacy_line("[jane DOE](https://github.com/jd)").unwrap();
        assert_eq!(entry.name, "jane DOE");
        assert!(entry.message.is_empty());
    }

    #[test]
    fn test_no_match() {
        assert_eq!(parse_entry("just some text\n"), ParsedEntry::NoMatch);
        assert_eq!(parse_entry(""), ParsedEntry::NoMatch);
    }

    #[test]
    fn test_display_fields() {
        assert_eq!(
            display_fields("[Jane](https://github.com/jane) - hello there"),
            ("Jane".to_string(), "hello there".to_string())
        );
        assert_eq!(display_fields("plain"), (String::new(), String::new()));
    }
}

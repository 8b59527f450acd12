//! ledger.rs - The contributors ledger (`CONTRIBUTORS.md`).
//!
//! The ledger is a markdown document used as a small database. This module keeps
//! a hard boundary between text and structure: [`Ledger::parse`] reads the
//! document into ordered partitions, mutations work on the structure, and
//! [`Ledger::to_markdown`] writes it back. The `Total contributors: N` line is
//! always derived from the entries, never trusted from the input.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::config::LedgerConfig;
use crate::entry::GITHUB_PROFILE_URL;
use crate::errors::GitGangError;
use crate::validators::ValidatedEntry;

/// Matches both `- [Name](https://github.com/user)` and `[Name](...)` lines.
static LEDGER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\s*\[([^\]]+)\]\(https://github\.com/([^)]+)\)")
        .expect("ledger line pattern is valid")
});

/// A single ledger line, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub name: String,
    pub username: String,
    pub line: String,
}

impl LedgerEntry {
    /// Parses one ledger line, `None` for anything that is not an entry.
    pub fn from_line(line: &str) -> Option<Self> {
        let caps = LEDGER_LINE.captures(line)?;
        Some(Self {
            name: caps[1].to_string(),
            username: caps[2].to_string(),
            line: line.to_string(),
        })
    }

    /// Lowercased first word of the display name.
    pub fn sort_key(&self) -> String {
        self.name.split(' ').next().unwrap_or_default().to_lowercase()
    }
}

/// Structured view of the ledger document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    layout: LedgerConfig,
    maintainer_names: Vec<String>,
    /// Non-entry lines up to and including the contributors heading.
    pub preamble: Vec<String>,
    /// Entries whose username is a maintainer, in document order.
    pub maintainers: Vec<LedgerEntry>,
    pub contributors: Vec<LedgerEntry>,
    /// Non-entry lines after the heading.
    pub trailer: Vec<String>,
}

impl Ledger {
    /// Reads a ledger document.
    ///
    /// Fails with [`GitGangError::Ledger`] when the contributors heading is
    /// missing, since there would be nowhere to write the entries back.
    pub fn parse(text: &str, layout: &LedgerConfig, maintainers: &[String]) -> Result<Self, GitGangError> {
        let mut ledger = Ledger {
            layout: layout.clone(),
            maintainer_names: maintainers.to_vec(),
            preamble: Vec::new(),
            maintainers: Vec::new(),
            contributors: Vec::new(),
            trailer: Vec::new(),
        };
        let mut seen_heading = false;

        for line in text.lines() {
            if let Some(entry) = LedgerEntry::from_line(line) {
                ledger.insert(entry);
            } else if line.starts_with(&layout.total_prefix) {
                continue;
            } else if !seen_heading {
                seen_heading = line.contains(&layout.heading);
                ledger.preamble.push(line.to_string());
            } else {
                ledger.trailer.push(line.to_string());
            }
        }

        if !seen_heading {
            return Err(GitGangError::Ledger(format!(
                "missing '{}' heading",
                layout.heading
            )));
        }

        debug!(
            "Parsed ledger: {} maintainers, {} contributors.",
            ledger.maintainers.len(),
            ledger.contributors.len()
        );
        Ok(ledger)
    }

    fn insert(&mut self, entry: LedgerEntry) {
        if self.maintainer_names.iter().any(|m| *m == entry.username) {
            self.maintainers.push(entry);
        } else {
            self.contributors.push(entry);
        }
    }

    /// Appends a validated entry as `- <canonical>`.
    ///
    /// A non-maintainer username already among the contributors is rejected,
    /// compared case-insensitively, and the ledger is left untouched.
    pub fn push(&mut self, validated: &ValidatedEntry) -> Result<(), GitGangError> {
        let is_maintainer = self.maintainer_names.iter().any(|m| *m == validated.username);
        if !is_maintainer
            && self
                .contributors
                .iter()
                .any(|c| c.username.eq_ignore_ascii_case(&validated.username))
        {
            warn!("Refusing to add @{} twice.", validated.username);
            return Err(GitGangError::Duplicate {
                username: validated.username.clone(),
            });
        }

        let entry = LedgerEntry {
            name: validated.name.clone(),
            username: validated.username.clone(),
            line: validated.ledger_line(),
        };
        self.insert(entry);
        Ok(())
    }

    /// Sorts regular contributors by first name, case-insensitively.
    /// Maintainers keep their order. The sort is stable.
    pub fn sort(&mut self) {
        self.contributors.sort_by_key(LedgerEntry::sort_key);
    }

    pub fn total(&self) -> usize {
        self.maintainers.len() + self.contributors.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.maintainers.iter().chain(self.contributors.iter())
    }

    /// Renders the ledger back to markdown, ending in a single newline.
    pub fn to_markdown(&self) -> String {
        let mut lines: Vec<String> = self.preamble.clone();
        lines.push(String::new());
        lines.push(format!("{} {}", self.layout.total_prefix, self.total()));
        lines.push(String::new());
        lines.extend(self.entries().map(|e| e.line.clone()));

        let trailer = trim_blank_edges(&self.trailer);
        if !trailer.is_empty() {
            lines.push(String::new());
            lines.extend(trailer.iter().cloned());
        }

        format!("{}\n", lines.join("\n").trim())
    }
}

fn trim_blank_edges(lines: &[String]) -> &[String] {
    let start = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.trim().is_empty()).map_or(start, |i| i + 1);
    &lines[start..end]
}

/// Returns `true` if the ledger text already links to `username`.
///
/// Looks for the literal `https://github.com/<username>)` case-insensitively.
/// The username is regex-escaped, so metacharacters match themselves.
pub fn is_existing_contributor(ledger_text: &str, username: &str) -> bool {
    let pattern = format!(
        r"{}{}\)",
        regex::escape(GITHUB_PROFILE_URL),
        regex::escape(username)
    );
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(ledger_text),
        Err(e) => {
            warn!("Could not build duplicate pattern for '{}': {}", username, e);
            false
        }
    }
}

/// Duplicate detection with the maintainer exemption applied.
#[derive(Debug, Clone)]
pub struct DuplicateChecker {
    maintainers: Vec<String>,
}

impl DuplicateChecker {
    pub fn new(maintainers: Vec<String>) -> Self {
        Self { maintainers }
    }

    /// Exact, case-sensitive membership in the maintainer list.
    pub fn is_maintainer(&self, username: &str) -> bool {
        self.maintainers.iter().any(|m| m == username)
    }

    /// `true` when a non-maintainer username is already in the ledger.
    pub fn is_duplicate(&self, username: &str, ledger_text: &str) -> bool {
        !self.is_maintainer(username) && is_existing_contributor(ledger_text, username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::validate_entry;
    use crate::entry::Entry;

    fn maintainers() -> Vec<String> {
        vec!["SashankBhamidi".to_string(), "github-actions[bot]".to_string()]
    }

    const LEDGER: &str = "# Contributors\n\nThanks everyone!\n\n## Our Contributors\n\nTotal contributors: 1\n\n- [Zed](https://github.com/zed)\n- [Sashank](https://github.com/SashankBhamidi) - maintainer\n- [amy Pond](https://github.com/amy)\n";

    #[test]
    fn test_parse_partitions_entries() {
        let ledger = Ledger::parse(LEDGER, &LedgerConfig::default(), &maintainers()).unwrap();
        assert_eq!(ledger.maintainers.len(), 1);
        assert_eq!(ledger.contributors.len(), 2);
        assert_eq!(ledger.preamble.last().unwrap(), "## Our Contributors");
        assert_eq!(ledger.total(), 3);
    }

    #[test]
    fn test_sort_and_format() {
        let mut ledger = Ledger::parse(LEDGER, &LedgerConfig::default(), &maintainers()).unwrap();
        ledger.sort();
        let expected = "# Contributors\n\nThanks everyone!\n\n## Our Contributors\n\nTotal contributors: 3\n\n- [Sashank](https://github.com/SashankBhamidi) - maintainer\n- [amy Pond](https://github.com/amy)\n- [Zed](https://github.com/zed)\n";
        assert_eq!(ledger.to_markdown(), expected);

        let reparsed = Ledger::parse(&ledger.to_markdown(), &LedgerConfig::default(), &maintainers()).unwrap();
        assert_eq!(reparsed.to_markdown(), expected);
    }

    #[test]
    fn test_push_updates_total() {
        let mut ledger = Ledger::parse(LEDGER, &LedgerConfig::default(), &maintainers()).unwrap();
        let validated = validate_entry(&Entry::new("Bob", "bob", "hi")).unwrap();
        ledger.push(&validated).unwrap();
        let text = ledger.to_markdown();
        assert!(text.contains("Total contributors: 4"));
        assert!(text.ends_with("- [Bob](https://github.com/bob) - hi\n"));
    }

    #[test]
    fn test_push_rejects_existing_contributor() {
        let mut ledger = Ledger::parse(LEDGER, &LedgerConfig::default(), &maintainers()).unwrap();
        let again = validate_entry(&Entry::new("Amy", "AMY", "")).unwrap();

        let err = ledger.push(&again).unwrap_err();
        assert!(matches!(err, GitGangError::Duplicate { ref username } if username == "AMY"));
        assert_eq!(ledger.total(), 3);
        assert_eq!(ledger.to_markdown(), Ledger::parse(LEDGER, &LedgerConfig::default(), &maintainers()).unwrap().to_markdown());
    }

    #[test]
    fn test_push_allows_maintainer_again() {
        let mut ledger = Ledger::parse(LEDGER, &LedgerConfig::default(), &maintainers()).unwrap();
        let maintainer = validate_entry(&Entry::new("Sashank", "SashankBhamidi", "")).unwrap();
        ledger.push(&maintainer).unwrap();
        assert_eq!(ledger.maintainers.len(), 2);
        assert_eq!(ledger.total(), 4);
    }

    #[test]
    fn test_trailer_is_kept_after_entries() {
        let text = "## Our Contributors\n- [A](https://github.com/a)\n\n---\nFooter\n\n";
        let ledger = Ledger::parse(text, &LedgerConfig::default(), &[]).unwrap();
        assert_eq!(
            ledger.to_markdown(),
            "## Our Contributors\n\nTotal contributors: 1\n\n- [A](https://github.com/a)\n\n---\nFooter\n"
        );
    }

    #[test]
    fn test_missing_heading_is_an_error() {
        let err = Ledger::parse("- [A](https://github.com/a)\n", &LedgerConfig::default(), &[]).unwrap_err();
        assert!(matches!(err, GitGangError::Ledger(_)));
    }

    #[test]
    fn test_duplicate_detection_is_case_insensitive() {
        let text = "- [Alice](https://github.com/alice)\n";
        assert!(is_existing_contributor(text, "Alice"));
        assert!(!is_existing_contributor(text, "ali"));
        assert!(!is_existing_contributor(text, "alicex"));
    }

    #[test]
    fn test_username_metacharacters_are_literal() {
        let text = "- [Bot](https://github.com/github-actions[bot])\n";
        assert!(is_existing_contributor(text, "github-actions[bot]"));
        assert!(!is_existing_contributor("- [X](https://github.com/ab)\n", "a."));
    }

    #[test]
    fn test_maintainers_are_exempt() {
        let checker = DuplicateChecker::new(maintainers());
        let text = "- [S](https://github.com/SashankBhamidi)\n- [Alice](https://github.com/alice)\n";
        assert!(!checker.is_duplicate("SashankBhamidi", text));
        assert!(checker.is_duplicate("ALICE", text));
        assert!(!checker.is_duplicate("carol", text));
    }
}

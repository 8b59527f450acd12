// File: gitgang-core/src/pipeline.rs

//! `pipeline.rs`
//! One-shot workflows built from the primitives in this crate. Each function
//! takes document text in and hands text or a report back; reading and writing
//! files is left to the caller.

use log::{debug, info};
use serde::Serialize;

use crate::config::GitGangConfig;
use crate::entry::{parse_entry, ParsedEntry};
use crate::errors::GitGangError;
use crate::ledger::{DuplicateChecker, Ledger};
use crate::moderation::{ProfanityChecker, ProfanityVerdict};
use crate::staging::extract_entry_section;
use crate::validators::{validate_format, validate_parsed, ValidatedEntry};

/// Outcome of validating a staging document, ready to be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<ValidatedEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profanity: Option<ProfanityVerdict>,
}

impl ValidationReport {
    pub fn success(entry: ValidatedEntry, profanity: Option<ProfanityVerdict>) -> Self {
        Self {
            valid: true,
            error_message: None,
            entry: Some(entry),
            profanity,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error_message: Some(message.into()),
            entry: None,
            profanity: None,
        }
    }

    /// The `key=value` pairs published to CI, in a stable order.
    pub fn outputs(&self) -> Vec<(&'static str, String)> {
        let mut outputs = vec![("valid", self.valid.to_string())];

        if let Some(message) = &self.error_message {
            outputs.push(("error_message", message.clone()));
        }
        if let Some(entry) = &self.entry {
            outputs.push(("entry", entry.entry.clone()));
            outputs.push(("username", entry.username.clone()));
            outputs.push(("name", entry.name.clone()));
            outputs.push(("message", entry.message.clone()));
        }
        if let Some(verdict) = &self.profanity {
            outputs.push(("profanity_detected", verdict.has_profanity.to_string()));
            outputs.push(("profanity_in_name", verdict.profanity_in_name.to_string()));
            outputs.push(("profanity_in_message", verdict.profanity_in_message.to_string()));
        }
        outputs
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&GitGangError> for ValidationReport {
    fn from(err: &GitGangError) -> Self {
        ValidationReport::failure(err.to_string())
    }
}

/// Structure, parse, format and duplicate checks for a staging document.
///
/// `ledger_text` is the current ledger; pass an empty string when it does not
/// exist yet.
pub fn validate_submission(
    staging_document: &str,
    ledger_text: &str,
    config: &GitGangConfig,
) -> Result<ValidatedEntry, GitGangError> {
    let section = extract_entry_section(staging_document, &config.staging)?;

    let parsed = parse_entry(&section);
    if parsed == ParsedEntry::NoMatch {
        return Err(GitGangError::Parse);
    }
    let validated = validate_parsed(&parsed)?;

    let duplicates = DuplicateChecker::new(config.maintainers.clone());
    if duplicates.is_duplicate(&validated.username, ledger_text) {
        return Err(GitGangError::Duplicate {
            username: validated.username,
        });
    }

    info!("Entry for @{} passed validation.", validated.username);
    Ok(validated)
}

/// [`validate_submission`] followed by a concurrent name/message profanity check.
pub async fn validate_submission_with_moderation(
    staging_document: &str,
    ledger_text: &str,
    config: &GitGangConfig,
    checker: &ProfanityChecker,
) -> ValidationReport {
    match validate_submission(staging_document, ledger_text, config) {
        Ok(entry) => {
            let verdict = checker.check_entry(&entry.name, &entry.message).await;
            debug!("Profanity verdict for @{}: {:?}", entry.username, verdict);
            ValidationReport::success(entry, Some(verdict))
        }
        Err(e) => ValidationReport::from(&e),
    }
}

/// Validates `entry_text` and appends it to the ledger, returning the new document.
pub fn process_entry(
    entry_text: &str,
    ledger_text: &str,
    config: &GitGangConfig,
) -> Result<(ValidatedEntry, String), GitGangError> {
    let validated = validate_format(entry_text)?;
    let mut ledger = Ledger::parse(ledger_text, &config.ledger, &config.maintainers)?;
    ledger.push(&validated)?;
    info!("Added @{} to the ledger ({} total).", validated.username, ledger.total());
    Ok((validated, ledger.to_markdown()))
}

/// Counts reported after a ledger sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSummary {
    pub total: usize,
    pub maintainers: usize,
    pub regular: usize,
}

/// Re-sorts the ledger: maintainers first, everyone else by first name.
pub fn sort_ledger(ledger_text: &str, config: &GitGangConfig) -> Result<(String, SortSummary), GitGangError> {
    let mut ledger = Ledger::parse(ledger_text, &config.ledger, &config.maintainers)?;
    ledger.sort();
    let summary = SortSummary {
        total: ledger.total(),
        maintainers: ledger.maintainers.len(),
        regular: ledger.contributors.len(),
    };
    Ok((ledger.to_markdown(), summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staging(entry_lines: &str) -> String {
        format!(
            "# Add Your Name Here\n\nWant to join the Git Gang? Just fill out the form below.\n\n## Add your entry below this line\n\n{}",
            entry_lines
        )
    }

    #[test]
    fn test_report_outputs_on_failure() {
        let report = ValidationReport::from(&GitGangError::Parse);
        let outputs = report.outputs();
        assert_eq!(outputs[0], ("valid", "false".to_string()));
        assert_eq!(outputs[1].0, "error_message");
        assert_eq!(outputs.len(), 2);
    }

    #[test]
    fn test_report_json_omits_absent_fields() {
        let json = ValidationReport::failure("nope").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["error_message"], "nope");
        assert!(value.get("entry").is_none());
        assert!(value.get("profanity").is_none());
    }

    #[test]
    fn test_validate_submission_success() {
        let doc = staging("- Name: jane doe\n- Username: janedoe\n- Message: hello\n");
        let validated = validate_submission(&doc, "", &GitGangConfig::default()).unwrap();
        assert_eq!(validated.entry, "[Jane Doe](https://github.com/janedoe) - hello");
    }

    #[test]
    fn test_validate_submission_rejects_duplicates() {
        let doc = staging("- Name: jane\n- Username: JaneDoe\n- Message: \n");
        let ledger = "- [Jane](https://github.com/janedoe)\n";
        let err = validate_submission(&doc, ledger, &GitGangConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "@JaneDoe has already been added to the contributors list.");
    }

    #[test]
    fn test_validate_submission_allows_maintainers_again() {
        let doc = staging("- Name: sashank\n- Username: SashankBhamidi\n- Message: \n");
        let ledger = "- [Sashank](https://github.com/SashankBhamidi)\n";
        assert!(validate_submission(&doc, ledger, &GitGangConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_submission_empty_template() {
        let doc = staging("- Name: \n- Username: \n- Message: \n");
        let err = validate_submission(&doc, "", &GitGangConfig::default()).unwrap_err();
        assert!(matches!(err, GitGangError::Parse));
    }

    #[test]
    fn test_sort_ledger_summary() {
        let text = "## Our Contributors\n- [b](https://github.com/b)\n- [S](https://github.com/SashankBhamidi)\n- [a](https://github.com/a)\n";
        let (sorted, summary) = sort_ledger(text, &GitGangConfig::default()).unwrap();
        assert_eq!(summary, SortSummary { total: 3, maintainers: 1, regular: 2 });
        assert!(sorted.contains("Total contributors: 3\n\n- [S](https://github.com/SashankBhamidi)\n- [a](https://github.com/a)\n- [b](https://github.com/b)\n"));
    }
}

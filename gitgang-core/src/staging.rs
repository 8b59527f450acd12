//! staging.rs - The staging document (`ADD_YOUR_NAME.md`).
//!
//! Contributors edit a template and fill in their details below a section
//! marker. This module checks the template survived the edit, cuts out the
//! entry section, and renders a fresh template for the reset step.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::config::StagingConfig;
use crate::errors::GitGangError;

// Each list marker is followed by a space so contributors type right after it.
static STAGING_TEMPLATE: &str = concat!(
    "{title}\n\n",
    "{instructions} Just fill out the form below.\n\n",
    "{note}\n\n",
    "## {section_marker}\n\n",
    "{{ for marker in list_markers }}{marker} \n{{ endfor }}",
);

#[derive(Serialize)]
struct TemplateContext<'a> {
    title: &'a str,
    instructions: &'a str,
    note: &'a str,
    section_marker: &'a str,
    list_markers: &'a [String],
}

/// Verifies the template markers are still in place.
///
/// Two failure modes are reported separately: the template header was
/// removed, or the list markers below the section marker were.
pub fn check_template(document: &str, config: &StagingConfig) -> Result<(), GitGangError> {
    let has_structure = document.contains(&config.title)
        && document.contains(&config.instructions)
        && document.contains(&config.section_marker);
    if !has_structure {
        return Err(GitGangError::Structural(format!(
            "ADD_YOUR_NAME.md template structure is missing. Please keep the original template and only fill in your details below \"{}\".",
            config.section_marker
        )));
    }

    let section_start = document.find(&config.section_marker).unwrap_or(0);
    let entry_content = &document[section_start..];
    if !config.list_markers.iter().all(|m| entry_content.contains(m.as_str())) {
        let markers = config
            .list_markers
            .iter()
            .map(|m| format!("\"{}\"", m))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(GitGangError::Structural(format!(
            "Please use the list format: {} (with dashes). Do not remove the template structure.",
            markers
        )));
    }

    Ok(())
}

/// Returns the trimmed text after the line holding the section marker.
pub fn entry_section(document: &str, config: &StagingConfig) -> Option<String> {
    let lines: Vec<&str> = document.lines().collect();
    let index = lines.iter().position(|l| l.contains(&config.section_marker))?;
    let section = lines[index + 1..].join("\n").trim().to_string();
    debug!("Entry section holds {} lines.", section.lines().count());
    Some(section)
}

/// Template check followed by section extraction.
pub fn extract_entry_section(document: &str, config: &StagingConfig) -> Result<String, GitGangError> {
    check_template(document, config)?;
    entry_section(document, config).ok_or_else(|| {
        GitGangError::Structural("Could not find the entry section in ADD_YOUR_NAME.md".to_string())
    })
}

/// Renders an empty staging document from the configured markers.
pub fn render_template(config: &StagingConfig) -> Result<String> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("staging", STAGING_TEMPLATE)
        .context("Failed to compile staging template")?;

    let context = TemplateContext {
        title: &config.title,
        instructions: &config.instructions,
        note: &config.note,
        section_marker: &config.section_marker,
        list_markers: &config.list_markers,
    };
    tt.render("staging", &context)
        .context("Failed to render staging template")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{parse_entry, ParsedEntry};

    fn filled(entry_lines: &str) -> String {
        format!(
            "# Add Your Name Here\n\nWant to join the Git Gang? Just fill out the form below.\n\n## Add your entry below this line\n\n{}",
            entry_lines
        )
    }

    #[test]
    fn test_valid_document_yields_section() {
        let doc = filled("- Name: jane\n- Username: jane\n- Message: hi\n");
        let section = extract_entry_section(&doc, &StagingConfig::default()).unwrap();
        assert_eq!(section, "- Name: jane\n- Username: jane\n- Message: hi");
    }

    #[test]
    fn test_missing_title_is_structural() {
        let doc = "## Add your entry below this line\n- Name: a\n- Username: a\n- Message: \n";
        let err = extract_entry_section(doc, &StagingConfig::default()).unwrap_err();
        assert!(err.to_string().contains("template structure is missing"));
    }

    #[test]
    fn test_missing_list_markers_is_structural() {
        let doc = filled("Name: jane\nUsername: jane\n");
        let err = check_template(&doc, &StagingConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Please use the list format"));
    }

    #[test]
    fn test_rendered_template_is_valid_but_empty() {
        let config = StagingConfig::default();
        let template = render_template(&config).unwrap();
        assert!(template.starts_with("# Add Your Name Here\n\nWant to join the Git Gang?"));
        assert!(template.contains("**Note:**"));
        assert!(template.contains("## Add your entry below this line\n\n- Name: \n- Username: \n- Message: \n"));

        let section = extract_entry_section(&template, &config).unwrap();
        assert_eq!(parse_entry(&section), ParsedEntry::NoMatch);
    }
}

// gitgang/src/utils/output.rs
//! Step outputs for CI.
//!
//! Results are `key=value` lines appended to the file named by `$GITHUB_OUTPUT`,
//! or printed on stdout when the variable is unset or empty. Values spanning
//! several lines use the `key<<DELIMITER` heredoc form so they cannot inject
//! extra keys.

use anyhow::{Context, Result};
use log::debug;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

const DELIMITER_BASE: &str = "GITGANG_EOF";

/// Renders one output record, including its trailing newline.
pub fn format_output(key: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", key, value);
    }

    let mut delimiter = DELIMITER_BASE.to_string();
    let mut suffix = 0u32;
    while value.lines().any(|line| line == delimiter) {
        suffix += 1;
        delimiter = format!("{}_{}", DELIMITER_BASE, suffix);
    }
    format!("{}<<{}\n{}\n{}\n", key, delimiter, value, delimiter)
}

/// Where step outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    File(PathBuf),
    Stdout,
}

impl OutputSink {
    /// Uses `$GITHUB_OUTPUT` when set to a non-empty path.
    pub fn from_env() -> Self {
        match std::env::var_os(GITHUB_OUTPUT_ENV) {
            Some(path) if !path.is_empty() => OutputSink::File(PathBuf::from(path)),
            _ => OutputSink::Stdout,
        }
    }

    pub fn to_file(path: impl AsRef<Path>) -> Self {
        OutputSink::File(path.as_ref().to_path_buf())
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write_records(&format_output(key, value))
    }

    /// Writes all pairs in one append so a partial report is never left behind.
    pub fn set_all<K: AsRef<str>, V: AsRef<str>>(&self, pairs: &[(K, V)]) -> Result<()> {
        let records: String = pairs
            .iter()
            .map(|(k, v)| format_output(k.as_ref(), v.as_ref()))
            .collect();
        self.write_records(&records)
    }

    fn write_records(&self, records: &str) -> Result<()> {
        match self {
            OutputSink::File(path) => {
                debug!("Appending outputs to {}", path.display());
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open output file {}", path.display()))?;
                file.write_all(records.as_bytes())
                    .with_context(|| format!("Failed to write outputs to {}", path.display()))?;
            }
            OutputSink::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(records.as_bytes()).context("Failed to write outputs to stdout")?;
                handle.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_values() {
        assert_eq!(format_output("valid", "true"), "valid=true\n");
        assert_eq!(format_output("message", ""), "message=\n");
        assert_eq!(format_output("entry", "[A](https://github.com/a) - x=y"), "entry=[A](https://github.com/a) - x=y\n");
    }

    #[test]
    fn test_multiline_values_use_heredoc() {
        assert_eq!(
            format_output("error_message", "line one\nline two"),
            "error_message<<GITGANG_EOF\nline one\nline two\nGITGANG_EOF\n"
        );
    }

    #[test]
    fn test_delimiter_never_collides_with_value() {
        let out = format_output("message", "a\nGITGANG_EOF\nb");
        assert!(out.starts_with("message<<GITGANG_EOF_1\n"));
        assert!(out.ends_with("\nGITGANG_EOF_1\n"));
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "existing=1\n").unwrap();

        let sink = OutputSink::to_file(&path);
        sink.set("valid", "false").unwrap();
        sink.set_all(&[("username", "jane"), ("name", "Jane")]).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing=1\nvalid=false\nusername=jane\nname=Jane\n"
        );
    }
}

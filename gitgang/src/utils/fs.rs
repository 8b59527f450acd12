// gitgang/src/utils/fs.rs
//! Document reads and crash-safe writes for the repository files.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const TMP_SUFFIX: &str = ".tmp";

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(TMP_SUFFIX);
    path.with_file_name(name)
}

/// Reads a document that must exist.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Reads a document, treating any read failure as an empty document.
pub fn read_document_or_empty(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Could not read {} ({}); treating it as empty.", path.display(), e);
            String::new()
        }
    }
}

/// Replaces `path` with `contents` through a sibling temp file and a rename,
/// so readers see either the old or the new document.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp_path = tmp_path_for(path);
    {
        let mut tmp = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)
            .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
        tmp.write_all(contents.as_bytes())?;
        tmp.sync_all()?;
    }

    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_write_atomic_replaces_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CONTRIBUTORS.md");
        fs::write(&path, "old\n").unwrap();

        write_atomic(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert!(!tmp_path_for(&path).exists());
    }

    #[test_log::test]
    fn test_missing_document_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_document_or_empty(&dir.path().join("nope.md")), "");
        assert!(read_document(&dir.path().join("nope.md")).is_err());
    }
}

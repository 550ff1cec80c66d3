//! `SavedPaths` struct and JSON read/write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Last image folder / output file pair used by the image mode.
///
/// Both fields are required; a file missing either one is treated as
/// no saved config at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPaths {
    /// Folder scanned for `.png` files.
    pub image_folder: PathBuf,
    /// File the generated source is written to.
    pub output_file: PathBuf,
}

impl SavedPaths {
    /// Creates a new pair.
    #[must_use]
    pub fn new(image_folder: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            image_folder: image_folder.into(),
            output_file: output_file.into(),
        }
    }

    /// Loads saved paths from a JSON file.
    ///
    /// Returns `None` if the file is missing, unreadable, not valid JSON,
    /// lacks a field, or holds an empty path.
    #[must_use]
    pub fn load(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No saved paths");
                return None;
            }
        };

        let saved: Self = match serde_json::from_str(&content) {
            Ok(saved) => saved,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Ignoring unreadable config");
                return None;
            }
        };

        if saved.image_folder.as_os_str().is_empty() || saved.output_file.as_os_str().is_empty() {
            tracing::debug!(path = %path.display(), "Ignoring config with empty paths");
            return None;
        }

        Some(saved)
    }

    /// Saves the pair to a JSON file, replacing any existing file and
    /// creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error naming `path` if directory creation or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = serde_json::to_string(self).context("failed to serialize config to JSON")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}

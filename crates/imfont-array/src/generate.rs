//! Folder scan and output assembly.

use std::collections::HashMap;
use std::path::Path;

use tracing::instrument;

use crate::declaration::{convert_file, derive_variable_name};
use crate::error::GenerateError;

/// Extension that qualifies a file for conversion (compared case-insensitively).
const PNG_EXTENSION: &str = ".png";

/// Result of a successful [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateSummary {
    /// Variable names in the order they were written.
    pub names: Vec<String>,
    /// Total number of image bytes embedded.
    pub total_bytes: usize,
    /// Names that were emitted more than once.
    pub collisions: Vec<String>,
}

/// Returns `true` if `file_name` ends with `.png`, ignoring ASCII case.
#[must_use]
pub fn is_qualifying_name(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(PNG_EXTENSION)
}

/// Returns every name that appears more than once, in first-seen order.
#[must_use]
pub fn find_name_collisions(names: &[String]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in names {
        let count = counts.entry(name.as_str()).or_insert(0);
        *count = count.saturating_add(1);
    }

    let mut collisions: Vec<String> = Vec::new();
    for name in names {
        if counts.get(name.as_str()).copied().unwrap_or(0) > 1 && !collisions.contains(name) {
            collisions.push(name.clone());
        }
    }
    collisions
}

/// Logs one warning per colliding variable name.
fn warn_collisions(collisions: &[String]) {
    for name in collisions {
        tracing::warn!(name = %name, "Variable name is declared more than once");
    }
}

/// Converts every `.png` file directly inside `folder` and writes the
/// concatenated declarations to `output`.
///
/// Files are processed in directory-listing order; subdirectories are not
/// descended into. All declarations are assembled in memory, so `output`
/// is only touched once every input has been read.
///
/// # Errors
///
/// - `GenerateError::NotFound` if `folder` is missing or not a directory.
/// - `GenerateError::Io` if listing the folder, reading an image, or
///   writing `output` fails.
#[instrument(skip_all, fields(folder = %folder.display()))]
pub fn generate(folder: &Path, output: &Path) -> Result<GenerateSummary, GenerateError> {
    let is_dir = std::fs::metadata(folder).is_ok_and(|m| m.is_dir());
    if !is_dir {
        return Err(GenerateError::NotFound {
            path: folder.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(folder).map_err(|e| GenerateError::io(folder, e))?;

    let mut source = String::new();
    let mut summary = GenerateSummary::default();

    for entry in entries {
        let entry = entry.map_err(|e| GenerateError::io(folder, e))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_qualifying_name(&file_name) {
            continue;
        }

        // Follows symlinks; only regular files are read.
        let path = entry.path();
        let is_file = match std::fs::metadata(&path) {
            Ok(metadata) => metadata.is_file(),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping unreadable entry");
                false
            }
        };
        if !is_file {
            tracing::debug!(file = %path.display(), "Skipping non-regular entry");
            continue;
        }

        let decl = convert_file(&path, &derive_variable_name(&file_name))?;
        source.push_str(&decl.text);
        summary.total_bytes = summary.total_bytes.saturating_add(decl.byte_len);
        summary.names.push(decl.name);
    }

    summary.collisions = find_name_collisions(&summary.names);
    warn_collisions(&summary.collisions);

    std::fs::write(output, source).map_err(|e| GenerateError::io(output, e))?;
    tracing::debug!(
        output = %output.display(),
        arrays = summary.names.len(),
        bytes = summary.total_bytes,
        "Wrote array source"
    );

    Ok(summary)
}

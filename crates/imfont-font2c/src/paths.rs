//! Converter binary location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// File name of the converter executable.
pub const BINARY_NAME: &str = "font2c";

/// Resolves the converter path.
///
/// - If `prefix` is `Some`, returns `{prefix}/bin/font2c`.
/// - Otherwise falls back to `{home}/bin/font2c`.
///
/// Empty values are treated as unset.
///
/// # Errors
///
/// Returns an error if neither `prefix` nor `home` is set.
pub fn resolve_binary_path(prefix: Option<&str>, home: Option<&str>) -> Result<PathBuf> {
    let base = prefix
        .filter(|p| !p.is_empty())
        .or_else(|| home.filter(|h| !h.is_empty()));
    let Some(base) = base else {
        bail!("neither PREFIX nor HOME environment variable is set");
    };
    Ok(PathBuf::from(base).join("bin").join(BINARY_NAME))
}

/// Resolves the converter path from the `PREFIX` and `HOME` environment variables.
///
/// # Errors
///
/// Returns an error if neither variable is set.
pub fn resolve_binary_path_from_env() -> Result<PathBuf> {
    let prefix = std::env::var("PREFIX").ok();
    let home = std::env::var("HOME").ok();
    resolve_binary_path(prefix.as_deref(), home.as_deref())
}

/// Returns `true` if `path` is a regular file that can be executed.
#[must_use]
pub fn is_available(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    let executable = {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    };
    #[cfg(not(unix))]
    let executable = true;

    executable
}

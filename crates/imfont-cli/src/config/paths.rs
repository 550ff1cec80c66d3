//! Config file location.

use std::path::{Path, PathBuf};

/// File name used when no config path is given, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Resolves the config file path.
///
/// - If `path` is `Some`, returns it unchanged.
/// - Otherwise returns `config.json` in the current working directory.
#[must_use]
pub fn resolve_config_path(path: Option<&Path>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf)
}

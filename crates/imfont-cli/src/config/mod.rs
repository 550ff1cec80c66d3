//! Saved path configuration.
//!
//! Remembers the last image folder and output file used by the
//! image-to-array mode in a small JSON file.

#[allow(clippy::module_inception)]
mod config;
mod paths;

pub use config::SavedPaths;
pub use paths::resolve_config_path;

//! Errors surfaced by array generation.

use std::path::PathBuf;

/// Failure while generating array source from an image folder.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum GenerateError {
    /// The image folder does not exist or is not a directory.
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// Reading an input or writing the output failed.
    Io {
        /// File or folder the operation was performed on.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "image folder not found: {}", path.display())
            }
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

//! Invocation of the converter binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::instrument;

/// Symbol name passed to the converter when none is configured.
pub const DEFAULT_SYMBOL: &str = "PIRO";

/// Flag that disables compression of the generated font data.
const NO_COMPRESS_FLAG: &str = "-nocompress";

/// Output flavour produced by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertMode {
    /// Compressed font data.
    Compress,
    /// Uncompressed font data (faster to load in ImGui).
    NoCompress,
}

impl ConvertMode {
    /// Parses an interactive menu answer (`1`/`01` or `2`/`02`).
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" | "01" => Some(Self::Compress),
            "2" | "02" => Some(Self::NoCompress),
            _ => None,
        }
    }

    /// Extra converter arguments for this mode.
    const fn flags(self) -> &'static [&'static str] {
        match self {
            Self::Compress => &[],
            Self::NoCompress => &[NO_COMPRESS_FLAG],
        }
    }
}

impl std::fmt::Display for ConvertMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compress => write!(f, "compress"),
            Self::NoCompress => write!(f, "no-compress"),
        }
    }
}

/// Converts a font file into source text.
///
/// Abstracts the external process for mock substitution in tests.
pub trait FontConverter {
    /// Runs the conversion and returns the raw generated output.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion cannot be started or fails.
    fn invoke(&self, font_path: &Path, mode: ConvertMode) -> Result<Vec<u8>>;
}

/// `font2c` executable wrapper.
#[derive(Debug, Clone)]
pub struct Font2c {
    /// Path of the executable.
    binary: PathBuf,
    /// Symbol name given to the generated data.
    symbol: String,
}

impl Font2c {
    /// Creates a wrapper around the executable at `binary`.
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            symbol: String::from(DEFAULT_SYMBOL),
        }
    }

    /// Overrides the symbol name (default: `PIRO`).
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Path of the wrapped executable.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl FontConverter for Font2c {
    #[instrument(skip_all, fields(font = %font_path.display(), %mode))]
    fn invoke(&self, font_path: &Path, mode: ConvertMode) -> Result<Vec<u8>> {
        if !font_path.is_file() {
            bail!("font file not found: {}", font_path.display());
        }

        let mut command = Command::new(&self.binary);
        command.args(mode.flags()).arg(font_path).arg(&self.symbol);
        tracing::debug!(?command, "Running converter");

        let output = command
            .output()
            .with_context(|| format!("failed to run {}", self.binary.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("font2c exited with {}: {}", output.status, stderr.trim());
        }

        Ok(output.stdout)
    }
}

/// Runs `converter` on `font_path` and writes its output to `output`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns an error if the conversion fails or `output` cannot be written.
/// Nothing is written when the conversion fails.
pub fn convert_to_file<C: FontConverter>(
    converter: &C,
    font_path: &Path,
    mode: ConvertMode,
    output: &Path,
) -> Result<usize> {
    let bytes = converter
        .invoke(font_path, mode)
        .with_context(|| format!("failed to convert {}", font_path.display()))?;
    std::fs::write(output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(bytes.len())
}

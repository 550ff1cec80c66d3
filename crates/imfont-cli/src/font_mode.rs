//! `--file` mode: font file to C source through `font2c`.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use crossterm::style::Stylize;
use imfont_font2c::{
    ConvertMode, Font2c, Font2cFetcher, FontConverter, convert_to_file, ensure_available,
    is_available, resolve_binary_path_from_env,
};
use tracing::instrument;

use crate::banner::{Banner, write_banner};
use crate::prompt::Prompter;

/// Inputs of a font conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontJob {
    /// Font file passed to the converter.
    pub font: PathBuf,
    /// File receiving the converter output.
    pub output: PathBuf,
    /// Mode chosen on the command line; prompted for when `None`.
    pub mode: Option<ConvertMode>,
    /// Explicit converter binary; resolved from `PREFIX`/`HOME` when `None`.
    pub binary: Option<PathBuf>,
    /// Symbol name for the generated data.
    pub symbol: String,
}

/// Returns `mode` or asks for it with the numbered menu.
///
/// # Errors
///
/// Returns an error if prompting fails or the answer is not a menu entry.
pub fn choose_mode<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    mode: Option<ConvertMode>,
) -> Result<ConvertMode> {
    if let Some(mode) = mode {
        return Ok(mode);
    }

    let out = prompter.output();
    writeln!(out, "{}{}", "[01]".cyan(), " FOR COMPRESS C".green())
        .and_then(|()| {
            writeln!(
                out,
                "{}{}",
                "[02]".cyan(),
                " FOR NO COMPRESS C (IMGUI BETTER RESPONSE)".green()
            )
        })
        .context("failed to write menu")?;

    let answer = prompter.ask(">> Select Your Option: ".magenta())?;
    ConvertMode::from_menu_choice(&answer).with_context(|| format!("Invalid option: {answer:?}"))
}

/// Finds the converter, downloading it when it is not installed.
///
/// # Errors
///
/// Returns an error if an explicit binary is not executable, the default
/// location cannot be resolved, or the download fails.
#[instrument(skip_all)]
pub async fn locate_converter(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !is_available(&path) {
            bail!("font2c binary is not executable: {}", path.display());
        }
        return Ok(path);
    }

    let path = resolve_binary_path_from_env().context("failed to resolve font2c location")?;
    let fetcher = Font2cFetcher::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build font2c downloader")?;
    ensure_available(&path, &fetcher).await?;
    Ok(path)
}

/// Converts `font` with `converter` and reports the result.
///
/// # Errors
///
/// Returns an error if the conversion or the output write fails.
pub fn convert_and_report<C: FontConverter, R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    converter: &C,
    font: &Path,
    mode: ConvertMode,
    output: &Path,
) -> Result<()> {
    let written = convert_to_file(converter, font, mode, output)?;
    tracing::info!(bytes = written, %mode, "Font conversion complete");

    let report = format!("Font source saved to {}", output.display());
    writeln!(prompter.output(), "{}", report.green()).context("failed to write report")?;
    Ok(())
}

/// Runs the font mode end to end.
///
/// # Errors
///
/// Returns an error if any step fails.
#[instrument(skip_all)]
pub async fn run_font<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    job: FontJob,
) -> Result<()> {
    write_banner(prompter.output(), Banner::Font2h).context("failed to write banner")?;

    let mode = choose_mode(prompter, job.mode)?;
    let binary = locate_converter(job.binary).await?;
    let converter = Font2c::new(binary).symbol(job.symbol);
    tracing::debug!(binary = %converter.binary().display(), "Using converter");

    convert_and_report(prompter, &converter, &job.font, mode, &job.output)
}

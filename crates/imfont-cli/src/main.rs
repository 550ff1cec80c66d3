//! imfont - font and PNG to C/C++ source converter.

/// Decorative banners and usage text.
mod banner;
/// Saved path configuration (JSON).
mod config;
/// Font conversion through `font2c`.
mod font_mode;
/// PNG folder conversion.
mod image_mode;
/// Interactive prompts.
mod prompt;
/// Tracing subscriber setup.
mod telemetry;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use imfont_font2c::{ConvertMode, DEFAULT_SYMBOL};
use tracing::instrument;

use crate::banner::{USAGE, write_usage};
use crate::config::resolve_config_path;
use crate::font_mode::{FontJob, run_font};
use crate::image_mode::run_image;
use crate::prompt::Prompter;
use crate::telemetry::init_tracing;

/// CLI argument parser.
#[derive(Parser, Debug)]
#[command(name = "imfont", about, version)]
struct Cli {
    /// Font file to convert, or the image folder when used with --image.
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Output file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Convert a folder of PNG images into C/C++ byte arrays.
    #[arg(short, long)]
    image: bool,

    /// Font conversion mode (prompted for when omitted).
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Saved paths file (default: ./config.json).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use this font2c executable instead of $PREFIX/bin or $HOME/bin.
    #[arg(long)]
    font2c: Option<PathBuf>,

    /// Symbol name given to the converted font data.
    #[arg(long, default_value = DEFAULT_SYMBOL)]
    symbol: String,
}

/// Font conversion mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Compressed font data.
    Compress,
    /// Uncompressed font data.
    NoCompress,
}

impl From<ModeArg> for ConvertMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Compress => Self::Compress,
            ModeArg::NoCompress => Self::NoCompress,
        }
    }
}

/// What a parsed command line asks for.
#[derive(Debug, PartialEq)]
enum Action {
    /// Print banner and usage.
    Usage,
    /// Run the font converter.
    Font(FontJob),
    /// Convert an image folder.
    Image {
        folder: Option<PathBuf>,
        output: Option<PathBuf>,
    },
}

/// Maps parsed arguments onto an action.
///
/// # Errors
///
/// Returns an error for flag combinations that name no mode.
fn select_action(cli: Cli) -> Result<Action> {
    if cli.image {
        return Ok(Action::Image {
            folder: cli.file,
            output: cli.output,
        });
    }

    match (cli.file, cli.output) {
        (None, None) => Ok(Action::Usage),
        (Some(font), Some(output)) => Ok(Action::Font(FontJob {
            font,
            output,
            mode: cli.mode.map(ConvertMode::from),
            binary: cli.font2c,
            symbol: cli.symbol,
        })),
        (Some(_), None) => bail!("missing --output for font conversion"),
        (None, Some(_)) => bail!("Invalid command. Use '-h' for help."),
    }
}

/// Runs the selected action against the process stdin/stdout.
///
/// # Errors
///
/// Returns an error if the action fails.
#[instrument(skip_all)]
async fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    match select_action(cli)? {
        Action::Usage => Ok(write_usage(prompter.output())?),
        Action::Font(job) => run_font(&mut prompter, job).await,
        Action::Image { folder, output } => run_image(&mut prompter, &config_path, folder, output),
    }
}

/// Entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error: {e:#}");
            // Nothing left to report to if stderr is gone.
            let _ = writeln!(std::io::stderr(), "{}", USAGE.cyan());
            ExitCode::FAILURE
        }
    }
}

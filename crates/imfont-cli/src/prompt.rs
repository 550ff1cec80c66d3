//! Line-based interactive prompts.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Reads trimmed answers from `input` after writing a prompt to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompts, banners and reports.
    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `message` and returns the next input line, trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails, reading fails, or input ends
    /// before a line is available.
    pub fn ask(&mut self, message: impl std::fmt::Display) -> Result<String> {
        write!(self.output, "{message}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read answer")?;
        if read == 0 {
            bail!("input ended while waiting for an answer");
        }
        Ok(String::from(line.trim()))
    }

    /// Asks a yes/no question; only `y` (any case) counts as yes.
    ///
    /// # Errors
    ///
    /// Same as [`Prompter::ask`].
    pub fn confirm(&mut self, message: impl std::fmt::Display) -> Result<bool> {
        let answer = self.ask(message)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}

//! `--image` mode: PNG folder to C/C++ arrays.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use crossterm::style::Stylize;
use tracing::instrument;

use crate::banner::{Banner, write_banner};
use crate::config::SavedPaths;
use crate::prompt::Prompter;

/// Decides which folder/output pair to use.
///
/// - Both `folder` and `output` given: used as-is and saved.
/// - A saved pair exists and the user accepts it: reused without saving.
/// - Otherwise both paths are prompted for and saved.
///
/// # Errors
///
/// Returns an error if prompting fails, an answer is empty, or the config
/// cannot be saved.
pub fn resolve_paths<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config_path: &Path,
    folder: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<SavedPaths> {
    if let (Some(folder), Some(output)) = (folder, output) {
        let paths = SavedPaths::new(folder, output);
        paths.save(config_path).context("failed to save paths")?;
        return Ok(paths);
    }

    write_banner(prompter.output(), Banner::Image2h).context("failed to write banner")?;

    if let Some(saved) = SavedPaths::load(config_path) {
        tracing::debug!(
            folder = %saved.image_folder.display(),
            output = %saved.output_file.display(),
            "Found saved paths"
        );
        if prompter.confirm(">> Use saved paths? (y/n): ".magenta())? {
            return Ok(saved);
        }
        write_banner(prompter.output(), Banner::Image2h).context("failed to write banner")?;
    }

    let folder = prompter.ask(">> ENTER IMAGE FOLDER PATH: ".green())?;
    let output = prompter.ask(">> OUTPUT FILE PATH: ".magenta())?;
    if folder.is_empty() || output.is_empty() {
        bail!("image folder and output file paths must not be empty");
    }

    let paths = SavedPaths::new(folder, output);
    paths.save(config_path).context("failed to save paths")?;
    tracing::debug!(config = %config_path.display(), "Saved paths");
    Ok(paths)
}

/// Runs the image mode end to end.
///
/// # Errors
///
/// Returns an error if path resolution or array generation fails.
#[instrument(skip_all)]
pub fn run_image<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config_path: &Path,
    folder: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let paths = resolve_paths(prompter, config_path, folder, output)?;

    let summary = imfont_array::generate(&paths.image_folder, &paths.output_file)
        .context("failed to generate image arrays")?;

    tracing::info!(
        arrays = summary.names.len(),
        bytes = summary.total_bytes,
        collisions = summary.collisions.len(),
        "Image conversion complete"
    );

    let report = format!("C++ code saved to {}", paths.output_file.display());
    writeln!(prompter.output(), "{}", report.green()).context("failed to write report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(String::from(input)), Vec::new())
    }

    fn output_text(prompter: &mut Prompter<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8_lossy(prompter.output()).into_owned()
    }

    #[test]
    fn test_flags_skip_prompts_and_save() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        let mut prompter = prompter("");

        // Act
        let paths = resolve_paths(
            &mut prompter,
            &config,
            Some(PathBuf::from("icons")),
            Some(PathBuf::from("icons.h")),
        )
        .unwrap();

        // Assert
        assert_eq!(paths, SavedPaths::new("icons", "icons.h"));
        assert_eq!(SavedPaths::load(&config), Some(paths));
        assert!(prompter.output().is_empty());
    }

    #[test]
    fn test_no_saved_config_prompts_and_saves() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        let mut prompter = prompter("assets\nout/assets.h\n");

        // Act
        let paths = resolve_paths(&mut prompter, &config, None, None).unwrap();

        // Assert
        assert_eq!(paths, SavedPaths::new("assets", "out/assets.h"));
        assert_eq!(SavedPaths::load(&config), Some(paths));
        let text = output_text(&mut prompter);
        assert!(text.contains("ENTER IMAGE FOLDER PATH"));
        assert!(text.contains("OUTPUT FILE PATH"));
        assert!(!text.contains("Use saved paths"));
    }

    #[test]
    fn test_saved_config_accepted() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        let saved = SavedPaths::new("saved", "saved.h");
        saved.save(&config).unwrap();
        let mut prompter = prompter("Y\n");

        // Act
        let paths = resolve_paths(&mut prompter, &config, None, None).unwrap();

        // Assert
        assert_eq!(paths, saved);
        let text = output_text(&mut prompter);
        assert!(text.contains("Use saved paths"));
        assert!(!text.contains("ENTER IMAGE FOLDER PATH"));
    }

    #[test]
    fn test_saved_config_declined_prompts_and_overwrites() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        SavedPaths::new("saved", "saved.h").save(&config).unwrap();
        let mut prompter = prompter("n\nfresh\nfresh.h\n");

        // Act
        let paths = resolve_paths(&mut prompter, &config, None, None).unwrap();

        // Assert
        assert_eq!(paths, SavedPaths::new("fresh", "fresh.h"));
        assert_eq!(SavedPaths::load(&config), Some(paths));
    }

    #[test]
    fn test_only_folder_flag_still_prompts() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        let mut prompter = prompter("typed\ntyped.h\n");

        // Act
        let paths =
            resolve_paths(&mut prompter, &config, Some(PathBuf::from("ignored")), None).unwrap();

        // Assert
        assert_eq!(paths, SavedPaths::new("typed", "typed.h"));
    }

    #[test]
    fn test_empty_answer_is_rejected_without_saving() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        let mut prompter = prompter("\nout.h\n");

        // Act
        let result = resolve_paths(&mut prompter, &config, None, None);

        // Assert
        assert!(result.is_err());
        assert!(!config.exists());
    }

    #[test]
    fn test_run_image_generates_and_reports() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir_all(&images).unwrap();
        std::fs::write(images.join("dot.png"), [0x89, 0x50]).unwrap();
        let output = dir.path().join("images.h");
        let config = dir.path().join("config.json");
        let mut prompter = prompter("");

        // Act
        run_image(&mut prompter, &config, Some(images), Some(output.clone())).unwrap();

        // Assert
        let source = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            source,
            "unsigned char dot1[] = {\n    0x89, 0x50, };\nsize_t dot1Size = sizeof(dot1);\n"
        );
        assert!(output_text(&mut prompter).contains("C++ code saved to"));
    }

    #[test]
    fn test_run_image_warns_once_per_colliding_name() {
        use tracing::subscriber::with_default;
        use tracing_mock::{expect, subscriber};

        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("images");
        std::fs::create_dir_all(&images).unwrap();
        std::fs::write(images.join("arrow.png"), [0x01]).unwrap();
        std::fs::write(images.join("arrow.PNG"), [0x02]).unwrap();
        let output = dir.path().join("images.h");
        let config = dir.path().join("config.json");
        let mut prompter = prompter("");
        let (subscriber, handle) = subscriber::mock()
            .with_filter(|meta| meta.is_event() && *meta.level() == tracing::Level::WARN)
            .event(expect::event().at_level(tracing::Level::WARN))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            run_image(&mut prompter, &config, Some(images), Some(output.clone())).unwrap();
        });

        // Assert
        handle.assert_finished();
        let source = std::fs::read_to_string(&output).unwrap();
        assert_eq!(source.matches("unsigned char arrow1[]").count(), 2);
    }

    #[test]
    fn test_run_image_missing_folder() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("images.h");
        let config = dir.path().join("config.json");
        let mut prompter = prompter("");

        // Act
        let result = run_image(
            &mut prompter,
            &config,
            Some(dir.path().join("missing")),
            Some(output.clone()),
        );

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<imfont_array::GenerateError>(),
            Some(imfont_array::GenerateError::NotFound { .. })
        ));
        assert!(!output.exists());
    }
}

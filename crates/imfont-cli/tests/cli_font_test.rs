#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_font_without_output_fails() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("imfont");
    cmd.env("NO_COLOR", "1")
        .args(["-f", "Roboto.ttf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing --output"));
}

#[test]
fn test_font_invalid_menu_option() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("imfont");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["-f", "Roboto.ttf", "-o", "roboto.h"])
        .write_stdin("9\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("FOR NO COMPRESS C"))
        .stderr(predicate::str::contains("Invalid option"));
    assert!(!dir.path().join("roboto.h").exists());
}

#[test]
fn test_font_rejects_unknown_mode_value() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("imfont");
    cmd.args(["-f", "Roboto.ttf", "-o", "roboto.h", "--mode", "fast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("compress"));
}

#[cfg(unix)]
#[test]
fn test_font_runs_explicit_converter() {
    use std::os::unix::fs::PermissionsExt;

    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let binary = dir.path().join("font2c");
    std::fs::write(&binary, "#!/bin/sh\necho \"// args: $@\"\n").unwrap();
    std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755)).unwrap();
    std::fs::write(dir.path().join("Roboto.ttf"), [0x00, 0x01]).unwrap();

    // Act
    let mut cmd = cargo_bin_cmd!("imfont");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["-f", "Roboto.ttf", "-o", "roboto.h", "--mode", "no-compress"])
        .arg("--font2c")
        .arg(&binary)
        .assert()
        .success()
        .stdout(predicate::str::contains("Font source saved to roboto.h"));

    // Assert
    assert_eq!(
        std::fs::read_to_string(dir.path().join("roboto.h")).unwrap(),
        "// args: -nocompress Roboto.ttf PIRO\n"
    );
}

#[cfg(unix)]
#[test]
fn test_font_menu_selects_compress() {
    use std::os::unix::fs::PermissionsExt;

    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let binary = dir.path().join("font2c");
    std::fs::write(&binary, "#!/bin/sh\necho \"$@\"\n").unwrap();
    std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755)).unwrap();
    std::fs::write(dir.path().join("Roboto.ttf"), [0x00]).unwrap();

    // Act
    let mut cmd = cargo_bin_cmd!("imfont");
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["-f", "Roboto.ttf", "-o", "roboto.h", "--symbol", "ROBOTO"])
        .arg("--font2c")
        .arg(&binary)
        .write_stdin("01\n")
        .assert()
        .success();

    // Assert
    assert_eq!(
        std::fs::read_to_string(dir.path().join("roboto.h")).unwrap(),
        "Roboto.ttf ROBOTO\n"
    );
}

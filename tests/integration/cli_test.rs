//! Integration tests for the tdr CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use predicates::prelude::*;
use tempfile::TempDir;

use tdr::CastFile;

/// Helper to run the tdr binary in `dir` and capture output.
///
/// Points XDG_CONFIG_HOME into the temp dir so a developer's real config
/// file never leaks into assertions.
fn run_tdr_in(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_tdr"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.join("xdg-config"))
        .output()
        .expect("Failed to execute tdr");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// assert_cmd equivalent of [`run_tdr_in`] for predicate-style assertions.
fn tdr_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("tdr").expect("binary exists");
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.join("xdg-config"));
    cmd
}

/// Write a config file where the isolated XDG_CONFIG_HOME will find it.
fn write_config(dir: &Path, content: &str) {
    let config_dir = dir.join("xdg-config").join("tdr");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_the_recording_flags() {
    let temp = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_tdr_in(temp.path(), &["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--width"));
    assert!(stdout.contains("--height"));
}

#[test]
fn version_reports_the_crate_version() {
    let temp = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_tdr_in(temp.path(), &["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Recording
// ============================================================================

#[test]
fn default_run_writes_the_configured_output() {
    let temp = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_tdr_in(temp.path(), &[]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Saved recording to demo.cast"));
    assert!(stdout.contains("Next steps:"));
    assert!(stdout.contains("asciinema play demo.cast"));

    // NO_COLOR=1 strips escapes from tool output, never from recorded content.
    assert!(!stdout.contains('\x1b'));

    let cast = CastFile::parse(temp.path().join("demo.cast")).unwrap();
    assert_eq!(cast.header.width, 80);
    assert_eq!(cast.header.height, 24);
    assert_eq!(cast.header.title, "Terminal demo");
    assert!(cast.events.len() > 100);
    assert!(cast.duration() > 30.0);
    assert!(cast.events.iter().any(|e| e.data.contains('\x1b')));
}

#[test]
fn default_header_line_is_stable() {
    let temp = TempDir::new().unwrap();
    let (_stdout, _stderr, exit_code) = run_tdr_in(temp.path(), &[]);
    assert_eq!(exit_code, 0);

    let content = fs::read_to_string(temp.path().join("demo.cast")).unwrap();
    let header_line = content.lines().next().unwrap().to_string();

    insta::with_settings!({filters => vec![(r#""timestamp":\d+"#, r#""timestamp":0"#)]}, {
        insta::assert_snapshot!(header_line, @r#"{"version":2,"width":80,"height":24,"timestamp":0,"title":"Terminal demo","env":{"SHELL":"/bin/bash","TERM":"xterm-256color"}}"#);
    });
}

#[test]
fn flags_override_dimensions_and_output() {
    let temp = TempDir::new().unwrap();
    let (_stdout, _stderr, exit_code) = run_tdr_in(
        temp.path(),
        &["--output", "tour.cast", "--width", "100", "--height", "30"],
    );

    assert_eq!(exit_code, 0);
    assert!(!temp.path().join("demo.cast").exists());

    let cast = CastFile::parse(temp.path().join("tour.cast")).unwrap();
    assert_eq!(cast.header.width, 100);
    assert_eq!(cast.header.height, 30);
}

// ============================================================================
// Config File Precedence
// ============================================================================

#[test]
fn config_file_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        "width = 72\ntitle = \"Custom title\"\noutput = \"custom.cast\"\n",
    );

    let (_stdout, _stderr, exit_code) = run_tdr_in(temp.path(), &[]);
    assert_eq!(exit_code, 0);

    let cast = CastFile::parse(temp.path().join("custom.cast")).unwrap();
    assert_eq!(cast.header.width, 72);
    assert_eq!(cast.header.height, 24);
    assert_eq!(cast.header.title, "Custom title");
}

#[test]
fn flags_beat_the_config_file() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "width = 72\n");

    let (_stdout, _stderr, exit_code) = run_tdr_in(temp.path(), &["--width", "90"]);
    assert_eq!(exit_code, 0);

    let cast = CastFile::parse(temp.path().join("demo.cast")).unwrap();
    assert_eq!(cast.header.width, 90);
}

#[test]
fn broken_config_file_fails_with_context() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "width = \"not a number\"\n");

    let (_stdout, stderr, exit_code) = run_tdr_in(temp.path(), &[]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("config"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn svg_format_fails_with_conversion_hint() {
    let temp = TempDir::new().unwrap();

    tdr_cmd(temp.path())
        .args(["--format", "svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("svg-term"))
        .stderr(predicate::str::contains("unsupported output format"));

    // No cast file and no bogus svg left behind.
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn unwritable_output_path_fails_with_the_path() {
    let temp = TempDir::new().unwrap();

    tdr_cmd(temp.path())
        .args(["--output", "/nonexistent-tdr-dir/out.cast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out.cast"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_emit_a_script_without_recording() {
    let temp = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_tdr_in(temp.path(), &["--completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("tdr"));
    assert!(!temp.path().join("demo.cast").exists());
}

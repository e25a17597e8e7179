//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Path to the checked-in test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file to a string.
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// Copy a fixture into a fresh temp dir.
///
/// Returns the temp dir handle alongside the copied path; keep the handle
/// alive for the duration of the test.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dest = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &dest).expect("Failed to copy fixture");
    (temp_dir, dest)
}

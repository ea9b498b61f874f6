//! Shared integration-test harness for running the `faqforge` binary
//! against fixture source trees.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Runs the compiled `faqforge` binary with the given arguments and
/// waits for it to exit.
#[must_use]
pub fn run_faqforge(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_faqforge");
    Command::new(bin)
        .args(args)
        .env_remove("FAQFORGE_SOURCE")
        .env_remove("FAQFORGE_OUTPUT")
        .env_remove("FAQFORGE_GROUPS")
        .env_remove("FAQFORGE_LOG_LEVEL")
        .env_remove("FAQFORGE_LOG_FORMAT")
        .env_remove("FAQFORGE_COLOR")
        .output()
        .expect("failed to spawn faqforge")
}

/// Returns the path to a test fixture.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Copies named fixtures into a fresh scratch source directory so a
/// test can compile them without touching the shared fixture tree.
#[must_use]
pub fn source_dir_with(fixtures: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for name in fixtures {
        std::fs::copy(fixture_path(name), dir.path().join(name))
            .unwrap_or_else(|e| panic!("failed to copy fixture {name}: {e}"));
    }
    dir
}

/// stdout as UTF-8.
#[must_use]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// stderr as UTF-8.
#[must_use]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Path helper: `dir/<category_id>.html`.
#[must_use]
pub fn fragment_in(dir: &Path, category_id: &str) -> PathBuf {
    dir.join(format!("{category_id}.html"))
}

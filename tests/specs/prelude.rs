//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::process::Command;

/// Returns a Command configured to run the testrig binary
pub fn testrig_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("testrig"))
}

/// A ts-jest project configuration with coverage enabled.
pub const TS_JEST_CONFIG: &str = r#"preset = "ts-jest"
test_environment = "node"
test_match = ["**/tests/**/*.test.ts", "**/__tests__/**/*.spec.ts"]
collect_coverage = true
coverage_directory = "coverage"
coverage_path_ignore_patterns = ["/node_modules/"]
"#;

/// Create a project directory seeded with `contents` as testrig.toml.
///
/// A `.git` marker stops config discovery at the directory boundary so
/// tests never pick up configuration from the host filesystem.
pub fn project_with_config(contents: &str) -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join(".git")).unwrap();
    std::fs::write(tmp.path().join("testrig.toml"), contents).unwrap();
    tmp
}

/// Create an empty project directory with a `.git` discovery boundary.
pub fn empty_project() -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join(".git")).unwrap();
    tmp
}

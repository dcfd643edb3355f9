// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration structures and file loading.
//!
//! A [`TestRunConfig`] is the raw declaration as written on disk. Every
//! field is optional: presence means the author set the field explicitly,
//! and explicit values always win over preset defaults during resolution.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod defaults;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Raw test-run configuration as declared in `testrig.toml` (or a JSON
/// equivalent). Constructed once at process start and never mutated after
/// resolution.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestRunConfig {
    /// Named bundle of defaults merged underneath explicit fields.
    pub preset: Option<String>,

    /// Execution sandbox the runner must provide to test files.
    #[serde(alias = "testEnvironment")]
    pub test_environment: Option<TestEnvironment>,

    /// Ordered glob patterns identifying test files.
    #[serde(alias = "testMatch")]
    pub test_match: Option<Vec<String>>,

    /// Whether coverage bookkeeping is active for this run.
    #[serde(alias = "collectCoverage")]
    pub collect_coverage: Option<bool>,

    /// Destination directory for coverage artifacts.
    #[serde(alias = "coverageDirectory")]
    pub coverage_directory: Option<String>,

    /// Path patterns excluded from coverage accounting even when executed.
    #[serde(alias = "coveragePathIgnorePatterns")]
    pub coverage_path_ignore_patterns: Option<Vec<String>>,
}

/// Execution sandbox for test files.
///
/// The set is open: anything other than the well-known environments is
/// carried through opaquely to the execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TestEnvironment {
    Node,
    Jsdom,
    Custom(String),
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::Node
    }
}

impl From<String> for TestEnvironment {
    fn from(value: String) -> Self {
        match value.as_str() {
            "node" => Self::Node,
            "jsdom" => Self::Jsdom,
            _ => Self::Custom(value),
        }
    }
}

impl From<TestEnvironment> for String {
    fn from(env: TestEnvironment) -> Self {
        env.to_string()
    }
}

impl fmt::Display for TestEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Jsdom => f.write_str("jsdom"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

/// Errors from reading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a raw config from `path`.
///
/// The format is chosen by extension: `.json` parses as JSON, everything
/// else as TOML. Both accept the camelCase field spellings used by
/// JavaScript test runners alongside the snake_case ones.
pub fn load(path: &Path) -> Result<TestRunConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

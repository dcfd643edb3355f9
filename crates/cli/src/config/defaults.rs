// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference. The preset
//! table and the resolver's built-in base both delegate to these.

use super::{TestEnvironment, TestRunConfig};

/// Coverage defaults.
pub mod coverage {
    /// Default directory for coverage artifacts, relative to the project root.
    pub const DIRECTORY: &str = "coverage";

    /// Paths excluded from coverage accounting by the built-in presets.
    pub fn ignore_patterns() -> Vec<String> {
        vec!["/node_modules/".to_string()]
    }
}

/// Default glob patterns for test file discovery.
pub mod test_patterns {
    /// TypeScript test globs used by the `ts-jest` preset.
    pub fn typescript() -> Vec<String> {
        vec![
            "**/__tests__/**/*.ts".to_string(),
            "**/*.test.ts".to_string(),
            "**/*.spec.ts".to_string(),
        ]
    }

    /// JavaScript test globs used by the `jest` preset.
    pub fn javascript() -> Vec<String> {
        vec![
            "**/__tests__/**/*.js".to_string(),
            "**/*.test.js".to_string(),
            "**/*.spec.js".to_string(),
        ]
    }
}

/// Built-in base defaults used when no preset is named: node environment,
/// coverage off, no patterns. The pattern sets stay empty so a config that
/// never declares `test_match` is caught at validation rather than silently
/// matching nothing.
pub fn base() -> TestRunConfig {
    TestRunConfig {
        preset: None,
        test_environment: Some(TestEnvironment::Node),
        test_match: None,
        collect_coverage: Some(false),
        coverage_directory: Some(coverage::DIRECTORY.to_string()),
        coverage_path_ignore_patterns: Some(Vec::new()),
    }
}

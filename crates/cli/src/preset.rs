// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named preset bundles of configuration defaults.
//!
//! A preset is a complete-enough [`TestRunConfig`] merged underneath the
//! fields the author wrote explicitly. The table is an explicit value
//! injected into the resolver, never hidden global state, so embedding
//! hosts can register their own bundles.

use std::collections::BTreeMap;

use crate::config::{TestEnvironment, TestRunConfig, defaults};

#[cfg(test)]
#[path = "preset_tests.rs"]
mod tests;

/// Mapping from preset name to its default bundle.
#[derive(Debug, Clone)]
pub struct PresetTable {
    presets: BTreeMap<String, TestRunConfig>,
}

impl PresetTable {
    /// Table with no presets registered.
    pub fn empty() -> Self {
        Self {
            presets: BTreeMap::new(),
        }
    }

    /// Table carrying the built-in presets (`ts-jest`, `jest`).
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert(
            "ts-jest",
            TestRunConfig {
                preset: None,
                test_environment: Some(TestEnvironment::Node),
                test_match: Some(defaults::test_patterns::typescript()),
                collect_coverage: Some(false),
                coverage_directory: Some(defaults::coverage::DIRECTORY.to_string()),
                coverage_path_ignore_patterns: Some(defaults::coverage::ignore_patterns()),
            },
        );
        table.insert(
            "jest",
            TestRunConfig {
                preset: None,
                test_environment: Some(TestEnvironment::Node),
                test_match: Some(defaults::test_patterns::javascript()),
                collect_coverage: Some(false),
                coverage_directory: Some(defaults::coverage::DIRECTORY.to_string()),
                coverage_path_ignore_patterns: Some(defaults::coverage::ignore_patterns()),
            },
        );
        table
    }

    /// Register or replace a preset bundle.
    pub fn insert(&mut self, name: impl Into<String>, bundle: TestRunConfig) {
        self.presets.insert(name.into(), bundle);
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&TestRunConfig> {
        self.presets.get(name)
    }

    /// Registered preset names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of a raw configuration into a runnable form.
//!
//! [`ConfigResolver`] merges preset defaults underneath explicit fields,
//! validates the merged record, and compiles its patterns into matchers.
//! Resolution is a pure function over the input and the injected preset
//! table: no I/O, no shared mutable state, so one resolver can serve
//! concurrent callers.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::config::{TestEnvironment, TestRunConfig, defaults};
use crate::preset::PresetTable;

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;

/// Why a configuration failed to resolve.
///
/// All variants are fatal and surface synchronously at resolution time;
/// none are retried, since a configuration error reproduces until fixed.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// `preset` names a bundle missing from the preset table.
    #[error("unknown preset `{name}` (known presets: {known})")]
    UnknownPreset { name: String, known: String },

    /// Zero `test_match` patterns remain after the preset merge. An empty
    /// set would ambiguously match nothing or everything, so it is
    /// rejected outright.
    #[error("test_match resolved to zero patterns; declare at least one glob")]
    EmptyTestMatch,

    /// Coverage settings are empty or self-contradictory.
    #[error("invalid coverage configuration: {reason}")]
    InvalidCoverageConfig { reason: String },

    /// A `test_match` glob failed to compile.
    #[error("malformed glob `{pattern}` in test_match")]
    MalformedGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// A coverage ignore pattern failed to compile.
    #[error("malformed pattern `{pattern}` in coverage_path_ignore_patterns")]
    MalformedIgnorePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Fully-merged, validated configuration with compiled matchers.
///
/// Produced once per run and held read-only afterwards; the matchers are
/// compiled at resolution so the predicates below are allocation-free.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTestConfig {
    /// Preset the raw config named, if any.
    pub preset: Option<String>,

    /// Execution sandbox, passed through opaquely to the engine.
    pub test_environment: TestEnvironment,

    /// Ordered test-file globs, as written.
    pub test_match: Vec<String>,

    /// Whether coverage bookkeeping is active.
    pub collect_coverage: bool,

    /// Coverage output directory, absolute under the project root.
    pub coverage_directory: PathBuf,

    /// Coverage exclusion patterns, as written.
    pub coverage_path_ignore_patterns: Vec<String>,

    #[serde(skip)]
    test_match_set: GlobSet,

    #[serde(skip)]
    ignore_matchers: Vec<Regex>,
}

impl ResolvedTestConfig {
    /// True iff `path` matches at least one `test_match` glob.
    ///
    /// Matching is purely lexical; walking the filesystem belongs to the
    /// host's file walker.
    pub fn matches_test_file(&self, path: impl AsRef<Path>) -> bool {
        let normalized = slash_normalized(path.as_ref());
        self.test_match_set.is_match(Path::new(&normalized))
    }

    /// True iff coverage is active and no ignore pattern matches `path`.
    ///
    /// Ignore patterns are unanchored and evaluated against the
    /// slash-normalized path with a leading `/`, so `/node_modules/`
    /// excludes that directory at any depth.
    pub fn is_coverage_tracked(&self, path: impl AsRef<Path>) -> bool {
        if !self.collect_coverage {
            return false;
        }
        let candidate = ignore_candidate(path.as_ref());
        !self.ignore_matchers.iter().any(|re| re.is_match(&candidate))
    }

    /// The fully-explicit raw equivalent of this resolution.
    ///
    /// Resolving the returned value against the same project root
    /// reproduces this record field for field.
    pub fn as_raw(&self) -> TestRunConfig {
        TestRunConfig {
            preset: self.preset.clone(),
            test_environment: Some(self.test_environment.clone()),
            test_match: Some(self.test_match.clone()),
            collect_coverage: Some(self.collect_coverage),
            coverage_directory: Some(self.coverage_directory.to_string_lossy().into_owned()),
            coverage_path_ignore_patterns: Some(self.coverage_path_ignore_patterns.clone()),
        }
    }
}

/// Turns a raw [`TestRunConfig`] into a [`ResolvedTestConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    presets: PresetTable,
}

impl ConfigResolver {
    pub fn new(presets: PresetTable) -> Self {
        Self { presets }
    }

    /// Resolve `raw` against `project_root`.
    ///
    /// Merges preset defaults underneath explicitly-present fields,
    /// validates the invariants, compiles the pattern sets, and
    /// absolutizes the coverage directory. Explicit always beats implicit:
    /// a field written in `raw` wins over the preset's value for that
    /// field, including an explicitly empty list.
    pub fn resolve(
        &self,
        raw: &TestRunConfig,
        project_root: &Path,
    ) -> Result<ResolvedTestConfig, ResolveError> {
        let base = match &raw.preset {
            Some(name) => self
                .presets
                .get(name)
                .cloned()
                .ok_or_else(|| ResolveError::UnknownPreset {
                    name: name.clone(),
                    known: self.presets.names().collect::<Vec<_>>().join(", "),
                })?,
            None => defaults::base(),
        };
        debug!(preset = raw.preset.as_deref(), "merging configuration");

        let test_environment = raw
            .test_environment
            .clone()
            .or(base.test_environment)
            .unwrap_or_default();
        let test_match = raw
            .test_match
            .clone()
            .or(base.test_match)
            .unwrap_or_default();
        let collect_coverage = raw
            .collect_coverage
            .or(base.collect_coverage)
            .unwrap_or(false);
        let coverage_directory = raw
            .coverage_directory
            .clone()
            .or(base.coverage_directory)
            .unwrap_or_default();
        let coverage_path_ignore_patterns = raw
            .coverage_path_ignore_patterns
            .clone()
            .or(base.coverage_path_ignore_patterns)
            .unwrap_or_default();

        if test_match.is_empty() {
            return Err(ResolveError::EmptyTestMatch);
        }
        if coverage_directory.is_empty() {
            return Err(ResolveError::InvalidCoverageConfig {
                reason: "coverage_directory is empty".to_string(),
            });
        }

        let test_match_set = compile_globs(&test_match)?;
        let ignore_matchers = compile_ignore_patterns(&coverage_path_ignore_patterns)?;

        let coverage_directory = absolutize(&coverage_directory, project_root);
        reject_self_ignored(
            &coverage_directory,
            &coverage_path_ignore_patterns,
            &ignore_matchers,
        )?;

        debug!(
            globs = test_match.len(),
            ignores = coverage_path_ignore_patterns.len(),
            coverage = collect_coverage,
            "configuration resolved"
        );

        Ok(ResolvedTestConfig {
            preset: raw.preset.clone(),
            test_environment,
            test_match,
            collect_coverage,
            coverage_directory,
            coverage_path_ignore_patterns,
            test_match_set,
            ignore_matchers,
        })
    }
}

/// Compile test-match globs into a single matcher set.
///
/// `*` does not cross path separators; `**` spans any number of
/// components, including zero.
fn compile_globs(patterns: &[String]) -> Result<GlobSet, ResolveError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| ResolveError::MalformedGlob {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| ResolveError::MalformedGlob {
            pattern: patterns.join(", "),
            source,
        })
}

/// Compile coverage ignore patterns.
///
/// These are unanchored path patterns in the style of JavaScript test
/// runners (`/node_modules/` means "anywhere under a node_modules
/// directory"), so they compile to regexes rather than globs.
fn compile_ignore_patterns(patterns: &[String]) -> Result<Vec<Regex>, ResolveError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| ResolveError::MalformedIgnorePattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Reject a coverage directory excluded by its own ignore patterns.
fn reject_self_ignored(
    coverage_directory: &Path,
    patterns: &[String],
    matchers: &[Regex],
) -> Result<(), ResolveError> {
    let mut candidate = ignore_candidate(coverage_directory);
    if !candidate.ends_with('/') {
        candidate.push('/');
    }
    for (pattern, matcher) in patterns.iter().zip(matchers) {
        if matcher.is_match(&candidate) {
            return Err(ResolveError::InvalidCoverageConfig {
                reason: format!(
                    "coverage_directory `{}` is excluded by its own ignore pattern `{pattern}`",
                    coverage_directory.display()
                ),
            });
        }
    }
    Ok(())
}

fn absolutize(directory: &str, project_root: &Path) -> PathBuf {
    let path = PathBuf::from(directory);
    if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    }
}

/// OS-independent path text: backslashes become slashes, a leading `./`
/// is dropped.
fn slash_normalized(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    match text.strip_prefix("./") {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Normalized form the ignore patterns are evaluated against: always
/// rooted with a leading `/` so unanchored directory patterns match at
/// the top level too.
fn ignore_candidate(path: &Path) -> String {
    let text = slash_normalized(path);
    if text.starts_with('/') {
        text
    } else {
        format!("/{text}")
    }
}

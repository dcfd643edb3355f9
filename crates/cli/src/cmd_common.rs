// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared plumbing for the resolve and match commands.

use std::path::PathBuf;

use anyhow::Context;

use testrig::cli::Cli;
use testrig::config::{self, TestRunConfig};
use testrig::discovery;

/// Locate and load the raw config, returning it with the project root.
///
/// The root defaults to the config file's directory so relative coverage
/// directories land next to the configuration that declared them.
pub fn load_raw(cli: &Cli) -> anyhow::Result<(TestRunConfig, PathBuf)> {
    let cwd = std::env::current_dir()?;
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => discovery::find_config(&cwd)
            .context("no testrig.toml found; run `testrig init` to create one")?,
    };

    let raw = config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    let root = match &cli.root {
        Some(dir) => dir.clone(),
        None => config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or(cwd),
    };
    Ok((raw, root))
}

/// Apply a per-run coverage override from the command line.
///
/// Layered on top of the raw config before resolution, so it behaves like
/// any other explicit field.
pub fn apply_coverage_override(raw: &mut TestRunConfig, coverage: Option<bool>) {
    if let Some(value) = coverage {
        raw.collect_coverage = Some(value);
    }
}

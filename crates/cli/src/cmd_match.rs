// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.
//!
//! Classifies candidate paths with the two resolved predicates. The paths
//! are taken as given; no filesystem walking happens here.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use testrig::cli::{Cli, MatchArgs, OutputFormat};
use testrig::resolve::{ConfigResolver, ResolvedTestConfig};

use crate::cmd_common;

#[derive(Serialize)]
struct Classified<'a> {
    path: &'a Path,
    is_test: bool,
    coverage_tracked: bool,
}

/// Run the match command.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<()> {
    let (mut raw, root) = cmd_common::load_raw(cli)?;
    cmd_common::apply_coverage_override(&mut raw, args.coverage_override());

    let resolver = ConfigResolver::default();
    let resolved = resolver.resolve(&raw, &root)?;

    let classified: Vec<Classified<'_>> = args
        .paths
        .iter()
        .map(|path| classify(&resolved, path))
        .collect();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => {
            for entry in &classified {
                writeln!(
                    handle,
                    "{}: test={} covered={}",
                    entry.path.display(),
                    entry.is_test,
                    entry.coverage_tracked
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &classified)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn classify<'a>(resolved: &ResolvedTestConfig, path: &'a Path) -> Classified<'a> {
    Classified {
        path,
        is_test: resolved.matches_test_file(path),
        coverage_tracked: resolved.is_coverage_tracked(path),
    }
}

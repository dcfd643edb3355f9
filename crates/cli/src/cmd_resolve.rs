// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve command implementation.

use std::io::Write;

use testrig::cli::{Cli, OutputFormat, ResolveArgs};
use testrig::resolve::{ConfigResolver, ResolvedTestConfig};

use crate::cmd_common;

/// Run the resolve command.
pub fn run(cli: &Cli, args: &ResolveArgs) -> anyhow::Result<()> {
    let (mut raw, root) = cmd_common::load_raw(cli)?;
    cmd_common::apply_coverage_override(&mut raw, args.coverage_override());

    let resolver = ConfigResolver::default();
    let resolved = resolver.resolve(&raw, &root)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match args.output {
        OutputFormat::Text => write_text(&mut handle, &resolved)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &resolved)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, resolved: &ResolvedTestConfig) -> std::io::Result<()> {
    if let Some(preset) = &resolved.preset {
        writeln!(out, "preset: {preset}")?;
    }
    writeln!(out, "test_environment: {}", resolved.test_environment)?;
    writeln!(out, "test_match:")?;
    for pattern in &resolved.test_match {
        writeln!(out, "  - {pattern}")?;
    }
    writeln!(out, "collect_coverage: {}", resolved.collect_coverage)?;
    writeln!(
        out,
        "coverage_directory: {}",
        resolved.coverage_directory.display()
    )?;
    writeln!(out, "coverage_path_ignore_patterns:")?;
    for pattern in &resolved.coverage_path_ignore_patterns {
        writeln!(out, "  - {pattern}")?;
    }
    Ok(())
}

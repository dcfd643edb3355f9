//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resolves test-discovery and coverage configuration for test-runner hosts
#[derive(Parser)]
#[command(name = "testrig")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TESTRIG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root for resolving relative paths (default: config file's directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve the configuration and print the result
    Resolve(ResolveArgs),
    /// Classify paths against the resolved test-match and coverage patterns
    Match(MatchArgs),
    /// Initialize testrig configuration
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force coverage collection on for this run
    #[arg(long, overrides_with = "no_coverage")]
    pub coverage: bool,

    /// Force coverage collection off for this run
    #[arg(long)]
    pub no_coverage: bool,
}

impl ResolveArgs {
    /// Per-run coverage override, if either flag was given.
    pub fn coverage_override(&self) -> Option<bool> {
        coverage_override(self.coverage, self.no_coverage)
    }
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Paths to classify
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force coverage collection on for this run
    #[arg(long, overrides_with = "no_coverage")]
    pub coverage: bool,

    /// Force coverage collection off for this run
    #[arg(long)]
    pub no_coverage: bool,
}

impl MatchArgs {
    /// Per-run coverage override, if either flag was given.
    pub fn coverage_override(&self) -> Option<bool> {
        coverage_override(self.coverage, self.no_coverage)
    }
}

fn coverage_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

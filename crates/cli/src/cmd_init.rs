// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.

use anyhow::bail;

use testrig::cli::InitArgs;

/// Starter configuration written by `testrig init`.
const STARTER_CONFIG: &str = r#"# testrig configuration
preset = "ts-jest"
test_environment = "node"
test_match = ["**/tests/**/*.test.ts", "**/__tests__/**/*.spec.ts"]
collect_coverage = true
coverage_directory = "coverage"
coverage_path_ignore_patterns = ["/node_modules/"]
"#;

/// Run the init command.
pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    let path = std::env::current_dir()?.join("testrig.toml");
    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    std::fs::write(&path, STARTER_CONFIG)?;
    println!("Created {}", path.display());
    Ok(())
}

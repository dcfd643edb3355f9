use clap::{CommandFactory, Parser};

use testrig::cli::{Cli, Command};

mod cmd_common;
mod cmd_init;
mod cmd_match;
mod cmd_resolve;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("TESTRIG_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Resolve(args) => cmd_resolve::run(&cli, args),
        Command::Match(args) => cmd_match::run(&cli, args),
        Command::Init(args) => cmd_init::run(args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "testrig", &mut std::io::stdout());
            Ok(())
        }
    }
}

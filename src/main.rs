use std::process::ExitCode;

use clap::Parser;
use user_registry::cli::{self, Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate(args) => cli::validate::run(args),
        Command::Load(args) => cli::load::run(args),
        Command::Find(args) => cli::find::run(args),
    }
}

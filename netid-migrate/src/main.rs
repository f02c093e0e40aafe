use anyhow::Result;
use clap::Parser;

mod cli;
mod migrate_cmd;
mod scan_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan(args) => scan_cmd::run_scan(args),
        Command::Migrate(args) => migrate_cmd::run_migrate(args),
    }
}

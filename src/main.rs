mod cli_commands;
mod cli_exec;

use anyhow::Result;
use clap::Parser;

use crate::cli_commands::Commands;

#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(about = "Developer toolbox: diff, cURL translation, and friends", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli_exec::handle_command(cli.command)
}

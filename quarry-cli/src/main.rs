//! Quarry CLI - Command-line interface for the Quarry ORM.

use clap::Parser;

use quarry_cli::cli::{Cli, Command};
use quarry_cli::commands;
use quarry_cli::error::CliResult;
use quarry_cli::output;
use quarry_driver::logging;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // `options` sets up logging once its config file is loaded.
    if !matches!(cli.command, Command::Options(_)) {
        logging::init();
    }

    match cli.command {
        Command::Url(args) => commands::url::run(args).await,
        Command::Options(args) => commands::options::run(args).await,
        Command::Alias(args) => commands::alias::run(args).await,
        Command::Version => commands::version::run().await,
    }
}

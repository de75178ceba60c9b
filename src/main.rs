//! Entry point for the `bikeshare` explorer.
//!
//! Parses flags, sets up logging, then hands stdin/stdout to the interactive
//! [`Explorer`](bikeshare::controller::Explorer).

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use anyhow::Result;
use bikeshare::console::Console;
use bikeshare::controller::Explorer;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    bikeshare::logging::init(cli.verbose);

    let config = cli.resolve_config()?;
    log::info!("Reading trip data from {}", config.data_dir.display());

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    Explorer::new(config, console).run()?;
    Ok(())
}

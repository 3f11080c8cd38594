//! Treestore CLI Binary
//!
//! Command-line interface for querying a tree index.

use anyhow::Context;
use clap::Parser;
use std::process;
use treestore::logging::init_logging;
use treestore::tooling::cli::{load_config, Cli, CliContext};

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&cli.logging_config(&config.logging))
        .context("Failed to initialize logging")?;

    let context = CliContext::with_config(&config, cli.input.clone(), cli.format)
        .context("Failed to build tree index")?;
    Ok(context.execute(&cli.command)?)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

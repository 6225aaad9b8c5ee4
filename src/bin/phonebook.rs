//! Phonebook CLI Binary
//!
//! Command-line interface for the personal contact directory.

use clap::Parser;
use phonebook::logging::init_logging;
use phonebook::tooling::cli::{Cli, CliContext, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let mut context = match CliContext::new(cli.workspace.clone(), config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error opening phonebook: {}", e);
            process::exit(1);
        }
    };

    let command = cli.command.clone().unwrap_or(Commands::Shell);
    match context.execute(&command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

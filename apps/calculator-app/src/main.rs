//! Console program for the calculator module.
//!
//! Prints a banner and a fixed set of example computations. Configuration
//! is layered: defaults -> YAML (`--config`) -> env (`CALCULATOR__*`) -> CLI.

// Console programs are expected to print to stdout
#![allow(clippy::print_stdout)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod demo;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use calculator::LocalCalculatorClient;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Calculator App - demonstrates the calculator module
#[derive(Parser)]
#[command(name = "calculator-app")]
#[command(about = "Calculator App - demonstrates the calculator module")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the example computations
    Run,
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose);

    logging::init_logging(&config.logging)?;
    tracing::info!("Calculator App starting");

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_demo(),
        Commands::Check => check_config(&config),
    }
}

fn run_demo() -> Result<()> {
    tracing::info!("Running example computations");
    let client = LocalCalculatorClient::shared();
    let stdout = std::io::stdout();
    demo::write_demo(client.as_ref(), &mut stdout.lock())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_json()?);
    Ok(())
}

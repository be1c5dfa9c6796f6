//! Vantage CLI - Growth-stage classification and valuation weighting.
//!
//! # Usage
//!
//! ```bash
//! # Classify a company
//! vantage classify --revenue 1000 --growth 0.45 --fcf -50
//!
//! # Show the weighting table for a stage
//! vantage strategies --stage mature
//!
//! # Classify a portfolio from CSV
//! vantage batch --input companies.csv --format csv
//!
//! # Blend engine outputs with the stage weights
//! vantage blend --stage growth --dcf 120 --cca 140 --scenarios 130
//!
//! # Stress revenue growth
//! vantage scenarios --revenue 1000 --growth 0.30 --fcf 50
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let Cli {
        format,
        config,
        verbose,
        command,
    } = Cli::parse();

    init_logging(verbose);

    let settings = || commands::load_config(config.as_deref());

    match command {
        Commands::Classify(args) => commands::classify::execute(args, &settings()?, format)?,
        Commands::Strategies(args) => commands::strategies::execute(args, format)?,
        Commands::Batch(args) => commands::batch::execute(args, &settings()?, format)?,
        Commands::Blend(args) => commands::blend::execute(args, &settings()?, format)?,
        Commands::Scenarios(args) => commands::scenarios::execute(args, &settings()?, format)?,
        Commands::Config(args) => commands::config::execute(args, config.as_deref(), format)?,
    }

    Ok(())
}

/// Logs go to stderr so that JSON and CSV output stay machine-readable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("vantage=debug,vantage_analytics=debug,vantage_config=debug")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

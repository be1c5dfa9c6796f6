//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    BatchArgs, BlendArgs, ClassifyArgs, ConfigArgs, ScenariosArgs, StrategiesArgs,
};

/// Vantage - Growth-stage classification and valuation weighting CLI
#[derive(Parser)]
#[command(name = "vantage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML or JSON). Defaults to the user config file if present.
    #[arg(short, long, global = true, env = "VANTAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify a company and show its valuation weighting
    Classify(ClassifyArgs),

    /// List the valuation weighting for each growth stage
    Strategies(StrategiesArgs),

    /// Classify every company in a CSV file
    Batch(BatchArgs),

    /// Blend per-method valuations using a stage's weights
    Blend(BlendArgs),

    /// Re-classify under bear, base and bull revenue growth
    Scenarios(ScenariosArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the answer)
    Minimal,
}

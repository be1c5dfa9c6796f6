//! Config command implementation.
//!
//! Shows, validates and creates configuration files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};

use vantage_config::{default_config_path, ConfigError, VantageConfig};

use crate::cli::OutputFormat;
use crate::commands::load_config;
use crate::output::{print_header, print_info, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Check a configuration file and report every problem found
    Validate(ValidateArgs),

    /// Write a configuration file with default values
    Init(InitArgs),

    /// Show the user configuration file location
    Path,
}

/// Arguments for validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File to check. Defaults to --config, then the user config file.
    pub file: Option<PathBuf>,
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write. Defaults to the user config file.
    pub file: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(config_path, format),
        ConfigCommand::Validate(validate_args) => {
            execute_validate(validate_args.file.as_deref().or(config_path))
        }
        ConfigCommand::Init(init_args) => execute_init(init_args),
        ConfigCommand::Path => execute_path(),
    }
}

/// Flattens a configuration into `section.key` pairs.
fn entries(config: &VantageConfig) -> Vec<KeyValue> {
    let t = &config.thresholds;
    let s = &config.scenarios;
    let b = &config.batch;
    vec![
        KeyValue::new("thresholds.hypergrowth_min_growth", t.hypergrowth_min_growth.to_string()),
        KeyValue::new("thresholds.growth_min_growth", t.growth_min_growth.to_string()),
        KeyValue::new("thresholds.mature_min_growth", t.mature_min_growth.to_string()),
        KeyValue::new("scenarios.bear", s.bear.to_string()),
        KeyValue::new("scenarios.base", s.base.to_string()),
        KeyValue::new("scenarios.bull", s.bull.to_string()),
        KeyValue::new("batch.parallel", b.parallel.to_string()),
        KeyValue::new("batch.parallel_threshold", b.parallel_threshold.to_string()),
    ]
}

/// Show the effective configuration.
fn execute_show(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;

    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            print_output(&entries(&config), format)?;
        }
        OutputFormat::Json => {
            println!("{}", config.to_json_string()?);
        }
        OutputFormat::Csv => {
            print_output(&entries(&config), format)?;
        }
        OutputFormat::Minimal => {
            for kv in entries(&config) {
                println!("{}={}", kv.key, kv.value);
            }
        }
    }

    Ok(())
}

/// Validate a configuration file.
fn execute_validate(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()
            .filter(|p| p.exists())
            .ok_or_else(|| anyhow::anyhow!("No configuration file to validate"))?,
    };

    match VantageConfig::from_file(&path) {
        Ok(_) => {
            print_success(&format!("{} is valid", path.display()));
            Ok(())
        }
        Err(ConfigError::MultipleValidationErrors(errors)) => {
            for err in &errors {
                eprintln!("  {}", err);
            }
            Err(anyhow::anyhow!(
                "{} has {} validation error(s)",
                path.display(),
                errors.len()
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// Write a default configuration file.
fn execute_init(args: InitArgs) -> Result<()> {
    let path = match args.file {
        Some(path) => path,
        None => default_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?,
    };

    if path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        ));
    }

    VantageConfig::default().save(&path)?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}

/// Show configuration file path.
fn execute_path() -> Result<()> {
    let path = default_config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

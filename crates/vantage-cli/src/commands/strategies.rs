//! Strategies command implementation.
//!
//! Lists the fixed valuation weighting per growth stage.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vantage_analytics::ValuationStrategy;

use crate::cli::OutputFormat;
use crate::commands::classify::{print_guidance, weight_rows};
use crate::commands::parse_stage;
use crate::output::{format_weight, print_header, print_json, print_output};

/// Arguments for the strategies command.
#[derive(Args, Debug)]
pub struct StrategiesArgs {
    /// Only show this stage (hypergrowth, growth, mature, decline)
    #[arg(short, long)]
    pub stage: Option<String>,

    /// Also print guidance and per-method notes
    #[arg(long)]
    pub guidance: bool,
}

/// Flat row for CSV output.
#[derive(Debug, Clone, Serialize, Tabled)]
struct StrategyRow {
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Trust")]
    trust: String,
}

/// Execute the strategies command.
pub fn execute(args: StrategiesArgs, format: OutputFormat) -> Result<()> {
    let strategies: Vec<&'static ValuationStrategy> = match args.stage.as_deref() {
        Some(name) => vec![ValuationStrategy::for_stage(parse_stage(name)?)],
        None => ValuationStrategy::all().to_vec(),
    };

    match format {
        OutputFormat::Table => {
            for strategy in &strategies {
                print_header(&format!(
                    "{} - {}",
                    strategy.stage.name(),
                    strategy.primary_method
                ));
                print_output(&weight_rows(strategy), format)?;
                if args.guidance {
                    print_guidance(strategy);
                }
            }
        }
        OutputFormat::Json => {
            print_json(&strategies)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<StrategyRow> = strategies
                .iter()
                .flat_map(|s| {
                    s.allocations.iter().map(move |a| StrategyRow {
                        stage: s.stage.code().to_string(),
                        method: a.method.name().to_string(),
                        weight: format_weight(a.weight),
                        trust: a.trust.to_string(),
                    })
                })
                .collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            for strategy in &strategies {
                let weights: Vec<String> = strategy
                    .weights()
                    .map(|(method, weight)| format!("{}={}", method, weight))
                    .collect();
                println!("{} {}", strategy.stage, weights.join(" "));
            }
        }
    }

    Ok(())
}

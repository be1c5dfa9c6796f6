//! Classify command implementation.
//!
//! Assigns a growth stage and prints the stage's valuation weighting.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use vantage_analytics::{Classification, GrowthStageClassifier, ValuationStrategy};
use vantage_config::VantageConfig;

use crate::cli::OutputFormat;
use crate::commands::SignalArgs;
use crate::output::{
    format_percent, format_weight, print_header, print_info, print_json, print_output, KeyValue,
};

/// Arguments for the classify command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub signals: SignalArgs,

    /// Also print the stage guidance and per-method notes
    #[arg(long)]
    pub guidance: bool,
}

/// One row of a weighting table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct WeightRow {
    #[tabled(rename = "Method")]
    pub method: String,
    #[tabled(rename = "Weight")]
    pub weight: String,
    #[tabled(rename = "Trust")]
    pub trust: String,
}

/// Builds the weighting rows for a strategy, in table order.
pub fn weight_rows(strategy: &ValuationStrategy) -> Vec<WeightRow> {
    strategy
        .allocations
        .iter()
        .map(|a| WeightRow {
            method: a.method.description().to_string(),
            weight: format_weight(a.weight),
            trust: a.trust.to_string(),
        })
        .collect()
}

/// Execute the classify command.
pub fn execute(args: ClassifyArgs, config: &VantageConfig, format: OutputFormat) -> Result<()> {
    let signals = args.signals.to_signals()?;
    let classifier = GrowthStageClassifier::from_config(config);
    let result = classifier.classify(&signals);

    tracing::debug!(stage = %result.stage, fcf_margin = result.fcf_margin, "Classified");

    match format {
        OutputFormat::Table => {
            print_header("Growth Stage");
            print_output(&summary(&result), format)?;

            print_header("Valuation Weighting");
            print_output(&weight_rows(result.strategy), format)?;

            if args.guidance {
                print_guidance(result.strategy);
            }
        }
        OutputFormat::Json => {
            print_json(&result)?;
        }
        OutputFormat::Csv => {
            print_output(&summary(&result), format)?;
            println!();
            print_output(&weight_rows(result.strategy), format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", result.stage);
        }
    }

    Ok(())
}

fn summary(result: &Classification) -> Vec<KeyValue> {
    let fcf_margin = if result.signals.revenue > Decimal::ZERO {
        format_percent(result.fcf_margin)
    } else {
        "n/a (no revenue)".to_string()
    };

    vec![
        KeyValue::new("Stage", result.stage.name()),
        KeyValue::from_percent("Revenue Growth", result.signals.revenue_growth),
        KeyValue::new("FCF Margin", fcf_margin),
        KeyValue::from_percent("EBITDA Margin", result.signals.ebitda_margin),
        KeyValue::new("Primary Method", result.strategy.primary_method),
    ]
}

/// Prints the narrative fields of a strategy.
pub fn print_guidance(strategy: &ValuationStrategy) {
    print_header("Guidance");
    println!("{}", strategy.guidance);
    print_info(&format!("DCF: {}", strategy.dcf_note));
    print_info(&format!("CCA: {}", strategy.cca_note));
}

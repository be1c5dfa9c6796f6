//! Scenarios command implementation.
//!
//! Re-classifies a company under the configured bear, base and bull growth.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vantage_analytics::{run_scenarios, GrowthStageClassifier, ScenarioAnalysis};
use vantage_config::VantageConfig;

use crate::cli::OutputFormat;
use crate::commands::SignalArgs;
use crate::output::{
    format_percent, print_header, print_info, print_json, print_output, print_warning,
};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    #[command(flatten)]
    pub signals: SignalArgs,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Case")]
    case: String,
    #[tabled(rename = "Multiplier")]
    multiplier: String,
    #[tabled(rename = "Growth")]
    revenue_growth: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Primary Method")]
    primary_method: String,
}

/// Execute the scenarios command.
pub fn execute(args: ScenariosArgs, config: &VantageConfig, format: OutputFormat) -> Result<()> {
    let signals = args.signals.to_signals()?;
    let classifier = GrowthStageClassifier::from_config(config);
    let analysis = run_scenarios(&classifier, &signals, &config.scenarios);

    match format {
        OutputFormat::Table => {
            print_header("Growth Scenarios");
            print_output(&rows(&analysis), format)?;
            if analysis.is_stable() {
                print_info("Stage is stable across scenarios");
            } else {
                print_warning("Stage changes across scenarios; the weighting depends on growth");
            }
        }
        OutputFormat::Json => {
            print_json(&analysis)?;
        }
        OutputFormat::Csv => {
            print_output(&rows(&analysis), format)?;
        }
        OutputFormat::Minimal => {
            for outcome in &analysis.outcomes {
                println!("{} {}", outcome.case, outcome.classification.stage);
            }
        }
    }

    Ok(())
}

fn rows(analysis: &ScenarioAnalysis) -> Vec<ScenarioRow> {
    analysis
        .outcomes
        .iter()
        .map(|o| ScenarioRow {
            case: o.case.to_string(),
            multiplier: format!("{:.2}x", o.multiplier),
            revenue_growth: format_percent(o.classification.signals.revenue_growth),
            stage: o.classification.stage.name().to_string(),
            primary_method: o.classification.strategy.primary_method.to_string(),
        })
        .collect()
}

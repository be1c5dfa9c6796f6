//! Blend command implementation.
//!
//! Combines externally computed per-method valuations with a stage's weights.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use vantage_analytics::{
    blend, BlendedValuation, GrowthStageClassifier, MethodValuations, ValuationStrategy,
};
use vantage_config::VantageConfig;
use vantage_core::{FinancialSignals, GrowthStage, ValuationMethod};

use crate::cli::OutputFormat;
use crate::commands::parse_stage;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_percent, format_weight, print_header, print_json, print_output, print_warning, KeyValue,
};

/// Arguments for the blend command.
///
/// Either `--stage` or the three signal arguments select the weighting.
#[derive(Args, Debug)]
pub struct BlendArgs {
    /// Stage whose weights to apply
    #[arg(short, long, conflicts_with_all = ["revenue", "growth", "fcf"])]
    pub stage: Option<String>,

    /// Trailing revenue, to classify before blending
    #[arg(long, allow_hyphen_values = true)]
    pub revenue: Option<Decimal>,

    /// Revenue growth as a fraction, to classify before blending
    #[arg(long, allow_hyphen_values = true)]
    pub growth: Option<f64>,

    /// Free cash flow, to classify before blending
    #[arg(long, allow_hyphen_values = true)]
    pub fcf: Option<Decimal>,

    /// DCF valuation
    #[arg(long, allow_hyphen_values = true)]
    pub dcf: Option<Decimal>,

    /// Comparable company analysis valuation
    #[arg(long, allow_hyphen_values = true)]
    pub cca: Option<Decimal>,

    /// Scenario-weighted valuation
    #[arg(long, allow_hyphen_values = true)]
    pub scenarios: Option<Decimal>,

    /// LBO valuation
    #[arg(long, allow_hyphen_values = true)]
    pub lbo: Option<Decimal>,

    /// Liquidation valuation
    #[arg(long, allow_hyphen_values = true)]
    pub liquidation: Option<Decimal>,
}

impl BlendArgs {
    fn stage(&self, config: &VantageConfig) -> CliResult<GrowthStage> {
        if let Some(name) = &self.stage {
            return parse_stage(name);
        }
        match (self.revenue, self.growth, self.fcf) {
            (Some(revenue), Some(growth), Some(fcf)) => {
                let signals = FinancialSignals::try_new(revenue, growth, fcf, 0.0)?;
                Ok(GrowthStageClassifier::from_config(config).classify(&signals).stage)
            }
            _ => Err(CliError::MissingArgument(
                "--stage, or all of --revenue, --growth and --fcf".to_string(),
            )),
        }
    }

    fn valuations(&self) -> MethodValuations {
        [
            (ValuationMethod::Dcf, self.dcf),
            (ValuationMethod::Cca, self.cca),
            (ValuationMethod::Scenarios, self.scenarios),
            (ValuationMethod::Lbo, self.lbo),
            (ValuationMethod::Liquidation, self.liquidation),
        ]
        .into_iter()
        .filter_map(|(method, value)| value.map(|v| (method, v)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ContributionRow {
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Applied")]
    effective_weight: String,
    #[tabled(rename = "Contribution")]
    contribution: String,
}

/// Execute the blend command.
pub fn execute(args: BlendArgs, config: &VantageConfig, format: OutputFormat) -> Result<()> {
    let stage = args.stage(config)?;
    let strategy = ValuationStrategy::for_stage(stage);
    let valuations = args.valuations();

    tracing::debug!(stage = %stage, methods = valuations.len(), "Blending");

    let blended = blend(strategy, &valuations)?;

    match format {
        OutputFormat::Table => {
            print_header(&format!("Blended Valuation ({})", stage.name()));
            print_output(&contribution_rows(&blended), format)?;
            print_output(&summary(&blended), format)?;
            if !blended.is_complete() {
                print_warning(&format!(
                    "Only {} of the {} weighting had a valuation; weights were rescaled",
                    format_percent(blended.coverage),
                    stage.name()
                ));
            }
        }
        OutputFormat::Json => {
            print_json(&blended)?;
        }
        OutputFormat::Csv => {
            print_output(&contribution_rows(&blended), format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", blended.value.round_dp(2));
        }
    }

    Ok(())
}

fn contribution_rows(blended: &BlendedValuation) -> Vec<ContributionRow> {
    blended
        .contributions
        .iter()
        .map(|c| ContributionRow {
            method: c.method.name().to_string(),
            value: c.value.round_dp(2).to_string(),
            weight: format_weight(c.weight),
            effective_weight: format_percent(c.effective_weight),
            contribution: c.contribution.round_dp(2).to_string(),
        })
        .collect()
}

fn summary(blended: &BlendedValuation) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Blended Value", blended.value.round_dp(2).to_string()),
        KeyValue::from_percent("Coverage", blended.coverage),
    ]
}

//! CLI command implementations.

pub mod batch;
pub mod blend;
pub mod classify;
pub mod config;
pub mod scenarios;
pub mod strategies;

pub use batch::BatchArgs;
pub use blend::BlendArgs;
pub use classify::ClassifyArgs;
pub use config::ConfigArgs;
pub use scenarios::ScenariosArgs;
pub use strategies::StrategiesArgs;

use std::path::Path;

use clap::Args;
use rust_decimal::Decimal;
use vantage_config::VantageConfig;
use vantage_core::{FinancialSignals, GrowthStage};

use crate::error::CliResult;

/// Financial signals shared by the commands that classify a single company.
#[derive(Args, Debug, Clone)]
pub struct SignalArgs {
    /// Trailing revenue
    #[arg(long, allow_hyphen_values = true)]
    pub revenue: Decimal,

    /// Revenue growth as a fraction (e.g., 0.25 for 25%)
    #[arg(long, allow_hyphen_values = true)]
    pub growth: f64,

    /// Free cash flow over the same period as revenue
    #[arg(long, allow_hyphen_values = true)]
    pub fcf: Decimal,

    /// EBITDA margin as a fraction (informational)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub ebitda_margin: f64,
}

impl SignalArgs {
    /// Validates the arguments into signals.
    pub fn to_signals(&self) -> CliResult<FinancialSignals> {
        Ok(FinancialSignals::try_new(
            self.revenue,
            self.growth,
            self.fcf,
            self.ebitda_margin,
        )?)
    }
}

/// Parses a stage name such as `growth` or `HYPERGROWTH`.
pub fn parse_stage(s: &str) -> CliResult<GrowthStage> {
    Ok(s.parse::<GrowthStage>()?)
}

/// Loads the configuration named on the command line, or the user default.
pub fn load_config(path: Option<&Path>) -> CliResult<VantageConfig> {
    tracing::debug!(path = ?path, "Loading configuration");
    Ok(VantageConfig::load_or_default(path)?)
}

//! Growth-stage classification.
//!
//! Bands are checked top to bottom and the first match wins:
//!
//! | Order | Condition | Stage |
//! |---|---|---|
//! | 1 | growth > 40% and FCF margin < 0 | Hypergrowth |
//! | 2 | growth >= 20% and FCF margin >= 0 | Growth |
//! | 3 | growth >= 5% | Mature |
//! | 4 | otherwise | Decline |
//!
//! The top band is strict and the lower bands are inclusive, so growth of
//! exactly 40% with negative margin falls through to Mature.

use serde::Serialize;

use vantage_config::{StageThresholds, VantageConfig};
use vantage_core::{FinancialSignals, GrowthStage};

use crate::strategy::ValuationStrategy;

/// Result of classifying one set of signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    /// The assigned stage.
    pub stage: GrowthStage,
    /// Weighting and guidance for the stage.
    pub strategy: &'static ValuationStrategy,
    /// FCF margin used by the decision (`-1.0` when revenue is not positive).
    pub fcf_margin: f64,
    /// The signals that were classified.
    pub signals: FinancialSignals,
}

impl Classification {
    /// Returns the `(stage, strategy)` pair.
    #[must_use]
    pub fn into_pair(self) -> (GrowthStage, &'static ValuationStrategy) {
        (self.stage, self.strategy)
    }
}

/// Assigns companies to growth stages.
///
/// Pure and `Copy`; holds only the band thresholds, so a single instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GrowthStageClassifier {
    thresholds: StageThresholds,
}

impl GrowthStageClassifier {
    /// Creates a classifier with explicit thresholds.
    #[must_use]
    pub fn new(thresholds: StageThresholds) -> Self {
        Self { thresholds }
    }

    /// Creates a classifier from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &VantageConfig) -> Self {
        Self::new(config.thresholds)
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn thresholds(&self) -> &StageThresholds {
        &self.thresholds
    }

    /// Picks the stage for a growth rate and FCF margin.
    ///
    /// Total over all inputs: NaN growth fails every comparison and lands in
    /// Decline.
    #[must_use]
    pub fn stage_for(&self, revenue_growth: f64, fcf_margin: f64) -> GrowthStage {
        let t = &self.thresholds;
        if revenue_growth > t.hypergrowth_min_growth && fcf_margin < 0.0 {
            GrowthStage::Hypergrowth
        } else if revenue_growth >= t.growth_min_growth && fcf_margin >= 0.0 {
            GrowthStage::Growth
        } else if revenue_growth >= t.mature_min_growth {
            GrowthStage::Mature
        } else {
            GrowthStage::Decline
        }
    }

    /// Classifies a set of signals.
    #[must_use]
    pub fn classify(&self, signals: &FinancialSignals) -> Classification {
        let fcf_margin = signals.fcf_margin();
        let stage = self.stage_for(signals.revenue_growth, fcf_margin);

        log::trace!(
            "classified growth={} fcf_margin={} as {}",
            signals.revenue_growth,
            fcf_margin,
            stage
        );

        Classification {
            stage,
            strategy: ValuationStrategy::for_stage(stage),
            fcf_margin,
            signals: *signals,
        }
    }
}

/// Classifies signals with the standard 40% / 20% / 5% thresholds.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use vantage_analytics::classify;
/// use vantage_core::{FinancialSignals, GrowthStage, ValuationMethod};
///
/// let signals = FinancialSignals::new(dec!(1000), 0.25, dec!(50), 0.10);
/// let (stage, strategy) = classify(&signals);
/// assert_eq!(stage, GrowthStage::Growth);
/// assert_eq!(strategy.weight(ValuationMethod::Cca), 0.60);
/// ```
#[must_use]
pub fn classify(signals: &FinancialSignals) -> (GrowthStage, &'static ValuationStrategy) {
    GrowthStageClassifier::default().classify(signals).into_pair()
}

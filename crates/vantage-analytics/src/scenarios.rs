//! Bull / base / bear re-classification.
//!
//! Stresses revenue growth with the configured multipliers and reports how
//! the stage, and so the weighting, moves across cases.

use serde::{Deserialize, Serialize};
use std::fmt;

use vantage_config::ScenarioConfig;
use vantage_core::{FinancialSignals, GrowthStage};

use crate::classifier::{Classification, GrowthStageClassifier};

/// A named growth scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScenarioCase {
    /// Downside growth.
    Bear,
    /// Growth as reported.
    Base,
    /// Upside growth.
    Bull,
}

impl ScenarioCase {
    /// All cases from worst to best.
    pub const ALL: [ScenarioCase; 3] = [ScenarioCase::Bear, ScenarioCase::Base, ScenarioCase::Bull];

    /// Returns the multiplier for this case.
    #[must_use]
    pub fn multiplier(&self, config: &ScenarioConfig) -> f64 {
        match self {
            Self::Bear => config.bear,
            Self::Base => config.base,
            Self::Bull => config.bull,
        }
    }
}

impl fmt::Display for ScenarioCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScenarioCase::Bear => "Bear",
            ScenarioCase::Base => "Base",
            ScenarioCase::Bull => "Bull",
        };
        write!(f, "{name}")
    }
}

/// Classification under one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    /// Which case this is.
    pub case: ScenarioCase,
    /// Multiplier applied to revenue growth.
    pub multiplier: f64,
    /// Classification of the stressed signals.
    pub classification: Classification,
}

/// Classifications across bear, base and bull cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioAnalysis {
    /// One outcome per case, bear first.
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ScenarioAnalysis {
    /// Returns the outcome for a case.
    #[must_use]
    pub fn outcome(&self, case: ScenarioCase) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.case == case)
    }

    /// Returns the stage for a case.
    #[must_use]
    pub fn stage(&self, case: ScenarioCase) -> Option<GrowthStage> {
        self.outcome(case).map(|o| o.classification.stage)
    }

    /// Returns true if every case lands in the same stage.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.outcomes
            .windows(2)
            .all(|w| w[0].classification.stage == w[1].classification.stage)
    }
}

/// Classifies the bear, base and bull variants of a set of signals.
///
/// Only revenue growth is stressed; FCF margin is held fixed.
#[must_use]
pub fn run_scenarios(
    classifier: &GrowthStageClassifier,
    signals: &FinancialSignals,
    config: &ScenarioConfig,
) -> ScenarioAnalysis {
    let outcomes: Vec<ScenarioOutcome> = ScenarioCase::ALL
        .iter()
        .map(|&case| {
            let multiplier = case.multiplier(config);
            let stressed = signals.with_growth_multiplier(multiplier);
            ScenarioOutcome {
                case,
                multiplier,
                classification: classifier.classify(&stressed),
            }
        })
        .collect();

    let analysis = ScenarioAnalysis { outcomes };
    if !analysis.is_stable() {
        log::debug!(
            "Stage changes across scenarios: bear={:?} base={:?} bull={:?}",
            analysis.stage(ScenarioCase::Bear),
            analysis.stage(ScenarioCase::Base),
            analysis.stage(ScenarioCase::Bull)
        );
    }
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_stable_mature() {
        let signals = FinancialSignals::new(dec!(1000), 0.12, dec!(100), 0.15);
        let analysis = run_scenarios(
            &GrowthStageClassifier::default(),
            &signals,
            &ScenarioConfig::default(),
        );
        // 0.06 / 0.12 / 0.18
        assert!(analysis.is_stable());
        assert_eq!(analysis.stage(ScenarioCase::Bull), Some(GrowthStage::Mature));
    }

    #[test]
    fn test_growth_company_shifts_stage() {
        let signals = FinancialSignals::new(dec!(1000), 0.30, dec!(50), 0.10);
        let analysis = run_scenarios(
            &GrowthStageClassifier::default(),
            &signals,
            &ScenarioConfig::default(),
        );
        assert_eq!(analysis.stage(ScenarioCase::Bear), Some(GrowthStage::Mature));
        assert_eq!(analysis.stage(ScenarioCase::Base), Some(GrowthStage::Growth));
        // Positive margin keeps the bull case out of hypergrowth.
        assert_eq!(analysis.stage(ScenarioCase::Bull), Some(GrowthStage::Growth));
        assert!(!analysis.is_stable());
    }

    #[test]
    fn test_cash_burner_bull_case_is_hypergrowth() {
        let signals = FinancialSignals::new(dec!(1000), 0.30, dec!(-50), -0.10);
        let analysis = run_scenarios(
            &GrowthStageClassifier::default(),
            &signals,
            &ScenarioConfig::default(),
        );
        assert_eq!(analysis.stage(ScenarioCase::Base), Some(GrowthStage::Mature));
        assert_eq!(analysis.stage(ScenarioCase::Bull), Some(GrowthStage::Hypergrowth));
    }

    #[test]
    fn test_outcomes_record_multipliers() {
        let signals = FinancialSignals::new(dec!(1000), 0.10, dec!(10), 0.05);
        let config = ScenarioConfig::new(0.25, 1.0, 2.0);
        let analysis = run_scenarios(&GrowthStageClassifier::default(), &signals, &config);

        assert_eq!(analysis.outcomes.len(), 3);
        let bear = analysis.outcome(ScenarioCase::Bear).unwrap();
        assert_eq!(bear.multiplier, 0.25);
        assert_relative_eq!(
            bear.classification.signals.revenue_growth,
            0.025,
            epsilon = 1e-12
        );
        assert_eq!(bear.classification.stage, GrowthStage::Decline);
    }

    #[test]
    fn test_case_display_and_order() {
        assert_eq!(ScenarioCase::Bear.to_string(), "Bear");
        assert!(ScenarioCase::Bear < ScenarioCase::Bull);
        assert_eq!(ScenarioCase::Bull.multiplier(&ScenarioConfig::default()), 1.5);
    }
}

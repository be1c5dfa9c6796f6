//! Valuation strategies: the fixed weighting table for each growth stage.
//!
//! The four strategies are compile-time constants. They are shared by every
//! caller and never change at runtime.

use serde::Serialize;

use vantage_core::{GrowthStage, TrustLevel, ValuationMethod, VantageError, VantageResult};

/// Tolerance used when checking that a stage's weights sum to one.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Weight and trust assigned to one valuation method within a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodAllocation {
    /// The valuation method.
    pub method: ValuationMethod,
    /// Blend weight in `[0, 1]`.
    pub weight: f64,
    /// Confidence in this method's output at this stage.
    pub trust: TrustLevel,
}

impl MethodAllocation {
    const fn new(method: ValuationMethod, weight: f64, trust: TrustLevel) -> Self {
        Self {
            method,
            weight,
            trust,
        }
    }
}

/// Valuation weighting and guidance for one growth stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuationStrategy {
    /// Stage this strategy applies to.
    pub stage: GrowthStage,
    /// Methods relevant to the stage with their weights and trust levels.
    pub allocations: &'static [MethodAllocation],
    /// The dominant valuation approach for the stage.
    pub primary_method: &'static str,
    /// Analyst guidance for the stage.
    pub guidance: &'static str,
    /// How to read the DCF output at this stage.
    pub dcf_note: &'static str,
    /// How to read the CCA output at this stage.
    pub cca_note: &'static str,
}

/// Early-stage, cash-burning companies: value on revenue multiples.
pub static HYPERGROWTH_STRATEGY: ValuationStrategy = ValuationStrategy {
    stage: GrowthStage::Hypergrowth,
    allocations: &[
        MethodAllocation::new(ValuationMethod::Dcf, 0.10, TrustLevel::Low),
        MethodAllocation::new(ValuationMethod::Cca, 0.80, TrustLevel::High),
        MethodAllocation::new(ValuationMethod::Scenarios, 0.10, TrustLevel::Medium),
    ],
    primary_method: "CCA Revenue Multiple",
    guidance: "Value on forward revenue multiples against high-growth peers. Cash flows are \
               negative and terminal value dominates any DCF, so treat intrinsic value as a \
               sanity check only.",
    dcf_note: "Highly speculative: negative near-term free cash flow leaves nearly all value \
               in the terminal year.",
    cca_note: "Primary anchor: use EV/Revenue against peers with comparable growth and gross \
               margin.",
};

/// Profitable growers: growth-adjusted multiples with DCF support.
pub static GROWTH_STRATEGY: ValuationStrategy = ValuationStrategy {
    stage: GrowthStage::Growth,
    allocations: &[
        MethodAllocation::new(ValuationMethod::Dcf, 0.30, TrustLevel::Medium),
        MethodAllocation::new(ValuationMethod::Cca, 0.60, TrustLevel::High),
        MethodAllocation::new(ValuationMethod::Scenarios, 0.10, TrustLevel::Medium),
    ],
    primary_method: "Growth-Adjusted CCA",
    guidance: "Lead with growth-adjusted multiples and cross-check with a DCF that fades growth \
               toward the long-run rate.",
    dcf_note: "Meaningful but sensitive to how quickly growth fades; run bull and bear cases.",
    cca_note: "Adjust multiples for growth differentials (PEG, EV/EBITDA-to-growth).",
};

/// Steady, cash-generative companies: intrinsic value leads.
pub static MATURE_STRATEGY: ValuationStrategy = ValuationStrategy {
    stage: GrowthStage::Mature,
    allocations: &[
        MethodAllocation::new(ValuationMethod::Dcf, 0.60, TrustLevel::High),
        MethodAllocation::new(ValuationMethod::Cca, 0.30, TrustLevel::Medium),
        MethodAllocation::new(ValuationMethod::Lbo, 0.10, TrustLevel::Low),
    ],
    primary_method: "Discounted Cash Flow",
    guidance: "Cash flows are predictable enough for a DCF to lead. Use trading multiples to \
               validate and an LBO floor to bound the downside.",
    dcf_note: "Most reliable method at this stage: stable margins and reinvestment rates.",
    cca_note: "Use EV/EBITDA and P/E against mature peers as a cross-check.",
};

/// Low-growth or contracting companies: asset-based and distressed approaches.
pub static DECLINE_STRATEGY: ValuationStrategy = ValuationStrategy {
    stage: GrowthStage::Decline,
    allocations: &[
        MethodAllocation::new(ValuationMethod::Dcf, 0.0, TrustLevel::None),
        MethodAllocation::new(ValuationMethod::Cca, 0.50, TrustLevel::Medium),
        MethodAllocation::new(ValuationMethod::Liquidation, 0.50, TrustLevel::High),
    ],
    primary_method: "Distressed Valuation",
    guidance: "Going-concern assumptions are weak. Weigh trading multiples of distressed peers \
               against the liquidation value of the asset base.",
    dcf_note: "Not meaningful: shrinking revenue makes perpetuity growth assumptions unreliable.",
    cca_note: "Use peers in similar decline; apply a discount for refinancing risk.",
};

impl ValuationStrategy {
    /// Returns the strategy for a stage.
    #[must_use]
    pub fn for_stage(stage: GrowthStage) -> &'static ValuationStrategy {
        match stage {
            GrowthStage::Hypergrowth => &HYPERGROWTH_STRATEGY,
            GrowthStage::Growth => &GROWTH_STRATEGY,
            GrowthStage::Mature => &MATURE_STRATEGY,
            GrowthStage::Decline => &DECLINE_STRATEGY,
        }
    }

    /// Returns all four strategies in classification priority order.
    #[must_use]
    pub fn all() -> [&'static ValuationStrategy; 4] {
        GrowthStage::ALL.map(Self::for_stage)
    }

    /// Returns the blend weight for a method, or 0.0 if it is not used.
    #[must_use]
    pub fn weight(&self, method: ValuationMethod) -> f64 {
        self.allocation(method).map_or(0.0, |a| a.weight)
    }

    /// Returns the trust level for a method, if the strategy rates it.
    #[must_use]
    pub fn trust(&self, method: ValuationMethod) -> Option<TrustLevel> {
        self.allocation(method).map(|a| a.trust)
    }

    /// Returns the allocation entry for a method.
    #[must_use]
    pub fn allocation(&self, method: ValuationMethod) -> Option<&'static MethodAllocation> {
        let allocations: &'static [MethodAllocation] = self.allocations;
        allocations.iter().find(|a| a.method == method)
    }

    /// Iterates over `(method, weight)` pairs.
    pub fn weights(&self) -> impl Iterator<Item = (ValuationMethod, f64)> + 'static {
        let allocations: &'static [MethodAllocation] = self.allocations;
        allocations.iter().map(|a| (a.method, a.weight))
    }

    /// Iterates over `(method, trust)` pairs.
    pub fn trust_levels(&self) -> impl Iterator<Item = (ValuationMethod, TrustLevel)> + 'static {
        let allocations: &'static [MethodAllocation] = self.allocations;
        allocations.iter().map(|a| (a.method, a.trust))
    }

    /// Methods relevant to this stage, in table order.
    pub fn methods(&self) -> impl Iterator<Item = ValuationMethod> + 'static {
        let allocations: &'static [MethodAllocation] = self.allocations;
        allocations.iter().map(|a| a.method)
    }

    /// Sum of all method weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.allocations.iter().map(|a| a.weight).sum()
    }

    /// Checks that weights are non-negative and sum to one.
    pub fn check_weights(&self) -> VantageResult<()> {
        let total = self.total_weight();
        let negative = self.allocations.iter().any(|a| a.weight < 0.0);
        if negative || (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(VantageError::invalid_weights(self.stage.code(), total));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_sum_to_one() {
        for strategy in ValuationStrategy::all() {
            assert_relative_eq!(strategy.total_weight(), 1.0, epsilon = WEIGHT_TOLERANCE);
            assert!(strategy.check_weights().is_ok());
        }
    }

    #[test]
    fn test_for_stage_matches_stage() {
        for stage in GrowthStage::ALL {
            assert_eq!(ValuationStrategy::for_stage(stage).stage, stage);
        }
    }

    #[test]
    fn test_hypergrowth_table() {
        let s = ValuationStrategy::for_stage(GrowthStage::Hypergrowth);
        assert_eq!(s.weight(ValuationMethod::Dcf), 0.10);
        assert_eq!(s.weight(ValuationMethod::Cca), 0.80);
        assert_eq!(s.weight(ValuationMethod::Scenarios), 0.10);
        assert_eq!(s.weight(ValuationMethod::Lbo), 0.0);
        assert_eq!(s.primary_method, "CCA Revenue Multiple");
        assert_eq!(s.trust(ValuationMethod::Dcf), Some(TrustLevel::Low));
        assert_eq!(s.trust(ValuationMethod::Cca), Some(TrustLevel::High));
        assert_eq!(s.trust(ValuationMethod::Scenarios), Some(TrustLevel::Medium));
    }

    #[test]
    fn test_growth_table() {
        let s = ValuationStrategy::for_stage(GrowthStage::Growth);
        assert_eq!(s.weight(ValuationMethod::Dcf), 0.30);
        assert_eq!(s.weight(ValuationMethod::Cca), 0.60);
        assert_eq!(s.weight(ValuationMethod::Scenarios), 0.10);
        assert_eq!(s.primary_method, "Growth-Adjusted CCA");
        assert_eq!(s.trust(ValuationMethod::Dcf), Some(TrustLevel::Medium));
        assert_eq!(s.trust(ValuationMethod::Cca), Some(TrustLevel::High));
        assert_eq!(s.trust(ValuationMethod::Scenarios), Some(TrustLevel::Medium));
    }

    #[test]
    fn test_mature_table() {
        let s = ValuationStrategy::for_stage(GrowthStage::Mature);
        assert_eq!(s.weight(ValuationMethod::Dcf), 0.60);
        assert_eq!(s.weight(ValuationMethod::Cca), 0.30);
        assert_eq!(s.weight(ValuationMethod::Lbo), 0.10);
        assert_eq!(s.primary_method, "Discounted Cash Flow");
        assert_eq!(s.trust(ValuationMethod::Dcf), Some(TrustLevel::High));
        assert_eq!(s.trust(ValuationMethod::Cca), Some(TrustLevel::Medium));
        assert_eq!(s.trust(ValuationMethod::Lbo), Some(TrustLevel::Low));
        assert_eq!(s.trust(ValuationMethod::Liquidation), None);
    }

    #[test]
    fn test_decline_table() {
        let s = ValuationStrategy::for_stage(GrowthStage::Decline);
        assert_eq!(s.weight(ValuationMethod::Dcf), 0.0);
        assert_eq!(s.weight(ValuationMethod::Cca), 0.50);
        assert_eq!(s.weight(ValuationMethod::Liquidation), 0.50);
        assert_eq!(s.primary_method, "Distressed Valuation");
        assert_eq!(s.trust(ValuationMethod::Dcf), Some(TrustLevel::None));
        assert_eq!(s.trust(ValuationMethod::Cca), Some(TrustLevel::Medium));
        assert_eq!(s.trust(ValuationMethod::Liquidation), Some(TrustLevel::High));
    }

    #[test]
    fn test_notes_non_empty() {
        for strategy in ValuationStrategy::all() {
            assert!(!strategy.guidance.is_empty());
            assert!(!strategy.dcf_note.is_empty());
            assert!(!strategy.cca_note.is_empty());
            assert!(!strategy.primary_method.is_empty());
        }
    }

    #[test]
    fn test_weights_non_negative() {
        for strategy in ValuationStrategy::all() {
            for (_, weight) in strategy.weights() {
                assert!(weight >= 0.0);
            }
            assert_eq!(strategy.methods().count(), strategy.trust_levels().count());
        }
    }

    #[test]
    fn test_check_weights_rejects_bad_table() {
        static BROKEN: ValuationStrategy = ValuationStrategy {
            stage: GrowthStage::Mature,
            allocations: &[MethodAllocation::new(ValuationMethod::Dcf, 0.9, TrustLevel::High)],
            primary_method: "DCF",
            guidance: "g",
            dcf_note: "d",
            cca_note: "c",
        };
        let err = BROKEN.check_weights().unwrap_err();
        assert!(matches!(err, VantageError::InvalidWeights { .. }));
    }

    #[test]
    fn test_serializes_with_method_codes() {
        let json = serde_json::to_value(ValuationStrategy::for_stage(GrowthStage::Decline)).unwrap();
        assert_eq!(json["stage"], "DECLINE");
        assert_eq!(json["allocations"][2]["method"], "Liquidation");
        assert_eq!(json["allocations"][0]["trust"], "NONE");
    }
}

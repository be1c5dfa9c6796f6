//! Blending per-method valuations into a single recommendation.
//!
//! Valuation engines are external; this module only applies a strategy's
//! weights to whatever outputs they produced.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use vantage_core::{GrowthStage, ValuationMethod, VantageError, VantageResult};

use crate::strategy::{ValuationStrategy, WEIGHT_TOLERANCE};

/// Outputs of the valuation engines, keyed by method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodValuations {
    values: BTreeMap<ValuationMethod, Decimal>,
}

impl MethodValuations {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valuation, replacing any previous value for the method.
    #[must_use]
    pub fn with(mut self, method: ValuationMethod, value: Decimal) -> Self {
        self.insert(method, value);
        self
    }

    /// Inserts a valuation and returns the previous value, if any.
    pub fn insert(&mut self, method: ValuationMethod, value: Decimal) -> Option<Decimal> {
        self.values.insert(method, value)
    }

    /// Returns the valuation for a method.
    #[must_use]
    pub fn get(&self, method: ValuationMethod) -> Option<Decimal> {
        self.values.get(&method).copied()
    }

    /// Number of methods with a valuation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no valuations are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(method, value)` pairs in method order.
    pub fn iter(&self) -> impl Iterator<Item = (ValuationMethod, Decimal)> + '_ {
        self.values.iter().map(|(m, v)| (*m, *v))
    }
}

impl FromIterator<(ValuationMethod, Decimal)> for MethodValuations {
    fn from_iter<I: IntoIterator<Item = (ValuationMethod, Decimal)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// One method's share of a blended valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodContribution {
    /// The valuation method.
    pub method: ValuationMethod,
    /// Engine output for the method.
    pub value: Decimal,
    /// Weight from the strategy table.
    pub weight: f64,
    /// Weight actually applied after renormalizing over available methods.
    pub effective_weight: f64,
    /// `value * effective_weight`.
    pub contribution: Decimal,
}

/// Weighted combination of per-method valuations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendedValuation {
    /// Stage whose weights were applied.
    pub stage: GrowthStage,
    /// Blended value.
    pub value: Decimal,
    /// Per-method breakdown, in strategy table order.
    pub contributions: Vec<MethodContribution>,
    /// Share of the strategy's weight that had a valuation, in `(0, 1]`.
    pub coverage: f64,
}

impl BlendedValuation {
    /// Returns true if every weighted method contributed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        (self.coverage - 1.0).abs() <= WEIGHT_TOLERANCE
    }

    /// Returns the contribution of a method, if it took part.
    #[must_use]
    pub fn contribution(&self, method: ValuationMethod) -> Option<&MethodContribution> {
        self.contributions.iter().find(|c| c.method == method)
    }
}

/// Blends engine outputs using a strategy's weights.
///
/// Methods with zero weight, and valuations for methods the strategy does not
/// use, are ignored. When some weighted methods have no valuation, the weights
/// of the remaining ones are scaled up to sum to one and `coverage` records
/// how much of the original weight was present.
///
/// # Errors
///
/// Returns [`VantageError::NoValuationsAvailable`] if none of the weighted
/// methods has a valuation.
pub fn blend(
    strategy: &ValuationStrategy,
    valuations: &MethodValuations,
) -> VantageResult<BlendedValuation> {
    let present: Vec<(ValuationMethod, f64, Decimal)> = strategy
        .weights()
        .filter(|(_, weight)| *weight > 0.0)
        .filter_map(|(method, weight)| valuations.get(method).map(|v| (method, weight, v)))
        .collect();

    let present_weight: f64 = present.iter().map(|(_, w, _)| w).sum();
    if present.is_empty() || present_weight <= 0.0 {
        return Err(VantageError::no_valuations(strategy.stage.code()));
    }

    let coverage = present_weight / strategy.total_weight();
    if coverage < 1.0 - WEIGHT_TOLERANCE {
        log::warn!(
            "Blending {} with {:.1}% of weight available; renormalizing",
            strategy.stage,
            coverage * 100.0
        );
    }
    for (method, _) in valuations.iter() {
        if strategy.weight(method) <= 0.0 {
            log::debug!("Ignoring {} valuation: no weight at stage {}", method, strategy.stage);
        }
    }

    let mut value = Decimal::ZERO;
    let mut contributions = Vec::with_capacity(present.len());
    for (method, weight, method_value) in present {
        let effective_weight = weight / present_weight;
        let factor = Decimal::from_f64(effective_weight).ok_or_else(|| {
            VantageError::invalid_argument("weight", format!("not representable: {}", weight))
        })?;
        let contribution = method_value * factor;
        value += contribution;
        contributions.push(MethodContribution {
            method,
            value: method_value,
            weight,
            effective_weight,
            contribution,
        });
    }

    Ok(BlendedValuation {
        stage: strategy.stage,
        value,
        contributions,
        coverage,
    })
}

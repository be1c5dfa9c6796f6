//! # Vantage
//!
//! Growth-stage classification and valuation weighting for equity analysis.
//!
//! Vantage assigns a company to one of four growth stages from its revenue
//! growth and free-cash-flow margin, and returns the fixed weighting of
//! valuation methods (DCF, comparables, scenarios, LBO, liquidation) that
//! suits that stage. It does not compute the valuations themselves; it tells
//! you how much to trust each one and blends them once you have them.
//!
//! | Stage | Rule | Primary method |
//! |-------|------|----------------|
//! | Hypergrowth | growth > 40% and FCF margin < 0 | CCA revenue multiple |
//! | Growth | growth >= 20% and FCF margin >= 0 | Growth-adjusted CCA |
//! | Mature | growth >= 5% | DCF |
//! | Decline | otherwise | Distressed valuation |
//!
//! ## Crates
//!
//! - [`vantage_core`]: signals, stages, methods and errors
//! - [`vantage_config`]: thresholds, scenario multipliers and batch settings
//! - [`vantage_analytics`]: the classifier, strategy table, blending, scenarios and batches
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use vantage::prelude::*;
//!
//! let signals = FinancialSignals::new(dec!(1000), 0.25, dec!(50), 0.10);
//! let (stage, strategy) = classify(&signals);
//!
//! assert_eq!(stage, GrowthStage::Growth);
//! assert_eq!(strategy.weight(ValuationMethod::Cca), 0.60);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel batch classification

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vantage_analytics;
pub use vantage_config;
pub use vantage_core;

pub use vantage_analytics::{
    blend, classify, classify_batch, run_scenarios, BatchReport, BlendedValuation,
    Classification, CompanySignals, GrowthStageClassifier, MethodValuations, ScenarioAnalysis,
    ScenarioCase, ValuationStrategy,
};
pub use vantage_config::{ConfigError, VantageConfig};
pub use vantage_core::{
    FinancialSignals, GrowthStage, TrustLevel, ValuationMethod, VantageError, VantageResult,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use vantage_analytics::prelude::*;
    pub use vantage_config::prelude::*;
}

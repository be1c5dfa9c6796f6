//! # Vantage Analytics
//!
//! Growth-stage classification and valuation weighting.
//!
//! - **Classification**: [`GrowthStageClassifier`] assigns one of four stages
//!   from revenue growth and FCF margin
//! - **Strategies**: [`ValuationStrategy`] holds the fixed method weights,
//!   trust levels and guidance per stage
//! - **Blending**: [`blend`] combines external engine outputs with those weights
//! - **Scenarios**: [`run_scenarios`] re-classifies bear / base / bull growth
//! - **Batches**: [`classify_batch`] classifies many companies and summarizes
//!   the stage distribution
//!
//! Everything here is pure and synchronous. Strategies are `static` and may be
//! shared across threads without coordination.
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use vantage_analytics::prelude::*;
//!
//! let classifier = GrowthStageClassifier::default();
//! let signals = FinancialSignals::new(dec!(1000), 0.08, dec!(100), 0.15);
//!
//! let result = classifier.classify(&signals);
//! assert_eq!(result.stage, GrowthStage::Mature);
//! assert_eq!(result.strategy.primary_method, "Discounted Cash Flow");
//!
//! let valuations = MethodValuations::new()
//!     .with(ValuationMethod::Dcf, dec!(120))
//!     .with(ValuationMethod::Cca, dec!(100))
//!     .with(ValuationMethod::Lbo, dec!(90));
//! let blended = blend(result.strategy, &valuations).unwrap();
//! assert!(blended.is_complete());
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel batch classification

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod blend;
pub mod classifier;
pub mod scenarios;
pub mod strategy;

pub use batch::{
    classify_batch, BatchReport, CompanyClassification, CompanySignals, StageBucket,
    StageDistribution,
};
pub use blend::{blend, BlendedValuation, MethodContribution, MethodValuations};
pub use classifier::{classify, Classification, GrowthStageClassifier};
pub use scenarios::{run_scenarios, ScenarioAnalysis, ScenarioCase, ScenarioOutcome};
pub use strategy::{MethodAllocation, ValuationStrategy, WEIGHT_TOLERANCE};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{classify_batch, BatchReport, CompanySignals};
    pub use crate::blend::{blend, BlendedValuation, MethodValuations};
    pub use crate::classifier::{classify, Classification, GrowthStageClassifier};
    pub use crate::scenarios::{run_scenarios, ScenarioAnalysis, ScenarioCase};
    pub use crate::strategy::ValuationStrategy;
    pub use vantage_core::prelude::*;
}

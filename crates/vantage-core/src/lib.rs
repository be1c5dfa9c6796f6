//! # Vantage Core
//!
//! Core types and errors for the Vantage growth-stage valuation library.
//!
//! This crate provides the building blocks shared by every other Vantage crate:
//!
//! - **Signals**: [`FinancialSignals`], the four inputs the stage classifier reads
//! - **Stages**: [`GrowthStage`], the four mutually exclusive maturity buckets
//! - **Methods**: [`ValuationMethod`] and the qualitative [`TrustLevel`] attached to each
//! - **Errors**: [`VantageError`] and the [`VantageResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use vantage_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let signals = FinancialSignals::new(dec!(1000), 0.45, dec!(-50), -0.05);
//! assert!(signals.fcf_margin() < 0.0);
//! assert_eq!(GrowthStage::Hypergrowth.code(), "HYPERGROWTH");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{VantageError, VantageResult};
    pub use crate::types::{FinancialSignals, GrowthStage, TrustLevel, ValuationMethod};
}

// Re-export commonly used types at crate root
pub use error::{VantageError, VantageResult};
pub use types::{FinancialSignals, GrowthStage, TrustLevel, ValuationMethod, FCF_MARGIN_UNDEFINED};

//! Domain types for growth-stage valuation.
//!
//! - [`FinancialSignals`]: Revenue, growth, free cash flow and EBITDA margin
//! - [`GrowthStage`]: Hypergrowth, growth, mature or decline
//! - [`ValuationMethod`]: DCF, CCA, scenarios, LBO, liquidation
//! - [`TrustLevel`]: Qualitative confidence in a method's output

mod method;
mod signals;
mod stage;

pub use method::{TrustLevel, ValuationMethod};
pub use signals::{FinancialSignals, FCF_MARGIN_UNDEFINED};
pub use stage::GrowthStage;

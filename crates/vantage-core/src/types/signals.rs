//! Financial signals consumed by the growth-stage classifier.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{VantageError, VantageResult};

/// FCF margin reported when revenue is zero or negative.
///
/// Treated as "undefined, unfavorable": it is negative, so it never satisfies
/// a band that requires a non-negative margin.
pub const FCF_MARGIN_UNDEFINED: f64 = -1.0;

/// The four financial signals a classification reads.
///
/// Monetary amounts (`revenue`, `free_cash_flow`) are decimals in the same
/// currency unit; ratios are fractions (0.40 = 40%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSignals {
    /// Period revenue. Only used as the FCF margin divisor; may be zero.
    pub revenue: Decimal,
    /// Year-over-year revenue growth as a fraction. Negative when contracting.
    pub revenue_growth: f64,
    /// Free cash flow to firm for the same period.
    pub free_cash_flow: Decimal,
    /// EBITDA margin as a fraction. Carried for reporting, not classification.
    #[serde(default)]
    pub ebitda_margin: f64,
}

impl FinancialSignals {
    /// Creates a new set of signals.
    ///
    /// Accepts any values; classification is total over them.
    #[must_use]
    pub fn new(
        revenue: Decimal,
        revenue_growth: f64,
        free_cash_flow: Decimal,
        ebitda_margin: f64,
    ) -> Self {
        Self {
            revenue,
            revenue_growth,
            free_cash_flow,
            ebitda_margin,
        }
    }

    /// Creates signals from externally sourced data, rejecting non-finite ratios.
    ///
    /// This is the boundary where upstream data gets checked; values that
    /// pass here are guaranteed finite.
    pub fn try_new(
        revenue: Decimal,
        revenue_growth: f64,
        free_cash_flow: Decimal,
        ebitda_margin: f64,
    ) -> VantageResult<Self> {
        if !revenue_growth.is_finite() {
            return Err(VantageError::invalid_argument(
                "revenue_growth",
                format!("must be a finite number, got {}", revenue_growth),
            ));
        }
        if !ebitda_margin.is_finite() {
            return Err(VantageError::invalid_argument(
                "ebitda_margin",
                format!("must be a finite number, got {}", ebitda_margin),
            ));
        }
        Ok(Self::new(
            revenue,
            revenue_growth,
            free_cash_flow,
            ebitda_margin,
        ))
    }

    /// Creates signals from `f64` amounts, as delivered by most data feeds.
    pub fn from_f64(
        revenue: f64,
        revenue_growth: f64,
        free_cash_flow: f64,
        ebitda_margin: f64,
    ) -> VantageResult<Self> {
        let revenue = Decimal::from_f64_retain(revenue).ok_or_else(|| {
            VantageError::invalid_argument("revenue", format!("not representable: {}", revenue))
        })?;
        let free_cash_flow = Decimal::from_f64_retain(free_cash_flow).ok_or_else(|| {
            VantageError::invalid_argument(
                "free_cash_flow",
                format!("not representable: {}", free_cash_flow),
            )
        })?;
        Self::try_new(revenue, revenue_growth, free_cash_flow, ebitda_margin)
    }

    /// Free cash flow as a fraction of revenue.
    ///
    /// Returns [`FCF_MARGIN_UNDEFINED`] when revenue is zero or negative.
    #[must_use]
    pub fn fcf_margin(&self) -> f64 {
        if self.revenue <= Decimal::ZERO {
            return FCF_MARGIN_UNDEFINED;
        }
        match self
            .free_cash_flow
            .checked_div(self.revenue)
            .and_then(|margin| margin.to_f64())
        {
            // A nonzero FCF must never round to a zero margin.
            Some(margin) if margin != 0.0 || self.free_cash_flow.is_zero() => margin,
            // Decimal overflow or underflow on extreme ratios; f64 keeps the sign.
            _ => {
                let fcf = self.free_cash_flow.to_f64().unwrap_or(0.0);
                let revenue = self.revenue.to_f64().unwrap_or(f64::MIN_POSITIVE);
                fcf / revenue
            }
        }
    }

    /// Returns a copy with `revenue_growth` stressed by a scenario multiplier.
    ///
    /// A multiplier above 1.0 always moves growth up and one below 1.0 always
    /// moves it down, including for contracting companies:
    /// `growth + (multiplier - 1) * |growth|`.
    #[must_use]
    pub fn with_growth_multiplier(&self, multiplier: f64) -> Self {
        let growth = self.revenue_growth;
        Self {
            revenue_growth: growth + (multiplier - 1.0) * growth.abs(),
            ..*self
        }
    }
}

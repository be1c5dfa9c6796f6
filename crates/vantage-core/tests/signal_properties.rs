//! Property-based tests for `FinancialSignals`.
//!
//! - The FCF margin is total: it never panics and is finite for finite inputs
//! - Non-positive revenue always yields the sentinel margin
//! - A nonzero FCF never rounds to a zero margin, even against huge revenue
//! - Scenario multipliers preserve bear <= base <= bull ordering

use proptest::prelude::*;
use rust_decimal::Decimal;
use vantage_core::{FinancialSignals, FCF_MARGIN_UNDEFINED};

fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_i64..1_000_000_000_i64, 0u32..6).prop_map(|(mantissa, scale)| {
        Decimal::new(mantissa, scale)
    })
}

/// Positive revenue from small to `Decimal::MAX`.
fn positive_revenue() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (1i64..1_000_000_000).prop_map(Decimal::from),
        (any::<u32>(), any::<u32>(), 1u32..=u32::MAX, 0u32..=28)
            .prop_map(|(lo, mid, hi, scale)| Decimal::from_parts(lo, mid, hi, false, scale)),
        Just(Decimal::MAX),
    ]
}

/// Cash flows including values too small to survive a decimal division.
fn cash_flow() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        amount(),
        (-1_000i64..1_000, 20u32..=28).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale)),
    ]
}

proptest! {
    #[test]
    fn fcf_margin_is_finite(revenue in amount(), fcf in amount(), growth in -2.0f64..5.0) {
        let signals = FinancialSignals::new(revenue, growth, fcf, 0.0);
        let margin = signals.fcf_margin();
        prop_assert!(margin.is_finite());
        if revenue <= Decimal::ZERO {
            prop_assert_eq!(margin, FCF_MARGIN_UNDEFINED);
        }
    }

    #[test]
    fn fcf_margin_sign_follows_fcf(revenue in positive_revenue(), fcf in cash_flow()) {
        let signals = FinancialSignals::new(revenue, 0.1, fcf, 0.0);
        let margin = signals.fcf_margin();
        if fcf < Decimal::ZERO {
            prop_assert!(margin < 0.0);
        } else if fcf > Decimal::ZERO {
            prop_assert!(margin > 0.0);
        } else {
            prop_assert_eq!(margin, 0.0);
        }
    }

    #[test]
    fn growth_multipliers_preserve_order(growth in -1.0f64..3.0, spread in 0.01f64..1.0) {
        let signals = FinancialSignals::new(Decimal::from(1000), growth, Decimal::from(10), 0.0);
        let bear = signals.with_growth_multiplier(1.0 - spread);
        let base = signals.with_growth_multiplier(1.0);
        let bull = signals.with_growth_multiplier(1.0 + spread);
        prop_assert!(bear.revenue_growth <= base.revenue_growth);
        prop_assert!(base.revenue_growth <= bull.revenue_growth);
        prop_assert_eq!(base.revenue_growth, growth);
    }
}

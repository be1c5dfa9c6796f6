//! Tests that the facade exposes a complete workflow.

use rust_decimal_macros::dec;
use vantage::prelude::*;

#[test]
fn workflow_through_facade() {
    let config = VantageConfig::from_toml_str("[scenarios]\nbull = 2.0\n").unwrap();
    let classifier = GrowthStageClassifier::from_config(&config);

    let companies = vec![
        CompanySignals::new("ROCKET", FinancialSignals::new(dec!(1000), 0.45, dec!(-50), -0.05)),
        CompanySignals::new("UTILITY", FinancialSignals::new(dec!(1000), 0.08, dec!(100), 0.15)),
    ];
    let report = classify_batch(&classifier, &companies, &config.batch);
    assert_eq!(report.distribution.total, 2);
    assert_eq!(
        report.companies_in(GrowthStage::Hypergrowth).collect::<Vec<_>>(),
        vec!["ROCKET"]
    );

    let utility = &report.results[1].classification;
    let blended = blend(
        utility.strategy,
        &MethodValuations::new()
            .with(ValuationMethod::Dcf, dec!(500))
            .with(ValuationMethod::Cca, dec!(400)),
    )
    .unwrap();
    assert!(!blended.is_complete());

    // 0.08 doubled is 0.16, still short of the growth band
    let analysis = run_scenarios(&classifier, &utility.signals, &config.scenarios);
    assert_eq!(analysis.stage(ScenarioCase::Bull), Some(GrowthStage::Mature));
}

#[test]
fn crate_reexports_are_reachable() {
    let strategy = vantage::vantage_analytics::ValuationStrategy::for_stage(GrowthStage::Decline);
    assert_eq!(strategy.weight(ValuationMethod::Liquidation), 0.50);
    let err: vantage::VantageError = "startup".parse::<GrowthStage>().unwrap_err();
    assert!(err.to_string().contains("startup"));
}

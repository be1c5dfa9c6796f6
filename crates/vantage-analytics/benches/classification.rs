//! Benchmarks for growth-stage classification.
//!
//! Run with: cargo bench -p vantage-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use vantage_analytics::prelude::*;
use vantage_config::{BatchConfig, ScenarioConfig};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_company(id: usize) -> CompanySignals {
    let growths = [-0.10, 0.02, 0.06, 0.12, 0.22, 0.35, 0.45, 0.80];
    let fcfs = [-120, -15, 0, 25, 80, 150];
    let growth = growths[id % growths.len()];
    let fcf = Decimal::from(fcfs[id % fcfs.len()]);

    CompanySignals::new(
        format!("CO_{:05}", id),
        FinancialSignals::new(dec!(1000), growth, fcf, 0.1),
    )
}

fn create_batch(size: usize) -> Vec<CompanySignals> {
    (0..size).map(create_company).collect()
}

// =============================================================================
// SINGLE COMPANY
// =============================================================================

fn bench_single_classification(c: &mut Criterion) {
    let classifier = GrowthStageClassifier::default();
    let signals = FinancialSignals::new(dec!(1000), 0.25, dec!(50), 0.10);

    c.bench_function("classify_single", |b| {
        b.iter(|| classifier.classify(black_box(&signals)))
    });
}

fn bench_blend(c: &mut Criterion) {
    let strategy = ValuationStrategy::for_stage(GrowthStage::Mature);
    let valuations = MethodValuations::new()
        .with(ValuationMethod::Dcf, dec!(1200))
        .with(ValuationMethod::Cca, dec!(1000))
        .with(ValuationMethod::Lbo, dec!(900));

    c.bench_function("blend_mature", |b| {
        b.iter(|| blend(black_box(strategy), black_box(&valuations)))
    });
}

fn bench_scenarios(c: &mut Criterion) {
    let classifier = GrowthStageClassifier::default();
    let signals = FinancialSignals::new(dec!(1000), 0.30, dec!(-50), -0.10);
    let config = ScenarioConfig::default();

    c.bench_function("scenarios_three_cases", |b| {
        b.iter(|| run_scenarios(&classifier, black_box(&signals), &config))
    });
}

// =============================================================================
// BATCHES
// =============================================================================

fn bench_batch_sequential(c: &mut Criterion) {
    let classifier = GrowthStageClassifier::default();
    let config = BatchConfig::sequential();

    let mut group = c.benchmark_group("batch_sequential");
    group.sample_size(50);

    for size in [100, 1_000, 10_000].iter() {
        let companies = create_batch(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &companies, |b, companies| {
            b.iter(|| classify_batch(&classifier, black_box(companies), &config))
        });
    }
    group.finish();
}

fn bench_batch_parallel(c: &mut Criterion) {
    let classifier = GrowthStageClassifier::default();
    let config = BatchConfig::default().with_threshold(1);

    let mut group = c.benchmark_group("batch_parallel");
    group.sample_size(50);

    for size in [100, 1_000, 10_000].iter() {
        let companies = create_batch(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &companies, |b, companies| {
            b.iter(|| classify_batch(&classifier, black_box(companies), &config))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_classification,
    bench_blend,
    bench_scenarios,
    bench_batch_sequential,
    bench_batch_parallel,
);
criterion_main!(benches);

//! Classifying many companies at once.
//!
//! Results keep input order. With the `parallel` feature, batches at or above
//! [`BatchConfig::parallel_threshold`] are classified on the rayon pool.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use vantage_config::BatchConfig;
use vantage_core::{FinancialSignals, GrowthStage};

use crate::classifier::{Classification, GrowthStageClassifier};

/// Signals for a named company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySignals {
    /// Company identifier (ticker, name or internal id).
    pub company: String,
    /// The company's financial signals.
    pub signals: FinancialSignals,
}

impl CompanySignals {
    /// Creates a new entry.
    #[must_use]
    pub fn new(company: impl Into<String>, signals: FinancialSignals) -> Self {
        Self {
            company: company.into(),
            signals,
        }
    }
}

/// Classification of a named company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyClassification {
    /// Company identifier.
    pub company: String,
    /// The classification result.
    pub classification: Classification,
}

/// Count and share of companies in one stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StageBucket {
    /// Number of companies.
    pub count: usize,
    /// Share of the batch, in percent.
    pub weight_pct: f64,
}

/// How a batch is spread across the four stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StageDistribution {
    /// Bucket per stage; every stage is present, possibly with a zero count.
    pub by_stage: BTreeMap<GrowthStage, StageBucket>,
    /// Total number of companies.
    pub total: usize,
}

impl StageDistribution {
    /// Builds the distribution from classifications.
    #[must_use]
    pub fn from_classifications<'a, I>(classifications: I) -> Self
    where
        I: IntoIterator<Item = &'a Classification>,
    {
        let mut counts: BTreeMap<GrowthStage, usize> =
            GrowthStage::ALL.iter().map(|s| (*s, 0)).collect();
        let mut total = 0;
        for c in classifications {
            *counts.entry(c.stage).or_default() += 1;
            total += 1;
        }

        let by_stage = counts
            .into_iter()
            .map(|(stage, count)| {
                let weight_pct = if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                (stage, StageBucket { count, weight_pct })
            })
            .collect();

        Self { by_stage, total }
    }

    /// Returns the number of companies in a stage.
    #[must_use]
    pub fn count(&self, stage: GrowthStage) -> usize {
        self.by_stage.get(&stage).map_or(0, |b| b.count)
    }

    /// Returns the share of companies in a stage, in percent.
    #[must_use]
    pub fn weight_pct(&self, stage: GrowthStage) -> f64 {
        self.by_stage.get(&stage).map_or(0.0, |b| b.weight_pct)
    }

    /// Returns the stage holding the most companies, if any.
    ///
    /// Ties go to the earlier stage in priority order.
    #[must_use]
    pub fn dominant_stage(&self) -> Option<GrowthStage> {
        GrowthStage::ALL
            .iter()
            .copied()
            .filter(|s| self.count(*s) > 0)
            .fold(None, |best: Option<GrowthStage>, stage| match best {
                Some(b) if self.count(b) >= self.count(stage) => Some(b),
                _ => Some(stage),
            })
    }
}

/// Output of [`classify_batch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// One result per input, in input order.
    pub results: Vec<CompanyClassification>,
    /// Stage distribution across the batch.
    pub distribution: StageDistribution,
}

impl BatchReport {
    /// Returns the companies classified into a stage.
    pub fn companies_in(&self, stage: GrowthStage) -> impl Iterator<Item = &str> + '_ {
        self.results
            .iter()
            .filter(move |r| r.classification.stage == stage)
            .map(|r| r.company.as_str())
    }
}

/// Classifies every company in a batch.
#[must_use]
pub fn classify_batch(
    classifier: &GrowthStageClassifier,
    companies: &[CompanySignals],
    config: &BatchConfig,
) -> BatchReport {
    let classify_one = |c: &CompanySignals| CompanyClassification {
        company: c.company.clone(),
        classification: classifier.classify(&c.signals),
    };

    let results = maybe_parallel_map(companies, config, classify_one);
    let distribution = StageDistribution::from_classifications(
        results.iter().map(|r| &r.classification),
    );

    log::debug!(
        "Classified {} companies: {} hypergrowth, {} growth, {} mature, {} decline",
        distribution.total,
        distribution.count(GrowthStage::Hypergrowth),
        distribution.count(GrowthStage::Growth),
        distribution.count(GrowthStage::Mature),
        distribution.count(GrowthStage::Decline)
    );

    BatchReport {
        results,
        distribution,
    }
}

#[allow(unused_variables)]
fn maybe_parallel_map<T, U, F>(items: &[T], config: &BatchConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len(), true) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

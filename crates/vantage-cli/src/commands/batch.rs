//! Batch command implementation.
//!
//! Reads companies from CSV, classifies them and summarizes the stage mix.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use vantage_analytics::{classify_batch, BatchReport, CompanySignals, GrowthStageClassifier};
use vantage_config::VantageConfig;
use vantage_core::{FinancialSignals, GrowthStage};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{format_percent, print_header, print_json, print_output};

/// Arguments for the batch command.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV file with columns company,revenue,revenue_growth,free_cash_flow[,ebitda_margin]
    #[arg(short, long)]
    pub input: PathBuf,

    /// Only print the stage distribution
    #[arg(long)]
    pub summary: bool,
}

/// One input line. Amounts are parsed from their text so they stay exact.
#[derive(Debug, Deserialize)]
struct CompanyRecord {
    company: String,
    #[serde(deserialize_with = "rust_decimal::serde::str::deserialize")]
    revenue: Decimal,
    revenue_growth: f64,
    #[serde(deserialize_with = "rust_decimal::serde::str::deserialize")]
    free_cash_flow: Decimal,
    #[serde(default)]
    ebitda_margin: f64,
}

/// One output line.
#[derive(Debug, Clone, Serialize, Tabled)]
struct ResultRow {
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Growth")]
    revenue_growth: String,
    #[tabled(rename = "FCF Margin")]
    fcf_margin: String,
    #[tabled(rename = "Primary Method")]
    primary_method: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct DistributionRow {
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Companies")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// Reads companies from a CSV source.
///
/// Line numbers in errors count the header as line 1.
pub fn read_companies<R: Read>(source: R) -> CliResult<Vec<CompanySignals>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut companies = Vec::new();
    for (index, record) in reader.deserialize::<CompanyRecord>().enumerate() {
        let record = record?;
        let signals = FinancialSignals::try_new(
            record.revenue,
            record.revenue_growth,
            record.free_cash_flow,
            record.ebitda_margin,
        )
        .map_err(|source| CliError::InvalidRow {
            row: index + 2,
            source,
        })?;
        companies.push(CompanySignals::new(record.company, signals));
    }
    Ok(companies)
}

fn load_companies(path: &Path) -> CliResult<Vec<CompanySignals>> {
    let companies = read_companies(File::open(path)?)?;
    tracing::info!(count = companies.len(), path = %path.display(), "Loaded companies");
    Ok(companies)
}

/// Execute the batch command.
pub fn execute(args: BatchArgs, config: &VantageConfig, format: OutputFormat) -> Result<()> {
    let companies = load_companies(&args.input)?;
    let classifier = GrowthStageClassifier::from_config(config);
    let report = classify_batch(&classifier, &companies, &config.batch);

    match format {
        OutputFormat::Table => {
            if !args.summary {
                print_header("Classifications");
                print_output(&result_rows(&report), format)?;
            }
            print_header("Stage Distribution");
            print_output(&distribution_rows(&report), format)?;
        }
        OutputFormat::Json => {
            if args.summary {
                print_json(&report.distribution)?;
            } else {
                print_json(&report)?;
            }
        }
        OutputFormat::Csv => {
            if args.summary {
                print_output(&distribution_rows(&report), format)?;
            } else {
                print_output(&result_rows(&report), format)?;
            }
        }
        OutputFormat::Minimal => {
            if args.summary {
                for stage in GrowthStage::ALL {
                    println!("{} {}", stage, report.distribution.count(stage));
                }
            } else {
                for r in &report.results {
                    println!("{} {}", r.company, r.classification.stage);
                }
            }
        }
    }

    Ok(())
}

fn result_rows(report: &BatchReport) -> Vec<ResultRow> {
    report
        .results
        .iter()
        .map(|r| {
            let c = &r.classification;
            ResultRow {
                company: r.company.clone(),
                stage: c.stage.name().to_string(),
                revenue_growth: format_percent(c.signals.revenue_growth),
                fcf_margin: format_percent(c.fcf_margin),
                primary_method: c.strategy.primary_method.to_string(),
            }
        })
        .collect()
}

fn distribution_rows(report: &BatchReport) -> Vec<DistributionRow> {
    report
        .distribution
        .by_stage
        .iter()
        .map(|(stage, bucket)| DistributionRow {
            stage: stage.name().to_string(),
            count: bucket.count,
            share: format!("{:.1}%", bucket.weight_pct),
        })
        .collect()
}

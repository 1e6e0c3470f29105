use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::input::{QuotationFile, QuotationInfo, QuoteItem};
use crate::scoring::{ProposalMetrics, RankedProposal, WeightConfig};

/// The exported comparison report. Everything a downstream renderer
/// needs to reproduce the comparison table: quotation metadata, the
/// weights that were applied, and the full ranking with per-criterion
/// detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub quotation: QuotationInfo,
    pub items: Vec<QuoteItem>,
    /// Template name the weights came from, or "custom"
    pub weights_source: String,
    pub weights: WeightConfig,
    pub ranking: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub position: usize,
    pub supplier: String,
    pub score: f64,
    pub metrics: ProposalMetrics,
    pub breakdown: Vec<ReportDimension>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDimension {
    pub criterion: String,
    pub raw: f64,
    pub normalized: f64,
    pub weight: f64,
    pub points: f64,
}

/// Assemble a report from a scored ranking. Quotation metadata and quote
/// items pass through untouched.
pub fn build_report(
    file: &QuotationFile,
    ranked: &[RankedProposal],
    weights: &WeightConfig,
    weights_source: &str,
) -> ComparisonReport {
    let ranking = ranked
        .iter()
        .map(|entry| ReportEntry {
            position: entry.position,
            supplier: entry.proposal.supplier.clone(),
            score: entry.result.score,
            metrics: entry.proposal.metrics.clone(),
            breakdown: entry
                .result
                .breakdown
                .dimensions
                .iter()
                .map(|d| ReportDimension {
                    criterion: d.label.to_string(),
                    raw: d.raw,
                    normalized: d.normalized,
                    weight: d.weight,
                    points: d.points,
                })
                .collect(),
        })
        .collect();

    ComparisonReport {
        version: 1,
        generated_at: Utc::now(),
        quotation: file.quotation.clone(),
        items: file.items.clone(),
        weights_source: weights_source.to_string(),
        weights: weights.clone(),
        ranking,
    }
}

/// Save a report to a JSON file atomically
///
/// Uses atomic-write-file to ensure the file is never left in a corrupted state.
pub fn save_report(path: &Path, report: &ComparisonReport) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, report).context("Failed to serialize report")?;

    file.commit().context("Failed to save report")?;

    Ok(())
}

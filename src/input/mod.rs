use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::scoring::{Dimension, Proposal};

/// Identification of the quotation the proposals answer. Passed through
/// to the report untouched; the scorer never reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuotationInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
}

/// A line item of the quotation being bid on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItem {
    pub description: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

/// A quotation file: metadata, optional line items, and the competing
/// proposals.
///
/// Example YAML:
/// ```yaml
/// quotation:
///   id: COT-2024-019
///   title: Industrial fasteners restock
///   client: Metalurgica Silva
/// items:
///   - { description: "M8 hex bolt", quantity: 5000, unit: pc }
/// proposals:
///   - supplier: Acme Ltda
///     price: 800
///     delivery_time: 10
///     shipping_cost: 50
///     sla: 80
///     warranty: 6
///     reputation: 70
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationFile {
    #[serde(default)]
    pub quotation: QuotationInfo,
    #[serde(default)]
    pub items: Vec<QuoteItem>,
    pub proposals: Vec<Proposal>,
}

/// Load a quotation file. JSON for a `.json` extension, YAML otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. Metric-level
/// problems are reported separately by `validate_proposals`.
pub fn load_quotation(path: &Path) -> Result<QuotationFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read quotation file at {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let file: QuotationFile = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse quotation: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse quotation: invalid YAML in {}", path.display()))?
    };

    Ok(file)
}

/// Validate proposal metrics before scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_proposals(proposals: &[Proposal]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if proposals.is_empty() {
        errors.push("proposals: at least one proposal is required".to_string());
    }

    for (i, proposal) in proposals.iter().enumerate() {
        if proposal.supplier.trim().is_empty() {
            errors.push(format!("proposals[{}].supplier: must not be empty", i));
        }
        for dimension in Dimension::ALL {
            let value = proposal.metrics.get(dimension);
            if !value.is_finite() {
                errors.push(format!(
                    "proposals[{}].{}: must be a finite number",
                    i,
                    dimension.key()
                ));
            } else if value < 0.0 {
                errors.push(format!(
                    "proposals[{}].{}: must be non-negative (got {})",
                    i,
                    dimension.key(),
                    value
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

use super::metrics::Dimension;
use super::weights::{validate_weights, WeightConfig};

/// Validate a weight configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weight_config(weights: &WeightConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for dimension in Dimension::ALL {
        let value = weights.get(dimension);
        if !value.is_finite() {
            errors.push(format!("weights.{}: must be a finite number", dimension.key()));
        } else if !(0.0..=100.0).contains(&value) {
            errors.push(format!(
                "weights.{}: must be between 0 and 100 (got {})",
                dimension.key(),
                value
            ));
        }
    }

    if !validate_weights(weights) {
        errors.push(format!(
            "weights: must sum to 100 (got {})",
            weights.total()
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

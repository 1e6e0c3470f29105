use serde::{Deserialize, Serialize};

use super::metrics::Dimension;

/// Tolerance for the sum-to-100 invariant (floating point slack)
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Relative importance of each criterion, expressed as percentages.
///
/// The six weights should sum to 100 so the composite score lands on a
/// 0-100 scale. The scorer itself does not enforce this; `validate_weights`
/// reports it and the CLI refuses to run with a broken config.
///
/// Example YAML:
/// ```yaml
/// weights:
///   price: 40
///   delivery_time: 20
///   shipping_cost: 15
///   sla: 8
///   warranty: 12
///   reputation: 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightConfig {
    pub price: f64,
    pub delivery_time: f64,
    pub shipping_cost: f64,
    pub sla: f64,
    pub warranty: f64,
    pub reputation: f64,
}

impl Default for WeightConfig {
    /// The `equilibrado` template
    fn default() -> Self {
        WeightTemplate::Equilibrado.weights()
    }
}

impl WeightConfig {
    /// Weight of the given dimension
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Price => self.price,
            Dimension::DeliveryTime => self.delivery_time,
            Dimension::ShippingCost => self.shipping_cost,
            Dimension::Sla => self.sla,
            Dimension::Warranty => self.warranty,
            Dimension::Reputation => self.reputation,
        }
    }

    /// Sum of all six weights
    pub fn total(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

/// Check that the weights sum to 100 within tolerance.
/// Pure check; callers decide whether to reject or interpret the score
/// off a proportionally different scale.
pub fn validate_weights(weights: &WeightConfig) -> bool {
    (weights.total() - 100.0).abs() <= WEIGHT_SUM_TOLERANCE
}

/// Named weight presets shipped with the tool. Starting points for manual
/// adjustment; each sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightTemplate {
    /// Balanced across cost and quality
    Equilibrado,
    /// Price above everything else
    FocoPreco,
    /// SLA, warranty and reputation first
    FocoQualidade,
    /// Delivery time dominates
    Urgente,
}

impl WeightTemplate {
    pub const ALL: [WeightTemplate; 4] = [
        WeightTemplate::Equilibrado,
        WeightTemplate::FocoPreco,
        WeightTemplate::FocoQualidade,
        WeightTemplate::Urgente,
    ];

    /// Template name as used on the CLI and in config files
    pub fn name(&self) -> &'static str {
        match self {
            WeightTemplate::Equilibrado => "equilibrado",
            WeightTemplate::FocoPreco => "foco-preco",
            WeightTemplate::FocoQualidade => "foco-qualidade",
            WeightTemplate::Urgente => "urgente",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WeightTemplate::Equilibrado => "balanced cost and quality",
            WeightTemplate::FocoPreco => "lowest price wins",
            WeightTemplate::FocoQualidade => "quality and service first",
            WeightTemplate::Urgente => "fastest delivery wins",
        }
    }

    /// Look up a template by its CLI/config name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    pub fn weights(&self) -> WeightConfig {
        match self {
            WeightTemplate::Equilibrado => WeightConfig {
                price: 40.0,
                delivery_time: 20.0,
                shipping_cost: 15.0,
                sla: 8.0,
                warranty: 12.0,
                reputation: 5.0,
            },
            WeightTemplate::FocoPreco => WeightConfig {
                price: 70.0,
                delivery_time: 10.0,
                shipping_cost: 10.0,
                sla: 4.0,
                warranty: 3.0,
                reputation: 3.0,
            },
            WeightTemplate::FocoQualidade => WeightConfig {
                price: 15.0,
                delivery_time: 10.0,
                shipping_cost: 5.0,
                sla: 25.0,
                warranty: 25.0,
                reputation: 20.0,
            },
            WeightTemplate::Urgente => WeightConfig {
                price: 15.0,
                delivery_time: 45.0,
                shipping_cost: 10.0,
                sla: 15.0,
                warranty: 5.0,
                reputation: 10.0,
            },
        }
    }
}

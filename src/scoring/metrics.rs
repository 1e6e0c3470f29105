use serde::{Deserialize, Serialize};

/// The six criteria every proposal is scored on.
///
/// Cost-like dimensions (price, delivery time, shipping cost) score higher
/// the lower the raw value is; benefit-like dimensions (SLA, warranty,
/// reputation) score higher the higher the raw value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Price,
    DeliveryTime,
    ShippingCost,
    Sla,
    Warranty,
    Reputation,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Price,
        Dimension::DeliveryTime,
        Dimension::ShippingCost,
        Dimension::Sla,
        Dimension::Warranty,
        Dimension::Reputation,
    ];

    /// Whether a lower raw value should map to a higher normalized score
    pub fn lower_is_better(&self) -> bool {
        matches!(
            self,
            Dimension::Price | Dimension::DeliveryTime | Dimension::ShippingCost
        )
    }

    /// Human-readable label for tables and breakdowns
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Price => "Price",
            Dimension::DeliveryTime => "Delivery time",
            Dimension::ShippingCost => "Shipping cost",
            Dimension::Sla => "SLA",
            Dimension::Warranty => "Warranty",
            Dimension::Reputation => "Reputation",
        }
    }

    /// Field name as it appears in quotation files and config
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Price => "price",
            Dimension::DeliveryTime => "delivery_time",
            Dimension::ShippingCost => "shipping_cost",
            Dimension::Sla => "sla",
            Dimension::Warranty => "warranty",
            Dimension::Reputation => "reputation",
        }
    }
}

/// Raw metrics of a single proposal. All six fields are required in
/// quotation files; validation rejects non-finite or negative values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalMetrics {
    /// Total monetary cost of the proposal
    pub price: f64,
    /// Lead time in days
    pub delivery_time: f64,
    /// Freight cost (zero means free shipping)
    pub shipping_cost: f64,
    /// Service-level score, e.g. on-time delivery percentage
    pub sla: f64,
    /// Warranty duration in months
    pub warranty: f64,
    /// Supplier reputation score
    pub reputation: f64,
}

impl ProposalMetrics {
    /// Raw value of the given dimension
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
}

/// A competing supplier proposal as read from a quotation file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub supplier: String,
    #[serde(flatten)]
    pub metrics: ProposalMetrics,
}

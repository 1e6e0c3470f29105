pub mod engine;
pub mod metrics;
pub mod validation;
pub mod weights;

pub use engine::{
    calculate_weighted_score, normalize, rank_proposals, score_with_breakdown, RankedProposal,
    ScoreResult,
};
pub use metrics::{Dimension, Proposal, ProposalMetrics};
pub use validation::validate_weight_config;
pub use weights::{validate_weights, WeightConfig, WeightTemplate};

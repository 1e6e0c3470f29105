use anyhow::{bail, Result};

use super::metrics::{Dimension, Proposal, ProposalMetrics};
use super::weights::WeightConfig;

/// Score assigned to a dimension that carries no discriminating
/// information in the cohort (every proposal has the same value)
const NEUTRAL_SCORE: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct DimensionScore {
    pub label: &'static str, // e.g. "Price", "Delivery time"
    pub raw: f64,            // Raw metric value from the proposal
    pub normalized: f64,     // 0-100 within the cohort range
    pub weight: f64,         // Percentage weight applied
    pub points: f64,         // normalized * weight / 100
}

#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub dimensions: Vec<DimensionScore>,
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// A proposal with its computed score and 1-based rank position
#[derive(Debug, Clone)]
pub struct RankedProposal {
    pub position: usize,
    pub proposal: Proposal,
    pub result: ScoreResult,
}

/// Map a raw metric value onto 0-100 relative to the cohort range.
///
/// With `inverse` set, lower raw values score higher (cost-like metrics).
/// A degenerate range (`max == min`) returns the neutral 50 regardless of
/// direction. Values outside `[min, max]` extrapolate linearly without
/// clamping; cohort-derived ranges never produce them.
pub fn normalize(value: f64, min: f64, max: f64, inverse: bool) -> f64 {
    if max == min {
        return NEUTRAL_SCORE;
    }
    let scaled = ((value - min) / (max - min)) * 100.0;
    if inverse {
        100.0 - scaled
    } else {
        scaled
    }
}

/// Observed min/max of one dimension across the cohort.
/// None for an empty cohort.
fn dimension_range(cohort: &[ProposalMetrics], dimension: Dimension) -> Option<(f64, f64)> {
    let mut values = cohort.iter().map(|m| m.get(dimension));
    let first = values.next()?;
    Some(values.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
}

/// Round to one decimal place, half away from zero
fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

/// Composite weighted score of one proposal against its cohort.
///
/// The cohort must span the value range the proposal is judged against
/// (normally it contains the proposal itself). Pure and idempotent. An
/// empty cohort yields no observed range for any dimension, which takes
/// the same neutral-50 path as a degenerate range; callers that want an
/// error instead go through `rank_proposals`.
pub fn calculate_weighted_score(
    metrics: &ProposalMetrics,
    cohort: &[ProposalMetrics],
    weights: &WeightConfig,
) -> f64 {
    score_with_breakdown(metrics, cohort, weights).score
}

/// Same as `calculate_weighted_score`, keeping the per-dimension
/// contributions for detail views and report export
pub fn score_with_breakdown(
    metrics: &ProposalMetrics,
    cohort: &[ProposalMetrics],
    weights: &WeightConfig,
) -> ScoreResult {
    let mut dimensions = Vec::with_capacity(Dimension::ALL.len());
    let mut total = 0.0;

    for dimension in Dimension::ALL {
        let raw = metrics.get(dimension);
        let normalized = match dimension_range(cohort, dimension) {
            Some((min, max)) => normalize(raw, min, max, dimension.lower_is_better()),
            None => NEUTRAL_SCORE,
        };
        let weight = weights.get(dimension);
        let points = normalized * (weight / 100.0);
        total += points;

        dimensions.push(DimensionScore {
            label: dimension.label(),
            raw,
            normalized,
            weight,
            points,
        });
    }

    ScoreResult {
        score: round_score(total),
        breakdown: ScoreBreakdown { dimensions },
    }
}

/// Score every proposal against the shared cohort and sort descending.
///
/// The sort is stable: proposals with equal scores keep their input
/// order. Positions are 1-based.
pub fn rank_proposals(
    proposals: &[Proposal],
    weights: &WeightConfig,
) -> Result<Vec<RankedProposal>> {
    if proposals.is_empty() {
        bail!("Cannot rank an empty proposal list");
    }

    let cohort: Vec<ProposalMetrics> = proposals.iter().map(|p| p.metrics.clone()).collect();

    let mut ranked: Vec<RankedProposal> = proposals
        .iter()
        .map(|proposal| RankedProposal {
            position: 0,
            proposal: proposal.clone(),
            result: score_with_breakdown(&proposal.metrics, &cohort, weights),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.result
            .score
            .partial_cmp(&a.result.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (idx, entry) in ranked.iter_mut().enumerate() {
        entry.position = idx + 1;
    }

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::WeightTemplate;

    fn metrics(
        price: f64,
        delivery_time: f64,
        shipping_cost: f64,
        sla: f64,
        warranty: f64,
        reputation: f64,
    ) -> ProposalMetrics {
        ProposalMetrics {
            price,
            delivery_time,
            shipping_cost,
            sla,
            warranty,
            reputation,
        }
    }

    fn proposal(supplier: &str, m: ProposalMetrics) -> Proposal {
        Proposal {
            supplier: supplier.to_string(),
            metrics: m,
        }
    }

    /// The three-proposal comparison scenario: A mid price with free
    /// shipping, B cheapest, C best quality
    fn sample_cohort() -> Vec<Proposal> {
        vec![
            proposal("A", metrics(1000.0, 5.0, 0.0, 95.0, 12.0, 90.0)),
            proposal("B", metrics(800.0, 10.0, 50.0, 80.0, 6.0, 70.0)),
            proposal("C", metrics(1200.0, 3.0, 20.0, 99.0, 24.0, 95.0)),
        ]
    }

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.0, 0.0, 10.0, false), 0.0);
        assert_eq!(normalize(10.0, 0.0, 10.0, false), 100.0);
        assert_eq!(normalize(5.0, 0.0, 10.0, false), 50.0);
    }

    #[test]
    fn test_normalize_inverse_flips_direction() {
        assert_eq!(normalize(0.0, 0.0, 10.0, true), 100.0);
        assert_eq!(normalize(10.0, 0.0, 10.0, true), 0.0);
        assert_eq!(normalize(2.5, 0.0, 10.0, true), 75.0);
    }

    #[test]
    fn test_normalize_inversion_symmetry() {
        for v in [1.0, 3.0, 4.5, 7.0, 9.9] {
            let straight = normalize(v, 1.0, 9.9, false);
            let inverted = normalize(v, 1.0, 9.9, true);
            assert!((straight + inverted - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_normalize_degenerate_range_is_neutral() {
        assert_eq!(normalize(5.0, 5.0, 5.0, false), 50.0);
        assert_eq!(normalize(5.0, 5.0, 5.0, true), 50.0);
        assert_eq!(normalize(123.0, 5.0, 5.0, true), 50.0);
    }

    #[test]
    fn test_normalize_extrapolates_without_clamping() {
        assert_eq!(normalize(15.0, 0.0, 10.0, false), 150.0);
        assert_eq!(normalize(-5.0, 0.0, 10.0, false), -50.0);
        assert_eq!(normalize(15.0, 0.0, 10.0, true), -50.0);
    }

    #[test]
    fn test_round_score_half_away_from_zero() {
        assert_eq!(round_score(63.65), 63.7);
        assert_eq!(round_score(63.64), 63.6);
        assert_eq!(round_score(40.0), 40.0);
    }

    #[test]
    fn test_equilibrado_golden_scores() {
        let cohort: Vec<ProposalMetrics> =
            sample_cohort().iter().map(|p| p.metrics.clone()).collect();
        let weights = WeightTemplate::Equilibrado.weights();

        assert_eq!(calculate_weighted_score(&cohort[0], &cohort, &weights), 63.6);
        assert_eq!(calculate_weighted_score(&cohort[1], &cohort, &weights), 40.0);
        assert_eq!(calculate_weighted_score(&cohort[2], &cohort, &weights), 54.0);
    }

    #[test]
    fn test_foco_preco_picks_cheapest() {
        let cohort: Vec<ProposalMetrics> =
            sample_cohort().iter().map(|p| p.metrics.clone()).collect();
        let weights = WeightTemplate::FocoPreco.weights();

        let a = calculate_weighted_score(&cohort[0], &cohort, &weights);
        let b = calculate_weighted_score(&cohort[1], &cohort, &weights);
        let c = calculate_weighted_score(&cohort[2], &cohort, &weights);

        assert_eq!(a, 58.7);
        assert_eq!(b, 70.0);
        assert_eq!(c, 26.0);
        assert!(b > a && b > c);
    }

    #[test]
    fn test_foco_qualidade_picks_best_quality() {
        let cohort: Vec<ProposalMetrics> =
            sample_cohort().iter().map(|p| p.metrics.clone()).collect();
        let weights = WeightTemplate::FocoQualidade.weights();

        let a = calculate_weighted_score(&cohort[0], &cohort, &weights);
        let b = calculate_weighted_score(&cohort[1], &cohort, &weights);
        let c = calculate_weighted_score(&cohort[2], &cohort, &weights);

        assert_eq!(a, 63.7);
        assert_eq!(b, 15.0);
        assert_eq!(c, 83.0);
        assert!(c > a && c > b);
    }

    #[test]
    fn test_score_is_idempotent() {
        let cohort: Vec<ProposalMetrics> =
            sample_cohort().iter().map(|p| p.metrics.clone()).collect();
        let weights = WeightConfig::default();

        let first = calculate_weighted_score(&cohort[0], &cohort, &weights);
        let second = calculate_weighted_score(&cohort[0], &cohort, &weights);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_identical_cohort_scores_all_neutral() {
        // Every dimension degenerate, so every proposal lands on 50.0
        let m = metrics(500.0, 7.0, 10.0, 90.0, 12.0, 80.0);
        let cohort = vec![m.clone(), m.clone(), m.clone()];
        let weights = WeightConfig::default();

        assert_eq!(calculate_weighted_score(&m, &cohort, &weights), 50.0);
    }

    #[test]
    fn test_empty_cohort_falls_back_to_neutral() {
        // The pure scorer treats a missing range like a degenerate one
        let m = metrics(500.0, 7.0, 10.0, 90.0, 12.0, 80.0);
        let score = calculate_weighted_score(&m, &[], &WeightConfig::default());
        assert_eq!(score, 50.0);
        assert!(score.is_finite());
    }

    #[test]
    fn test_non_normalized_weights_scale_the_score() {
        // Weights summing to 50 halve the scale; the scorer does not reject
        let m = metrics(500.0, 7.0, 10.0, 90.0, 12.0, 80.0);
        let cohort = vec![m.clone()];
        let weights = WeightConfig {
            price: 20.0,
            delivery_time: 10.0,
            shipping_cost: 7.5,
            sla: 4.0,
            warranty: 6.0,
            reputation: 2.5,
        };
        assert_eq!(calculate_weighted_score(&m, &cohort, &weights), 25.0);
    }

    #[test]
    fn test_breakdown_points_sum_to_score() {
        let cohort: Vec<ProposalMetrics> =
            sample_cohort().iter().map(|p| p.metrics.clone()).collect();
        let weights = WeightTemplate::Equilibrado.weights();

        let result = score_with_breakdown(&cohort[0], &cohort, &weights);
        assert_eq!(result.breakdown.dimensions.len(), 6);

        let total: f64 = result.breakdown.dimensions.iter().map(|d| d.points).sum();
        assert_eq!(round_score(total), result.score);
    }

    #[test]
    fn test_breakdown_carries_raw_values_and_weights() {
        let cohort: Vec<ProposalMetrics> =
            sample_cohort().iter().map(|p| p.metrics.clone()).collect();
        let weights = WeightTemplate::Equilibrado.weights();

        let result = score_with_breakdown(&cohort[1], &cohort, &weights);
        let price = &result.breakdown.dimensions[0];
        assert_eq!(price.label, "Price");
        assert_eq!(price.raw, 800.0);
        assert_eq!(price.normalized, 100.0); // cheapest, inverted
        assert_eq!(price.weight, 40.0);
        assert_eq!(price.points, 40.0);
    }

    #[test]
    fn test_rank_proposals_orders_descending() {
        let proposals = sample_cohort();
        let ranked = rank_proposals(&proposals, &WeightTemplate::Equilibrado.weights()).unwrap();

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].proposal.supplier, "A");
        assert_eq!(ranked[1].proposal.supplier, "C");
        assert_eq!(ranked[2].proposal.supplier, "B");
        assert_eq!(ranked[0].position, 1);
        assert_eq!(ranked[1].position, 2);
        assert_eq!(ranked[2].position, 3);
    }

    #[test]
    fn test_rank_preserves_input_order_on_ties() {
        // Identical metrics put every proposal on 50.0; the stable sort
        // must keep input order
        let m = metrics(500.0, 7.0, 10.0, 90.0, 12.0, 80.0);
        let proposals = vec![
            proposal("First", m.clone()),
            proposal("Second", m.clone()),
            proposal("Third", m.clone()),
        ];

        let ranked = rank_proposals(&proposals, &WeightConfig::default()).unwrap();
        assert_eq!(ranked[0].proposal.supplier, "First");
        assert_eq!(ranked[1].proposal.supplier, "Second");
        assert_eq!(ranked[2].proposal.supplier, "Third");
        assert_eq!(ranked[0].result.score, 50.0);
    }

    #[test]
    fn test_rank_rejects_empty_cohort() {
        let result = rank_proposals(&[], &WeightConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_rank_singleton_cohort_is_all_neutral() {
        let proposals = vec![proposal("Only", metrics(100.0, 1.0, 0.0, 99.0, 12.0, 90.0))];
        let ranked = rank_proposals(&proposals, &WeightConfig::default()).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].result.score, 50.0);
    }

    #[test]
    fn test_rank_order_stable_under_cohort_growth() {
        // Adding proposals inside the existing extremes must not flip the
        // relative order of the originals
        let weights = WeightTemplate::Equilibrado.weights();
        let small = sample_cohort();

        let mut large = sample_cohort();
        large.push(proposal("D", metrics(900.0, 6.0, 10.0, 85.0, 9.0, 75.0)));
        large.push(proposal("E", metrics(1100.0, 8.0, 30.0, 92.0, 18.0, 88.0)));

        let order = |ranked: &[RankedProposal]| -> Vec<String> {
            ranked
                .iter()
                .map(|r| r.proposal.supplier.clone())
                .filter(|s| ["A", "B", "C"].contains(&s.as_str()))
                .collect()
        };

        let small_ranked = rank_proposals(&small, &weights).unwrap();
        let large_ranked = rank_proposals(&large, &weights).unwrap();
        assert_eq!(order(&small_ranked), order(&large_ranked));
    }
}

use trust_core::config::{AggregationConfig, PropagatedCombination};
use trust_core::constants::NEUTRAL_TRUST;
use trust_core::models::{Identity, PropagatedContribution};

use super::resolution;
use crate::propagation::PropagatedReports;

/// Blends first-hand trust with the combined, ceiling-capped propagated block.
///
/// Every result lies inside the range of its inputs, so a subject with no
/// direct trust can never aggregate above its ceiling.
#[derive(Debug, Clone)]
pub struct Aggregator {
    direct_weight: f64,
    propagated_weight: f64,
    combination: PropagatedCombination,
    outlier_z_threshold: f64,
}

impl Aggregator {
    pub fn from_config(config: &AggregationConfig) -> Self {
        Self {
            direct_weight: config.direct_weight,
            propagated_weight: config.propagated_weight,
            combination: config.combination,
            outlier_z_threshold: config.outlier_z_threshold,
        }
    }

    /// Scale every report by trust in its source, then cap it at `ceiling`.
    pub fn contributions(
        &self,
        reports: &PropagatedReports,
        ceiling: f64,
        source_trust: impl Fn(&Identity) -> f64,
    ) -> Vec<PropagatedContribution> {
        reports
            .iter()
            .map(|rec| {
                let trust = source_trust(&rec.source);
                PropagatedContribution {
                    source: rec.source.clone(),
                    reported_score: rec.reported_score,
                    propagation_distance: rec.propagation_distance,
                    decayed_score: rec.decayed_score,
                    source_trust: trust,
                    capped_score: rec.capped(trust, ceiling),
                    weight: rec.hop_weight,
                }
            })
            .collect()
    }

    /// Combine capped contributions into one propagated value.
    pub fn combine_propagated(&self, contributions: &[PropagatedContribution]) -> Option<f64> {
        if contributions.is_empty() {
            return None;
        }
        let values: Vec<f64> = contributions.iter().map(|c| c.capped_score).collect();
        let combined = match self.combination {
            PropagatedCombination::WeightedMean => {
                let total_weight: f64 = contributions.iter().map(|c| c.weight).sum();
                if total_weight > 0.0 {
                    contributions
                        .iter()
                        .map(|c| c.capped_score * c.weight)
                        .sum::<f64>()
                        / total_weight
                } else {
                    resolution::mean(&values)?
                }
            }
            PropagatedCombination::Median => {
                let pairs: Vec<(f64, f64)> = contributions
                    .iter()
                    .map(|c| (c.capped_score, c.weight))
                    .collect();
                resolution::weighted_median(&pairs)?
            }
            PropagatedCombination::TrimmedMean => {
                resolution::mean_excluding_outliers(&values, self.outlier_z_threshold)?
            }
        };
        Some(clamp_to_inputs(combined, &values))
    }

    /// Blend direct and propagated values. Neither present yields neutral trust.
    pub fn blend(&self, direct: Option<f64>, propagated: Option<f64>) -> f64 {
        match (direct, propagated) {
            (None, None) => NEUTRAL_TRUST,
            (Some(d), None) => d,
            (None, Some(p)) => p,
            (Some(d), Some(p)) => {
                let total = self.direct_weight + self.propagated_weight;
                let blended = (self.direct_weight * d + self.propagated_weight * p) / total;
                clamp_to_inputs(blended, &[d, p])
            }
        }
    }

    /// Full aggregation. `discount` scales the propagated block only.
    pub fn aggregate(
        &self,
        direct: Option<f64>,
        contributions: &[PropagatedContribution],
        discount: f64,
    ) -> f64 {
        let propagated = self
            .combine_propagated(contributions)
            .map(|p| p * discount.clamp(0.0, 1.0));
        self.blend(direct, propagated)
    }
}

/// Float rounding must not push a combination outside its inputs.
fn clamp_to_inputs(value: f64, inputs: &[f64]) -> f64 {
    let lo = inputs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = inputs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo > hi {
        return value;
    }
    value.clamp(lo, hi)
}

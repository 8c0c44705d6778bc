use serde::{Deserialize, Serialize};

use super::defaults;

/// Aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Weight of the direct score when both kinds of information exist.
    pub direct_weight: f64,
    /// Weight of the combined propagated block. Must not exceed `direct_weight`.
    pub propagated_weight: f64,
    /// How capped propagated contributions are combined into one value.
    pub combination: PropagatedCombination,
    /// z-score beyond which a report counts as an outlier (`trimmed_mean` only).
    pub outlier_z_threshold: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            direct_weight: defaults::DEFAULT_DIRECT_WEIGHT,
            propagated_weight: defaults::DEFAULT_PROPAGATED_WEIGHT,
            combination: PropagatedCombination::default(),
            outlier_z_threshold: defaults::DEFAULT_OUTLIER_Z_THRESHOLD,
        }
    }
}

/// Strategy for combining capped propagated contributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagatedCombination {
    /// Mean weighted by `decay_factor^distance`.
    #[default]
    WeightedMean,
    /// Weighted median, same weights.
    Median,
    /// Unweighted mean after excluding z-score outliers.
    TrimmedMean,
}

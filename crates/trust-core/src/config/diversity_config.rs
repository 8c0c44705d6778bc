use serde::{Deserialize, Serialize};

use super::defaults;

/// Diversity discount configuration for the robust engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    /// Whether the discount is applied at all.
    pub enabled: bool,
    /// Fewest reporting sources that can be flagged as a cluster. At least 2.
    pub min_cluster_size: usize,
    /// Largest std-dev of reported scores still considered "near-identical".
    pub similarity_tolerance: f64,
    /// Mean reported score at or above which agreement looks like inflation.
    pub high_score_threshold: f64,
    /// Floor for the logarithmic discount, in `(0.0, 1.0)`.
    pub min_discount: f64,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_DIVERSITY_ENABLED,
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            similarity_tolerance: defaults::DEFAULT_SIMILARITY_TOLERANCE,
            high_score_threshold: defaults::DEFAULT_HIGH_SCORE_THRESHOLD,
            min_discount: defaults::DEFAULT_MIN_DISCOUNT,
        }
    }
}

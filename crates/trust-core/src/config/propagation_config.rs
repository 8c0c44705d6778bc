use serde::{Deserialize, Serialize};

use super::defaults;

/// Propagated-report ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Per-hop multiplicative attenuation, in `(0.0, 1.0]`.
    pub decay_factor: f64,
    /// Reports that travelled more hops than this are dropped.
    pub max_propagation_distance: u32,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            decay_factor: defaults::DEFAULT_DECAY_FACTOR,
            max_propagation_distance: defaults::DEFAULT_MAX_PROPAGATION_DISTANCE,
        }
    }
}

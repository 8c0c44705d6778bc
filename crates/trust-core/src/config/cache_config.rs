use serde::{Deserialize, Serialize};

use super::defaults;

/// Aggregation result cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Maximum number of cached `(subject, variant)` scores.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_CACHE_ENABLED,
            max_capacity: defaults::DEFAULT_CACHE_MAX_CAPACITY,
        }
    }
}

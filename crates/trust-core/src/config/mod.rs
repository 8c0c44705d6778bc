//! Engine configuration: one section per component, TOML-loadable, validated at construction.

pub mod aggregation_config;
pub mod cache_config;
pub mod ceiling_config;
pub mod defaults;
pub mod diversity_config;
pub mod observability_config;
pub mod propagation_config;
pub mod validation;

pub use aggregation_config::{AggregationConfig, PropagatedCombination};
pub use cache_config::CacheConfig;
pub use ceiling_config::{BoostCurve, CeilingConfig, EvidenceWeights};
pub use diversity_config::DiversityConfig;
pub use observability_config::ObservabilityConfig;
pub use propagation_config::PropagationConfig;
pub use validation::{validate, validate_or_error};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TrustResult};

/// Top-level trust engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustEngineConfig {
    pub ceiling: CeilingConfig,
    pub propagation: PropagationConfig,
    pub aggregation: AggregationConfig,
    pub diversity: DiversityConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl TrustEngineConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    ///
    /// Parsing does not validate; engines validate on construction.
    pub fn from_toml(toml_str: &str) -> TrustResult<Self> {
        toml::from_str(toml_str).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> TrustResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> TrustResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Convenience: defaults with a different base ceiling and decay factor.
    pub fn with_ceiling_and_decay(base_ceiling: f64, decay_factor: f64) -> Self {
        let mut config = Self::default();
        config.ceiling.base_ceiling = base_ceiling;
        config.propagation.decay_factor = decay_factor;
        config
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Trust ceiling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CeilingConfig {
    /// Ceiling applied to propagated trust when a subject has no evidence.
    pub base_ceiling: f64,
    /// Shape of the evidence-to-ceiling boost.
    pub curve: BoostCurve,
    /// Per-type weights used to accumulate evidence mass.
    pub evidence_weights: EvidenceWeights,
}

impl Default for CeilingConfig {
    fn default() -> Self {
        Self {
            base_ceiling: defaults::DEFAULT_BASE_CEILING,
            curve: BoostCurve::default(),
            evidence_weights: EvidenceWeights::default(),
        }
    }
}

/// How accumulated evidence mass turns into ceiling headroom.
///
/// Both curves are monotonically non-decreasing in evidence mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoostCurve {
    /// `boost = (1 - base) × (1 - e^(-rate × mass))`, approaching 1.0 without reaching it.
    Saturating { rate: f64 },
    /// `boost = min(max_boost, per_unit × mass)`.
    Linear { per_unit: f64, max_boost: f64 },
}

impl Default for BoostCurve {
    fn default() -> Self {
        Self::Saturating {
            rate: defaults::DEFAULT_SATURATION_RATE,
        }
    }
}

impl BoostCurve {
    /// The linear curve with default parameters.
    pub fn linear() -> Self {
        Self::Linear {
            per_unit: defaults::DEFAULT_LINEAR_PER_UNIT,
            max_boost: defaults::DEFAULT_LINEAR_MAX_BOOST,
        }
    }
}

/// Weight of each evidence type in the accumulated evidence mass.
///
/// `DirectObservation` has no weight: it forces the full ceiling outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceWeights {
    pub energy_proof: f64,
    pub historical: f64,
    pub other: f64,
}

impl Default for EvidenceWeights {
    fn default() -> Self {
        Self {
            energy_proof: defaults::DEFAULT_ENERGY_PROOF_WEIGHT,
            historical: defaults::DEFAULT_HISTORICAL_WEIGHT,
            other: defaults::DEFAULT_OTHER_WEIGHT,
        }
    }
}

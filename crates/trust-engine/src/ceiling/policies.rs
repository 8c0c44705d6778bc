//! Built-in ceiling boost policies.
//!
//! Both policies reduce the ledger to an evidence mass,
//! `Σ type_weight × quality_score`, and map it through a non-decreasing curve.
//! Weights and qualities are non-negative, so adding an item or raising its
//! quality can only grow the mass.

use trust_core::config::{BoostCurve, CeilingConfig, EvidenceWeights};
use trust_core::models::{Evidence, EvidenceType};
use trust_core::traits::ICeilingPolicy;

/// Weighted quality sum of a subject's evidence.
pub fn evidence_mass(weights: &EvidenceWeights, evidence: &[Evidence]) -> f64 {
    evidence
        .iter()
        .map(|e| {
            let w = match e.evidence_type {
                // Forces the full ceiling on its own; contributes no mass.
                EvidenceType::DirectObservation => 0.0,
                EvidenceType::EnergyProof => weights.energy_proof,
                EvidenceType::Historical => weights.historical,
                EvidenceType::Other(_) => weights.other,
            };
            w * e.quality_score
        })
        .sum()
}

/// `boost = (1 - base) × (1 - e^(-rate × mass))`.
///
/// Fills the headroom above the base ceiling with diminishing returns; no
/// amount of indirect evidence quite reaches the full ceiling.
#[derive(Debug, Clone)]
pub struct SaturatingBoost {
    pub rate: f64,
    pub weights: EvidenceWeights,
}

impl ICeilingPolicy for SaturatingBoost {
    fn boost(&self, base_ceiling: f64, evidence: &[Evidence]) -> f64 {
        let mass = evidence_mass(&self.weights, evidence);
        let headroom = (1.0 - base_ceiling).max(0.0);
        headroom * (1.0 - (-self.rate * mass).exp())
    }

    fn name(&self) -> &str {
        "saturating"
    }
}

/// `boost = min(max_boost, per_unit × mass)`.
#[derive(Debug, Clone)]
pub struct LinearBoost {
    pub per_unit: f64,
    pub max_boost: f64,
    pub weights: EvidenceWeights,
}

impl ICeilingPolicy for LinearBoost {
    fn boost(&self, _base_ceiling: f64, evidence: &[Evidence]) -> f64 {
        (self.per_unit * evidence_mass(&self.weights, evidence)).min(self.max_boost)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// Build the policy described by the `[ceiling]` config section.
pub fn policy_from_config(config: &CeilingConfig) -> Box<dyn ICeilingPolicy> {
    let weights = config.evidence_weights.clone();
    match config.curve {
        BoostCurve::Saturating { rate } => Box::new(SaturatingBoost { rate, weights }),
        BoostCurve::Linear {
            per_unit,
            max_boost,
        } => Box::new(LinearBoost {
            per_unit,
            max_boost,
            weights,
        }),
    }
}

//! Ceiling rules.
//!
//! ```text
//! any DirectObservation      → 1.0
//! evidence, none direct      → clip(base + policy.boost(base, evidence), base, 1.0)
//! no evidence                → base
//! ```
//!
//! `base` is the configured base ceiling unless the subject has an override.

use tracing::trace;

use trust_core::constants::FULL_TRUST_CEILING;
use trust_core::models::{CeilingResult, Identity};
use trust_core::traits::ICeilingPolicy;

use crate::evidence::EvidenceLedger;

/// Derives per-subject trust ceilings from evidence.
pub struct CeilingCalculator {
    base_ceiling: f64,
    policy: Box<dyn ICeilingPolicy>,
}

impl CeilingCalculator {
    /// `base_ceiling` must already be validated into `[0, 1]`.
    pub fn new(base_ceiling: f64, policy: Box<dyn ICeilingPolicy>) -> Self {
        Self {
            base_ceiling,
            policy,
        }
    }

    pub fn base_ceiling(&self) -> f64 {
        self.base_ceiling
    }

    /// Ceiling for a subject with the given ledger and optional base override.
    pub fn ceiling(&self, ledger: &EvidenceLedger, base_override: Option<f64>) -> f64 {
        let base = base_override.unwrap_or(self.base_ceiling);

        if ledger.has_direct_observation() {
            return FULL_TRUST_CEILING;
        }
        if ledger.is_empty() {
            return base;
        }

        let boost = self.policy.boost(base, ledger.items());
        // A misbehaving custom policy must not break the clipping invariant.
        let boost = if boost.is_nan() { 0.0 } else { boost.max(0.0) };
        let ceiling = (base + boost).clamp(base, FULL_TRUST_CEILING);

        trace!(
            policy = self.policy.name(),
            base,
            boost,
            ceiling,
            evidence = ledger.len(),
            "ceiling computed"
        );
        ceiling
    }

    /// Ceiling plus the inputs that produced it.
    pub fn ceiling_result(
        &self,
        subject: &Identity,
        ledger: &EvidenceLedger,
        base_override: Option<f64>,
    ) -> CeilingResult {
        CeilingResult {
            subject: subject.clone(),
            ceiling: self.ceiling(ledger, base_override),
            base_ceiling: base_override.unwrap_or(self.base_ceiling),
            evidence_count: ledger.len(),
            forced_full: ledger.has_direct_observation(),
        }
    }

    /// Ceiling for a subject with no stored state.
    pub fn default_result(&self, subject: &Identity) -> CeilingResult {
        CeilingResult {
            subject: subject.clone(),
            ceiling: self.base_ceiling,
            base_ceiling: self.base_ceiling,
            evidence_count: 0,
            forced_full: false,
        }
    }
}

impl std::fmt::Debug for CeilingCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CeilingCalculator")
            .field("base_ceiling", &self.base_ceiling)
            .field("policy", &self.policy.name())
            .finish()
    }
}

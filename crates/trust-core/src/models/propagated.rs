//! Second-hand trust reports that reached us through intermediaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::score::ensure_score;
use crate::errors::{TrustError, TrustResult};

/// A propagated report, one per `(subject, source)`.
///
/// `decayed_score = reported_score × hop_weight`, where
/// `hop_weight = decay_factor^propagation_distance`. The ceiling is not
/// applied here; it is read at aggregation time so later evidence changes
/// the effective contribution without re-ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropagatedTrustRecord {
    pub subject: Identity,
    pub source: Identity,
    pub reported_score: f64,
    pub propagation_distance: u32,
    pub hop_weight: f64,
    pub decayed_score: f64,
    pub received_at: DateTime<Utc>,
}

impl PropagatedTrustRecord {
    /// Validate the report and apply per-hop decay.
    ///
    /// `decay_factor` is trusted to be in `(0, 1]`; the engine config guarantees it.
    pub fn new(
        subject: impl Into<Identity>,
        source: impl Into<Identity>,
        reported_score: f64,
        propagation_distance: u32,
        decay_factor: f64,
    ) -> TrustResult<Self> {
        let reported_score = ensure_score("reported_score", reported_score)?;
        if propagation_distance < 1 {
            return Err(TrustError::InvalidDistance {
                distance: propagation_distance,
            });
        }
        let hop_weight = decay_factor.powf(f64::from(propagation_distance));
        Ok(Self {
            subject: subject.into(),
            source: source.into(),
            reported_score,
            propagation_distance,
            hop_weight,
            decayed_score: (reported_score * hop_weight).clamp(0.0, 1.0),
            received_at: Utc::now(),
        })
    }

    /// Contribution after weighting by trust in the source and applying the
    /// subject's ceiling. `source_trust` is in `[0, 1]`, so it only lowers it.
    pub fn capped(&self, source_trust: f64, ceiling: f64) -> f64 {
        (self.decayed_score * source_trust).min(ceiling)
    }
}

/// What happened to a propagated report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReceiveOutcome {
    /// First report from this source about this subject.
    Recorded,
    /// Overwrote an earlier report from the same source.
    Replaced { previous_score: f64 },
    /// Travelled beyond the propagation horizon; nothing stored.
    Ignored,
}

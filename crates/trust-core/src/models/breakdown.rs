use serde::{Deserialize, Serialize};

use super::diversity::DiversityReport;
use super::direct::DirectTrustEntry;
use super::identity::Identity;

/// How one propagated report contributes to the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropagatedContribution {
    pub source: Identity,
    pub reported_score: f64,
    pub propagation_distance: u32,
    pub decayed_score: f64,
    /// Trust in the reporting source, `1.0` unless set explicitly.
    pub source_trust: f64,
    /// `min(decayed_score × source_trust, ceiling)`.
    pub capped_score: f64,
    /// Weight inside the propagated block (`decay_factor^distance`).
    pub weight: f64,
}

/// Full explanation of a subject's aggregate, for audit consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustBreakdown {
    pub subject: Identity,
    pub aggregated_trust: f64,
    /// Diversity-discounted score, when produced by the robust engine.
    pub robust_trust: Option<f64>,
    pub ceiling: f64,
    pub direct: Option<DirectTrustEntry>,
    pub propagated: Vec<PropagatedContribution>,
    pub evidence_count: usize,
    pub diversity: Option<DiversityReport>,
}

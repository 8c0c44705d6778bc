use crate::errors::TrustResult;
use crate::models::{Evidence, Identity, ReceiveOutcome};

/// The engine surface exposed to policy, audit and federation-health consumers.
pub trait ITrustAggregator: Send + Sync {
    /// Record (or overwrite) first-hand trust in `subject`.
    fn set_direct_trust(&self, subject: &Identity, score: f64) -> TrustResult<()>;

    /// Append an evidence item for `subject`.
    fn add_evidence(&self, subject: &Identity, evidence: Evidence) -> TrustResult<()>;

    /// Ingest a report about `subject` from `source` that travelled `distance` hops.
    fn receive_propagated_trust(
        &self,
        subject: &Identity,
        source: &Identity,
        score: f64,
        distance: u32,
    ) -> TrustResult<ReceiveOutcome>;

    /// Maximum value propagated reports about `subject` may contribute.
    fn ceiling_for(&self, subject: &Identity) -> f64;

    /// Single bounded trust value for `subject`.
    fn aggregated_trust(&self, subject: &Identity) -> f64;
}

//! Record types owned by the engine's stores, plus the derived views it hands out.

pub mod breakdown;
pub mod ceiling;
pub mod direct;
pub mod diversity;
pub mod evidence;
pub mod identity;
pub mod propagated;
pub mod score;
pub mod stats;

pub use breakdown::{PropagatedContribution, TrustBreakdown};
pub use ceiling::CeilingResult;
pub use direct::DirectTrustEntry;
pub use diversity::DiversityReport;
pub use evidence::{Evidence, EvidenceType};
pub use identity::Identity;
pub use propagated::{PropagatedTrustRecord, ReceiveOutcome};
pub use score::ensure_score;
pub use stats::EngineStats;

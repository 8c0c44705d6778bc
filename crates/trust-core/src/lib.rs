//! # trust-core
//!
//! Foundation crate for the trust aggregation engine.
//! Defines identities, trust records, evidence, errors, config, constants,
//! and the traits the engine crates implement.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TrustEngineConfig;
pub use errors::{TrustError, TrustResult};
pub use models::{
    DirectTrustEntry, Evidence, EvidenceType, Identity, PropagatedTrustRecord, ReceiveOutcome,
};
pub use traits::{ICeilingPolicy, ITrustAggregator};

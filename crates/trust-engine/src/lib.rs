//! # trust-engine
//!
//! Combines first-hand and propagated trust into one bounded score per
//! subject while resisting Sybil amplification and collusion.
//!
//! ## Modules
//!
//! - [`evidence`]: per-subject evidence ledger
//! - [`ceiling`]: evidence-backed trust ceilings and pluggable boost policies
//! - [`propagation`]: hop-decayed ingestion of second-hand reports
//! - [`aggregation`]: direct/propagated blending and disagreement resolution
//! - [`diversity`]: low-diversity (collusion) discount
//! - [`store`]: per-subject state with per-subject exclusive updates
//! - [`engine`]: `TrustAggregationEngine`, the base engine
//! - [`robust`]: `RobustTrustEngine`, base engine plus diversity discount

pub mod aggregation;
pub mod cache;
pub mod ceiling;
pub mod diversity;
pub mod engine;
pub mod evidence;
pub mod propagation;
pub mod robust;
pub mod store;

pub use cache::ScoreVariant;
pub use engine::TrustAggregationEngine;
pub use robust::RobustTrustEngine;

use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// Derived ceiling for one subject. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingResult {
    pub subject: Identity,
    /// In `[base_ceiling, 1.0]`.
    pub ceiling: f64,
    /// The base this subject starts from (configured or overridden).
    pub base_ceiling: f64,
    pub evidence_count: usize,
    /// True when a `DirectObservation` item forced the full ceiling.
    pub forced_full: bool,
}

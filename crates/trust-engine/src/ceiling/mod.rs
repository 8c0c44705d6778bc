//! Trust ceilings.
//!
//! - [`calculator`]: applies the ceiling rules to a subject's ledger
//! - [`policies`]: built-in evidence-to-boost curves

pub mod calculator;
pub mod policies;

pub use calculator::CeilingCalculator;
pub use policies::{evidence_mass, policy_from_config, LinearBoost, SaturatingBoost};

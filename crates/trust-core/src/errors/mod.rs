//! Error types for the trust aggregation engine.

mod config_error;
mod trust_error;

pub use config_error::ConfigError;
pub use trust_error::TrustError;

/// Result alias used across every trust crate.
pub type TrustResult<T> = Result<T, TrustError>;

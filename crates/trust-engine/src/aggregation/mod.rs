//! Aggregation: caps propagated reports at the subject's ceiling, combines
//! them, and blends the result with first-hand trust.

pub mod aggregator;
pub mod resolution;

pub use aggregator::Aggregator;

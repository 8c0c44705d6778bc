/// Trust engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Aggregate returned for a subject nobody has said anything about.
pub const NEUTRAL_TRUST: f64 = 0.5;

/// Ceiling granted by any `DirectObservation` evidence item.
pub const FULL_TRUST_CEILING: f64 = 1.0;

/// Lower bound of every score, quality and ceiling.
pub const MIN_SCORE: f64 = 0.0;

/// Upper bound of every score, quality and ceiling.
pub const MAX_SCORE: f64 = 1.0;

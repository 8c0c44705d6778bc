use super::config_error::ConfigError;

/// Top-level error for ingestion and configuration failures.
///
/// Queries (`ceiling_for`, `aggregated_trust`) never fail: an unknown subject
/// has well-defined defaults, so only the ingestion boundary produces these.
#[derive(Debug, thiserror::Error)]
pub enum TrustError {
    /// A score, quality or ceiling was outside `[0.0, 1.0]` or not finite.
    #[error("invalid score range: {field} = {value} (expected a finite value in [0.0, 1.0])")]
    InvalidScoreRange {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A propagated report claimed fewer than one hop.
    #[error("invalid propagation distance: {distance} (must be >= 1)")]
    InvalidDistance { distance: u32 },

    /// An evidence item was submitted under a subject other than its own.
    #[error("evidence subject mismatch: submitted for {expected}, item names {found}")]
    SubjectMismatch { expected: String, found: String },

    #[error("configuration error: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TrustError {
    /// Shorthand for an out-of-range score.
    pub fn score(field: &'static str, value: f64) -> Self {
        Self::InvalidScoreRange { field, value }
    }

    /// Stable short name for the error kind, used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidScoreRange { .. } => "invalid_score_range",
            Self::InvalidDistance { .. } => "invalid_distance",
            Self::SubjectMismatch { .. } => "subject_mismatch",
            Self::InvalidConfig(_) => "invalid_config",
            Self::SerializationError(_) => "serialization_error",
        }
    }
}

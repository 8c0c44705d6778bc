//! Evidence items that justify raising a subject's trust ceiling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::score::ensure_score;
use crate::errors::TrustResult;

/// Closed set of evidence categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum EvidenceType {
    /// The observer saw the subject's behaviour first-hand. Unlocks the full ceiling.
    DirectObservation,
    /// Proof of distinct physical resources (e.g. energy capacity).
    EnergyProof,
    /// Track record accumulated over time.
    Historical,
    /// Anything else, described by the caller.
    Other(String),
}

impl EvidenceType {
    pub fn is_direct_observation(&self) -> bool {
        matches!(self, Self::DirectObservation)
    }

    /// Short label for logs.
    pub fn label(&self) -> &str {
        match self {
            Self::DirectObservation => "direct_observation",
            Self::EnergyProof => "energy_proof",
            Self::Historical => "historical",
            Self::Other(kind) => kind,
        }
    }
}

/// One evidence item about a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub subject: Identity,
    pub evidence_type: EvidenceType,
    /// Quality in `[0.0, 1.0]`.
    pub quality_score: f64,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

impl Evidence {
    /// Build a validated evidence item.
    pub fn new(
        subject: impl Into<Identity>,
        evidence_type: EvidenceType,
        quality_score: f64,
        description: impl Into<String>,
    ) -> TrustResult<Self> {
        Ok(Self {
            subject: subject.into(),
            evidence_type,
            quality_score: ensure_score("quality_score", quality_score)?,
            description: description.into(),
            recorded_at: Utc::now(),
        })
    }

    /// Re-check the numeric range. Fields are public, so the ingestion
    /// boundary calls this again before storing.
    pub fn validate(&self) -> TrustResult<()> {
        ensure_score("quality_score", self.quality_score).map(|_| ())
    }
}

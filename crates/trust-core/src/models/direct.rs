use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::score::ensure_score;
use crate::errors::TrustResult;

/// First-hand trust in a subject. Never ceiling-limited; last write wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectTrustEntry {
    pub subject: Identity,
    pub score: f64,
    pub recorded_at: DateTime<Utc>,
}

impl DirectTrustEntry {
    pub fn new(subject: impl Into<Identity>, score: f64) -> TrustResult<Self> {
        Ok(Self {
            subject: subject.into(),
            score: ensure_score("score", score)?,
            recorded_at: Utc::now(),
        })
    }
}

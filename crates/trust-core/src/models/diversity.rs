use serde::{Deserialize, Serialize};

/// Source-diversity assessment of a subject's propagated reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversityReport {
    /// Number of distinct reporting sources.
    pub source_count: usize,
    /// Mean reported (pre-decay) score.
    pub mean_reported: f64,
    /// Population standard deviation of reported scores.
    pub spread: f64,
    /// Many sources, near-identical high scores.
    pub collusion_suspected: bool,
    /// Multiplier for the propagated block; `1.0` means no discount.
    pub discount: f64,
}

impl DiversityReport {
    /// Report for a set of sources that raised no suspicion.
    pub fn undiscounted(source_count: usize, mean_reported: f64, spread: f64) -> Self {
        Self {
            source_count,
            mean_reported,
            spread,
            collusion_suspected: false,
            discount: 1.0,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Point-in-time engine counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub subjects: usize,
    pub direct_entries: usize,
    pub propagated_records: usize,
    pub evidence_items: usize,
    /// Sources with an explicitly set trust weight.
    pub trusted_sources: usize,
    pub total_queries: u64,
    pub cache_hits: u64,
    /// Scores currently held in the result cache.
    pub cached_scores: u64,
    /// Reports dropped for exceeding the propagation horizon.
    pub ignored_reports: u64,
}

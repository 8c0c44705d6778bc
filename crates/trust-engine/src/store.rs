//! Per-subject state.
//!
//! Each subject's direct entry, propagated reports, evidence, and base-ceiling
//! override live in one `SubjectRecord` behind a `DashMap` shard lock. Updates
//! to one subject are exclusive; different subjects proceed in parallel.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use trust_core::models::{DirectTrustEntry, Identity};

use crate::evidence::EvidenceLedger;
use crate::propagation::PropagatedReports;

#[derive(Debug, Clone, Default)]
pub struct SubjectRecord {
    pub direct: Option<DirectTrustEntry>,
    pub reports: PropagatedReports,
    pub ledger: EvidenceLedger,
    pub base_ceiling_override: Option<f64>,
    /// Bumped on every update; cached scores from older generations are stale.
    pub generation: u64,
}

/// Totals across every subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSummary {
    pub subjects: usize,
    pub direct_entries: usize,
    pub propagated_records: usize,
    pub evidence_items: usize,
}

#[derive(Debug, Default)]
pub struct TrustStore {
    subjects: DashMap<Identity, SubjectRecord>,
}

impl TrustStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutate `subject`'s record under its exclusive lock, creating it if needed.
    ///
    /// The closure must validate before mutating; the generation is bumped
    /// regardless, which only costs a cache miss.
    pub fn update<R>(&self, subject: &Identity, f: impl FnOnce(&mut SubjectRecord) -> R) -> R {
        let mut entry = self.subjects.entry(subject.clone()).or_default();
        let out = f(entry.value_mut());
        entry.generation += 1;
        out
    }

    /// Read `subject`'s record under a shared lock. `None` for unknown subjects.
    pub fn read<R>(&self, subject: &Identity, f: impl FnOnce(&SubjectRecord) -> R) -> Option<R> {
        self.subjects.get(subject).map(|r| f(r.value()))
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn summary(&self) -> StoreSummary {
        self.subjects
            .iter()
            .fold(StoreSummary::default(), |mut acc, entry| {
                let rec = entry.value();
                acc.subjects += 1;
                acc.direct_entries += usize::from(rec.direct.is_some());
                acc.propagated_records += rec.reports.source_count();
                acc.evidence_items += rec.ledger.len();
                acc
            })
    }
}

/// Engine-wide trust in reporting sources.
///
/// Unlike subject state this is shared by every subject, so changes bump a
/// single epoch instead of per-subject generations.
#[derive(Debug, Default)]
pub struct SourceTrust {
    weights: DashMap<Identity, f64>,
    epoch: AtomicU64,
}

impl SourceTrust {
    /// Unset sources are fully trusted.
    pub const DEFAULT: f64 = 1.0;

    /// `score` must already be validated into `[0, 1]`.
    pub fn set(&self, source: &Identity, score: f64) -> Option<f64> {
        let previous = self.weights.insert(source.clone(), score);
        self.epoch.fetch_add(1, Ordering::Release);
        previous
    }

    pub fn get(&self, source: &Identity) -> f64 {
        self.weights
            .get(source)
            .map(|w| *w.value())
            .unwrap_or(Self::DEFAULT)
    }

    /// Read before computing; a score cached under an older epoch is stale.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    pub fn source_count(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_bumps_generation() {
        let store = TrustStore::new();
        let s = Identity::new("s");
        assert!(store.read(&s, |r| r.generation).is_none());
        store.update(&s, |r| r.base_ceiling_override = Some(0.5));
        store.update(&s, |_| ());
        assert_eq!(store.read(&s, |r| r.generation), Some(2));
        assert_eq!(store.summary().subjects, 1);
    }

    #[test]
    fn source_trust_defaults_to_full_and_bumps_epoch() {
        let trust = SourceTrust::default();
        let src = Identity::new("src");
        assert_eq!(trust.get(&src), 1.0);
        assert_eq!(trust.set(&src, 0.25), None);
        assert_eq!(trust.set(&src, 0.5), Some(0.25));
        assert_eq!(trust.get(&src), 0.5);
        assert_eq!(trust.epoch(), 2);
        assert_eq!(trust.source_count(), 1);
    }
}

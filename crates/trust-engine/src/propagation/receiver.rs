use std::collections::BTreeMap;

use trust_core::config::PropagationConfig;
use trust_core::errors::TrustResult;
use trust_core::models::{Identity, PropagatedTrustRecord, ReceiveOutcome};

/// One subject's propagated reports, keyed (and therefore ordered) by source.
///
/// Ordering by source keeps every combination over the reports deterministic.
#[derive(Debug, Clone, Default)]
pub struct PropagatedReports {
    by_source: BTreeMap<Identity, PropagatedTrustRecord>,
}

impl PropagatedReports {
    /// Store `record`, replacing any earlier report from the same source.
    pub fn insert(&mut self, record: PropagatedTrustRecord) -> ReceiveOutcome {
        match self.by_source.insert(record.source.clone(), record) {
            Some(previous) => ReceiveOutcome::Replaced {
                previous_score: previous.reported_score,
            },
            None => ReceiveOutcome::Recorded,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropagatedTrustRecord> {
        self.by_source.values()
    }

    pub fn source_count(&self) -> usize {
        self.by_source.len()
    }
}

/// Turns raw reports into decayed records.
#[derive(Debug, Clone)]
pub struct PropagationReceiver {
    decay_factor: f64,
    max_distance: u32,
}

impl PropagationReceiver {
    pub fn new(decay_factor: f64, max_distance: u32) -> Self {
        Self {
            decay_factor,
            max_distance,
        }
    }

    pub fn from_config(config: &PropagationConfig) -> Self {
        Self::new(config.decay_factor, config.max_propagation_distance)
    }

    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    /// Validate and decay a report.
    ///
    /// Returns `Ok(None)` for a well-formed report that travelled beyond the
    /// horizon. Malformed input is an error even when it would also be out of range.
    pub fn prepare(
        &self,
        subject: &Identity,
        source: &Identity,
        reported_score: f64,
        distance: u32,
    ) -> TrustResult<Option<PropagatedTrustRecord>> {
        let record = PropagatedTrustRecord::new(
            subject.clone(),
            source.clone(),
            reported_score,
            distance,
            self.decay_factor,
        )?;
        if distance > self.max_distance {
            return Ok(None);
        }
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trust_core::errors::TrustError;

    fn receiver() -> PropagationReceiver {
        PropagationReceiver::new(0.8, 3)
    }

    #[test]
    fn decays_per_hop() {
        let rec = receiver()
            .prepare(&"s".into(), &"src".into(), 0.9, 1)
            .unwrap()
            .unwrap();
        assert!((rec.decayed_score - 0.72).abs() < 1e-12);
    }

    #[test]
    fn beyond_horizon_is_dropped_not_rejected() {
        let out = receiver().prepare(&"s".into(), &"src".into(), 0.9, 4).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn malformed_beyond_horizon_is_still_an_error() {
        let err = receiver()
            .prepare(&"s".into(), &"src".into(), 1.9, 9)
            .unwrap_err();
        assert!(matches!(err, TrustError::InvalidScoreRange { .. }));
    }

    #[test]
    fn same_source_overwrites() {
        let r = receiver();
        let mut reports = PropagatedReports::default();
        let first = r.prepare(&"s".into(), &"src".into(), 0.4, 1).unwrap().unwrap();
        let second = r.prepare(&"s".into(), &"src".into(), 0.9, 2).unwrap().unwrap();
        assert_eq!(reports.insert(first), ReceiveOutcome::Recorded);
        assert_eq!(
            reports.insert(second),
            ReceiveOutcome::Replaced {
                previous_score: 0.4
            }
        );
        assert_eq!(reports.source_count(), 1);
        let kept: Vec<_> = reports.iter().collect();
        assert_eq!(kept[0].propagation_distance, 2);
    }
}

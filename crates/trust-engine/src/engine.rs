//! `TrustAggregationEngine`: the base (ceiling-only) engine.
//!
//! Ingestion validates before touching state, so a rejected call leaves the
//! engine exactly as it was. Queries never fail; an unknown subject is neutral.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;
use tracing::{debug, instrument};

use trust_core::config::{validate_or_error, TrustEngineConfig};
use trust_core::constants::NEUTRAL_TRUST;
use trust_core::errors::{TrustError, TrustResult};
use trust_core::models::{
    ensure_score, CeilingResult, DirectTrustEntry, EngineStats, Evidence, Identity,
    PropagatedContribution, PropagatedTrustRecord, ReceiveOutcome, TrustBreakdown,
};
use trust_core::traits::{ICeilingPolicy, ITrustAggregator};
use trust_observability::{aggregation_span, ceiling_span, events, ingestion_span};

use crate::aggregation::Aggregator;
use crate::cache::{ScoreCache, ScoreVariant, Stamp};
use crate::ceiling::{policy_from_config, CeilingCalculator};
use crate::propagation::PropagationReceiver;
use crate::store::{SourceTrust, SubjectRecord, TrustStore};

pub struct TrustAggregationEngine {
    config: TrustEngineConfig,
    store: TrustStore,
    source_trust: SourceTrust,
    ceiling: CeilingCalculator,
    receiver: PropagationReceiver,
    aggregator: Aggregator,
    cache: ScoreCache,
    total_queries: AtomicU64,
    cache_hits: AtomicU64,
    ignored_reports: AtomicU64,
}

impl TrustAggregationEngine {
    /// Build an engine with the configured ceiling policy.
    pub fn new(config: TrustEngineConfig) -> TrustResult<Self> {
        validate_or_error(&config)?;
        let policy = policy_from_config(&config.ceiling);
        Ok(Self::build(config, policy))
    }

    /// Build an engine with a caller-supplied ceiling policy.
    pub fn with_policy(
        config: TrustEngineConfig,
        policy: Box<dyn ICeilingPolicy>,
    ) -> TrustResult<Self> {
        validate_or_error(&config)?;
        Ok(Self::build(config, policy))
    }

    fn build(config: TrustEngineConfig, policy: Box<dyn ICeilingPolicy>) -> Self {
        Self {
            store: TrustStore::new(),
            source_trust: SourceTrust::default(),
            ceiling: CeilingCalculator::new(config.ceiling.base_ceiling, policy),
            receiver: PropagationReceiver::from_config(&config.propagation),
            aggregator: Aggregator::from_config(&config.aggregation),
            cache: ScoreCache::from_config(&config.cache),
            total_queries: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            ignored_reports: AtomicU64::new(0),
            config,
        }
    }

    pub fn config(&self) -> &TrustEngineConfig {
        &self.config
    }

    // ---- Ingestion ----

    /// Record first-hand trust, overwriting any earlier value.
    pub fn set_direct_trust(&self, subject: &Identity, score: f64) -> TrustResult<()> {
        let _span = ingestion_span!("set_direct_trust", subject).entered();
        let entry = DirectTrustEntry::new(subject.clone(), score)
            .map_err(|e| rejected("set_direct_trust", subject, e))?;
        self.store.update(subject, |rec| rec.direct = Some(entry));
        debug!(score, "direct trust set");
        Ok(())
    }

    /// Append evidence. Fails with `InvalidScoreRange` for a bad quality score
    /// and `SubjectMismatch` when the item names a different subject.
    pub fn add_evidence(&self, subject: &Identity, evidence: Evidence) -> TrustResult<()> {
        let _span = ingestion_span!("add_evidence", subject).entered();
        evidence
            .validate()
            .map_err(|e| rejected("add_evidence", subject, e))?;
        if evidence.subject != *subject {
            let err = TrustError::SubjectMismatch {
                expected: subject.to_string(),
                found: evidence.subject.to_string(),
            };
            return Err(rejected("add_evidence", subject, err));
        }

        let quality = evidence.quality_score;
        let label = evidence.evidence_type.label().to_string();
        let (first_direct, ceiling) = self.store.update(subject, |rec| {
            let first_direct = rec.ledger.append(evidence);
            let ceiling = self.ceiling.ceiling(&rec.ledger, rec.base_ceiling_override);
            (first_direct, ceiling)
        });

        events::evidence_recorded(subject.as_str(), &label, quality, ceiling);
        if first_direct {
            events::full_ceiling_unlocked(subject.as_str(), quality);
        }
        Ok(())
    }

    /// Ingest a second-hand report. Reports beyond the horizon are counted and dropped.
    pub fn receive_propagated_trust(
        &self,
        subject: &Identity,
        source: &Identity,
        score: f64,
        distance: u32,
    ) -> TrustResult<ReceiveOutcome> {
        let _span = ingestion_span!("receive_propagated_trust", subject).entered();
        let prepared = self
            .receiver
            .prepare(subject, source, score, distance)
            .map_err(|e| rejected("receive_propagated_trust", subject, e))?;

        let Some(record) = prepared else {
            self.ignored_reports.fetch_add(1, Ordering::Relaxed);
            events::propagated_report_ignored(
                subject.as_str(),
                source.as_str(),
                distance,
                self.receiver.max_distance(),
            );
            return Ok(ReceiveOutcome::Ignored);
        };

        let outcome = self.store.update(subject, |rec| rec.reports.insert(record));
        debug!(source = %source, score, distance, ?outcome, "propagated report stored");
        Ok(outcome)
    }

    /// Override the base ceiling for one subject.
    pub fn set_base_ceiling(&self, subject: &Identity, base_ceiling: f64) -> TrustResult<()> {
        let _span = ingestion_span!("set_base_ceiling", subject).entered();
        let base_ceiling = ensure_score("base_ceiling", base_ceiling)
            .map_err(|e| rejected("set_base_ceiling", subject, e))?;
        self.store
            .update(subject, |rec| rec.base_ceiling_override = Some(base_ceiling));
        Ok(())
    }

    /// Set how far reports relayed by `source` are believed, for every subject.
    ///
    /// Each report's decayed score is multiplied by this before capping, so
    /// it can only lower a contribution. Unset sources count as `1.0`.
    pub fn set_source_trust(&self, source: &Identity, score: f64) -> TrustResult<()> {
        let _span = ingestion_span!("set_source_trust", source).entered();
        let score = ensure_score("source_trust", score)
            .map_err(|e| rejected("set_source_trust", source, e))?;
        let previous = self.source_trust.set(source, score);
        debug!(score, ?previous, "source trust set");
        Ok(())
    }

    pub fn source_trust(&self, source: &Identity) -> f64 {
        self.source_trust.get(source)
    }

    // ---- Queries ----

    pub fn ceiling_for(&self, subject: &Identity) -> f64 {
        let _span = ceiling_span!(subject).entered();
        self.store
            .read(subject, |rec| {
                self.ceiling.ceiling(&rec.ledger, rec.base_ceiling_override)
            })
            .unwrap_or_else(|| self.ceiling.base_ceiling())
    }

    pub fn ceiling_result(&self, subject: &Identity) -> CeilingResult {
        let _span = ceiling_span!(subject).entered();
        self.store
            .read(subject, |rec| {
                self.ceiling
                    .ceiling_result(subject, &rec.ledger, rec.base_ceiling_override)
            })
            .unwrap_or_else(|| self.ceiling.default_result(subject))
    }

    /// Ceiling-bounded aggregate. `0.5` for a subject with no information.
    pub fn aggregated_trust(&self, subject: &Identity) -> f64 {
        self.query(subject, ScoreVariant::Base, |rec| self.score_record(rec, 1.0))
    }

    /// Aggregate many subjects in parallel. Output order matches `subjects`.
    pub fn aggregated_trust_many(&self, subjects: &[Identity]) -> Vec<f64> {
        subjects
            .par_iter()
            .map(|s| self.aggregated_trust(s))
            .collect()
    }

    pub fn direct_trust(&self, subject: &Identity) -> Option<DirectTrustEntry> {
        self.store.read(subject, |rec| rec.direct.clone()).flatten()
    }

    pub fn evidence_for(&self, subject: &Identity) -> Vec<Evidence> {
        self.store
            .read(subject, |rec| rec.ledger.items().to_vec())
            .unwrap_or_default()
    }

    pub fn propagated_records(&self, subject: &Identity) -> Vec<PropagatedTrustRecord> {
        self.store
            .read(subject, |rec| rec.reports.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Everything that went into `aggregated_trust(subject)`, read under one guard.
    #[instrument(skip(self))]
    pub fn breakdown(&self, subject: &Identity) -> TrustBreakdown {
        self.store
            .read(subject, |rec| self.breakdown_record(subject, rec))
            .unwrap_or_else(|| TrustBreakdown {
                subject: subject.clone(),
                aggregated_trust: NEUTRAL_TRUST,
                robust_trust: None,
                ceiling: self.ceiling.base_ceiling(),
                direct: None,
                propagated: Vec::new(),
                evidence_count: 0,
                diversity: None,
            })
    }

    /// `breakdown` as pretty JSON for audit export.
    pub fn breakdown_json(&self, subject: &Identity) -> TrustResult<String> {
        Ok(serde_json::to_string_pretty(&self.breakdown(subject))?)
    }

    pub fn stats(&self) -> EngineStats {
        let summary = self.store.summary();
        EngineStats {
            subjects: summary.subjects,
            direct_entries: summary.direct_entries,
            propagated_records: summary.propagated_records,
            evidence_items: summary.evidence_items,
            total_queries: self.total_queries.load(Ordering::Relaxed),
            trusted_sources: self.source_trust.source_count(),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cached_scores: self.cache.entry_count(),
            ignored_reports: self.ignored_reports.load(Ordering::Relaxed),
        }
    }

    // ---- Shared with the robust engine ----

    /// Run `compute` against `subject`'s record, through the cache.
    ///
    /// The record's read guard is held for the whole computation, so the
    /// score and the generation it is cached under describe the same state.
    /// The source-trust epoch is read first; a concurrent change can only
    /// make the entry look older than it is.
    pub(crate) fn query(
        &self,
        subject: &Identity,
        variant: ScoreVariant,
        compute: impl FnOnce(&SubjectRecord) -> f64,
    ) -> f64 {
        let _span = aggregation_span!(subject, variant).entered();
        self.total_queries.fetch_add(1, Ordering::Relaxed);
        let source_epoch = self.source_trust.epoch();
        self.store
            .read(subject, |rec| {
                let stamp = Stamp {
                    generation: rec.generation,
                    source_epoch,
                };
                if let Some(hit) = self.cache.get(subject, variant, stamp) {
                    self.cache_hits.fetch_add(1, Ordering::Relaxed);
                    return hit;
                }
                let score = compute(rec);
                self.cache.insert(subject, variant, stamp, score);
                score
            })
            .unwrap_or(NEUTRAL_TRUST)
    }

    /// Aggregate one record with the propagated block scaled by `discount`.
    pub(crate) fn score_record(&self, rec: &SubjectRecord, discount: f64) -> f64 {
        let ceiling = self.ceiling.ceiling(&rec.ledger, rec.base_ceiling_override);
        let contributions = self.contributions(rec, ceiling);
        self.aggregator
            .aggregate(rec.direct.as_ref().map(|d| d.score), &contributions, discount)
    }

    pub(crate) fn breakdown_record(&self, subject: &Identity, rec: &SubjectRecord) -> TrustBreakdown {
        let ceiling = self.ceiling.ceiling(&rec.ledger, rec.base_ceiling_override);
        TrustBreakdown {
            subject: subject.clone(),
            aggregated_trust: self.score_record(rec, 1.0),
            robust_trust: None,
            ceiling,
            direct: rec.direct.clone(),
            propagated: self.contributions(rec, ceiling),
            evidence_count: rec.ledger.len(),
            diversity: None,
        }
    }

    fn contributions(&self, rec: &SubjectRecord, ceiling: f64) -> Vec<PropagatedContribution> {
        self.aggregator
            .contributions(&rec.reports, ceiling, |source| self.source_trust.get(source))
    }

    pub(crate) fn read_record<R>(
        &self,
        subject: &Identity,
        f: impl FnOnce(&SubjectRecord) -> R,
    ) -> Option<R> {
        self.store.read(subject, f)
    }
}

impl Default for TrustAggregationEngine {
    fn default() -> Self {
        let config = TrustEngineConfig::default();
        let policy = policy_from_config(&config.ceiling);
        Self::build(config, policy)
    }
}

impl std::fmt::Debug for TrustAggregationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustAggregationEngine")
            .field("ceiling", &self.ceiling)
            .field("subjects", &self.store.subject_count())
            .field("cache", &self.cache)
            .finish()
    }
}

impl ITrustAggregator for TrustAggregationEngine {
    fn set_direct_trust(&self, subject: &Identity, score: f64) -> TrustResult<()> {
        TrustAggregationEngine::set_direct_trust(self, subject, score)
    }

    fn add_evidence(&self, subject: &Identity, evidence: Evidence) -> TrustResult<()> {
        TrustAggregationEngine::add_evidence(self, subject, evidence)
    }

    fn receive_propagated_trust(
        &self,
        subject: &Identity,
        source: &Identity,
        score: f64,
        distance: u32,
    ) -> TrustResult<ReceiveOutcome> {
        TrustAggregationEngine::receive_propagated_trust(self, subject, source, score, distance)
    }

    fn ceiling_for(&self, subject: &Identity) -> f64 {
        TrustAggregationEngine::ceiling_for(self, subject)
    }

    fn aggregated_trust(&self, subject: &Identity) -> f64 {
        TrustAggregationEngine::aggregated_trust(self, subject)
    }
}

/// Log a validation failure and hand the error back.
pub(crate) fn rejected(operation: &str, subject: &Identity, err: TrustError) -> TrustError {
    events::invalid_input_rejected(operation, subject.as_str(), err.kind(), &err.to_string());
    err
}

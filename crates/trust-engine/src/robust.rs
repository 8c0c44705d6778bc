//! `RobustTrustEngine`: the base engine plus the low-diversity discount.
//!
//! Shares all state with the wrapped engine. The discount only ever scales
//! the propagated block down, so for the same state the robust score never
//! exceeds the base score, and direct trust passes through untouched.

use rayon::prelude::*;

use trust_core::config::TrustEngineConfig;
use trust_core::errors::TrustResult;
use trust_core::models::{DiversityReport, Evidence, Identity, ReceiveOutcome, TrustBreakdown};
use trust_core::traits::ITrustAggregator;
use trust_observability::events;

use crate::cache::ScoreVariant;
use crate::diversity::DiversityDiscount;
use crate::engine::TrustAggregationEngine;
use crate::propagation::PropagatedReports;

#[derive(Debug)]
pub struct RobustTrustEngine {
    engine: TrustAggregationEngine,
    diversity: DiversityDiscount,
}

impl RobustTrustEngine {
    pub fn new(config: TrustEngineConfig) -> TrustResult<Self> {
        let diversity = DiversityDiscount::new(config.diversity.clone());
        Ok(Self {
            engine: TrustAggregationEngine::new(config)?,
            diversity,
        })
    }

    /// Wrap an existing engine, keeping its state.
    pub fn from_engine(engine: TrustAggregationEngine) -> Self {
        let diversity = DiversityDiscount::new(engine.config().diversity.clone());
        Self { engine, diversity }
    }

    /// The undiscounted engine underneath.
    pub fn base(&self) -> &TrustAggregationEngine {
        &self.engine
    }

    pub fn into_inner(self) -> TrustAggregationEngine {
        self.engine
    }

    /// Diversity-discounted aggregate.
    ///
    /// `collusion_suspected` is logged when the score is computed, i.e. once
    /// per subject state; cached repeats stay silent. Use
    /// [`diversity_report`](Self::diversity_report) to re-check on demand.
    pub fn aggregated_trust(&self, subject: &Identity) -> f64 {
        self.engine.query(subject, ScoreVariant::Robust, |rec| {
            let report = self.assess(subject, &rec.reports);
            self.engine.score_record(rec, report.discount)
        })
    }

    /// What the base engine returns for the same state.
    pub fn base_aggregated_trust(&self, subject: &Identity) -> f64 {
        self.engine.aggregated_trust(subject)
    }

    pub fn aggregated_trust_many(&self, subjects: &[Identity]) -> Vec<f64> {
        subjects
            .par_iter()
            .map(|s| self.aggregated_trust(s))
            .collect()
    }

    pub fn diversity_report(&self, subject: &Identity) -> Option<DiversityReport> {
        self.engine
            .read_record(subject, |rec| self.diversity.assess(&rec.reports))
    }

    /// Base breakdown plus the robust score and the diversity assessment.
    pub fn breakdown(&self, subject: &Identity) -> TrustBreakdown {
        let robust = self.engine.read_record(subject, |rec| {
            let mut breakdown = self.engine.breakdown_record(subject, rec);
            let report = self.diversity.assess(&rec.reports);
            breakdown.robust_trust = Some(self.engine.score_record(rec, report.discount));
            breakdown.diversity = Some(report);
            breakdown
        });
        robust.unwrap_or_else(|| {
            let mut breakdown = self.engine.breakdown(subject);
            breakdown.robust_trust = Some(breakdown.aggregated_trust);
            breakdown
        })
    }

    // ---- Ingestion (delegated) ----

    pub fn set_direct_trust(&self, subject: &Identity, score: f64) -> TrustResult<()> {
        self.engine.set_direct_trust(subject, score)
    }

    pub fn add_evidence(&self, subject: &Identity, evidence: Evidence) -> TrustResult<()> {
        self.engine.add_evidence(subject, evidence)
    }

    pub fn receive_propagated_trust(
        &self,
        subject: &Identity,
        source: &Identity,
        score: f64,
        distance: u32,
    ) -> TrustResult<ReceiveOutcome> {
        self.engine
            .receive_propagated_trust(subject, source, score, distance)
    }

    pub fn set_base_ceiling(&self, subject: &Identity, base_ceiling: f64) -> TrustResult<()> {
        self.engine.set_base_ceiling(subject, base_ceiling)
    }

    pub fn set_source_trust(&self, source: &Identity, score: f64) -> TrustResult<()> {
        self.engine.set_source_trust(source, score)
    }

    pub fn ceiling_for(&self, subject: &Identity) -> f64 {
        self.engine.ceiling_for(subject)
    }

    fn assess(&self, subject: &Identity, reports: &PropagatedReports) -> DiversityReport {
        let report = self.diversity.assess(reports);
        if report.collusion_suspected {
            events::collusion_suspected(
                subject.as_str(),
                report.source_count,
                report.spread,
                report.discount,
            );
        }
        report
    }
}

impl Default for RobustTrustEngine {
    fn default() -> Self {
        Self::from_engine(TrustAggregationEngine::default())
    }
}

impl ITrustAggregator for RobustTrustEngine {
    fn set_direct_trust(&self, subject: &Identity, score: f64) -> TrustResult<()> {
        RobustTrustEngine::set_direct_trust(self, subject, score)
    }

    fn add_evidence(&self, subject: &Identity, evidence: Evidence) -> TrustResult<()> {
        RobustTrustEngine::add_evidence(self, subject, evidence)
    }

    fn receive_propagated_trust(
        &self,
        subject: &Identity,
        source: &Identity,
        score: f64,
        distance: u32,
    ) -> TrustResult<ReceiveOutcome> {
        RobustTrustEngine::receive_propagated_trust(self, subject, source, score, distance)
    }

    fn ceiling_for(&self, subject: &Identity) -> f64 {
        RobustTrustEngine::ceiling_for(self, subject)
    }

    fn aggregated_trust(&self, subject: &Identity) -> f64 {
        RobustTrustEngine::aggregated_trust(self, subject)
    }
}

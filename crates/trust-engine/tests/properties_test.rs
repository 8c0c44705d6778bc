use proptest::prelude::*;
use trust_core::config::{BoostCurve, PropagatedCombination, TrustEngineConfig};
use trust_core::models::{Evidence, EvidenceType, Identity};
use trust_engine::{RobustTrustEngine, TrustAggregationEngine};

const EPS: f64 = 1e-9;

fn arb_indirect_evidence_type() -> impl Strategy<Value = EvidenceType> {
    prop_oneof![
        Just(EvidenceType::EnergyProof),
        Just(EvidenceType::Historical),
        "[a-z]{1,8}".prop_map(EvidenceType::Other),
    ]
}

fn arb_combination() -> impl Strategy<Value = PropagatedCombination> {
    prop_oneof![
        Just(PropagatedCombination::WeightedMean),
        Just(PropagatedCombination::Median),
        Just(PropagatedCombination::TrimmedMean),
    ]
}

/// `(score, distance)` reports, distance within the default horizon.
fn arb_reports() -> impl Strategy<Value = Vec<(f64, u32)>> {
    prop::collection::vec((0.0f64..=1.0, 1u32..=3), 1..40)
}

fn feed(engine: &TrustAggregationEngine, subject: &Identity, reports: &[(f64, u32)]) {
    for (i, (score, distance)) in reports.iter().enumerate() {
        engine
            .receive_propagated_trust(subject, &Identity::new(format!("src-{i}")), *score, *distance)
            .unwrap();
    }
}

// ── Ceiling bound ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn propagated_only_never_exceeds_ceiling(
        reports in arb_reports(),
        combination in arb_combination(),
        base in 0.0f64..=1.0,
    ) {
        let mut config = TrustEngineConfig::default();
        config.ceiling.base_ceiling = base;
        config.aggregation.combination = combination;
        let engine = TrustAggregationEngine::new(config).unwrap();
        let s = Identity::new("s");
        feed(&engine, &s, &reports);

        let trust = engine.aggregated_trust(&s);
        prop_assert!(trust <= engine.ceiling_for(&s) + EPS);
        prop_assert!((0.0..=1.0).contains(&trust));
    }

    #[test]
    fn evidence_without_direct_observation_stays_below_full(
        items in prop::collection::vec((arb_indirect_evidence_type(), 0.0f64..=1.0), 1..20),
        linear in any::<bool>(),
    ) {
        let mut config = TrustEngineConfig::default();
        if linear {
            config.ceiling.curve = BoostCurve::linear();
        }
        let engine = TrustAggregationEngine::new(config).unwrap();
        let s = Identity::new("s");
        for (ty, q) in items {
            engine.add_evidence(&s, Evidence::new("s", ty, q, "p").unwrap()).unwrap();
        }
        let c = engine.ceiling_for(&s);
        prop_assert!(c >= 0.7 - EPS);
        prop_assert!(c <= 1.0);
    }

    #[test]
    fn ceiling_is_monotone_in_evidence(
        items in prop::collection::vec((arb_indirect_evidence_type(), 0.0f64..=1.0), 1..20),
    ) {
        let engine = TrustAggregationEngine::default();
        let s = Identity::new("s");
        let mut previous = engine.ceiling_for(&s);
        for (ty, q) in items {
            engine.add_evidence(&s, Evidence::new("s", ty, q, "p").unwrap()).unwrap();
            let current = engine.ceiling_for(&s);
            prop_assert!(current >= previous - EPS);
            previous = current;
        }
    }

    #[test]
    fn ceiling_at_least_base_for_any_override(base in 0.0f64..=1.0, q in 0.0f64..=1.0) {
        let engine = TrustAggregationEngine::default();
        let s = Identity::new("s");
        engine.set_base_ceiling(&s, base).unwrap();
        prop_assert!((engine.ceiling_for(&s) - base).abs() < EPS);
        engine.add_evidence(&s, Evidence::new("s", EvidenceType::EnergyProof, q, "p").unwrap()).unwrap();
        let c = engine.ceiling_for(&s);
        prop_assert!(c >= base - EPS && c <= 1.0);
    }
}

proptest! {
    #[test]
    fn source_trust_only_lowers_and_stays_capped(
        reports in arb_reports(),
        trusts in prop::collection::vec(0.0f64..=1.0, 40),
    ) {
        let weighted = TrustAggregationEngine::default();
        let plain = TrustAggregationEngine::default();
        let s = Identity::new("s");
        for (i, t) in trusts.iter().enumerate() {
            weighted.set_source_trust(&Identity::new(format!("src-{i}")), *t).unwrap();
        }
        feed(&weighted, &s, &reports);
        feed(&plain, &s, &reports);

        let trust = weighted.aggregated_trust(&s);
        prop_assert!(trust <= weighted.ceiling_for(&s) + EPS);
        // Weighted mean of pointwise-lower values with identical weights.
        prop_assert!(trust <= plain.aggregated_trust(&s) + EPS);
    }
}

// ── Decay and blending ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn decay_is_multiplicative(score in 0.0f64..=1.0, distance in 1u32..=3) {
        let engine = TrustAggregationEngine::default();
        let s = Identity::new("s");
        engine.receive_propagated_trust(&s, &Identity::new("a"), score, distance).unwrap();
        let record = &engine.propagated_records(&s)[0];
        let expected = score * 0.8f64.powi(distance as i32);
        prop_assert!((record.decayed_score - expected).abs() < EPS);
    }

    #[test]
    fn mixed_trust_between_inputs(direct in 0.0f64..=1.0, reports in arb_reports()) {
        let engine = TrustAggregationEngine::default();
        let s = Identity::new("s");
        engine.set_direct_trust(&s, direct).unwrap();
        feed(&engine, &s, &reports);

        let only_propagated = TrustAggregationEngine::default();
        feed(&only_propagated, &s, &reports);
        let p = only_propagated.aggregated_trust(&s);

        let trust = engine.aggregated_trust(&s);
        prop_assert!(trust >= direct.min(p) - EPS);
        prop_assert!(trust <= direct.max(p) + EPS);
    }
}

// ── Diversity ordering ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn robust_never_exceeds_base(
        direct in prop::option::of(0.0f64..=1.0),
        reports in arb_reports(),
        clustered in prop::option::of((0.8f64..=1.0, 2usize..60)),
    ) {
        let engine = RobustTrustEngine::default();
        let s = Identity::new("s");
        if let Some(d) = direct {
            engine.set_direct_trust(&s, d).unwrap();
        }
        feed(engine.base(), &s, &reports);
        if let Some((score, n)) = clustered {
            for i in 0..n {
                engine.receive_propagated_trust(&s, &Identity::new(format!("c-{i}")), score, 1).unwrap();
            }
        }
        prop_assert!(engine.aggregated_trust(&s) <= engine.base_aggregated_trust(&s) + EPS);
    }
}

use criterion::{criterion_group, criterion_main, Criterion};

use trust_core::config::{PropagatedCombination, TrustEngineConfig};
use trust_core::models::Identity;
use trust_engine::{RobustTrustEngine, TrustAggregationEngine};

/// Cache disabled so every iteration recomputes.
fn build_swarm(combination: PropagatedCombination) -> (TrustEngineConfig, Identity) {
    let mut config = TrustEngineConfig::default();
    config.cache.enabled = false;
    config.aggregation.combination = combination;
    (config, Identity::new("target"))
}

fn flood(engine: &TrustAggregationEngine, subject: &Identity, n: usize) {
    for i in 0..n {
        let score = 0.5 + (i % 50) as f64 / 100.0;
        let distance = 1 + (i % 3) as u32;
        engine
            .receive_propagated_trust(subject, &Identity::new(format!("src-{i}")), score, distance)
            .unwrap();
    }
}

fn bench_weighted_mean_10k(c: &mut Criterion) {
    let (config, subject) = build_swarm(PropagatedCombination::WeightedMean);
    let engine = TrustAggregationEngine::new(config).unwrap();
    flood(&engine, &subject, 10_000);

    c.bench_function("aggregate_weighted_mean_10k_sources", |b| {
        b.iter(|| engine.aggregated_trust(&subject));
    });
}

fn bench_trimmed_mean_10k(c: &mut Criterion) {
    let (config, subject) = build_swarm(PropagatedCombination::TrimmedMean);
    let engine = TrustAggregationEngine::new(config).unwrap();
    flood(&engine, &subject, 10_000);

    c.bench_function("aggregate_trimmed_mean_10k_sources", |b| {
        b.iter(|| engine.aggregated_trust(&subject));
    });
}

fn bench_robust_10k(c: &mut Criterion) {
    let (config, subject) = build_swarm(PropagatedCombination::WeightedMean);
    let engine = TrustAggregationEngine::new(config).unwrap();
    flood(&engine, &subject, 10_000);
    let robust = RobustTrustEngine::from_engine(engine);

    c.bench_function("aggregate_robust_10k_sources", |b| {
        b.iter(|| robust.aggregated_trust(&subject));
    });
}

fn bench_batch_1k_subjects(c: &mut Criterion) {
    let engine = TrustAggregationEngine::default();
    let subjects: Vec<Identity> = (0..1_000).map(|i| Identity::new(format!("s{i}"))).collect();
    for s in &subjects {
        flood(&engine, s, 20);
    }

    c.bench_function("aggregate_many_1k_subjects", |b| {
        b.iter(|| engine.aggregated_trust_many(&subjects));
    });
}

criterion_group!(
    benches,
    bench_weighted_mean_10k,
    bench_trimmed_mean_10k,
    bench_robust_10k,
    bench_batch_1k_subjects
);
criterion_main!(benches);

//! Replays the golden scenarios under `test-fixtures/golden/trust/`.

use serde_json::Value;
use test_fixtures::{list_fixtures, load_fixture_value};
use trust_core::models::{Evidence, EvidenceType, Identity, ReceiveOutcome};
use trust_engine::RobustTrustEngine;

const EPS: f64 = 1e-9;

fn str_field<'a>(v: &'a Value, key: &str) -> &'a str {
    v[key]
        .as_str()
        .unwrap_or_else(|| panic!("missing string field {key} in {v}"))
}

fn f64_field(v: &Value, key: &str) -> f64 {
    v[key]
        .as_f64()
        .unwrap_or_else(|| panic!("missing number field {key} in {v}"))
}

fn evidence_type(label: &str) -> EvidenceType {
    match label {
        "direct_observation" => EvidenceType::DirectObservation,
        "energy_proof" => EvidenceType::EnergyProof,
        "historical" => EvidenceType::Historical,
        other => EvidenceType::Other(other.to_string()),
    }
}

fn outcome_label(outcome: ReceiveOutcome) -> &'static str {
    match outcome {
        ReceiveOutcome::Recorded => "recorded",
        ReceiveOutcome::Replaced { .. } => "replaced",
        ReceiveOutcome::Ignored => "ignored",
    }
}

fn apply_step(engine: &RobustTrustEngine, step: &Value) {
    let subject = Identity::new(str_field(step, "subject"));
    match str_field(step, "op") {
        "direct" => engine
            .set_direct_trust(&subject, f64_field(step, "score"))
            .unwrap(),
        "evidence" => {
            let ev = Evidence::new(
                subject.clone(),
                evidence_type(str_field(step, "type")),
                f64_field(step, "quality"),
                "golden",
            )
            .unwrap();
            engine.add_evidence(&subject, ev).unwrap();
        }
        "propagated" => {
            let outcome = engine
                .receive_propagated_trust(
                    &subject,
                    &Identity::new(str_field(step, "source")),
                    f64_field(step, "score"),
                    step["distance"].as_u64().unwrap() as u32,
                )
                .unwrap();
            if let Some(expected) = step["outcome"].as_str() {
                assert_eq!(outcome_label(outcome), expected);
            }
        }
        "propagated_swarm" => {
            let n = step["sources"].as_u64().unwrap();
            for i in 0..n {
                engine
                    .receive_propagated_trust(
                        &subject,
                        &Identity::new(format!("swarm-{i}")),
                        f64_field(step, "score"),
                        step["distance"].as_u64().unwrap() as u32,
                    )
                    .unwrap();
            }
        }
        other => panic!("unknown op {other}"),
    }
}

fn check_expectation(name: &str, engine: &RobustTrustEngine, expect: &Value) {
    let subject = Identity::new(str_field(expect, "subject"));
    let trust = engine.base_aggregated_trust(&subject);
    let ceiling = engine.ceiling_for(&subject);

    if let Some(v) = expect["aggregated"].as_f64() {
        assert!((trust - v).abs() < EPS, "{name}: aggregated {trust} != {v}");
    }
    if let Some(v) = expect["aggregated_min"].as_f64() {
        assert!(trust >= v - EPS, "{name}: aggregated {trust} < {v}");
    }
    if let Some(v) = expect["aggregated_max"].as_f64() {
        assert!(trust <= v + EPS, "{name}: aggregated {trust} > {v}");
    }
    if let Some(v) = expect["ceiling"].as_f64() {
        assert!((ceiling - v).abs() < EPS, "{name}: ceiling {ceiling} != {v}");
    }
    if let Some(v) = expect["ceiling_min"].as_f64() {
        assert!(ceiling >= v - EPS, "{name}: ceiling {ceiling} < {v}");
    }
    if let Some(v) = expect["ceiling_max"].as_f64() {
        assert!(ceiling <= v + EPS, "{name}: ceiling {ceiling} > {v}");
    }
    if let Some(v) = expect["robust_max"].as_f64() {
        let robust = engine.aggregated_trust(&subject);
        assert!(robust <= v + EPS, "{name}: robust {robust} > {v}");
    }
    if let Some(v) = expect["collusion_suspected"].as_bool() {
        let report = engine.diversity_report(&subject).unwrap();
        assert_eq!(report.collusion_suspected, v, "{name}: collusion flag");
    }
    assert!(engine.aggregated_trust(&subject) <= trust + EPS, "{name}: robust above base");
}

#[test]
fn golden_scenarios() {
    let files = list_fixtures("trust");
    assert!(!files.is_empty(), "no golden trust scenarios found");

    for path in files {
        let file = path.file_name().unwrap().to_string_lossy().to_string();
        let scenario = load_fixture_value(&format!("trust/{file}"));
        let name = str_field(&scenario, "name");

        let engine = RobustTrustEngine::default();
        for step in scenario["steps"].as_array().unwrap() {
            apply_step(&engine, step);
        }
        for expect in scenario["expect"].as_array().unwrap() {
            check_expectation(name, &engine, expect);
        }
    }
}

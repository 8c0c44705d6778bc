//! Config validation: collects every violation instead of stopping at the first.

use super::{BoostCurve, TrustEngineConfig};
use crate::errors::{ConfigError, TrustResult};

fn in_unit_interval(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Validate a config, returning a human-readable line per violation.
pub fn validate(config: &TrustEngineConfig) -> Vec<String> {
    let mut violations = Vec::new();

    let ceiling = &config.ceiling;
    if !in_unit_interval(ceiling.base_ceiling) {
        violations.push(format!(
            "ceiling.base_ceiling must be in [0, 1], got {}",
            ceiling.base_ceiling
        ));
    }
    match ceiling.curve {
        BoostCurve::Saturating { rate } => {
            if !(rate.is_finite() && rate > 0.0) {
                violations.push(format!("ceiling.curve.rate must be > 0, got {rate}"));
            }
        }
        BoostCurve::Linear {
            per_unit,
            max_boost,
        } => {
            if !non_negative(per_unit) {
                violations.push(format!(
                    "ceiling.curve.per_unit must be >= 0, got {per_unit}"
                ));
            }
            if !in_unit_interval(max_boost) {
                violations.push(format!(
                    "ceiling.curve.max_boost must be in [0, 1], got {max_boost}"
                ));
            }
        }
    }
    let weights = &ceiling.evidence_weights;
    for (name, w) in [
        ("energy_proof", weights.energy_proof),
        ("historical", weights.historical),
        ("other", weights.other),
    ] {
        if !non_negative(w) {
            violations.push(format!(
                "ceiling.evidence_weights.{name} must be >= 0, got {w}"
            ));
        }
    }

    let propagation = &config.propagation;
    let decay = propagation.decay_factor;
    if !(decay.is_finite() && decay > 0.0 && decay <= 1.0) {
        violations.push(format!(
            "propagation.decay_factor must be in (0, 1], got {decay}"
        ));
    }
    if propagation.max_propagation_distance < 1 {
        violations.push("propagation.max_propagation_distance must be >= 1".to_string());
    }

    let aggregation = &config.aggregation;
    if !(aggregation.direct_weight.is_finite() && aggregation.direct_weight > 0.0) {
        violations.push(format!(
            "aggregation.direct_weight must be > 0, got {}",
            aggregation.direct_weight
        ));
    }
    if !non_negative(aggregation.propagated_weight) {
        violations.push(format!(
            "aggregation.propagated_weight must be >= 0, got {}",
            aggregation.propagated_weight
        ));
    } else if aggregation.propagated_weight > aggregation.direct_weight {
        violations.push(format!(
            "aggregation.propagated_weight ({}) must not exceed direct_weight ({})",
            aggregation.propagated_weight, aggregation.direct_weight
        ));
    }
    if !(aggregation.outlier_z_threshold.is_finite() && aggregation.outlier_z_threshold > 0.0) {
        violations.push(format!(
            "aggregation.outlier_z_threshold must be > 0, got {}",
            aggregation.outlier_z_threshold
        ));
    }

    let diversity = &config.diversity;
    if diversity.min_cluster_size < 2 {
        violations.push(format!(
            "diversity.min_cluster_size must be >= 2, got {}",
            diversity.min_cluster_size
        ));
    }
    if !non_negative(diversity.similarity_tolerance) {
        violations.push(format!(
            "diversity.similarity_tolerance must be >= 0, got {}",
            diversity.similarity_tolerance
        ));
    }
    if !in_unit_interval(diversity.high_score_threshold) {
        violations.push(format!(
            "diversity.high_score_threshold must be in [0, 1], got {}",
            diversity.high_score_threshold
        ));
    }
    let min_discount = diversity.min_discount;
    if !(min_discount.is_finite() && min_discount > 0.0 && min_discount < 1.0) {
        violations.push(format!(
            "diversity.min_discount must be in (0, 1), got {min_discount}"
        ));
    }

    violations
}

/// Validate and convert any violations into a single error.
pub fn validate_or_error(config: &TrustEngineConfig) -> TrustResult<()> {
    let violations = validate(config);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid { violations }.into())
    }
}

//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log an evidence item being appended to a subject's ledger.
pub fn evidence_recorded(subject: &str, evidence_type: &str, quality: f64, ceiling: f64) {
    tracing::info!(
        event = "evidence_recorded",
        subject = %subject,
        evidence_type = %evidence_type,
        quality = quality,
        ceiling = ceiling,
        "evidence recorded"
    );
}

/// Log the first `DirectObservation` that lifts a subject to the full ceiling.
pub fn full_ceiling_unlocked(subject: &str, quality: f64) {
    tracing::info!(
        event = "full_ceiling_unlocked",
        subject = %subject,
        quality = quality,
        "direct observation unlocked full trust ceiling"
    );
}

/// Log a propagated report dropped for exceeding the propagation horizon.
pub fn propagated_report_ignored(subject: &str, source: &str, distance: u32, horizon: u32) {
    tracing::debug!(
        event = "propagated_report_ignored",
        subject = %subject,
        source = %source,
        distance = distance,
        horizon = horizon,
        "propagated report beyond horizon ignored"
    );
}

/// Log a low-diversity cluster of propagated reports. Emitted when a robust
/// score is computed, not on cache hits.
pub fn collusion_suspected(subject: &str, source_count: usize, spread: f64, discount: f64) {
    tracing::warn!(
        event = "collusion_suspected",
        subject = %subject,
        source_count = source_count,
        spread = spread,
        discount = discount,
        "low-diversity propagated cluster discounted"
    );
}

/// Log an ingestion call rejected by validation.
pub fn invalid_input_rejected(operation: &str, subject: &str, kind: &str, reason: &str) {
    tracing::warn!(
        event = "invalid_input_rejected",
        operation = %operation,
        subject = %subject,
        kind = %kind,
        reason = %reason,
        "ingestion rejected"
    );
}

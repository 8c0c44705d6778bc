//! Span definitions per operation: ingestion, ceiling, aggregation.

/// Create an ingestion span.
#[macro_export]
macro_rules! ingestion_span {
    ($operation:expr, $subject:expr) => {
        $crate::tracing::debug_span!("trust.ingestion", operation = %$operation, subject = %$subject)
    };
}

/// Create a ceiling computation span.
#[macro_export]
macro_rules! ceiling_span {
    ($subject:expr) => {
        $crate::tracing::debug_span!("trust.ceiling", subject = %$subject)
    };
}

/// Create an aggregation span.
#[macro_export]
macro_rules! aggregation_span {
    ($subject:expr, $variant:expr) => {
        $crate::tracing::debug_span!("trust.aggregation", subject = %$subject, variant = %$variant)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INGESTION: &str = "trust.ingestion";
    pub const CEILING: &str = "trust.ceiling";
    pub const AGGREGATION: &str = "trust.aggregation";
}

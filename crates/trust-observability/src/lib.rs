//! # trust-observability
//!
//! Tracing subscriber setup, span macros, and structured events emitted by
//! the trust engine.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::spans;
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};

#[doc(hidden)]
pub use tracing;

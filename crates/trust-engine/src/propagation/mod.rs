//! Propagation receiver: validates second-hand reports, applies hop decay,
//! enforces the propagation horizon, and keeps one report per source.

mod receiver;

pub use receiver::{PropagatedReports, PropagationReceiver};

//! Low-diversity (collusion) detection for propagated reports.

mod discount;

pub use discount::{log_discount, DiversityDiscount};

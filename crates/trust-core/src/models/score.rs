use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::errors::{TrustError, TrustResult};

/// Check that `value` is finite and within `[0.0, 1.0]`.
///
/// No clamping: out-of-range input is rejected, never repaired.
///
/// ```
/// use trust_core::models::ensure_score;
///
/// assert_eq!(ensure_score("score", 0.25).unwrap(), 0.25);
/// assert!(ensure_score("score", 1.01).is_err());
/// assert!(ensure_score("score", f64::NAN).is_err());
/// ```
pub fn ensure_score(field: &'static str, value: f64) -> TrustResult<f64> {
    if value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(value)
    } else {
        Err(TrustError::score(field, value))
    }
}

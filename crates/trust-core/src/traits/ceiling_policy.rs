use crate::models::Evidence;

/// Evidence-to-ceiling boosting function.
///
/// Implementations must be monotonically non-decreasing: appending evidence
/// or raising an item's quality never lowers the returned boost. The ceiling
/// calculator clips `base + boost` into `[base, 1.0]`, so a policy does not
/// need to bound its own output.
pub trait ICeilingPolicy: Send + Sync {
    /// Boost above `base_ceiling` justified by `evidence`.
    ///
    /// Never called with an empty slice or with `DirectObservation` items present.
    fn boost(&self, base_ceiling: f64, evidence: &[Evidence]) -> f64;

    /// Policy name for logs and breakdowns.
    fn name(&self) -> &str;
}

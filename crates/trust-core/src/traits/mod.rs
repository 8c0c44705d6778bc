mod ceiling_policy;
mod trust_aggregator;

pub use ceiling_policy::ICeilingPolicy;
pub use trust_aggregator::ITrustAggregator;

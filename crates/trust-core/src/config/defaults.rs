// Single source of truth for all default values.

// --- Ceiling ---
pub const DEFAULT_BASE_CEILING: f64 = 0.7;
pub const DEFAULT_SATURATION_RATE: f64 = 0.5;
pub const DEFAULT_LINEAR_PER_UNIT: f64 = 0.1;
pub const DEFAULT_LINEAR_MAX_BOOST: f64 = 0.3;
pub const DEFAULT_ENERGY_PROOF_WEIGHT: f64 = 1.0;
pub const DEFAULT_HISTORICAL_WEIGHT: f64 = 0.5;
pub const DEFAULT_OTHER_WEIGHT: f64 = 0.25;

// --- Propagation ---
pub const DEFAULT_DECAY_FACTOR: f64 = 0.8; // 20% loss per hop
pub const DEFAULT_MAX_PROPAGATION_DISTANCE: u32 = 3;

// --- Aggregation ---
pub const DEFAULT_DIRECT_WEIGHT: f64 = 1.0;
pub const DEFAULT_PROPAGATED_WEIGHT: f64 = 0.8;
pub const DEFAULT_OUTLIER_Z_THRESHOLD: f64 = 2.0;

// --- Diversity ---
pub const DEFAULT_DIVERSITY_ENABLED: bool = true;
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;
pub const DEFAULT_SIMILARITY_TOLERANCE: f64 = 0.05;
pub const DEFAULT_HIGH_SCORE_THRESHOLD: f64 = 0.8;
pub const DEFAULT_MIN_DISCOUNT: f64 = 0.2;

// --- Cache ---
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

use trust_core::config::DiversityConfig;
use trust_core::models::DiversityReport;

use crate::aggregation::resolution;
use crate::propagation::PropagatedReports;

/// `max(min_discount, 1 / log2(n + 1))`, never above `1.0`.
///
/// Two sources give `~0.63`, a hundred give `~0.15` before the floor.
pub fn log_discount(source_count: usize, min_discount: f64) -> f64 {
    if source_count == 0 {
        return 1.0;
    }
    let raw = 1.0 / ((source_count as f64) + 1.0).log2();
    raw.max(min_discount).min(1.0)
}

/// Flags clusters of sources that agree too closely on a high score.
#[derive(Debug, Clone)]
pub struct DiversityDiscount {
    config: DiversityConfig,
}

impl DiversityDiscount {
    pub fn new(config: DiversityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiversityConfig {
        &self.config
    }

    /// Assess one subject's reports. Reported (pre-decay) scores are compared,
    /// since colluders coordinate on what they claim, not on their distance.
    pub fn assess(&self, reports: &PropagatedReports) -> DiversityReport {
        let scores: Vec<f64> = reports.iter().map(|r| r.reported_score).collect();
        let n = scores.len();
        let mean = resolution::mean(&scores).unwrap_or(0.0);
        let spread = resolution::population_std_dev(&scores).unwrap_or(0.0);

        let suspected = self.config.enabled
            && n >= self.config.min_cluster_size
            && spread <= self.config.similarity_tolerance
            && mean >= self.config.high_score_threshold;

        if !suspected {
            return DiversityReport::undiscounted(n, mean, spread);
        }
        DiversityReport {
            source_count: n,
            mean_reported: mean,
            spread,
            collusion_suspected: true,
            discount: log_discount(n, self.config.min_discount),
        }
    }
}

//! Disagreement resolution over a set of scores.
//!
//! Used when propagated reports are combined with something other than a
//! plain weighted mean.

/// Below this many values there is no meaningful spread to test against.
const MIN_OUTLIER_SAMPLE: usize = 3;

/// Standard deviation floor so identical scores never divide by zero.
const STDEV_FLOOR: f64 = 0.01;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

fn sample_std_dev(values: &[f64], m: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Lower weighted median of `(value, weight)` pairs.
///
/// Non-positive weights are ignored; if nothing positive remains this falls
/// back to the unweighted median.
pub fn weighted_median(pairs: &[(f64, f64)]) -> Option<f64> {
    let mut usable: Vec<(f64, f64)> = pairs
        .iter()
        .copied()
        .filter(|(_, w)| *w > 0.0 && w.is_finite())
        .collect();
    if usable.is_empty() {
        let values: Vec<f64> = pairs.iter().map(|(v, _)| *v).collect();
        return median(&values);
    }
    usable.sort_by(|a, b| a.0.total_cmp(&b.0));
    let total: f64 = usable.iter().map(|(_, w)| w).sum();
    let half = total / 2.0;
    let mut running = 0.0;
    for (value, weight) in &usable {
        running += weight;
        if running >= half {
            return Some(*value);
        }
    }
    usable.last().map(|(v, _)| *v)
}

/// Indices of values whose z-score exceeds `z_threshold`.
///
/// Uses the sample standard deviation with a small floor. Fewer than three
/// values never yields outliers.
pub fn detect_outliers(values: &[f64], z_threshold: f64) -> Vec<usize> {
    if values.len() < MIN_OUTLIER_SAMPLE {
        return Vec::new();
    }
    let Some(m) = mean(values) else {
        return Vec::new();
    };
    let sd = sample_std_dev(values, m).max(STDEV_FLOOR);
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| ((**v - m) / sd).abs() > z_threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Mean of the values left after dropping outliers.
///
/// If every value is flagged the median is returned instead.
pub fn mean_excluding_outliers(values: &[f64], z_threshold: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let outliers = detect_outliers(values, z_threshold);
    if outliers.is_empty() {
        return mean(values);
    }
    let kept: Vec<f64> = values
        .iter()
        .enumerate()
        .filter(|(i, _)| !outliers.contains(i))
        .map(|(_, v)| *v)
        .collect();
    if kept.is_empty() {
        median(values)
    } else {
        mean(&kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_even_and_odd() {
        assert_eq!(median(&[0.1, 0.9, 0.5]), Some(0.5));
        assert!((median(&[0.2, 0.4]).unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn weighted_median_follows_mass() {
        let pairs = [(0.1, 1.0), (0.9, 5.0), (0.5, 1.0)];
        assert_eq!(weighted_median(&pairs), Some(0.9));
    }

    #[test]
    fn weighted_median_zero_weights_falls_back() {
        let pairs = [(0.1, 0.0), (0.3, 0.0), (0.9, 0.0)];
        assert_eq!(weighted_median(&pairs), Some(0.3));
    }

    #[test]
    fn single_low_outlier_is_dropped() {
        let values = [0.8, 0.8, 0.8, 0.8, 0.8, 0.0];
        assert_eq!(detect_outliers(&values, 2.0), vec![5]);
        let m = mean_excluding_outliers(&values, 2.0).unwrap();
        assert!((m - 0.8).abs() < 1e-12);
    }

    #[test]
    fn small_samples_have_no_outliers() {
        assert!(detect_outliers(&[0.0, 1.0], 0.1).is_empty());
        assert_eq!(mean_excluding_outliers(&[0.0, 1.0], 0.1), Some(0.5));
    }

    #[test]
    fn identical_values_are_not_outliers() {
        assert!(detect_outliers(&[0.6; 10], 2.0).is_empty());
    }

    #[test]
    fn population_spread() {
        let sd = population_std_dev(&[0.2, 0.4]).unwrap();
        assert!((sd - 0.1).abs() < 1e-12);
    }
}

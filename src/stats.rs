//! Descriptive statistics over `u_numflow::stats`.
//!
//! `u_numflow` reports an unmet precondition as `None`. The variance
//! functions here turn that into `0.0`, the degenerate default that the
//! capability and chart formulas already read as "σ not computable".

use u_numflow::stats as numflow;

pub use u_numflow::stats::{max, mean, min};

/// Sample variance with the `n − 1` divisor.
///
/// Returns `0.0` when fewer than 2 observations are given or any value is
/// not finite.
///
/// # Examples
///
/// ```
/// use u_quality::stats::sample_variance;
///
/// let v = sample_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((v - 32.0 / 7.0).abs() < 1e-12);
/// assert_eq!(sample_variance(&[3.0]), 0.0);
/// ```
pub fn sample_variance(data: &[f64]) -> f64 {
    numflow::variance(data).unwrap_or(0.0)
}

/// Population variance with the `n` divisor.
///
/// Returns `0.0` when fewer than 2 observations are given; a single value
/// carries no spread information for the capability formulas.
pub fn population_variance(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    numflow::variance(data).map_or(0.0, |v| v * (n - 1.0) / n)
}

/// Sample standard deviation, `0.0` where [`sample_variance`] is.
pub fn std_dev(data: &[f64]) -> f64 {
    numflow::std_dev(data).unwrap_or(0.0)
}

/// Population standard deviation, `sqrt(population_variance)`.
pub fn population_std_dev(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Range `max − min`, or `0.0` for an empty slice or one holding NaN.
pub fn range(data: &[f64]) -> f64 {
    match (max(data), min(data)) {
        (Some(hi), Some(lo)) => hi - lo,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_basic() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap() - 3.0).abs() < 1e-15);
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn sample_variance_textbook() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((sample_variance(&data) - 32.0 / 7.0).abs() < 1e-12);
        assert!((std_dev(&data) - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn population_variance_textbook() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_variance(&data) - 4.0).abs() < 1e-12);
        assert!((population_std_dev(&data) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_spread_is_zero() {
        assert_eq!(sample_variance(&[]), 0.0);
        assert_eq!(sample_variance(&[1.0]), 0.0);
        assert_eq!(population_variance(&[]), 0.0);
        assert_eq!(population_variance(&[1.0]), 0.0);
        assert_eq!(std_dev(&[1.0]), 0.0);
        assert_eq!(sample_variance(&[1.0, f64::NAN]), 0.0);
        assert_eq!(sample_variance(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn variance_stable_with_large_offset() {
        let data = [1e9 + 4.0, 1e9 + 7.0, 1e9 + 13.0, 1e9 + 16.0];
        assert!((sample_variance(&data) - 30.0).abs() < 1e-6);
    }

    #[test]
    fn min_max_range() {
        let data = [3.0, -1.0, 7.5, 2.0];
        assert_eq!(min(&data), Some(-1.0));
        assert_eq!(max(&data), Some(7.5));
        assert!((range(&data) - 8.5).abs() < f64::EPSILON);
        assert_eq!(range(&[]), 0.0);
        assert_eq!(range(&[1.0, f64::NAN]), 0.0);
    }
}

//! Sample sizes for estimating a proportion or a mean to a given margin.

use crate::special::inverse_normal_cdf;

/// Confidence levels with tabulated z values.
pub const CONFIDENCE_LEVELS: [f64; 3] = [0.90, 0.95, 0.99];

const TABULATED_Z: [(f64, f64); 3] = [(0.90, 1.645), (0.95, 1.960), (0.99, 2.576)];

/// Two-sided critical value for a confidence level.
///
/// 90%, 95% and 99% use the tabulated 1.645, 1.960 and 2.576; any other
/// level uses `Φ⁻¹((1 + confidence) / 2)`.
///
/// # Examples
///
/// ```
/// use u_quality::planning::z_score;
///
/// assert_eq!(z_score(0.95), 1.960);
/// assert!((z_score(0.80) - 1.2816).abs() < 1e-4);
/// ```
pub fn z_score(confidence: f64) -> f64 {
    TABULATED_Z
        .iter()
        .find(|(level, _)| (level - confidence).abs() < 1e-12)
        .map(|&(_, z)| z)
        .unwrap_or_else(|| inverse_normal_cdf((1.0 + confidence) / 2.0))
}

/// n = ⌈z² p (1 − p) / E²⌉. `0` when `margin <= 0`.
///
/// # Examples
///
/// ```
/// use u_quality::planning::sample_size_proportion;
///
/// assert_eq!(sample_size_proportion(0.95, 0.05, 0.5), 385);
/// ```
pub fn sample_size_proportion(confidence: f64, margin: f64, proportion: f64) -> u64 {
    if margin <= 0.0 {
        return 0;
    }
    let z = z_score(confidence);
    (z * z * proportion * (1.0 - proportion) / (margin * margin)).ceil() as u64
}

/// n = ⌈(z σ / E)²⌉. `0` when `margin <= 0`.
pub fn sample_size_mean(confidence: f64, margin: f64, std_dev: f64) -> u64 {
    if margin <= 0.0 {
        return 0;
    }
    (z_score(confidence) * std_dev / margin).powi(2).ceil() as u64
}

/// Finite population correction: ⌈n / (1 + (n − 1) / N)⌉.
///
/// Returns `n` unchanged when `population == 0`.
pub fn adjust_for_population(n: u64, population: u64) -> u64 {
    if population == 0 {
        return n;
    }
    let n_f = n as f64;
    (n_f / (1.0 + (n_f - 1.0) / population as f64)).ceil() as u64
}

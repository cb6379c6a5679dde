//! Type I / Type II error trade-off for a two-sided z-test.
//!
//! With standardized effect size d = (μ₁ − μ₀) / σ:
//!
//! ```text
//! β     = Φ(z_{1−α/2} − d·√n)
//! power = 1 − β
//! n     = ⌈((z_{1−α/2} + z_{power}) / d)²⌉
//! ```

use std::fmt;

use crate::special::{inverse_normal_cdf, normal_cdf};

/// Power analysis summary.
///
/// `beta + power == 1` exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerResult {
    /// Significance level (Type I error rate).
    pub alpha: f64,
    /// Type II error rate.
    pub beta: f64,
    /// 1 − β.
    pub power: f64,
    /// Sample size the analysis was run for.
    pub sample_size: u64,
}

impl PowerResult {
    /// Interpretation band of `power`.
    pub fn rating(&self) -> PowerRating {
        PowerRating::from_power(self.power)
    }
}

impl fmt::Display for PowerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alpha={:.3}, beta={:.4}, power={:.4} ({}), n={}",
            self.alpha,
            self.beta,
            self.power,
            self.rating(),
            self.sample_size
        )
    }
}

/// Interpretation band for statistical power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerRating {
    /// Below 0.60.
    VeryLow,
    /// 0.60 to below 0.80.
    Low,
    /// 0.80 to below 0.90.
    Adequate,
    /// 0.90 and above.
    Excellent,
}

impl PowerRating {
    /// Classifies a power value.
    pub fn from_power(power: f64) -> Self {
        if power >= 0.90 {
            Self::Excellent
        } else if power >= 0.80 {
            Self::Adequate
        } else if power >= 0.60 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

impl fmt::Display for PowerRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VeryLow => "very low",
            Self::Low => "low",
            Self::Adequate => "adequate",
            Self::Excellent => "excellent",
        })
    }
}

/// Type II error probability. `1.0` when `n == 0` or `effect_size <= 0`.
///
/// # Examples
///
/// ```
/// use u_quality::planning::{beta, power};
///
/// let b = beta(0.05, 0.5, 64);
/// assert!(b < 0.1);
/// assert!((b + power(0.05, 0.5, 64) - 1.0).abs() < 1e-10);
/// assert_eq!(beta(0.05, 0.0, 64), 1.0);
/// ```
pub fn beta(alpha: f64, effect_size: f64, n: u64) -> f64 {
    if n == 0 || effect_size <= 0.0 {
        return 1.0;
    }
    let z_alpha = inverse_normal_cdf(1.0 - alpha / 2.0);
    normal_cdf(z_alpha - effect_size * (n as f64).sqrt())
}

/// Statistical power, `1 − beta(alpha, effect_size, n)`.
pub fn power(alpha: f64, effect_size: f64, n: u64) -> f64 {
    1.0 - beta(alpha, effect_size, n)
}

/// Smallest n reaching `desired_power` at level `alpha`. `0` when
/// `effect_size <= 0`.
///
/// # Examples
///
/// ```
/// use u_quality::planning::required_sample_size;
///
/// // ((1.96 + 0.84) / 0.5)² ≈ 31.4
/// assert_eq!(required_sample_size(0.05, 0.80, 0.5), 32);
/// ```
pub fn required_sample_size(alpha: f64, desired_power: f64, effect_size: f64) -> u64 {
    if effect_size <= 0.0 {
        return 0;
    }
    let z_alpha = inverse_normal_cdf(1.0 - alpha / 2.0);
    let z_power = inverse_normal_cdf(desired_power);
    let root = (z_alpha + z_power) / effect_size;
    (root * root).ceil() as u64
}

/// Full power analysis at a given sample size.
pub fn analyze(alpha: f64, effect_size: f64, n: u64) -> PowerResult {
    let b = beta(alpha, effect_size, n);
    PowerResult {
        alpha,
        beta: b,
        power: 1.0 - b,
        sample_size: n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_effect_large_sample() {
        let b = beta(0.05, 0.5, 64);
        assert!(b > 0.0 && b < 0.1, "beta={b}");
        // z = 1.95996 - 4 = -2.04
        assert!((b - 0.0207).abs() < 1e-3, "beta={b}");
        assert!(power(0.05, 0.5, 64) > 0.9);
    }

    #[test]
    fn degenerate_inputs_give_beta_one() {
        assert_eq!(beta(0.05, 0.0, 100), 1.0);
        assert_eq!(beta(0.05, -0.3, 100), 1.0);
        assert_eq!(beta(0.05, 0.5, 0), 1.0);
        assert_eq!(power(0.05, 0.5, 0), 0.0);
    }

    #[test]
    fn required_n_reference() {
        assert_eq!(required_sample_size(0.05, 0.80, 0.5), 32);
        assert_eq!(required_sample_size(0.05, 0.80, 0.0), 0);
        assert_eq!(required_sample_size(0.05, 0.80, -1.0), 0);
    }

    #[test]
    fn required_n_reaches_target_power() {
        for &(d, target) in &[(0.2, 0.8), (0.5, 0.9), (1.0, 0.95)] {
            let n = required_sample_size(0.05, target, d);
            assert!(
                power(0.05, d, n) >= target - 1e-3,
                "d={d}, n={n}, power={}",
                power(0.05, d, n)
            );
        }
    }

    #[test]
    fn analyze_bundles_inputs() {
        let r = analyze(0.05, 0.5, 50);
        assert_eq!(r.alpha, 0.05);
        assert_eq!(r.sample_size, 50);
        assert!((r.power + r.beta - 1.0).abs() < 1e-10);
        assert!(r.to_string().contains("n=50"));
    }

    #[test]
    fn rating_bands() {
        assert_eq!(PowerRating::from_power(0.95), PowerRating::Excellent);
        assert_eq!(PowerRating::from_power(0.90), PowerRating::Excellent);
        assert_eq!(PowerRating::from_power(0.85), PowerRating::Adequate);
        assert_eq!(PowerRating::from_power(0.60), PowerRating::Low);
        assert_eq!(PowerRating::from_power(0.10), PowerRating::VeryLow);
    }
}

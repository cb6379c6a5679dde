//! Sigma quality level, DPMO, and yield conversions.
//!
//! Uses the Motorola 1.5-sigma long-term shift convention:
//!
//! | Sigma | DPMO |
//! |-------|------|
//! | 6.0   | 3.4 |
//! | 5.0   | 233 |
//! | 4.0   | 6,210 |
//! | 3.0   | 66,807 |
//! | 2.0   | 308,538 |
//!
//! # References
//!
//! - Harry & Schroeder (2000), *Six Sigma: The Breakthrough Management
//!   Strategy Revolutionizing the World's Top Corporations*.
//! - Motorola University, "The Six Sigma Process".

use std::fmt;

use crate::special::{inverse_normal_cdf, normal_cdf};

const MILLION: f64 = 1_000_000.0;
const SHIFT: f64 = 1.5;

/// Defects per million opportunities.
///
/// ```text
/// DPMO = defects / (units * opportunities) * 1,000,000
/// ```
///
/// `0.0` when `units` or `opportunities` is not positive.
///
/// # Examples
///
/// ```
/// use u_quality::capability::dpmo;
///
/// assert!((dpmo(5.0, 1_000.0, 10.0) - 500.0).abs() < 1e-9);
/// assert_eq!(dpmo(5.0, 0.0, 10.0), 0.0);
/// ```
pub fn dpmo(defects: f64, units: f64, opportunities: f64) -> f64 {
    if units <= 0.0 || opportunities <= 0.0 {
        return 0.0;
    }
    defects / (units * opportunities) * MILLION
}

/// Process yield in percent: `(1 − DPMO / 1,000,000) × 100`.
pub fn yield_from_dpmo(dpmo: f64) -> f64 {
    (1.0 - dpmo / MILLION) * 100.0
}

/// Converts a DPMO rate to a sigma quality level.
///
/// ```text
/// sigma = Φ⁻¹(1 − DPMO / 1,000,000) + 1.5
/// ```
///
/// A rate of zero or less saturates at `6.0`; a rate of one million or
/// more (or NaN) gives `0.0`.
///
/// # Examples
///
/// ```
/// use u_quality::capability::sigma_from_dpmo;
///
/// assert!((sigma_from_dpmo(3.4) - 6.0).abs() < 0.1);
/// assert!((sigma_from_dpmo(66_807.0) - 3.0).abs() < 0.1);
/// assert_eq!(sigma_from_dpmo(0.0), 6.0);
/// ```
pub fn sigma_from_dpmo(dpmo: f64) -> f64 {
    if dpmo <= 0.0 {
        return 6.0;
    }
    if dpmo >= MILLION || dpmo.is_nan() {
        return 0.0;
    }
    inverse_normal_cdf(1.0 - dpmo / MILLION) + SHIFT
}

/// Converts a sigma quality level to a DPMO rate.
///
/// ```text
/// DPMO = (1 − Φ(sigma − 1.5)) × 1,000,000
/// ```
pub fn dpmo_from_sigma(sigma: f64) -> f64 {
    (1.0 - normal_cdf(sigma - SHIFT)) * MILLION
}

/// Interpretation band for a sigma level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SigmaRating {
    /// Below 3σ.
    Poor,
    /// 3σ to below 4σ.
    Average,
    /// 4σ to below 5σ.
    Good,
    /// 5σ to below 6σ.
    Excellent,
    /// 6σ and above.
    WorldClass,
}

impl SigmaRating {
    /// Classifies a sigma level.
    pub fn from_sigma(sigma: f64) -> Self {
        if sigma >= 6.0 {
            Self::WorldClass
        } else if sigma >= 5.0 {
            Self::Excellent
        } else if sigma >= 4.0 {
            Self::Good
        } else if sigma >= 3.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for SigmaRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
            Self::WorldClass => "world class",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // dpmo_from_sigma -- known values
    // -----------------------------------------------------------------------

    #[test]
    fn known_sigma_to_dpmo() {
        let cases: &[(f64, f64, f64)] = &[
            (6.0, 3.4, 1.0),
            (5.0, 233.0, 20.0),
            (4.0, 6_210.0, 200.0),
            (3.0, 66_807.0, 500.0),
            (2.0, 308_538.0, 3_000.0),
        ];
        for &(sigma, expected, tol) in cases {
            let got = dpmo_from_sigma(sigma);
            assert!(
                (got - expected).abs() < tol,
                "{sigma}-sigma should be ~{expected} DPMO, got {got}"
            );
        }
    }

    #[test]
    fn dpmo_from_sigma_is_decreasing() {
        let values: Vec<f64> = (1..=6).map(|s| dpmo_from_sigma(s as f64)).collect();
        for w in values.windows(2) {
            assert!(w[0] > w[1], "{} should exceed {}", w[0], w[1]);
        }
    }

    // -----------------------------------------------------------------------
    // sigma_from_dpmo
    // -----------------------------------------------------------------------

    #[test]
    fn six_sigma_round_trip_tolerances() {
        let sigma = sigma_from_dpmo(3.4);
        assert!((sigma - 6.0).abs() < 0.1, "got {sigma}");
        let dpmo = dpmo_from_sigma(6.0);
        assert!((dpmo - 3.4).abs() < 1.0, "got {dpmo}");
    }

    #[test]
    fn sigma_from_dpmo_known_values() {
        for &(dpmo, expected) in &[(233.0, 5.0), (6_210.0, 4.0), (66_807.0, 3.0), (308_538.0, 2.0)]
        {
            let sigma = sigma_from_dpmo(dpmo);
            assert!(
                (sigma - expected).abs() < 0.15,
                "DPMO={dpmo}: expected ~{expected}, got {sigma}"
            );
        }
    }

    #[test]
    fn sigma_from_dpmo_saturates() {
        assert_eq!(sigma_from_dpmo(0.0), 6.0);
        assert_eq!(sigma_from_dpmo(-5.0), 6.0);
        assert_eq!(sigma_from_dpmo(1_000_000.0), 0.0);
        assert_eq!(sigma_from_dpmo(2_000_000.0), 0.0);
        assert_eq!(sigma_from_dpmo(f64::NAN), 0.0);
    }

    // -----------------------------------------------------------------------
    // dpmo / yield
    // -----------------------------------------------------------------------

    #[test]
    fn dpmo_counts() {
        assert!((dpmo(34.0, 10_000.0, 1_000.0) - 3.4).abs() < 1e-9);
        assert_eq!(dpmo(1.0, 100.0, 0.0), 0.0);
        assert_eq!(dpmo(1.0, -1.0, 5.0), 0.0);
    }

    #[test]
    fn yield_percent() {
        assert!((yield_from_dpmo(0.0) - 100.0).abs() < 1e-12);
        assert!((yield_from_dpmo(66_807.0) - 93.3193).abs() < 1e-9);
        assert!(yield_from_dpmo(1_000_000.0).abs() < 1e-12);
    }

    #[test]
    fn rating_bands() {
        assert_eq!(SigmaRating::from_sigma(6.2), SigmaRating::WorldClass);
        assert_eq!(SigmaRating::from_sigma(5.0), SigmaRating::Excellent);
        assert_eq!(SigmaRating::from_sigma(4.5), SigmaRating::Good);
        assert_eq!(SigmaRating::from_sigma(3.0), SigmaRating::Average);
        assert_eq!(SigmaRating::from_sigma(2.9), SigmaRating::Poor);
        assert_eq!(SigmaRating::WorldClass.to_string(), "world class");
    }
}

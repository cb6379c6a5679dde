//! Process capability (Cp, Cpk) and performance (Pp, Ppk) indices.
//!
//! Short-term indices use the sample standard deviation (n − 1 divisor) or
//! a within-subgroup estimate from a control chart; long-term indices use
//! the population standard deviation (n divisor). Every index is `0.0`
//! when its sigma is not positive, so a degenerate input still produces a
//! renderable number instead of NaN or infinity.
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 8.
//! - Kane (1986), "Process Capability Indices", *Journal of Quality Technology*
//!   18(1), pp. 41--52.
//! - Chan, Cheng & Spiring (1988), "A New Measure of Process Capability: Cpm",
//!   *Journal of Quality Technology* 20(3), pp. 162--175.

use std::fmt;

use crate::error::{Error, Result};
use crate::stats;

// ---------------------------------------------------------------------------
// Scalar indices
// ---------------------------------------------------------------------------

/// Cp = (USL − LSL) / (6σ). `0.0` when `sigma <= 0`.
///
/// # Examples
///
/// ```
/// use u_quality::capability::{cp, cpk};
///
/// assert_eq!(cp(10.0, 4.0, 1.0), 1.0);
/// assert!((cpk(10.0, 4.0, 9.0, 1.0) - 1.0 / 3.0).abs() < 1e-12);
/// assert_eq!(cp(10.0, 4.0, 0.0), 0.0);
/// ```
pub fn cp(usl: f64, lsl: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return 0.0;
    }
    (usl - lsl) / (6.0 * sigma)
}

/// Cpu = (USL − μ) / (3σ). `0.0` when `sigma <= 0`.
pub fn cpu(usl: f64, mean: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return 0.0;
    }
    (usl - mean) / (3.0 * sigma)
}

/// Cpl = (μ − LSL) / (3σ). `0.0` when `sigma <= 0`.
pub fn cpl(mean: f64, lsl: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return 0.0;
    }
    (mean - lsl) / (3.0 * sigma)
}

/// Cpk = min(Cpu, Cpl). `0.0` when `sigma <= 0`.
pub fn cpk(usl: f64, lsl: f64, mean: f64, sigma: f64) -> f64 {
    cpu(usl, mean, sigma).min(cpl(mean, lsl, sigma))
}

/// Pp = (USL − LSL) / (6σ_overall), σ from the population variance.
pub fn pp(usl: f64, lsl: f64, sigma_overall: f64) -> f64 {
    cp(usl, lsl, sigma_overall)
}

/// Ppu = (USL − μ) / (3σ_overall).
pub fn ppu(usl: f64, mean: f64, sigma_overall: f64) -> f64 {
    cpu(usl, mean, sigma_overall)
}

/// Ppl = (μ − LSL) / (3σ_overall).
pub fn ppl(mean: f64, lsl: f64, sigma_overall: f64) -> f64 {
    cpl(mean, lsl, sigma_overall)
}

/// Ppk = min(Ppu, Ppl).
pub fn ppk(usl: f64, lsl: f64, mean: f64, sigma_overall: f64) -> f64 {
    cpk(usl, lsl, mean, sigma_overall)
}

// ---------------------------------------------------------------------------
// Specification limits
// ---------------------------------------------------------------------------

/// Two-sided specification limits with an optional target.
///
/// # Examples
///
/// ```
/// use u_quality::capability::SpecLimits;
///
/// let spec = SpecLimits::new(11.0, 9.0).unwrap().with_target(10.0);
/// let data = [9.5, 10.0, 10.2, 9.8, 10.1, 10.3, 9.9, 10.0];
/// let idx = spec.compute(&data).unwrap();
/// assert!(idx.cp > 0.0);
/// assert!(idx.pp >= idx.cp); // population sigma <= sample sigma
///
/// assert!(SpecLimits::new(5.0, 10.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecLimits {
    usl: f64,
    lsl: f64,
    target: Option<f64>,
}

impl SpecLimits {
    /// Creates validated limits.
    ///
    /// # Errors
    ///
    /// - [`Error::NonFiniteLimit`] if either limit is NaN or infinite
    /// - [`Error::InvertedLimits`] if `usl <= lsl`
    pub fn new(usl: f64, lsl: f64) -> Result<Self> {
        for limit in [usl, lsl] {
            if !limit.is_finite() {
                return Err(Error::NonFiniteLimit(limit));
            }
        }
        if usl <= lsl {
            return Err(Error::InvertedLimits { usl, lsl });
        }
        Ok(Self {
            usl,
            lsl,
            target: None,
        })
    }

    /// Sets the target used for Cpm. Defaults to the midpoint.
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    /// Upper specification limit.
    pub fn usl(&self) -> f64 {
        self.usl
    }

    /// Lower specification limit.
    pub fn lsl(&self) -> f64 {
        self.lsl
    }

    /// Target, or the midpoint of the limits when none was set.
    pub fn target(&self) -> f64 {
        self.target.unwrap_or((self.usl + self.lsl) / 2.0)
    }

    /// Computes all indices from raw data.
    ///
    /// Cp-family indices use the sample standard deviation; Pp-family
    /// indices use the population standard deviation.
    ///
    /// # Returns
    ///
    /// `None` if `data` has fewer than 2 values or contains NaN/infinity.
    pub fn compute(&self, data: &[f64]) -> Option<CapabilityIndices> {
        if data.len() < 2 || !data.iter().all(|x| x.is_finite()) {
            return None;
        }
        Some(self.indices(
            stats::mean(data)?,
            stats::std_dev(data),
            stats::population_std_dev(data),
        ))
    }

    /// Computes all indices with an externally estimated within-subgroup
    /// sigma (for example [`ImrChart::sigma`](crate::spc::ImrChart::sigma)
    /// or [`XBarRChart::sigma`](crate::spc::XBarRChart::sigma)).
    ///
    /// # Returns
    ///
    /// `None` if `data` has fewer than 2 values or contains NaN/infinity.
    pub fn compute_with_sigma(
        &self,
        data: &[f64],
        sigma_within: f64,
    ) -> Option<CapabilityIndices> {
        if data.len() < 2 || !data.iter().all(|x| x.is_finite()) {
            return None;
        }
        Some(self.indices(
            stats::mean(data)?,
            sigma_within,
            stats::population_std_dev(data),
        ))
    }

    /// Computes all indices from summary statistics.
    pub fn indices(&self, mean: f64, sigma_within: f64, sigma_overall: f64) -> CapabilityIndices {
        let (usl, lsl) = (self.usl, self.lsl);

        let cp_val = cp(usl, lsl, sigma_within);
        let cpm = if sigma_within > 0.0 {
            let deviation = (mean - self.target()) / sigma_within;
            cp_val / (1.0 + deviation * deviation).sqrt()
        } else {
            0.0
        };

        CapabilityIndices {
            cp: cp_val,
            cpu: cpu(usl, mean, sigma_within),
            cpl: cpl(mean, lsl, sigma_within),
            cpk: cpk(usl, lsl, mean, sigma_within),
            pp: pp(usl, lsl, sigma_overall),
            ppu: ppu(usl, mean, sigma_overall),
            ppl: ppl(mean, lsl, sigma_overall),
            ppk: ppk(usl, lsl, mean, sigma_overall),
            cpm,
            mean,
            sigma_within,
            sigma_overall,
        }
    }
}

/// Computed capability and performance indices.
///
/// | Index | Value | Interpretation |
/// |-------|-------|----------------|
/// | Cpk/Ppk | >= 2.00 | Excellent |
/// | Cpk/Ppk | >= 1.67 | Good |
/// | Cpk/Ppk | >= 1.33 | Capable |
/// | Cpk/Ppk | >= 1.00 | Marginal |
/// | Cpk/Ppk | < 1.00 | Incapable |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityIndices {
    /// Cp = (USL − LSL) / (6σ_within).
    pub cp: f64,
    /// Cpu = (USL − μ) / (3σ_within).
    pub cpu: f64,
    /// Cpl = (μ − LSL) / (3σ_within).
    pub cpl: f64,
    /// Cpk = min(Cpu, Cpl).
    pub cpk: f64,
    /// Pp = (USL − LSL) / (6σ_overall).
    pub pp: f64,
    /// Ppu = (USL − μ) / (3σ_overall).
    pub ppu: f64,
    /// Ppl = (μ − LSL) / (3σ_overall).
    pub ppl: f64,
    /// Ppk = min(Ppu, Ppl).
    pub ppk: f64,
    /// Cpm = Cp / sqrt(1 + ((μ − T) / σ_within)²).
    pub cpm: f64,
    /// Process mean.
    pub mean: f64,
    /// Short-term sigma.
    pub sigma_within: f64,
    /// Long-term sigma (population estimator).
    pub sigma_overall: f64,
}

impl CapabilityIndices {
    /// Rating of the short-term centered index Cpk.
    pub fn cpk_rating(&self) -> CapabilityRating {
        CapabilityRating::from_index(self.cpk)
    }

    /// Rating of the long-term centered index Ppk.
    pub fn ppk_rating(&self) -> CapabilityRating {
        CapabilityRating::from_index(self.ppk)
    }
}

impl fmt::Display for CapabilityIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cp={:.3}, Cpk={:.3}, Pp={:.3}, Ppk={:.3} ({})",
            self.cp,
            self.cpk,
            self.pp,
            self.ppk,
            self.cpk_rating()
        )
    }
}

/// Interpretation band for Cpk or Ppk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapabilityRating {
    /// Below 1.00.
    Incapable,
    /// 1.00 to below 1.33.
    Marginal,
    /// 1.33 to below 1.67.
    Capable,
    /// 1.67 to below 2.00.
    Good,
    /// 2.00 and above.
    Excellent,
}

impl CapabilityRating {
    /// Classifies a Cpk or Ppk value.
    pub fn from_index(value: f64) -> Self {
        if value >= 2.0 {
            Self::Excellent
        } else if value >= 1.67 {
            Self::Good
        } else if value >= 1.33 {
            Self::Capable
        } else if value >= 1.0 {
            Self::Marginal
        } else {
            Self::Incapable
        }
    }
}

impl fmt::Display for CapabilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Incapable => "incapable",
            Self::Marginal => "marginal",
            Self::Capable => "capable",
            Self::Good => "good",
            Self::Excellent => "excellent",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Scalar indices
    // -----------------------------------------------------------------------

    #[test]
    fn cp_reference_case() {
        assert!((cp(10.0, 4.0, 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cpk_takes_nearer_limit() {
        // Cpu = 1/3, Cpl = 5/3
        assert!((cpu(10.0, 9.0, 1.0) - 1.0 / 3.0).abs() < 1e-12);
        assert!((cpl(9.0, 4.0, 1.0) - 5.0 / 3.0).abs() < 1e-12);
        assert!((cpk(10.0, 4.0, 9.0, 1.0) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_sigma_yields_zero() {
        assert_eq!(cp(10.0, 4.0, 0.0), 0.0);
        assert_eq!(cpu(10.0, 7.0, 0.0), 0.0);
        assert_eq!(cpl(7.0, 4.0, 0.0), 0.0);
        assert_eq!(cpk(10.0, 4.0, 7.0, 0.0), 0.0);
        assert_eq!(pp(10.0, 4.0, -1.0), 0.0);
        assert_eq!(ppk(10.0, 4.0, 7.0, 0.0), 0.0);
    }

    #[test]
    fn mean_outside_limits_gives_negative_cpk() {
        assert!(cpk(10.0, 4.0, 11.0, 1.0) < 0.0);
    }

    // -----------------------------------------------------------------------
    // SpecLimits
    // -----------------------------------------------------------------------

    #[test]
    fn spec_limits_validation() {
        assert!(SpecLimits::new(10.0, 5.0).is_ok());
        assert_eq!(
            SpecLimits::new(5.0, 5.0),
            Err(Error::InvertedLimits { usl: 5.0, lsl: 5.0 })
        );
        assert!(matches!(
            SpecLimits::new(f64::NAN, 1.0),
            Err(Error::NonFiniteLimit(_))
        ));
        assert!(SpecLimits::new(10.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn target_defaults_to_midpoint() {
        let spec = SpecLimits::new(12.0, 8.0).unwrap();
        assert_eq!(spec.target(), 10.0);
        assert_eq!(spec.with_target(11.0).target(), 11.0);
    }

    #[test]
    fn compute_uses_sample_and_population_sigma() {
        let spec = SpecLimits::new(16.0, -6.0).unwrap();
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let idx = spec.compute(&data).unwrap();
        let s = (32.0_f64 / 7.0).sqrt();
        assert!((idx.sigma_within - s).abs() < 1e-12);
        assert!((idx.sigma_overall - 2.0).abs() < 1e-12);
        assert!((idx.cp - 22.0 / (6.0 * s)).abs() < 1e-12);
        assert!((idx.pp - 22.0 / 12.0).abs() < 1e-12);
        // Mean 5 is the midpoint, so Cpm == Cp and Cpk == Cp.
        assert!((idx.cpm - idx.cp).abs() < 1e-12);
        assert!((idx.cpk - idx.cp).abs() < 1e-12);
    }

    #[test]
    fn compute_rejects_short_or_non_finite() {
        let spec = SpecLimits::new(11.0, 9.0).unwrap();
        assert!(spec.compute(&[10.0]).is_none());
        assert!(spec.compute(&[10.0, f64::NAN]).is_none());
    }

    #[test]
    fn compute_constant_data_is_degenerate_not_absent() {
        let spec = SpecLimits::new(11.0, 9.0).unwrap();
        let idx = spec.compute(&[10.0, 10.0, 10.0]).expect("defined but degenerate");
        assert_eq!(idx.cp, 0.0);
        assert_eq!(idx.cpk, 0.0);
        assert_eq!(idx.ppk, 0.0);
        assert_eq!(idx.cpm, 0.0);
    }

    #[test]
    fn compute_with_chart_sigma() {
        let spec = SpecLimits::new(11.0, 9.0).unwrap();
        let data = [9.5, 10.0, 10.2, 9.8, 10.1, 10.3, 9.9, 10.0];
        let idx = spec.compute_with_sigma(&data, 0.25).unwrap();
        assert!((idx.cp - 2.0 / 1.5).abs() < 1e-12);
        assert!(idx.pp > 0.0);
    }

    #[test]
    fn cpm_penalises_off_target() {
        let spec = SpecLimits::new(12.0, 8.0).unwrap();
        let centred = spec.indices(10.0, 0.5, 0.5);
        let shifted = spec.indices(11.0, 0.5, 0.5);
        assert!(shifted.cpm < centred.cpm);
        assert!((centred.cpm - centred.cp).abs() < 1e-12);
    }

    // -----------------------------------------------------------------------
    // Ratings
    // -----------------------------------------------------------------------

    #[test]
    fn rating_bands() {
        assert_eq!(CapabilityRating::from_index(2.5), CapabilityRating::Excellent);
        assert_eq!(CapabilityRating::from_index(2.0), CapabilityRating::Excellent);
        assert_eq!(CapabilityRating::from_index(1.7), CapabilityRating::Good);
        assert_eq!(CapabilityRating::from_index(1.33), CapabilityRating::Capable);
        assert_eq!(CapabilityRating::from_index(1.0), CapabilityRating::Marginal);
        assert_eq!(CapabilityRating::from_index(0.99), CapabilityRating::Incapable);
        assert_eq!(CapabilityRating::from_index(-1.0), CapabilityRating::Incapable);
    }

    #[test]
    fn display_summary() {
        let spec = SpecLimits::new(10.0, 4.0).unwrap();
        let s = spec.indices(7.0, 1.0, 1.0).to_string();
        assert_eq!(s, "Cp=1.000, Cpk=1.000, Pp=1.000, Ppk=1.000 (marginal)");
    }
}

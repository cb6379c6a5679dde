//! Overall Equipment Effectiveness (OEE).
//!
//! ```text
//! Availability = (planned − downtime) / planned × 100
//! Performance  = ideal cycle time × total count / run time × 100
//! Quality      = (total − defects) / total × 100
//! OEE          = A × P × Q / 10 000
//! ```
//!
//! Each factor is `0` when its denominator is not positive.
//!
//! # References
//!
//! - Nakajima, S. (1988). *Introduction to TPM: Total Productive Maintenance*.

use std::fmt;

/// Availability in percent. `0` when `planned_time <= 0`.
pub fn availability(planned_time: f64, downtime: f64) -> f64 {
    if planned_time <= 0.0 {
        return 0.0;
    }
    (planned_time - downtime) / planned_time * 100.0
}

/// Performance in percent. `0` when `run_time <= 0`.
pub fn performance(ideal_cycle_time: f64, total_count: f64, run_time: f64) -> f64 {
    if run_time <= 0.0 {
        return 0.0;
    }
    ideal_cycle_time * total_count / run_time * 100.0
}

/// Quality rate in percent. `0` when `total_count <= 0`.
pub fn quality(total_count: f64, defect_count: f64) -> f64 {
    if total_count <= 0.0 {
        return 0.0;
    }
    (total_count - defect_count) / total_count * 100.0
}

/// OEE in percent from the three factors in percent.
pub fn oee(availability: f64, performance: f64, quality: f64) -> f64 {
    availability * performance * quality / 10_000.0
}

/// OEE factors for one production period.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OeeResult {
    /// Availability, percent.
    pub availability: f64,
    /// Performance, percent.
    pub performance: f64,
    /// Quality rate, percent.
    pub quality: f64,
    /// OEE, percent.
    pub oee: f64,
}

impl OeeResult {
    /// Computes all factors; run time is `planned_time − downtime`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_quality::quality::{OeeRating, OeeResult};
    ///
    /// // 480 min planned, 60 down, 1 min ideal cycle, 400 made, 8 defective.
    /// let r = OeeResult::compute(480.0, 60.0, 1.0, 400.0, 8.0);
    /// assert!((r.availability - 87.5).abs() < 1e-9);
    /// assert!((r.quality - 98.0).abs() < 1e-9);
    /// assert_eq!(r.rating(), OeeRating::Typical);
    /// ```
    pub fn compute(
        planned_time: f64,
        downtime: f64,
        ideal_cycle_time: f64,
        total_count: f64,
        defect_count: f64,
    ) -> Self {
        let a = availability(planned_time, downtime);
        let p = performance(ideal_cycle_time, total_count, planned_time - downtime);
        let q = quality(total_count, defect_count);
        Self {
            availability: a,
            performance: p,
            quality: q,
            oee: oee(a, p, q),
        }
    }

    /// Interpretation band of `oee`.
    pub fn rating(&self) -> OeeRating {
        OeeRating::from_oee(self.oee)
    }
}

impl fmt::Display for OeeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OEE={:.1}% (A={:.1}%, P={:.1}%, Q={:.1}%, {})",
            self.oee,
            self.availability,
            self.performance,
            self.quality,
            self.rating()
        )
    }
}

/// Interpretation band for OEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OeeRating {
    /// Below 40%.
    VeryLow,
    /// 40% to below 60%.
    Low,
    /// 60% to below 85%.
    Typical,
    /// 85% and above.
    WorldClass,
}

impl OeeRating {
    /// Classifies an OEE percentage.
    pub fn from_oee(oee: f64) -> Self {
        if oee >= 85.0 {
            Self::WorldClass
        } else if oee >= 60.0 {
            Self::Typical
        } else if oee >= 40.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

impl fmt::Display for OeeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VeryLow => "very low",
            Self::Low => "low",
            Self::Typical => "typical",
            Self::WorldClass => "world class",
        })
    }
}

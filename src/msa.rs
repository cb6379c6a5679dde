//! Measurement system analysis: crossed Gage R&R, average and range method.
//!
//! The study grid is indexed `[operator][part][trial]`. Each component is a
//! standard deviation estimated from ranges and the d2 constants:
//!
//! ```text
//! EV  = R̄ / d2(trials)                              repeatability
//! AV  = √max(0, (X̄diff / d2(operators))² − EV² / (parts·trials))
//! GRR = √(EV² + AV²)
//! PV  = Rp / d2(parts)                              part variation
//! TV  = √(GRR² + PV²)
//! ndc = ⌊1.41 · PV / GRR⌋
//! ```
//!
//! # References
//!
//! - AIAG (2010). *Measurement Systems Analysis Reference Manual*, 4th ed.
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.,
//!   Section 8.7.

use std::fmt;

use tracing::debug;

use crate::spc::constants::d2_extended;
use crate::stats;

/// Constant relating PV/GRR to distinguishable categories (√2 rounded).
const NDC_FACTOR: f64 = 1.41;

/// Gage R&R study result. All variation components are non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GageRRResult {
    /// EV: equipment variation.
    pub repeatability: f64,
    /// AV: appraiser variation.
    pub reproducibility: f64,
    /// GRR = √(EV² + AV²).
    pub gage_rr: f64,
    /// PV: part-to-part variation.
    pub part_variation: f64,
    /// TV = √(GRR² + PV²).
    pub total_variation: f64,
    /// GRR / TV × 100, `0` when TV is zero.
    pub percent_grr: f64,
    /// PV / TV × 100, `0` when TV is zero.
    pub percent_pv: f64,
    /// Number of distinct categories, `0` when GRR or PV is zero.
    pub ndc: u32,
    /// 6·GRR / tolerance × 100, when a positive tolerance was supplied.
    pub percent_tolerance: Option<f64>,
}

impl GageRRResult {
    /// Interpretation of `percent_grr`.
    pub fn rating(&self) -> GageRating {
        GageRating::from_percent(self.percent_grr)
    }
}

impl fmt::Display for GageRRResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "%GRR={:.2}, %PV={:.2}, ndc={} ({})",
            self.percent_grr,
            self.percent_pv,
            self.ndc,
            self.rating()
        )
    }
}

/// Acceptability of a measurement system by %GRR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GageRating {
    /// %GRR below 10.
    Acceptable,
    /// %GRR from 10 to below 30.
    Marginal,
    /// %GRR of 30 or more.
    Unacceptable,
}

impl GageRating {
    /// Classifies a %GRR value.
    pub fn from_percent(percent_grr: f64) -> Self {
        if percent_grr < 10.0 {
            Self::Acceptable
        } else if percent_grr < 30.0 {
            Self::Marginal
        } else {
            Self::Unacceptable
        }
    }
}

impl fmt::Display for GageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Acceptable => "acceptable",
            Self::Marginal => "marginal",
            Self::Unacceptable => "unacceptable",
        })
    }
}

/// Runs a crossed Gage R&R study.
///
/// # Returns
///
/// `None` if the grid is ragged, has fewer than 2 operators, parts or
/// trials, or contains a non-finite value. Counts above 25 use the
/// expected-range d2 from [`d2_extended`].
///
/// # Examples
///
/// ```
/// use u_quality::msa::gage_rr;
///
/// let grid = vec![
///     vec![vec![10.1, 10.2], vec![10.3, 10.4], vec![10.5, 10.5]],
///     vec![vec![10.0, 10.3], vec![10.2, 10.5], vec![10.4, 10.6]],
/// ];
/// let r = gage_rr(&grid, None).unwrap();
/// assert!(r.percent_grr > 0.0);
/// assert!(r.total_variation > 0.0);
/// ```
pub fn gage_rr(measurements: &[Vec<Vec<f64>>], tolerance: Option<f64>) -> Option<GageRRResult> {
    let (operators, parts, trials) = grid_shape(measurements)?;

    let d2_trials = d2_extended(trials)?;
    let d2_operators = d2_extended(operators)?;
    let d2_parts = d2_extended(parts)?;

    // Repeatability from the mean within-cell range.
    let r_bar = measurements
        .iter()
        .flatten()
        .map(|cell| stats::range(cell))
        .sum::<f64>()
        / (operators * parts) as f64;
    let ev = r_bar / d2_trials;

    // Reproducibility from the spread of operator means.
    let operator_means: Vec<f64> = measurements
        .iter()
        .map(|op| op.iter().flatten().sum::<f64>() / (parts * trials) as f64)
        .collect();
    let x_diff = stats::range(&operator_means) / d2_operators;
    let av_sq = x_diff * x_diff - ev * ev / (parts * trials) as f64;
    let av = if av_sq > 0.0 { av_sq.sqrt() } else { 0.0 };

    let grr = ev.hypot(av);

    // Part variation from the spread of part means over all operators.
    let part_means: Vec<f64> = (0..parts)
        .map(|p| {
            measurements
                .iter()
                .filter_map(|op| op.get(p))
                .flatten()
                .sum::<f64>()
                / (operators * trials) as f64
        })
        .collect();
    let pv = stats::range(&part_means) / d2_parts;

    let tv = grr.hypot(pv);
    let (percent_grr, percent_pv) = if tv > 0.0 {
        (grr / tv * 100.0, pv / tv * 100.0)
    } else {
        (0.0, 0.0)
    };

    let ndc = if grr > 0.0 && pv > 0.0 {
        (NDC_FACTOR * pv / grr).floor().max(0.0) as u32
    } else {
        0
    };

    let percent_tolerance = tolerance
        .filter(|&t| t > 0.0)
        .map(|t| 6.0 * grr / t * 100.0);

    debug!(ev, av, pv, ndc, "gage r&r computed");

    Some(GageRRResult {
        repeatability: ev,
        reproducibility: av,
        gage_rr: grr,
        part_variation: pv,
        total_variation: tv,
        percent_grr,
        percent_pv,
        ndc,
        percent_tolerance,
    })
}

/// Validates the grid and returns `(operators, parts, trials)`.
fn grid_shape(measurements: &[Vec<Vec<f64>>]) -> Option<(usize, usize, usize)> {
    let operators = measurements.len();
    let parts = measurements.first().map_or(0, Vec::len);
    let trials = measurements
        .first()
        .and_then(|op| op.first())
        .map_or(0, Vec::len);

    if operators < 2 || parts < 2 || trials < 2 {
        debug!(operators, parts, trials, "gage r&r needs at least 2 of each dimension");
        return None;
    }

    let rectangular = measurements.iter().all(|op| {
        op.len() == parts
            && op
                .iter()
                .all(|cell| cell.len() == trials && cell.iter().all(|v| v.is_finite()))
    });
    if !rectangular {
        debug!(operators, parts, trials, "gage r&r grid is ragged or non-finite");
        return None;
    }

    Some((operators, parts, trials))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn study_no_operator_effect() -> Vec<Vec<Vec<f64>>> {
        vec![
            vec![vec![5.0, 5.1], vec![6.0, 6.1], vec![7.0, 7.1]],
            vec![vec![5.2, 5.0], vec![6.2, 6.0], vec![7.2, 7.0]],
        ]
    }

    #[test]
    fn components_reference_case() {
        let r = gage_rr(&study_no_operator_effect(), None).unwrap();
        // R̄ = 0.15, d2(2) = 1.128
        assert!((r.repeatability - 0.15 / 1.128).abs() < 1e-12);
        // Operator spread is smaller than EV allows, so AV clamps to 0.
        assert_eq!(r.reproducibility, 0.0);
        assert!((r.gage_rr - r.repeatability).abs() < 1e-12);
        // Part means 5.075, 6.075, 7.075; d2(3) = 1.693
        assert!((r.part_variation - 2.0 / 1.693).abs() < 1e-12);
        assert!((r.total_variation - 1.188_795_822).abs() < 1e-8);
        assert!((r.percent_grr - 11.186_001_9).abs() < 1e-6);
        assert!((r.percent_pv - 99.372_397_4).abs() < 1e-6);
        assert_eq!(r.ndc, 12);
        assert_eq!(r.rating(), GageRating::Marginal);
        assert!(r.percent_tolerance.is_none());
    }

    #[test]
    fn operator_bias_shows_as_reproducibility() {
        let grid = vec![
            vec![vec![5.0, 5.1], vec![6.0, 6.1], vec![7.0, 7.1]],
            vec![vec![5.5, 5.6], vec![6.5, 6.6], vec![7.5, 7.6]],
        ];
        let r = gage_rr(&grid, None).unwrap();
        let ev: f64 = 0.1 / 1.128;
        let x_diff: f64 = 0.5 / 1.128;
        let av = (x_diff * x_diff - ev * ev / 6.0).sqrt();
        assert!((r.repeatability - ev).abs() < 1e-12);
        assert!((r.reproducibility - av).abs() < 1e-12);
        assert!((r.gage_rr - ev.hypot(av)).abs() < 1e-12);
    }

    #[test]
    fn variance_components_add_up() {
        let r = gage_rr(&study_no_operator_effect(), Some(2.0)).unwrap();
        let tv_sq = r.gage_rr.powi(2) + r.part_variation.powi(2);
        assert!((r.total_variation.powi(2) - tv_sq).abs() < 1e-12);
        let pct_sq = r.percent_grr.powi(2) + r.percent_pv.powi(2);
        assert!((pct_sq - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn percent_tolerance() {
        let r = gage_rr(&study_no_operator_effect(), Some(2.0)).unwrap();
        let expected = 6.0 * r.gage_rr / 2.0 * 100.0;
        assert!((r.percent_tolerance.unwrap() - expected).abs() < 1e-12);
        let r = gage_rr(&study_no_operator_effect(), Some(0.0)).unwrap();
        assert!(r.percent_tolerance.is_none());
    }

    #[test]
    fn perfect_gage_has_zero_ndc() {
        let grid = vec![
            vec![vec![1.0, 1.0], vec![2.0, 2.0]],
            vec![vec![1.0, 1.0], vec![2.0, 2.0]],
        ];
        let r = gage_rr(&grid, None).unwrap();
        assert_eq!(r.gage_rr, 0.0);
        assert_eq!(r.ndc, 0);
        assert!((r.percent_pv - 100.0).abs() < 1e-12);
        assert_eq!(r.rating(), GageRating::Acceptable);
    }

    #[test]
    fn constant_grid_is_all_zero() {
        let grid = vec![vec![vec![3.0; 2]; 2]; 2];
        let r = gage_rr(&grid, None).unwrap();
        assert_eq!(r.total_variation, 0.0);
        assert_eq!(r.percent_grr, 0.0);
        assert_eq!(r.percent_pv, 0.0);
        assert_eq!(r.ndc, 0);
    }

    #[test]
    fn too_small_or_ragged_is_absent() {
        assert!(gage_rr(&[], None).is_none());
        assert!(gage_rr(&[vec![vec![1.0]]], None).is_none());
        // One operator.
        assert!(gage_rr(&[vec![vec![1.0, 2.0], vec![3.0, 4.0]]], None).is_none());
        // Ragged trials.
        let ragged = vec![
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            vec![vec![1.0, 2.0], vec![3.0]],
        ];
        assert!(gage_rr(&ragged, None).is_none());
        // Ragged parts.
        let ragged = vec![
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            vec![vec![1.0, 2.0]],
        ];
        assert!(gage_rr(&ragged, None).is_none());
        // Non-finite value.
        let nan = vec![
            vec![vec![1.0, f64::NAN], vec![3.0, 4.0]],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        ];
        assert!(gage_rr(&nan, None).is_none());
    }

    #[test]
    fn thirty_parts_use_extended_d2() {
        // Part i reads i.0 and i.1 for both operators.
        let operator: Vec<Vec<f64>> = (0..30)
            .map(|i| vec![f64::from(i), f64::from(i) + 0.1])
            .collect();
        let grid = vec![operator.clone(), operator];
        let r = gage_rr(&grid, None).expect("30 parts is a valid study");
        assert!((r.repeatability - 0.1 / 1.128).abs() < 1e-9);
        assert_eq!(r.reproducibility, 0.0);
        // Part means 0.05..=29.05, so Rp = 29.
        let d2_30 = d2_extended(30).unwrap();
        assert!((r.part_variation - 29.0 / d2_30).abs() < 1e-9);
        assert!((d2_30 - 4.086).abs() < 1e-3);
        assert!(r.ndc > 0);
    }

    #[test]
    fn large_trial_count_is_accepted() {
        let grid = vec![vec![vec![1.0; 26]; 2]; 2];
        let r = gage_rr(&grid, None).expect("26 trials");
        assert_eq!(r.total_variation, 0.0);
    }

    #[test]
    fn rating_cutoffs() {
        assert_eq!(GageRating::from_percent(9.99), GageRating::Acceptable);
        assert_eq!(GageRating::from_percent(10.0), GageRating::Marginal);
        assert_eq!(GageRating::from_percent(29.9), GageRating::Marginal);
        assert_eq!(GageRating::from_percent(30.0), GageRating::Unacceptable);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn grid() -> impl Strategy<Value = Vec<Vec<Vec<f64>>>> {
        (2_usize..5, 2_usize..8, 2_usize..4).prop_flat_map(|(o, p, t)| {
            proptest::collection::vec(
                proptest::collection::vec(proptest::collection::vec(-50.0_f64..50.0, t), p),
                o,
            )
        })
    }

    proptest! {
        #[test]
        fn components_non_negative(g in grid()) {
            let r = gage_rr(&g, None).expect("rectangular grid");
            prop_assert!(r.repeatability >= 0.0);
            prop_assert!(r.reproducibility >= 0.0);
            prop_assert!(r.part_variation >= 0.0);
            prop_assert!(r.total_variation >= r.gage_rr);
            prop_assert!((0.0..=100.0 + 1e-9).contains(&r.percent_grr));
        }
    }
}

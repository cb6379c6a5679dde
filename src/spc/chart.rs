//! Core control chart result type and out-of-control detection.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

use std::fmt;

/// Limits and plotted statistics for one control chart.
///
/// # Invariants
///
/// - `lcl <= cl <= ucl` whenever the spread estimate (σ or R̄) is positive
/// - With zero spread the limits collapse onto the center line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartResult {
    /// Center line (process mean, R̄, or MR̄).
    pub cl: f64,
    /// Upper control limit.
    pub ucl: f64,
    /// Lower control limit.
    pub lcl: f64,
    /// Plotted statistic per observation or subgroup, in input order.
    pub points: Vec<f64>,
}

impl ChartResult {
    /// Builds a chart result from its center line, limits, and points.
    pub fn new(cl: f64, ucl: f64, lcl: f64, points: Vec<f64>) -> Self {
        Self {
            cl,
            ucl,
            lcl,
            points,
        }
    }

    /// Indices of points strictly outside `[lcl, ucl]`.
    ///
    /// Only the single-point 3σ rule is applied. Run rules and zone tests
    /// are not evaluated, so a drift inside the limits is not flagged.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_quality::spc::ChartResult;
    ///
    /// let chart = ChartResult::new(10.0, 15.0, 5.0, vec![10.0, 12.0, 16.0, 8.0, 4.0, 11.0]);
    /// assert_eq!(chart.out_of_control_points(), vec![2, 4]);
    /// ```
    pub fn out_of_control_points(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v > self.ucl || v < self.lcl)
            .map(|(i, _)| i)
            .collect()
    }

    /// `true` when no point lies outside the limits.
    pub fn is_in_control(&self) -> bool {
        self.points.iter().all(|&v| v <= self.ucl && v >= self.lcl)
    }
}

impl fmt::Display for ChartResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CL={:.4}, UCL={:.4}, LCL={:.4}, {} points, {} out of control",
            self.cl,
            self.ucl,
            self.lcl,
            self.points.len(),
            self.out_of_control_points().len()
        )
    }
}

/// Free-function form of [`ChartResult::out_of_control_points`].
pub fn out_of_control_points(chart: &ChartResult) -> Vec<usize> {
    chart.out_of_control_points()
}

//! Variables control charts: Individual-MR and X-bar-R.
//!
//! Both charts are computed in one pass from the full data set and
//! returned as immutable [`ChartResult`] pairs. Out-of-control detection
//! is the single beyond-limits rule on [`ChartResult`].
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 6: Control Charts for Variables.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

use tracing::debug;

use super::chart::ChartResult;
use super::constants;
use crate::stats;

// ---------------------------------------------------------------------------
// Individual-MR Chart
// ---------------------------------------------------------------------------

/// Individual and Moving Range (I-MR) chart pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImrChart {
    /// Individuals chart: CL = x̄, limits x̄ ± 3σ̂.
    pub individuals: ChartResult,
    /// Moving range chart: CL = MR̄, UCL = D4(2)·MR̄, LCL = D3(2)·MR̄.
    /// Has one fewer point than the individuals chart.
    pub moving_range: ChartResult,
    /// Short-term sigma estimate σ̂ = MR̄ / d2(2).
    pub sigma: f64,
}

/// Computes an Individual and Moving Range chart.
///
/// # Algorithm
///
/// 1. Moving ranges MR_i = |x_i − x_{i−1}| for i ≥ 1.
/// 2. x̄ = mean of observations, MR̄ = mean of moving ranges.
/// 3. σ̂ = MR̄ / d2(2); I chart limits x̄ ± 3σ̂.
/// 4. MR chart limits D4(2)·MR̄ and D3(2)·MR̄.
///
/// # Returns
///
/// `None` if fewer than 2 observations or any value is non-finite.
///
/// # Examples
///
/// ```
/// use u_quality::spc::imr_chart;
///
/// let chart = imr_chart(&[10.0, 12.0, 11.0, 13.0, 10.0, 11.0, 14.0, 12.0]).unwrap();
/// assert_eq!(chart.individuals.points.len(), 8);
/// assert_eq!(chart.moving_range.points.len(), 7);
/// assert!(chart.individuals.ucl > chart.individuals.cl);
/// ```
pub fn imr_chart(data: &[f64]) -> Option<ImrChart> {
    if data.len() < 2 {
        debug!(n = data.len(), "i-mr chart needs at least 2 observations");
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        debug!("i-mr chart input contains non-finite values");
        return None;
    }

    let moving_ranges: Vec<f64> = data.windows(2).map(|w| (w[1] - w[0]).abs()).collect();

    let x_bar = stats::mean(data)?;
    let mr_bar = stats::mean(&moving_ranges)?;

    let d2 = constants::d2(2)?;
    let d3 = constants::d3(2)?;
    let d4 = constants::d4(2)?;

    let sigma = mr_bar / d2;

    Some(ImrChart {
        individuals: ChartResult::new(
            x_bar,
            x_bar + 3.0 * sigma,
            x_bar - 3.0 * sigma,
            data.to_vec(),
        ),
        moving_range: ChartResult::new(mr_bar, d4 * mr_bar, d3 * mr_bar, moving_ranges),
        sigma,
    })
}

// ---------------------------------------------------------------------------
// X-bar-R Chart
// ---------------------------------------------------------------------------

/// X-bar and Range chart pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XBarRChart {
    /// X̄ chart: CL = X̿, limits X̿ ± A2·R̄. One point per subgroup mean.
    pub xbar: ChartResult,
    /// R chart: CL = R̄, UCL = D4·R̄, LCL = D3·R̄. One point per subgroup range.
    pub range: ChartResult,
    /// Common subgroup size n.
    pub subgroup_size: usize,
    /// Within-subgroup sigma estimate σ̂ = R̄ / d2(n).
    pub sigma: f64,
}

/// Computes an X-bar and Range chart from equal-size subgroups.
///
/// # Algorithm
///
/// 1. For each subgroup, compute the mean (X̄) and range (R).
/// 2. Compute the grand mean (X̿) and average range (R̄).
/// 3. X̄ chart limits: X̿ ± A2·R̄.
/// 4. R chart limits: UCL = D4·R̄, LCL = D3·R̄.
///
/// # Returns
///
/// `None` if there are no subgroups, the subgroup size is outside 2..=25,
/// subgroup sizes differ, or any value is non-finite.
///
/// # Examples
///
/// ```
/// use u_quality::spc::xbar_r_chart;
///
/// let subgroups = [
///     [10.0, 12.0, 11.0],
///     [13.0, 10.0, 11.0],
///     [14.0, 12.0, 13.0],
///     [11.0, 10.0, 12.0],
///     [12.0, 13.0, 11.0],
/// ];
/// let chart = xbar_r_chart(&subgroups).unwrap();
/// assert_eq!(chart.xbar.points.len(), 5);
/// assert!(chart.range.ucl > chart.range.cl);
///
/// // Unequal subgroup sizes have no chart.
/// assert!(xbar_r_chart(&[vec![10.0, 12.0], vec![13.0, 10.0, 11.0]]).is_none());
/// ```
pub fn xbar_r_chart<S: AsRef<[f64]>>(subgroups: &[S]) -> Option<XBarRChart> {
    let n = subgroups.first()?.as_ref().len();
    if !(constants::MIN_SUBGROUP..=constants::MAX_SUBGROUP).contains(&n) {
        debug!(n, "x-bar-r subgroup size outside table range");
        return None;
    }
    if subgroups.iter().any(|s| s.as_ref().len() != n) {
        debug!(n, "x-bar-r subgroups have unequal sizes");
        return None;
    }
    if !subgroups
        .iter()
        .all(|s| s.as_ref().iter().all(|x| x.is_finite()))
    {
        debug!("x-bar-r input contains non-finite values");
        return None;
    }

    let mut means = Vec::with_capacity(subgroups.len());
    let mut ranges = Vec::with_capacity(subgroups.len());
    for subgroup in subgroups {
        let values = subgroup.as_ref();
        means.push(stats::mean(values)?);
        ranges.push(stats::range(values));
    }

    let grand_mean = stats::mean(&means)?;
    let r_bar = stats::mean(&ranges)?;

    let a2 = constants::a2(n)?;
    let d3 = constants::d3(n)?;
    let d4 = constants::d4(n)?;
    let d2 = constants::d2(n)?;

    Some(XBarRChart {
        xbar: ChartResult::new(
            grand_mean,
            grand_mean + a2 * r_bar,
            grand_mean - a2 * r_bar,
            means,
        ),
        range: ChartResult::new(r_bar, d4 * r_bar, d3 * r_bar, ranges),
        subgroup_size: n,
        sigma: r_bar / d2,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

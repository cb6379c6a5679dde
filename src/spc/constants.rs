//! Control chart factor tables for subgroup sizes n = 2..=25.
//!
//! Values are the published Shewhart factors (ASTM E2587; Montgomery,
//! Appendix VI). They are reference data, not derived at runtime.
//!
//! | Factor | Use |
//! |--------|-----|
//! | A2 | X̄ chart limits: X̿ ± A2·R̄ |
//! | D3 | R chart LCL: D3·R̄ |
//! | D4 | R chart UCL: D4·R̄ |
//! | d2 | σ̂ = R̄ / d2 |
//!
//! [`d2_extended`] carries d2 past the table for range-based studies with
//! more than 25 parts, operators, or trials.

use crate::special::normal_cdf;

/// Smallest subgroup size in the tables.
pub const MIN_SUBGROUP: usize = 2;
/// Largest subgroup size in the tables.
pub const MAX_SUBGROUP: usize = 25;

// Index 0 corresponds to n = 2.

const A2: [f64; 24] = [
    1.880, 1.023, 0.729, 0.577, 0.483, 0.419, 0.373, 0.337, 0.308, 0.285, 0.266, 0.249,
    0.235, 0.223, 0.212, 0.203, 0.194, 0.187, 0.180, 0.173, 0.167, 0.162, 0.157, 0.153,
];

const D3: [f64; 24] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.076, 0.136, 0.184, 0.223, 0.256, 0.283, 0.307, 0.328,
    0.347, 0.363, 0.378, 0.391, 0.403, 0.415, 0.425, 0.434, 0.443, 0.451, 0.459,
];

const D4: [f64; 24] = [
    3.267, 2.574, 2.282, 2.114, 2.004, 1.924, 1.864, 1.816, 1.777, 1.744, 1.717, 1.693,
    1.672, 1.653, 1.637, 1.622, 1.608, 1.597, 1.585, 1.575, 1.566, 1.557, 1.548, 1.541,
];

const D2: [f64; 24] = [
    1.128, 1.693, 2.059, 2.326, 2.534, 2.704, 2.847, 2.970, 3.078, 3.173, 3.258, 3.336,
    3.407, 3.472, 3.532, 3.588, 3.640, 3.689, 3.735, 3.778, 3.819, 3.858, 3.895, 3.931,
];

fn lookup(table: &[f64; 24], n: usize) -> Option<f64> {
    if (MIN_SUBGROUP..=MAX_SUBGROUP).contains(&n) {
        table.get(n - MIN_SUBGROUP).copied()
    } else {
        None
    }
}

/// A2 factor for subgroup size `n`, or `None` outside 2..=25.
pub fn a2(n: usize) -> Option<f64> {
    lookup(&A2, n)
}

/// D3 factor for subgroup size `n`, or `None` outside 2..=25.
pub fn d3(n: usize) -> Option<f64> {
    lookup(&D3, n)
}

/// D4 factor for subgroup size `n`, or `None` outside 2..=25.
pub fn d4(n: usize) -> Option<f64> {
    lookup(&D4, n)
}

/// d2 factor (mean of the relative range) for subgroup size `n`, or `None`
/// outside 2..=25.
///
/// # Examples
///
/// ```
/// use u_quality::spc::constants::d2;
///
/// assert_eq!(d2(2), Some(1.128));
/// assert_eq!(d2(5), Some(2.326));
/// assert_eq!(d2(1), None);
/// ```
pub fn d2(n: usize) -> Option<f64> {
    lookup(&D2, n)
}

/// Integration half-width; `normal_cdf` is exactly 0 or 1 beyond it.
const RANGE_LIMIT: f64 = 8.0;
/// Simpson intervals over `[-RANGE_LIMIT, RANGE_LIMIT]` (even).
const RANGE_STEPS: usize = 3200;

/// Expected range of `n` standard normal draws,
/// `∫ [1 − Φ(x)ⁿ − (1 − Φ(x))ⁿ] dx`, by composite Simpson's rule.
fn expected_range(n: usize) -> f64 {
    let n = n as f64;
    let integrand = |x: f64| {
        let p = normal_cdf(x);
        1.0 - p.powf(n) - (1.0 - p).powf(n)
    };
    let h = 2.0 * RANGE_LIMIT / RANGE_STEPS as f64;
    let interior: f64 = (1..RANGE_STEPS)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * integrand(-RANGE_LIMIT + i as f64 * h)
        })
        .sum();
    (integrand(-RANGE_LIMIT) + interior + integrand(RANGE_LIMIT)) * h / 3.0
}

/// d2 for any `n >= 2`: the table value up to 25, the expected normal
/// range beyond it. `None` for `n < 2`.
///
/// # Examples
///
/// ```
/// use u_quality::spc::constants::{d2, d2_extended};
///
/// assert_eq!(d2_extended(10), d2(10));
/// assert!((d2_extended(30).unwrap() - 4.086).abs() < 1e-3);
/// assert_eq!(d2_extended(1), None);
/// ```
pub fn d2_extended(n: usize) -> Option<f64> {
    match n {
        0 | 1 => None,
        n if n <= MAX_SUBGROUP => d2(n),
        n => Some(expected_range(n)),
    }
}

//! Special functions: standard normal CDF and its inverse, log-gamma, and
//! the regularized incomplete beta function.
//!
//! The normal and incomplete-beta approximations fix the constants,
//! iteration cap, and floor that the crate's p-values depend on. Log-gamma
//! is re-exported from `u_numflow`.
//!
//! # Algorithms
//!
//! - **Normal CDF**: Abramowitz & Stegun 7.1.26 rational approximation,
//!   absolute error below 1.5e-7.
//! - **Inverse normal CDF**: Acklam's rational approximation in the
//!   Beasley-Springer-Moro three-region form.
//! - **Incomplete beta**: continued fraction evaluated with the modified
//!   Lentz method.
//!
//! # References
//!
//! - Abramowitz, M. & Stegun, I.A. (1964). *Handbook of Mathematical
//!   Functions*, formula 7.1.26.
//! - Moro, B. (1995). "The Full Monte", *Risk* 8(2), pp. 57-58.
//! - Press, W.H. et al. (2007). *Numerical Recipes*, 3rd ed., §6.4.

use tracing::trace;

pub use u_numflow::special::ln_gamma;

/// Standard normal cumulative distribution function Φ(x).
///
/// Clamped to exactly 0 below -8 and exactly 1 above 8, where the
/// approximation's tail is no longer meaningful. NaN maps to 0.5.
///
/// # Examples
///
/// ```
/// use u_quality::special::normal_cdf;
///
/// assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!((normal_cdf(1.96) - 0.975).abs() < 1e-4);
/// ```
pub fn normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return 0.5;
    }
    if x < -8.0 {
        return 0.0;
    }
    if x > 8.0 {
        return 1.0;
    }

    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    // Φ(x) = (1 + erf(x/√2)) / 2, with erf from A&S 7.1.26.
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let z = x.abs() / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + P * z);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let erf = 1.0 - poly * (-z * z).exp();

    0.5 * (1.0 + sign * erf)
}

// Coefficients for the inverse normal CDF, central region.
const INV_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const INV_B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
// Tail regions.
const INV_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const INV_D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

const P_LOW: f64 = 0.02425;
const P_HIGH: f64 = 1.0 - P_LOW;

/// Inverse of the standard normal CDF, Φ⁻¹(p).
///
/// Three regions: lower tail `p < 0.02425`, central, and upper tail
/// `p > 0.97575`, each with its own rational approximation.
///
/// Returns `0.0` when `p <= 0` or `p >= 1` (the quantile is unbounded there).
///
/// # Examples
///
/// ```
/// use u_quality::special::inverse_normal_cdf;
///
/// assert!((inverse_normal_cdf(0.975) - 1.959964).abs() < 1e-4);
/// assert_eq!(inverse_normal_cdf(0.0), 0.0);
/// ```
pub fn inverse_normal_cdf(p: f64) -> f64 {
    // Also rejects NaN.
    if !(p > 0.0 && p < 1.0) {
        return 0.0;
    }

    let (c, d) = (&INV_C, &INV_D);

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((c[0] * q + c[1]) * q + c[2]) * q + c[3]) * q + c[4]) * q + c[5])
            / ((((d[0] * q + d[1]) * q + d[2]) * q + d[3]) * q + 1.0)
    } else if p <= P_HIGH {
        let (a, b) = (&INV_A, &INV_B);
        let q = p - 0.5;
        let r = q * q;
        (((((a[0] * r + a[1]) * r + a[2]) * r + a[3]) * r + a[4]) * r + a[5]) * q
            / (((((b[0] * r + b[1]) * r + b[2]) * r + b[3]) * r + b[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((c[0] * q + c[1]) * q + c[2]) * q + c[3]) * q + c[4]) * q + c[5])
            / ((((d[0] * q + d[1]) * q + d[2]) * q + d[3]) * q + 1.0)
    }
}

/// Maximum continued-fraction steps for [`incomplete_beta`].
const BETA_MAX_ITER: usize = 200;
/// Convergence threshold on `|delta - 1|`.
const BETA_EPS: f64 = 1e-10;
/// Floor that keeps the Lentz recurrence away from division by zero.
const BETA_FPMIN: f64 = 1e-30;

/// Regularized incomplete beta function I_x(a, b).
///
/// Evaluated as `exp(a·ln x + b·ln(1−x) − ln B(a,b)) · cf / a`, where `cf`
/// is the continued fraction computed by Lentz's method, at most 200 steps
/// with early exit once `|delta − 1| < 1e-10`.
///
/// Boundaries: `x <= 0` gives 0, `x >= 1` or NaN gives 1.
///
/// This is the bridge from a t statistic to a p-value for small degrees of
/// freedom: `I_{df/(df+t²)}(df/2, 1/2)` is the two-tailed tail area.
///
/// # Examples
///
/// ```
/// use u_quality::special::incomplete_beta;
///
/// assert!((incomplete_beta(1.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
/// assert_eq!(incomplete_beta(2.0, 3.0, 0.0), 0.0);
/// assert_eq!(incomplete_beta(2.0, 3.0, 1.0), 1.0);
/// ```
pub fn incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 || x.is_nan() {
        return 1.0;
    }

    let ln_beta = ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b);
    let prefix = (a * x.ln() + b * (1.0 - x).ln() - ln_beta).exp();

    let floor = |v: f64| if v.abs() < BETA_FPMIN { BETA_FPMIN } else { v };

    let mut c = 1.0;
    let mut d = 1.0 / floor(1.0 - (a + b) * x / (a + 1.0));
    let mut result = d;
    let mut converged = false;

    for m in 1..=BETA_MAX_ITER {
        let m = m as f64;

        // Even step.
        let numerator = m * (b - m) * x / ((a + 2.0 * m - 1.0) * (a + 2.0 * m));
        d = 1.0 / floor(1.0 + numerator * d);
        c = floor(1.0 + numerator / c);
        result *= d * c;

        // Odd step.
        let numerator = -(a + m) * (a + b + m) * x / ((a + 2.0 * m) * (a + 2.0 * m + 1.0));
        d = 1.0 / floor(1.0 + numerator * d);
        c = floor(1.0 + numerator / c);
        let delta = d * c;
        result *= delta;

        if (delta - 1.0).abs() < BETA_EPS {
            converged = true;
            break;
        }
    }

    if !converged {
        trace!(a, b, x, "incomplete beta hit iteration cap");
    }

    prefix * result / a
}

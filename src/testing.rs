//! Hypothesis testing for means.
//!
//! One-sample Z, one-sample t, and two-sample pooled-variance t tests with
//! two-sided or one-sided alternatives. Invalid inputs (no observations, zero
//! spread) never fail: they yield a neutral result with statistic `0`,
//! p-value `1`, and no rejection.
//!
//! # p-values for t
//!
//! For df ≥ 30 the t statistic is referred to the standard normal. Below
//! that, the two-tailed probability comes from the regularized incomplete
//! beta `I_{df/(df+t²)}(df/2, 1/2)` and is halved according to the sign of
//! `t` for one-sided alternatives.
//!
//! # Examples
//!
//! ```
//! use u_quality::testing::{one_sample_z, Alternative};
//!
//! let r = one_sample_z(105.0, 100.0, 15.0, 36, 0.05, Alternative::TwoSided);
//! assert!((r.statistic - 2.0).abs() < 1e-12);
//! assert!(r.reject);
//! ```

use std::fmt;

use tracing::debug;

use crate::special::{incomplete_beta, normal_cdf};
use crate::stats;

/// Degrees of freedom at which t is approximated by the standard normal.
const NORMAL_APPROX_DF: f64 = 30.0;

/// Direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alternative {
    /// H₁: μ ≠ μ₀.
    #[default]
    TwoSided,
    /// H₁: μ < μ₀.
    Less,
    /// H₁: μ > μ₀.
    Greater,
}

/// Decision label attached to a [`TestResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conclusion {
    /// p < α.
    RejectNull,
    /// p ≥ α.
    FailToReject,
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RejectNull => "reject H0",
            Self::FailToReject => "fail to reject H0",
        })
    }
}

/// Result of a hypothesis test.
///
/// `reject` is `true` exactly when `p_value < alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestResult {
    /// Test statistic (z or t).
    pub statistic: f64,
    /// Degrees of freedom; `None` for a z-test or a neutral result.
    pub df: Option<f64>,
    /// p-value in `[0, 1]`.
    pub p_value: f64,
    /// Whether H₀ is rejected at the requested α.
    pub reject: bool,
    /// Label for `reject`.
    pub conclusion: Conclusion,
}

impl TestResult {
    fn decide(statistic: f64, df: Option<f64>, p_value: f64, alpha: f64) -> Self {
        let p_value = p_value.clamp(0.0, 1.0);
        let reject = p_value < alpha;
        Self {
            statistic,
            df,
            p_value,
            reject,
            conclusion: if reject {
                Conclusion::RejectNull
            } else {
                Conclusion::FailToReject
            },
        }
    }

    /// Neutral result: statistic 0, p-value 1, not rejected.
    pub fn neutral() -> Self {
        Self {
            statistic: 0.0,
            df: None,
            p_value: 1.0,
            reject: false,
            conclusion: Conclusion::FailToReject,
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.df {
            Some(df) => write!(
                f,
                "t={:.4} (df={}), p={:.4}, {}",
                self.statistic, df, self.p_value, self.conclusion
            ),
            None => write!(
                f,
                "z={:.4}, p={:.4}, {}",
                self.statistic, self.p_value, self.conclusion
            ),
        }
    }
}

/// Mean, sample standard deviation, and size of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSummary {
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation (n − 1 divisor).
    pub std_dev: f64,
    /// Number of observations.
    pub n: usize,
}

impl SampleSummary {
    /// Summary from known statistics.
    pub fn new(mean: f64, std_dev: f64, n: usize) -> Self {
        Self { mean, std_dev, n }
    }

    /// Summary of raw observations. `None` if `data` is empty or holds a
    /// non-finite value.
    pub fn from_data(data: &[f64]) -> Option<Self> {
        Some(Self {
            mean: stats::mean(data)?,
            std_dev: stats::std_dev(data),
            n: data.len(),
        })
    }
}

// ---------------------------------------------------------------------------
// p-values
// ---------------------------------------------------------------------------

fn normal_p_value(z: f64, alternative: Alternative) -> f64 {
    match alternative {
        Alternative::TwoSided => 2.0 * (1.0 - normal_cdf(z.abs())),
        Alternative::Less => normal_cdf(z),
        Alternative::Greater => 1.0 - normal_cdf(z),
    }
}

fn t_p_value(t: f64, df: f64, alternative: Alternative) -> f64 {
    if df >= NORMAL_APPROX_DF {
        return normal_p_value(t, alternative);
    }
    // Two-tailed probability P(|T| > |t|).
    let two_tailed = incomplete_beta(df / 2.0, 0.5, df / (df + t * t));
    match alternative {
        Alternative::TwoSided => two_tailed,
        Alternative::Less => {
            if t < 0.0 {
                two_tailed / 2.0
            } else {
                1.0 - two_tailed / 2.0
            }
        }
        Alternative::Greater => {
            if t > 0.0 {
                two_tailed / 2.0
            } else {
                1.0 - two_tailed / 2.0
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// One-sample Z test with known population σ: H₀: μ = μ₀.
///
/// z = (x̄ − μ₀) / (σ / √n). Neutral result when `n == 0` or `sigma <= 0`.
pub fn one_sample_z(
    sample_mean: f64,
    mu0: f64,
    sigma: f64,
    n: usize,
    alpha: f64,
    alternative: Alternative,
) -> TestResult {
    if n == 0 || sigma <= 0.0 {
        debug!(n, sigma, "z test has no observations or no spread");
        return TestResult::neutral();
    }
    let z = (sample_mean - mu0) / (sigma / (n as f64).sqrt());
    TestResult::decide(z, None, normal_p_value(z, alternative), alpha)
}

/// One-sample t test: H₀: μ = μ₀.
///
/// t = (x̄ − μ₀) / (s / √n), df = n − 1. Neutral result when `n < 2` or
/// `sample_sd <= 0`.
///
/// # Examples
///
/// ```
/// use u_quality::testing::{one_sample_t, Alternative};
///
/// // t = 2.262 with df = 9 sits on the 5% two-sided critical value.
/// let r = one_sample_t(2.262, 0.0, 10.0_f64.sqrt(), 10, 0.05, Alternative::TwoSided);
/// assert!((r.p_value - 0.05).abs() < 0.002);
/// ```
pub fn one_sample_t(
    sample_mean: f64,
    mu0: f64,
    sample_sd: f64,
    n: usize,
    alpha: f64,
    alternative: Alternative,
) -> TestResult {
    if n < 2 || sample_sd <= 0.0 {
        debug!(n, sample_sd, "one-sample t test has too few observations or no spread");
        return TestResult::neutral();
    }
    let t = (sample_mean - mu0) / (sample_sd / (n as f64).sqrt());
    let df = (n - 1) as f64;
    TestResult::decide(t, Some(df), t_p_value(t, df, alternative), alpha)
}

/// One-sample t test on raw observations.
pub fn one_sample_t_from_data(
    data: &[f64],
    mu0: f64,
    alpha: f64,
    alternative: Alternative,
) -> TestResult {
    match SampleSummary::from_data(data) {
        Some(s) => one_sample_t(s.mean, mu0, s.std_dev, s.n, alpha, alternative),
        None => TestResult::neutral(),
    }
}

/// Two-sample t test with pooled variance: H₀: μ₁ = μ₂.
///
/// ```text
/// sp² = ((n₁−1)s₁² + (n₂−1)s₂²) / (n₁+n₂−2)
/// se  = √(sp² (1/n₁ + 1/n₂))
/// t   = (x̄₁ − x̄₂) / se,  df = n₁ + n₂ − 2
/// ```
///
/// Neutral result when either sample has fewer than 2 observations, both
/// standard deviations are zero, or `se` is not positive.
pub fn two_sample_t(
    a: &SampleSummary,
    b: &SampleSummary,
    alpha: f64,
    alternative: Alternative,
) -> TestResult {
    if a.n < 2 || b.n < 2 || (a.std_dev <= 0.0 && b.std_dev <= 0.0) {
        debug!(n1 = a.n, n2 = b.n, "two-sample t test has too few observations or no spread");
        return TestResult::neutral();
    }
    let (n1, n2) = (a.n as f64, b.n as f64);
    let df = n1 + n2 - 2.0;
    let pooled_var = ((n1 - 1.0) * a.std_dev.powi(2) + (n2 - 1.0) * b.std_dev.powi(2)) / df;
    let se = (pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt();
    if se.is_nan() || se <= 0.0 {
        debug!(se, "two-sample t test has zero standard error");
        return TestResult::neutral();
    }
    let t = (a.mean - b.mean) / se;
    TestResult::decide(t, Some(df), t_p_value(t, df, alternative), alpha)
}

/// Two-sample pooled t test on raw observations.
///
/// # Examples
///
/// ```
/// use u_quality::testing::{two_sample_t_from_data, Alternative};
///
/// let a = [5.1, 4.9, 5.2, 5.0, 4.8];
/// let b = [7.1, 6.9, 7.2, 7.0, 6.8];
/// let r = two_sample_t_from_data(&a, &b, 0.05, Alternative::TwoSided);
/// assert!(r.p_value < 0.01);
/// ```
pub fn two_sample_t_from_data(
    a: &[f64],
    b: &[f64],
    alpha: f64,
    alternative: Alternative,
) -> TestResult {
    match (SampleSummary::from_data(a), SampleSummary::from_data(b)) {
        (Some(sa), Some(sb)) => two_sample_t(&sa, &sb, alpha, alternative),
        _ => TestResult::neutral(),
    }
}

//! Frequency distribution of a sample (histogram).
//!
//! Bins are equal width between the sample minimum and maximum. Every bin is
//! half-open `[lower, upper)` except the last, which is closed `[lower, max]`
//! so the maximum is counted. Bin frequencies therefore always sum to the
//! sample size.
//!
//! # Examples
//!
//! ```
//! use u_quality::distribution::{histogram, BinCount};
//!
//! let data = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.0];
//! let h = histogram(&data, BinCount::Sturges).unwrap();
//! assert_eq!(h.bins.len(), 5);
//! assert_eq!(h.bins.iter().map(|b| b.frequency).sum::<usize>(), 10);
//! ```

use std::fmt;

use tracing::debug;

use crate::stats;

/// Fewest bins produced by Sturges' rule.
const MIN_STURGES_BINS: usize = 3;

/// How many bins to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinCount {
    /// k = ⌈1 + 3.322·log₁₀(n)⌉, at least 3.
    #[default]
    Sturges,
    /// Caller-chosen count, capped at the number of observations. Zero
    /// falls back to Sturges.
    Fixed(usize),
}

impl BinCount {
    fn resolve(self, n: usize) -> usize {
        match self {
            Self::Fixed(k) if k > 0 => k.min(n),
            _ => sturges_bin_count(n).max(MIN_STURGES_BINS),
        }
    }
}

/// Sturges' rule, `⌈1 + 3.322·log₁₀(n)⌉`, without the minimum of 3.
///
/// ```
/// use u_quality::distribution::sturges_bin_count;
///
/// assert_eq!(sturges_bin_count(10), 5);
/// assert_eq!(sturges_bin_count(100), 8);
/// ```
pub fn sturges_bin_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    (1.0 + 3.322 * (n as f64).log10()).ceil() as usize
}

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramBin {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Upper bound; exclusive except for the last bin.
    pub upper: f64,
    /// Number of observations in the bin.
    pub frequency: usize,
    /// `frequency / count × 100`.
    pub relative_frequency: f64,
}

impl HistogramBin {
    /// Center of the bin.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Axis label with two decimals, e.g. `"1.00-1.80"`.
    pub fn label(&self) -> String {
        format!("{:.2}-{:.2}", self.lower, self.upper)
    }
}

/// Histogram with summary statistics of the sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramResult {
    /// Contiguous bins from `min` to `max`.
    pub bins: Vec<HistogramBin>,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation (n − 1 divisor).
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// Number of observations.
    pub count: usize,
}

impl fmt::Display for HistogramResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, {} bins, mean={:.4}, sd={:.4}, range=[{:.4}, {:.4}]",
            self.count,
            self.bins.len(),
            self.mean,
            self.std_dev,
            self.min,
            self.max
        )
    }
}

/// Builds a histogram.
///
/// # Returns
///
/// `None` if there are fewer than 2 observations, any value is not finite,
/// or all values are equal.
pub fn histogram(data: &[f64], bins: BinCount) -> Option<HistogramResult> {
    let n = data.len();
    if n < 2 || data.iter().any(|v| !v.is_finite()) {
        debug!(n, "histogram needs at least two finite values");
        return None;
    }
    let min = stats::min(data)?;
    let max = stats::max(data)?;
    if max <= min {
        debug!(min, max, "histogram range is degenerate");
        return None;
    }

    let k = bins.resolve(n);
    let width = (max - min) / k as f64;

    // Shared edges keep adjacent bins exactly contiguous.
    let mut edges: Vec<f64> = (0..k).map(|i| min + i as f64 * width).collect();
    edges.push(max);

    let mut counts = vec![0_usize; k];
    for &x in data {
        let mut i = (((x - min) / width).floor() as usize).min(k - 1);
        while i > 0 && x < edges[i] {
            i -= 1;
        }
        while i < k - 1 && x >= edges[i + 1] {
            i += 1;
        }
        counts[i] += 1;
    }

    let bins = counts
        .iter()
        .enumerate()
        .map(|(i, &frequency)| HistogramBin {
            lower: edges[i],
            upper: edges[i + 1],
            frequency,
            relative_frequency: frequency as f64 / n as f64 * 100.0,
        })
        .collect();

    Some(HistogramResult {
        bins,
        mean: stats::mean(data)?,
        std_dev: stats::std_dev(data),
        min,
        max,
        count: n,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn frequencies_sum_to_count(
            data in proptest::collection::vec(-1e6_f64..1e6, 2..300),
            k in 0_usize..40,
        ) {
            if let Some(h) = histogram(&data, BinCount::Fixed(k)) {
                let total: usize = h.bins.iter().map(|b| b.frequency).sum();
                prop_assert_eq!(total, data.len());
                prop_assert_eq!(h.count, data.len());
            }
        }

        #[test]
        fn every_value_lands_in_its_bin(
            data in proptest::collection::vec(-100.0_f64..100.0, 2..100),
        ) {
            if let Some(h) = histogram(&data, BinCount::Sturges) {
                let last = h.bins.len() - 1;
                for &x in &data {
                    let hits = h.bins.iter().enumerate().filter(|&(i, b)| {
                        x >= b.lower && (x < b.upper || (i == last && x <= b.upper))
                    }).count();
                    prop_assert_eq!(hits, 1, "x={} in {} bins", x, hits);
                }
            }
        }
    }
}

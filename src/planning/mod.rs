//! Study planning: statistical power and sample sizing.
//!
//! # Power
//!
//! - [`beta`], [`power`] — Type II error and power of a two-sided z-test
//! - [`required_sample_size`] — n needed to reach a target power
//! - [`analyze`] — α, β, and power bundled as a [`PowerResult`]
//!
//! # Sample Size
//!
//! - [`sample_size_proportion`], [`sample_size_mean`] — estimation margins
//! - [`adjust_for_population`] — finite population correction
//!
//! # References
//!
//! - Cohen, J. (1988). *Statistical Power Analysis for the Behavioral Sciences*, 2nd ed.
//! - Cochran, W.G. (1977). *Sampling Techniques*, 3rd ed.

mod power;
mod sample_size;

pub use power::{analyze, beta, power, required_sample_size, PowerRating, PowerResult};
pub use sample_size::{
    adjust_for_population, sample_size_mean, sample_size_proportion, z_score, CONFIDENCE_LEVELS,
};

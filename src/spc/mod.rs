//! Statistical Process Control (SPC) charts.
//!
//! # Variables Charts
//!
//! - [`imr_chart`] — Individual and Moving Range chart for single observations
//! - [`xbar_r_chart`] — X-bar and Range chart for subgroups (n = 2..=25)
//!
//! # Detection
//!
//! [`ChartResult::out_of_control_points`] flags points strictly beyond the
//! control limits. No run rules are applied.
//!
//! # Constants
//!
//! [`constants`] holds the A2, D3, D4, and d2 factor tables.
//!
//! # References
//!
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts
//! - Shewhart, W.A. (1931). *Economic Control of Quality of Manufactured Product*.

mod chart;
pub mod constants;
mod variables;

pub use chart::{out_of_control_points, ChartResult};
pub use variables::{imr_chart, xbar_r_chart, ImrChart, XBarRChart};

//! Quality management tools.
//!
//! - [`pareto`] / [`vital_few`] — Pareto ranking and the 80% cut
//! - [`FmeaItem`] — FMEA ratings, RPN, and priority
//! - [`IshikawaDiagram`] — 6M cause-and-effect diagram
//! - [`OeeResult`] — Overall Equipment Effectiveness
//!
//! # References
//!
//! - Juran, J.M. (1951). *Quality Control Handbook*.
//! - AIAG & VDA (2019). *FMEA Handbook*.
//! - Ishikawa, K. (1976). *Guide to Quality Control*.

mod fmea;
mod ishikawa;
mod oee;
mod pareto;

pub use fmea::{clamp_rating, rpn, sort_by_rpn, FmeaItem, Priority, MAX_RATING, MIN_RATING};
pub use ishikawa::{standard_6m, Category, CategorySlot, IshikawaDiagram};
pub use oee::{availability, oee, performance, quality, OeeRating, OeeResult};
pub use pareto::{pareto, vital_few, ParetoItem};

//! # u-quality
//!
//! Statistical quality engineering: process capability, control charts,
//! measurement system analysis, hypothesis tests, study planning, and
//! acceptance sampling.
//!
//! Every calculation is a pure function over plain `f64` data. Inputs with
//! no valid answer give `None`; inputs that are valid but degenerate (zero
//! spread, empty sample) give a documented neutral value so callers can
//! always render a result.
//!
//! ## Modules
//!
//! - [`special`] — Normal CDF and inverse, log-gamma, regularized incomplete beta
//! - [`stats`] — Mean, sample/population variance, range
//! - [`spc`] — I-MR and X̄-R control charts, A2/D3/D4/d2 tables
//! - [`capability`] — Cp, Cpk, Pp, Ppk, Cpm; sigma level and DPMO
//! - [`msa`] — Gage R&R (average and range method)
//! - [`testing`] — Z and t tests with one- or two-sided alternatives
//! - [`planning`] — Power, β, and sample-size planning
//! - [`sampling`] — AQL single sampling plans
//! - [`distribution`] — Histogram with Sturges' rule
//! - [`quality`] — Pareto, FMEA, Ishikawa, OEE
//!
//! ## Design Philosophy
//!
//! - **Domain-focused**: quality-engineering vocabulary, reference tables built in
//! - **Never panics on data**: absence and degenerate inputs are values, not errors
//! - **Research-backed**: algorithms cite the standards and texts they follow

pub mod capability;
pub mod distribution;
pub mod error;
pub mod msa;
pub mod planning;
pub mod quality;
pub mod sampling;
pub mod spc;
pub mod special;
pub mod stats;
pub mod testing;

pub use error::{Error, Result};

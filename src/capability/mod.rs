//! Process capability analysis.
//!
//! Computes standard capability indices for assessing how well a process
//! meets specification limits.
//!
//! # Indices
//!
//! - **Cp**, **Cpk** — Short-term capability (sample or chart sigma)
//! - **Pp**, **Ppk** — Long-term performance (population sigma)
//! - **Cpm** — Taguchi capability (target deviation)
//!
//! # Sigma Level
//!
//! - [`dpmo`], [`yield_from_dpmo`]
//! - [`sigma_from_dpmo`] / [`dpmo_from_sigma`] with the 1.5σ shift
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.

mod indices;
mod sigma_level;

pub use indices::{
    cp, cpk, cpl, cpu, pp, ppk, ppl, ppu, CapabilityIndices, CapabilityRating, SpecLimits,
};
pub use sigma_level::{dpmo, dpmo_from_sigma, sigma_from_dpmo, yield_from_dpmo, SigmaRating};

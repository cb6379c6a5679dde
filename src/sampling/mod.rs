//! Acceptance sampling by attributes (AQL).
//!
//! Single sampling plans for normal inspection: lot size and inspection
//! level select a code letter, the letter fixes the sample size, and the
//! letter together with the AQL gives the accept (Ac) and reject (Re)
//! numbers.
//!
//! # Lookups
//!
//! - [`code_letter`] — lot size × [`InspectionLevel`] → [`CodeLetter`]
//! - [`sample_size`] — [`CodeLetter`] → units to inspect
//! - [`accept_reject`] — [`CodeLetter`] × AQL → (Ac, Re)
//! - [`sampling_plan`] — all three combined into a [`SamplingPlan`]
//!
//! Combinations the table marks as not applicable yield `None`.
//!
//! # References
//!
//! - ISO 2859-1:1999, *Sampling procedures for inspection by attributes*.
//! - ANSI/ASQ Z1.4-2003.

mod aql;
mod tables;

pub use aql::{
    accept_reject, code_letter, sample_size, sampling_plan, CodeLetter, InspectionLevel,
    SamplingPlan,
};
pub use tables::AQL_VALUES;

//! Error type for the few operations a caller can misuse.
//!
//! Calculations never fail with an error: an input with no valid answer
//! yields `None`, and a degenerate input yields a neutral value. `Error`
//! covers construction and mutation: parsing table keys from text,
//! building specification limits, and editing an Ishikawa diagram.

use thiserror::Error;

/// Errors returned by fallible constructors, parsers, and mutators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Text does not name an inspection level (S-1..S-4, I, II, III).
    #[error("unknown inspection level '{0}'")]
    UnknownInspectionLevel(String),

    /// Text does not name a sample-size code letter (A..R, excluding I and O).
    #[error("unknown code letter '{0}'")]
    UnknownCodeLetter(String),

    /// A specification limit is NaN or infinite.
    #[error("specification limit must be finite, got {0}")]
    NonFiniteLimit(f64),

    /// USL is not strictly above LSL.
    #[error("USL ({usl}) must be greater than LSL ({lsl})")]
    InvertedLimits {
        /// Upper specification limit.
        usl: f64,
        /// Lower specification limit.
        lsl: f64,
    },

    /// Ishikawa category index outside the six fixed slots.
    #[error("category index {0} out of range (6 categories)")]
    CategoryOutOfRange(usize),

    /// Cause index outside a category's cause list.
    #[error("cause index {index} out of range for category with {len} causes")]
    CauseOutOfRange {
        /// Requested cause index.
        index: usize,
        /// Number of causes in the category.
        len: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

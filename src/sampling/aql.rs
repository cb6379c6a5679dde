//! Code letter, sample size, and accept/reject lookups.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::tables::{ACCEPT_REJECT, AQL_VALUES, CODE_LETTERS, NA};
use crate::error::{Error, Result};

/// Inspection level selecting the column of the code-letter table.
///
/// Special levels S-1..S-4 give small samples for costly or destructive
/// tests; general levels I..III are for routine inspection, with II the
/// standard default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InspectionLevel {
    /// S-1.
    Special1,
    /// S-2.
    Special2,
    /// S-3.
    Special3,
    /// S-4.
    Special4,
    /// I.
    General1,
    /// II.
    #[default]
    General2,
    /// III.
    General3,
}

impl InspectionLevel {
    /// All levels in table column order.
    pub const ALL: [InspectionLevel; 7] = [
        Self::Special1,
        Self::Special2,
        Self::Special3,
        Self::Special4,
        Self::General1,
        Self::General2,
        Self::General3,
    ];

    /// Label used in the standard ("S-1", ..., "III").
    pub fn label(self) -> &'static str {
        match self {
            Self::Special1 => "S-1",
            Self::Special2 => "S-2",
            Self::Special3 => "S-3",
            Self::Special4 => "S-4",
            Self::General1 => "I",
            Self::General2 => "II",
            Self::General3 => "III",
        }
    }

    /// Parses a label, falling back to level II for anything unrecognized.
    ///
    /// ```
    /// use u_quality::sampling::InspectionLevel;
    ///
    /// assert_eq!(InspectionLevel::parse_or_default("S-3"), InspectionLevel::Special3);
    /// assert_eq!(InspectionLevel::parse_or_default("IV"), InspectionLevel::General2);
    /// ```
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            debug!(level = s, "unknown inspection level, using II");
            Self::default()
        })
    }

    fn column(self) -> usize {
        match self {
            Self::Special1 => 0,
            Self::Special2 => 1,
            Self::Special3 => 2,
            Self::Special4 => 3,
            Self::General1 => 4,
            Self::General2 => 5,
            Self::General3 => 6,
        }
    }
}

impl FromStr for InspectionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == s.trim())
            .ok_or_else(|| Error::UnknownInspectionLevel(s.to_string()))
    }
}

impl fmt::Display for InspectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sample-size code letter. The letters I and O are not used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum CodeLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    J,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
}

impl CodeLetter {
    /// All letters in table row order.
    pub const ALL: [CodeLetter; 16] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::P,
        Self::Q,
        Self::R,
    ];

    /// Number of units to inspect for this letter.
    pub fn sample_size(self) -> u64 {
        match self {
            Self::A => 2,
            Self::B => 3,
            Self::C => 5,
            Self::D => 8,
            Self::E => 13,
            Self::F => 20,
            Self::G => 32,
            Self::H => 50,
            Self::J => 80,
            Self::K => 125,
            Self::L => 200,
            Self::M => 315,
            Self::N => 500,
            Self::P => 800,
            Self::Q => 1250,
            Self::R => 2000,
        }
    }

    fn row(self) -> usize {
        self as usize
    }

    fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::J => 'J',
            Self::K => 'K',
            Self::L => 'L',
            Self::M => 'M',
            Self::N => 'N',
            Self::P => 'P',
            Self::Q => 'Q',
            Self::R => 'R',
        }
    }
}

impl FromStr for CodeLetter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::ALL
                .into_iter()
                .find(|letter| letter.as_char() == c)
                .ok_or_else(|| Error::UnknownCodeLetter(s.to_string())),
            _ => Err(Error::UnknownCodeLetter(s.to_string())),
        }
    }
}

impl fmt::Display for CodeLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Single sampling plan for normal inspection.
///
/// `accept < reject` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingPlan {
    /// Code letter selected by lot size and inspection level.
    pub code_letter: CodeLetter,
    /// Units to inspect.
    pub sample_size: u64,
    /// Accept the lot with at most this many nonconforming units.
    pub accept: u32,
    /// Reject the lot with at least this many nonconforming units.
    pub reject: u32,
}

impl SamplingPlan {
    /// Whether a lot with `nonconforming` units found in the sample passes.
    pub fn is_accepted(&self, nonconforming: u32) -> bool {
        nonconforming <= self.accept
    }
}

impl fmt::Display for SamplingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "code {}, n={}, Ac={}, Re={}",
            self.code_letter, self.sample_size, self.accept, self.reject
        )
    }
}

/// Code letter for a lot size. `None` when the lot has fewer than 2 units.
///
/// # Examples
///
/// ```
/// use u_quality::sampling::{code_letter, CodeLetter, InspectionLevel};
///
/// assert_eq!(code_letter(500, InspectionLevel::General2), Some(CodeLetter::H));
/// assert_eq!(code_letter(0, InspectionLevel::General2), None);
/// ```
pub fn code_letter(lot_size: u64, level: InspectionLevel) -> Option<CodeLetter> {
    let found = CODE_LETTERS
        .iter()
        .find(|(min, max, _)| (*min..=*max).contains(&lot_size))
        .map(|(_, _, letters)| letters[level.column()]);
    if found.is_none() {
        debug!(lot_size, "lot size outside code letter table");
    }
    found
}

/// Fixed sample size for a code letter.
pub fn sample_size(letter: CodeLetter) -> u64 {
    letter.sample_size()
}

/// Accept and reject numbers for a code letter at an AQL.
///
/// `aql` must equal one of [`AQL_VALUES`]. `None` when it does not, or when
/// the table has no plan for the combination.
///
/// ```
/// use u_quality::sampling::{accept_reject, CodeLetter};
///
/// assert_eq!(accept_reject(CodeLetter::H, 1.0), Some((3, 4)));
/// assert_eq!(accept_reject(CodeLetter::A, 0.065), None);
/// ```
pub fn accept_reject(letter: CodeLetter, aql: f64) -> Option<(u32, u32)> {
    let Some(column) = AQL_VALUES.iter().position(|&v| v == aql) else {
        debug!(aql, "aql is not a table column");
        return None;
    };
    let cell = ACCEPT_REJECT.get(letter.row())?.get(column).copied()?;
    if cell == NA || cell.0 < 0 || cell.1 < 0 {
        debug!(letter = %letter, aql, "no sampling plan for this cell");
        return None;
    }
    Some((cell.0 as u32, cell.1 as u32))
}

/// Complete sampling plan. `None` when any of the three lookups fails.
///
/// # Examples
///
/// ```
/// use u_quality::sampling::{sampling_plan, CodeLetter, InspectionLevel};
///
/// let plan = sampling_plan(500, InspectionLevel::General2, 1.0).unwrap();
/// assert_eq!(plan.code_letter, CodeLetter::H);
/// assert_eq!((plan.sample_size, plan.accept, plan.reject), (50, 3, 4));
/// ```
pub fn sampling_plan(lot_size: u64, level: InspectionLevel, aql: f64) -> Option<SamplingPlan> {
    let code_letter = code_letter(lot_size, level)?;
    let (accept, reject) = accept_reject(code_letter, aql)?;
    Some(SamplingPlan {
        code_letter,
        sample_size: code_letter.sample_size(),
        accept,
        reject,
    })
}

//! Failure Mode and Effects Analysis (FMEA) risk ranking.
//!
//! Each failure mode is rated 1..=10 for severity, occurrence, and
//! detection; the Risk Priority Number is their product.

use std::fmt;

/// Lowest rating on each FMEA scale.
pub const MIN_RATING: u8 = 1;
/// Highest rating on each FMEA scale.
pub const MAX_RATING: u8 = 10;

/// Clamps a raw rating into `1..=10`.
pub fn clamp_rating(value: i64) -> u8 {
    value.clamp(i64::from(MIN_RATING), i64::from(MAX_RATING)) as u8
}

/// Risk Priority Number, `severity × occurrence × detection`.
pub fn rpn(severity: u8, occurrence: u8, detection: u8) -> u16 {
    u16::from(severity) * u16::from(occurrence) * u16::from(detection)
}

/// Action priority derived from the RPN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    /// RPN below 120.
    Low,
    /// RPN 120 to 199.
    Medium,
    /// RPN 200 and above.
    High,
}

impl Priority {
    /// Classifies an RPN.
    pub fn from_rpn(rpn: u16) -> Self {
        if rpn >= 200 {
            Self::High
        } else if rpn >= 120 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// One rated failure mode. Ratings are in `1..=10`, so `rpn` is in
/// `1..=1000`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FmeaItem {
    /// Description of the failure mode.
    pub failure_mode: String,
    /// Severity of the effect.
    pub severity: u8,
    /// Likelihood of occurrence.
    pub occurrence: u8,
    /// Difficulty of detection (10 = undetectable).
    pub detection: u8,
    /// Risk Priority Number.
    pub rpn: u16,
    /// Priority band of `rpn`.
    pub priority: Priority,
}

impl FmeaItem {
    /// Rates a failure mode. Each rating is clamped into `1..=10` before the
    /// RPN is computed.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_quality::quality::{FmeaItem, Priority};
    ///
    /// let item = FmeaItem::new("seal leak", 15, 0, 5);
    /// assert_eq!((item.severity, item.occurrence, item.detection), (10, 1, 5));
    /// assert_eq!(item.rpn, 50);
    /// assert_eq!(item.priority, Priority::Low);
    /// ```
    pub fn new(
        failure_mode: impl Into<String>,
        severity: i64,
        occurrence: i64,
        detection: i64,
    ) -> Self {
        let severity = clamp_rating(severity);
        let occurrence = clamp_rating(occurrence);
        let detection = clamp_rating(detection);
        let rpn = rpn(severity, occurrence, detection);
        Self {
            failure_mode: failure_mode.into(),
            severity,
            occurrence,
            detection,
            rpn,
            priority: Priority::from_rpn(rpn),
        }
    }
}

impl fmt::Display for FmeaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: S={} O={} D={} RPN={} ({})",
            self.failure_mode,
            self.severity,
            self.occurrence,
            self.detection,
            self.rpn,
            self.priority
        )
    }
}

/// Sorts items by RPN, highest first. Equal RPNs keep their order.
pub fn sort_by_rpn(items: &mut [FmeaItem]) {
    items.sort_by(|a, b| b.rpn.cmp(&a.rpn));
}

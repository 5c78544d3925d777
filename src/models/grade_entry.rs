//! Grade scale entry model.

use rust_decimal::Decimal;
use serde::Serialize;

/// One row of the grade scale: a letter, its grade-point value and the
/// nominal score range (inclusive on both ends) it covers.
///
/// # Example
///
/// ```
/// use gpa_engine::models::GradeEntry;
/// use rust_decimal::Decimal;
///
/// let entry = GradeEntry::new("A-", Decimal::new(37, 1), 75, 79);
/// assert!(entry.covers(77));
/// assert!(!entry.covers(80));
/// assert_eq!(entry.range_label(), "75-79");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeEntry {
    /// The grade letter (e.g., "B+").
    pub letter: &'static str,
    /// Grade-point value in `0.0..=4.0`.
    pub points: Decimal,
    /// Lowest score mapped to this letter.
    pub score_low: u8,
    /// Highest score mapped to this letter.
    pub score_high: u8,
}

impl GradeEntry {
    /// Creates a new grade entry.
    pub const fn new(letter: &'static str, points: Decimal, score_low: u8, score_high: u8) -> Self {
        Self {
            letter,
            points,
            score_low,
            score_high,
        }
    }

    /// Returns true if `score` falls within this entry's range.
    pub fn covers(&self, score: u8) -> bool {
        (self.score_low..=self.score_high).contains(&score)
    }

    /// Returns the range formatted as `low-high`.
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.score_low, self.score_high)
    }
}

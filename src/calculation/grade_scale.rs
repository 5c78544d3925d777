//! Grade scale lookup functionality.
//!
//! This module holds the fixed SLIIT grade table and the functions for
//! resolving a letter grade (or a numeric score) to its grade-point value.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::GradeEntry;

/// Highest score on the 0 to 100 scale.
pub const MAX_SCORE: u8 = 100;

/// The grade table, ordered by descending point value.
///
/// Ranges are inclusive and together cover `0..=100` exactly once.
pub static GRADE_TABLE: [GradeEntry; 12] = [
    GradeEntry::new("A+", Decimal::from_parts(40, 0, 0, false, 1), 90, 100),
    GradeEntry::new("A", Decimal::from_parts(40, 0, 0, false, 1), 80, 89),
    GradeEntry::new("A-", Decimal::from_parts(37, 0, 0, false, 1), 75, 79),
    GradeEntry::new("B+", Decimal::from_parts(33, 0, 0, false, 1), 70, 74),
    GradeEntry::new("B", Decimal::from_parts(30, 0, 0, false, 1), 65, 69),
    GradeEntry::new("B-", Decimal::from_parts(27, 0, 0, false, 1), 60, 64),
    GradeEntry::new("C+", Decimal::from_parts(23, 0, 0, false, 1), 55, 59),
    GradeEntry::new("C", Decimal::from_parts(20, 0, 0, false, 1), 45, 54),
    GradeEntry::new("C-", Decimal::from_parts(17, 0, 0, false, 1), 40, 44),
    GradeEntry::new("D+", Decimal::from_parts(13, 0, 0, false, 1), 35, 39),
    GradeEntry::new("D", Decimal::from_parts(10, 0, 0, false, 1), 30, 34),
    GradeEntry::new("E", Decimal::from_parts(0, 0, 0, false, 1), 0, 29),
];

/// Read-only access to the fixed grade table.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::GradeScale;
/// use rust_decimal::Decimal;
///
/// let entry = GradeScale::lookup("A-").unwrap();
/// assert_eq!(entry.points, Decimal::new(37, 1));
/// assert!(GradeScale::lookup("F").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GradeScale;

impl GradeScale {
    /// Looks up a grade letter.
    ///
    /// Matching is exact and case-sensitive. Returns `UnknownGrade` when the
    /// letter is not in the table.
    pub fn lookup(letter: &str) -> EngineResult<&'static GradeEntry> {
        GRADE_TABLE
            .iter()
            .find(|entry| entry.letter == letter)
            .ok_or_else(|| EngineError::UnknownGrade {
                letter: letter.to_string(),
            })
    }

    /// Returns every entry, ordered by descending point value.
    pub fn all() -> &'static [GradeEntry] {
        &GRADE_TABLE
    }

    /// Returns the grade letters in table order.
    pub fn letters() -> impl Iterator<Item = &'static str> {
        GRADE_TABLE.iter().map(|entry| entry.letter)
    }

    /// Resolves a numeric score to the entry whose range covers it.
    ///
    /// Returns `ScoreOutOfRange` for scores above 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpa_engine::calculation::GradeScale;
    ///
    /// assert_eq!(GradeScale::for_score(72).unwrap().letter, "B+");
    /// assert_eq!(GradeScale::for_score(0).unwrap().letter, "E");
    /// assert!(GradeScale::for_score(101).is_err());
    /// assert!(GradeScale::for_score(300).is_err());
    /// ```
    pub fn for_score(score: u16) -> EngineResult<&'static GradeEntry> {
        u8::try_from(score)
            .ok()
            .and_then(|score| GRADE_TABLE.iter().find(|entry| entry.covers(score)))
            .ok_or(EngineError::ScoreOutOfRange { score })
    }
}

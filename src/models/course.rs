//! Course model.
//!
//! A [`Course`] is a single row entered by the student: a free-text name,
//! the credit-hour weight, and the letter grade received.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Name used in reports for a course whose name is empty.
pub const UNNAMED_COURSE: &str = "Unnamed Course";

/// Smallest accepted credit-hour weight.
pub const MIN_CREDITS: u8 = 1;

/// Largest accepted credit-hour weight.
pub const MAX_CREDITS: u8 = 4;

/// Represents one course entry in a GPA calculation.
///
/// Courses are owned by the caller and passed by value (or as a borrowed
/// snapshot) into the engine; the engine never keeps a reference to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// The course name. May be empty.
    #[serde(default)]
    pub name: String,
    /// Credit-hour weight, expected in `1..=4`.
    pub credits: u8,
    /// Letter grade, expected to match a grade scale entry (e.g. "B+").
    pub grade: String,
}

impl Course {
    /// Creates a new course entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpa_engine::models::Course;
    ///
    /// let course = Course::new("Math", 3, "A");
    /// assert_eq!(course.credits, 3);
    /// assert_eq!(course.grade, "A");
    /// ```
    pub fn new(name: impl Into<String>, credits: u8, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credits,
            grade: grade.into(),
        }
    }

    /// Returns the name to show for this course.
    ///
    /// An empty name is shown as "Unnamed Course"; any other name is kept as typed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpa_engine::models::Course;
    ///
    /// assert_eq!(Course::new("", 3, "A").display_name(), "Unnamed Course");
    /// assert_eq!(Course::new("Physics", 4, "B+").display_name(), "Physics");
    /// ```
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNNAMED_COURSE
        } else {
            &self.name
        }
    }

    /// Checks that the credit weight lies in the accepted range.
    ///
    /// Returns `InvalidCredits` when `credits` is outside `1..=4`.
    pub fn validate(&self) -> EngineResult<()> {
        if (MIN_CREDITS..=MAX_CREDITS).contains(&self.credits) {
            Ok(())
        } else {
            Err(EngineError::InvalidCredits {
                course: self.display_name().to_string(),
                credits: self.credits,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_uses_given_name() {
        let course = Course::new("Data Structures", 4, "A-");
        assert_eq!(course.display_name(), "Data Structures");
    }

    #[test]
    fn test_display_name_falls_back_for_empty_name() {
        let course = Course::new("", 3, "A");
        assert_eq!(course.display_name(), UNNAMED_COURSE);
    }

    #[test]
    fn test_display_name_keeps_whitespace_name() {
        let course = Course::new("   ", 3, "A");
        assert_eq!(course.display_name(), "   ");
    }

    #[test]
    fn test_validate_accepts_each_credit_value() {
        for credits in 1..=4 {
            assert!(Course::new("Math", credits, "A").validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_zero_credits() {
        let result = Course::new("Math", 0, "A").validate();
        match result {
            Err(EngineError::InvalidCredits { course, credits }) => {
                assert_eq!(course, "Math");
                assert_eq!(credits, 0);
            }
            _ => panic!("Expected InvalidCredits error"),
        }
    }

    #[test]
    fn test_validate_rejects_five_credits() {
        assert!(Course::new("", 5, "A").validate().is_err());
    }

    #[test]
    fn test_course_deserialization_defaults_missing_name() {
        let json = r#"{ "credits": 3, "grade": "B" }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.name, "");
        assert_eq!(course.credits, 3);
        assert_eq!(course.grade, "B");
    }

    #[test]
    fn test_course_serialization() {
        let course = Course::new("Math", 3, "A+");
        let json = serde_json::to_string(&course).unwrap();
        assert_eq!(json, r#"{"name":"Math","credits":3,"grade":"A+"}"#);
    }
}

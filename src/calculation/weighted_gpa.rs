//! Credit-weighted GPA computation.
//!
//! This module reduces a list of courses to a single grade-point average,
//! weighting each course's grade points by its credit hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Course, GpaResult};

use super::grade_scale::GradeScale;

/// What to do with a course whose grade is not in the grade scale.
///
/// # Example
///
/// ```
/// use gpa_engine::calculation::UnknownGradePolicy;
///
/// assert_eq!(UnknownGradePolicy::default(), UnknownGradePolicy::Skip);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownGradePolicy {
    /// Exclude the course from both points and credits, keeping it in the course count.
    #[default]
    Skip,
    /// Fail the computation with `UnknownGrade`. Credits outside 1-4 fail with `InvalidCredits`.
    Reject,
}

/// Computes the credit-weighted GPA, skipping courses with unrecognized grades.
///
/// The result value is `Σ(points × credits) / Σ(credits)` over the courses
/// whose grade is in the scale, or exactly `0.0` when no credits were
/// counted. `course_count` is always the length of `courses`.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::compute;
/// use gpa_engine::models::Course;
/// use rust_decimal::Decimal;
///
/// let courses = vec![Course::new("Math", 3, "A"), Course::new("Physics", 4, "B+")];
/// let result = compute(&courses);
/// assert_eq!(result.value, Decimal::new(36, 1));
/// assert_eq!(result.course_count, 2);
/// ```
pub fn compute(courses: &[Course]) -> GpaResult {
    let mut total_points = Decimal::ZERO;
    let mut total_credits: u32 = 0;

    for course in courses {
        match GradeScale::lookup(&course.grade) {
            Ok(entry) => {
                total_points += entry.points * Decimal::from(course.credits);
                total_credits += u32::from(course.credits);
            }
            Err(_) => {
                debug!(
                    course = %course.display_name(),
                    grade = %course.grade,
                    "Excluding course with unrecognized grade"
                );
            }
        }
    }

    weighted_result(total_points, total_credits, courses.len())
}

/// Computes the credit-weighted GPA under an explicit unknown-grade policy.
///
/// With [`UnknownGradePolicy::Skip`] this is identical to [`compute`] and never
/// fails. With [`UnknownGradePolicy::Reject`] the first course with an
/// unrecognized grade or out-of-range credits aborts the computation.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::{UnknownGradePolicy, compute_with_policy};
/// use gpa_engine::models::Course;
///
/// let courses = vec![Course::new("Math", 3, "A"), Course::new("Art", 2, "F")];
/// assert!(compute_with_policy(&courses, UnknownGradePolicy::Skip).is_ok());
/// assert!(compute_with_policy(&courses, UnknownGradePolicy::Reject).is_err());
/// ```
pub fn compute_with_policy(
    courses: &[Course],
    policy: UnknownGradePolicy,
) -> EngineResult<GpaResult> {
    match policy {
        UnknownGradePolicy::Skip => Ok(compute(courses)),
        UnknownGradePolicy::Reject => {
            let mut total_points = Decimal::ZERO;
            let mut total_credits: u32 = 0;

            for course in courses {
                course.validate()?;
                let entry = GradeScale::lookup(&course.grade)?;
                total_points += entry.points * Decimal::from(course.credits);
                total_credits += u32::from(course.credits);
            }

            Ok(weighted_result(total_points, total_credits, courses.len()))
        }
    }
}

/// Divides the accumulated points by the accumulated credits.
///
/// Zero credits resolve to a GPA of exactly zero rather than an error.
pub(crate) fn weighted_result(
    total_points: Decimal,
    total_credits: u32,
    course_count: usize,
) -> GpaResult {
    let value = if total_credits > 0 {
        total_points / Decimal::from(total_credits)
    } else {
        Decimal::ZERO
    };

    GpaResult {
        value,
        course_count,
        total_points,
        total_credits,
    }
}

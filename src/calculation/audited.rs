//! Audited GPA calculation.
//!
//! This module runs the full pipeline (grade lookup per course, weighted
//! average, performance classification) and records each decision in an
//! [`AuditTrace`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, Course, GpaCalculation};

use super::grade_scale::GradeScale;
use super::performance::classify;
use super::weighted_gpa::{UnknownGradePolicy, weighted_result};

/// Warning code recorded when a course is excluded for an unrecognized grade.
pub const UNKNOWN_GRADE_WARNING: &str = "UNKNOWN_GRADE";

/// Warning code recorded when a course carries credits outside 1-4.
pub const CREDITS_OUT_OF_RANGE_WARNING: &str = "CREDITS_OUT_OF_RANGE";

/// Calculates the GPA for a course list and records an audit trace.
///
/// Each course yields one `grade_lookup` step; the run ends with a
/// `weighted_average` step and a `performance_classification` step. Under
/// [`UnknownGradePolicy::Skip`] every excluded course also yields an
/// `UNKNOWN_GRADE` warning. Under [`UnknownGradePolicy::Reject`] the first
/// unrecognized grade or out-of-range credit value is returned as an error.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::calculate;
/// use gpa_engine::config::EngineConfig;
/// use gpa_engine::models::{Course, Severity};
///
/// let courses = vec![Course::new("Math", 3, "A"), Course::new("Physics", 4, "B+")];
/// let calculation = calculate(&courses, &EngineConfig::default()).unwrap();
/// assert_eq!(calculation.display_gpa, "3.60");
/// assert_eq!(calculation.tier.severity, Severity::Good);
/// assert_eq!(calculation.audit_trace.steps.len(), 4);
/// ```
pub fn calculate(courses: &[Course], config: &EngineConfig) -> EngineResult<GpaCalculation> {
    let start_time = Instant::now();
    let policy = config.unknown_grade_policy;
    let mut steps: Vec<AuditStep> = Vec::with_capacity(courses.len() + 2);
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let mut total_points = Decimal::ZERO;
    let mut total_credits: u32 = 0;

    for (index, course) in courses.iter().enumerate() {
        let position = index + 1;

        if let Err(err) = course.validate() {
            if policy == UnknownGradePolicy::Reject {
                warn!(position, error = %err, "Rejecting course with invalid credits");
                return Err(err);
            }
            warnings.push(AuditWarning {
                code: CREDITS_OUT_OF_RANGE_WARNING.to_string(),
                message: format!(
                    "Course {} ('{}') has {} credits; expected 1-4",
                    position,
                    course.display_name(),
                    course.credits
                ),
                severity: "low".to_string(),
            });
        }

        match GradeScale::lookup(&course.grade) {
            Ok(entry) => {
                let weighted = entry.points * Decimal::from(course.credits);
                total_points += weighted;
                total_credits += u32::from(course.credits);

                steps.push(AuditStep {
                    step_number,
                    rule_id: "grade_lookup".to_string(),
                    rule_name: "Grade Lookup".to_string(),
                    input: serde_json::json!({
                        "position": position,
                        "course": course.display_name(),
                        "grade": course.grade,
                        "credits": course.credits
                    }),
                    output: serde_json::json!({
                        "included": true,
                        "points": entry.points.to_string(),
                        "weighted_points": weighted.to_string()
                    }),
                    reasoning: format!(
                        "{} = {} points x {} credits = {}",
                        entry.letter, entry.points, course.credits, weighted
                    ),
                });
            }
            Err(EngineError::UnknownGrade { letter }) if policy == UnknownGradePolicy::Skip => {
                debug!(
                    position,
                    grade = %letter,
                    "Excluding course with unrecognized grade"
                );
                steps.push(AuditStep {
                    step_number,
                    rule_id: "grade_lookup".to_string(),
                    rule_name: "Grade Lookup".to_string(),
                    input: serde_json::json!({
                        "position": position,
                        "course": course.display_name(),
                        "grade": letter,
                        "credits": course.credits
                    }),
                    output: serde_json::json!({
                        "included": false
                    }),
                    reasoning: format!(
                        "Grade '{}' is not on the scale; course excluded from points and credits",
                        letter
                    ),
                });
                warnings.push(AuditWarning {
                    code: UNKNOWN_GRADE_WARNING.to_string(),
                    message: format!(
                        "Course {} ('{}') has unrecognized grade '{}' and was excluded",
                        position,
                        course.display_name(),
                        letter
                    ),
                    severity: "medium".to_string(),
                });
            }
            Err(err) => {
                warn!(position, error = %err, "Rejecting course with unrecognized grade");
                return Err(err);
            }
        }
        step_number += 1;
    }

    let result = weighted_result(total_points, total_credits, courses.len());
    steps.push(AuditStep {
        step_number,
        rule_id: "weighted_average".to_string(),
        rule_name: "Credit-Weighted Average".to_string(),
        input: serde_json::json!({
            "total_points": result.total_points.to_string(),
            "total_credits": result.total_credits
        }),
        output: serde_json::json!({
            "gpa": result.value.to_string()
        }),
        reasoning: if total_credits > 0 {
            format!(
                "{} points / {} credits = {}",
                result.total_points,
                result.total_credits,
                result.display_value()
            )
        } else {
            "No credits counted; GPA is 0.00".to_string()
        },
    });
    step_number += 1;

    let tier = classify(result.value);
    steps.push(AuditStep {
        step_number,
        rule_id: "performance_classification".to_string(),
        rule_name: "Performance Classification".to_string(),
        input: serde_json::json!({
            "gpa": result.value.to_string()
        }),
        output: serde_json::json!({
            "label": tier.label,
            "severity": tier.severity,
            "min_gpa": tier.min_gpa.to_string()
        }),
        reasoning: format!(
            "GPA {} meets the {} threshold",
            result.display_value(),
            tier.min_gpa
        ),
    });

    if !warnings.is_empty() {
        warn!(
            excluded = warnings.len(),
            course_count = courses.len(),
            "GPA calculated with warnings"
        );
    }

    Ok(GpaCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        display_gpa: result.display_value(),
        result,
        tier,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

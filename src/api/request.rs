//! Request types for the GPA engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/report` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::Course;

/// Request body for the `/calculate` and `/report` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The courses entered by the student, in display order.
    #[serde(default)]
    pub courses: Vec<CourseRequest>,
}

/// A single course row in a calculation request.
///
/// Missing fields take the values of a freshly added course row: an empty
/// name, 3 credits and an "A" grade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequest {
    /// The course name.
    #[serde(default)]
    pub name: String,
    /// Credit-hour weight.
    #[serde(default = "default_credits")]
    pub credits: u8,
    /// Letter grade.
    #[serde(default = "default_grade")]
    pub grade: String,
}

fn default_credits() -> u8 {
    3
}

fn default_grade() -> String {
    "A".to_string()
}

impl From<CourseRequest> for Course {
    fn from(req: CourseRequest) -> Self {
        Course {
            name: req.name,
            credits: req.credits,
            grade: req.grade,
        }
    }
}

impl CalculationRequest {
    /// Converts the request rows into domain courses.
    pub fn into_courses(self) -> Vec<Course> {
        self.courses.into_iter().map(Into::into).collect()
    }
}

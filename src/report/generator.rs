//! Plain-text report rendering.

use std::fmt::Write;

use serde::Serialize;

use crate::config::ReportConfig;
use crate::models::{Course, GpaResult};

/// Heading on the first line of every report.
pub const REPORT_TITLE: &str = "SLIIT GPA Calculation Results";

/// MIME type of the report artifact.
pub const REPORT_MIME_TYPE: &str = "text/plain";

/// A rendered report together with the metadata the file-save collaborator needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportArtifact {
    /// Suggested file name.
    pub filename: String,
    /// MIME type of `body`.
    pub mime_type: &'static str,
    /// The report text.
    pub body: String,
}

/// Renders the course list and GPA as a plain-text report.
///
/// Courses are numbered from 1 in input order, empty names are shown as
/// "Unnamed Course", and the GPA is printed with exactly two decimals. The
/// text has no trailing newline.
///
/// # Examples
///
/// ```
/// use gpa_engine::models::{Course, GpaResult};
/// use gpa_engine::report::render;
/// use rust_decimal::Decimal;
///
/// let courses = vec![Course::new("", 3, "A")];
/// let result = GpaResult::new(Decimal::new(4, 0), 1);
/// assert_eq!(
///     render(&courses, &result),
///     "SLIIT GPA Calculation Results\n\nCourses:\n1. Unnamed Course - 3 credits - Grade: A\n\nFinal GPA: 4.00"
/// );
/// ```
pub fn render(courses: &[Course], result: &GpaResult) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", REPORT_TITLE);
    let _ = writeln!(output);
    let _ = writeln!(output, "Courses:");
    for (index, course) in courses.iter().enumerate() {
        let _ = writeln!(
            output,
            "{}. {} - {} credits - Grade: {}",
            index + 1,
            course.display_name(),
            course.credits,
            course.grade
        );
    }
    let _ = writeln!(output);
    let _ = write!(output, "Final GPA: {}", result.display_value());

    output
}

/// Renders the report and wraps it with its file name and MIME type.
pub fn build_artifact(
    courses: &[Course],
    result: &GpaResult,
    config: &ReportConfig,
) -> ReportArtifact {
    ReportArtifact {
        filename: config.filename.clone(),
        mime_type: REPORT_MIME_TYPE,
        body: render(courses, result),
    }
}

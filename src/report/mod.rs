//! Report generation for the GPA engine.
//!
//! Renders a course list and its computed GPA into the plain-text body of the
//! downloadable results file. Writing the file is left to the caller.

mod generator;

pub use generator::{REPORT_MIME_TYPE, REPORT_TITLE, ReportArtifact, build_artifact, render};

//! Core data models for the GPA engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod course;
mod gpa_result;
mod grade_entry;
mod performance_tier;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, GpaCalculation};
pub use course::{Course, MAX_CREDITS, MIN_CREDITS, UNNAMED_COURSE};
pub use gpa_result::{GPA_DISPLAY_PRECISION, GpaResult};
pub use grade_entry::GradeEntry;
pub use performance_tier::{PerformanceTier, Severity};

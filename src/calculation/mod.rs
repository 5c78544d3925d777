//! Calculation logic for the GPA engine.
//!
//! This module contains the grade scale lookup, the credit-weighted GPA
//! computation, performance tier classification, and the audited pipeline
//! that combines them.

mod audited;
mod grade_scale;
mod performance;
mod weighted_gpa;

pub use audited::{CREDITS_OUT_OF_RANGE_WARNING, UNKNOWN_GRADE_WARNING, calculate};
pub use grade_scale::{GRADE_TABLE, GradeScale, MAX_SCORE};
pub use performance::{PERFORMANCE_TIERS, classify, tiers};
pub use weighted_gpa::{UnknownGradePolicy, compute, compute_with_policy};

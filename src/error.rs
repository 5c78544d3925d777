//! Error types for the GPA engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a GPA.

use thiserror::Error;

/// The main error type for the GPA engine.
///
/// # Example
///
/// ```
/// use gpa_engine::error::EngineError;
///
/// let error = EngineError::UnknownGrade {
///     letter: "F".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown grade: F");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The letter does not match any entry of the grade scale.
    #[error("Unknown grade: {letter}")]
    UnknownGrade {
        /// The letter that was not found.
        letter: String,
    },

    /// A course carried a credit value outside the accepted 1 to 4 range.
    #[error("Invalid credits for course '{course}': {credits} (expected 1-4)")]
    InvalidCredits {
        /// The display name of the offending course.
        course: String,
        /// The rejected credit value.
        credits: u8,
    },

    /// A numeric score fell outside the 0 to 100 scale.
    #[error("Score out of range: {score} (expected 0-100)")]
    ScoreOutOfRange {
        /// The rejected score.
        score: u16,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Configuration types for the GPA engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::UnknownGradePolicy;

/// Default file name suggested for the downloadable report.
pub const DEFAULT_REPORT_FILENAME: &str = "gpa-results.txt";

/// Report artifact settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// File name suggested to the file-save collaborator.
    #[serde(default = "default_report_filename")]
    pub filename: String,
}

fn default_report_filename() -> String {
    DEFAULT_REPORT_FILENAME.to_string()
}

impl ReportConfig {
    /// Checks that `filename` can be quoted into a `Content-Disposition` header.
    ///
    /// The name must be non-empty printable ASCII without quotes, backslashes,
    /// or path separators.
    pub fn validate(&self) -> Result<(), String> {
        if self.filename.is_empty() {
            return Err("report.filename must not be empty".to_string());
        }
        match self
            .filename
            .chars()
            .find(|&c| !(c.is_ascii_graphic() || c == ' ') || matches!(c, '"' | '\\' | '/'))
        {
            Some(c) => Err(format!("report.filename contains unsupported character {:?}", c)),
            None => Ok(()),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            filename: default_report_filename(),
        }
    }
}

/// The complete engine configuration.
///
/// Every field has a default, so an empty YAML document is a valid configuration.
///
/// # Example
///
/// ```
/// use gpa_engine::calculation::UnknownGradePolicy;
/// use gpa_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.unknown_grade_policy, UnknownGradePolicy::Skip);
/// assert_eq!(config.report.filename, "gpa-results.txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How courses with unrecognized grades are handled.
    #[serde(default)]
    pub unknown_grade_policy: UnknownGradePolicy,
    /// Report artifact settings.
    #[serde(default)]
    pub report: ReportConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_report_section_keeps_default_filename() {
        let yaml = "unknown_grade_policy: reject\nreport: {}\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.unknown_grade_policy, UnknownGradePolicy::Reject);
        assert_eq!(config.report.filename, DEFAULT_REPORT_FILENAME);
    }

    fn report(filename: &str) -> ReportConfig {
        ReportConfig {
            filename: filename.to_string(),
        }
    }

    #[test]
    fn test_default_filename_is_valid() {
        assert!(ReportConfig::default().validate().is_ok());
        assert!(report("semester 1 results.txt").validate().is_ok());
    }

    #[test]
    fn test_filename_rejects_header_breaking_characters() {
        let filenames = ["", "a\"b.txt", "a\\b.txt", "../gpa.txt", "gpa\r\n.txt", "résultats.txt"];
        for filename in filenames {
            assert!(report(filename).validate().is_err(), "{:?}", filename);
        }
    }
}

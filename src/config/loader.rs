//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::UnknownGradePolicy;
use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// # config/gpa.yaml
/// unknown_grade_policy: skip   # or "reject"
/// report:
///   filename: gpa-results.txt
/// ```
///
/// # Example
///
/// ```no_run
/// use gpa_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gpa.yaml").unwrap();
/// println!("Report file: {}", loader.report_filename());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` when the file cannot be read and
    /// `ConfigParseError` when it is not valid configuration YAML or names a
    /// report file that cannot be sent as an attachment.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config
            .report
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            })?;

        info!(
            path = %path_str,
            policy = ?config.unknown_grade_policy,
            "Loaded GPA engine configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an in-memory configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configured unknown-grade policy.
    pub fn unknown_grade_policy(&self) -> UnknownGradePolicy {
        self.config.unknown_grade_policy
    }

    /// Returns the file name suggested for the report artifact.
    pub fn report_filename(&self) -> &str {
        &self.config.report.filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/gpa.yaml"
    }

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "gpa-engine-{}-{}.yaml",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.unknown_grade_policy(), UnknownGradePolicy::Skip);
        assert_eq!(loader.report_filename(), "gpa-results.txt");
    }

    #[test]
    fn test_load_reject_policy() {
        let path = write_temp_config("reject", "unknown_grade_policy: reject\n");
        let loader = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loader.unknown_grade_policy(), UnknownGradePolicy::Reject);
        assert_eq!(loader.report_filename(), "gpa-results.txt");
    }

    #[test]
    fn test_load_custom_report_filename() {
        let path = write_temp_config("filename", "report:\n  filename: semester-1.txt\n");
        let loader = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loader.report_filename(), "semester-1.txt");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/gpa.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("gpa.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_policy_returns_parse_error() {
        let path = write_temp_config("invalid", "unknown_grade_policy: ignore\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.ends_with(".yaml"));
                assert!(!message.is_empty());
            }
            _ => panic!("Expected ConfigParseError error"),
        }
    }

    #[test]
    fn test_load_rejects_quoted_report_filename() {
        let path = write_temp_config("quoted", "report:\n  filename: 'x\"; y=.txt'\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("report.filename"));
            }
            _ => panic!("Expected ConfigParseError error"),
        }
    }

    #[test]
    fn test_load_rejects_non_ascii_report_filename() {
        let path = write_temp_config("unicode", "report:\n  filename: notes-é.txt\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_default_loader_uses_default_config() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.config(), &EngineConfig::default());
    }
}

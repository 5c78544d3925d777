//! Configuration loading and management for the GPA engine.
//!
//! This module provides functionality to load the engine configuration from a
//! YAML file: the unknown-grade policy and the report artifact settings.
//!
//! # Example
//!
//! ```no_run
//! use gpa_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/gpa.yaml").unwrap();
//! println!("Policy: {:?}", config.unknown_grade_policy());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_REPORT_FILENAME, EngineConfig, ReportConfig};

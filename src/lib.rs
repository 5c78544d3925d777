//! GPA Calculation Engine for the SLIIT grading scale
//!
//! This crate computes a credit-weighted grade-point average from a list of
//! courses, classifies it into a performance tier, and renders the
//! plain-text results report.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

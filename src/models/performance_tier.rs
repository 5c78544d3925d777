//! Performance tier model.
//!
//! A [`PerformanceTier`] is the qualitative bucket a computed GPA falls into.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Severity of a performance tier, from best to worst.
///
/// # Example
///
/// ```
/// use gpa_engine::models::Severity;
///
/// let severity = Severity::Top;
/// assert_eq!(format!("{:?}", severity), "Top");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Outstanding achievement.
    Top,
    /// Above-average performance.
    Good,
    /// Passing but with room to improve.
    Fair,
    /// Below passing.
    Low,
}

/// A qualitative classification bucket for a GPA value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceTier {
    /// Lowest GPA (inclusive) that falls into this tier.
    pub min_gpa: Decimal,
    /// Human-readable tier label.
    pub label: &'static str,
    /// Tier severity.
    pub severity: Severity,
}

impl PerformanceTier {
    /// Returns true if `gpa` meets this tier's threshold.
    pub fn admits(&self, gpa: Decimal) -> bool {
        gpa >= self.min_gpa
    }
}

//! GPA result model.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places a GPA is displayed with.
pub const GPA_DISPLAY_PRECISION: u32 = 2;

/// The outcome of a weighted GPA computation.
///
/// Created fresh by every computation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpaResult {
    /// The credit-weighted average, in `0.0..=4.0`.
    pub value: Decimal,
    /// Number of courses supplied, including any that were excluded.
    pub course_count: usize,
    /// Sum of `points * credits` over the included courses.
    #[serde(default)]
    pub total_points: Decimal,
    /// Sum of credits over the included courses.
    #[serde(default)]
    pub total_credits: u32,
}

impl GpaResult {
    /// Creates a result carrying only a value and course count.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpa_engine::models::GpaResult;
    /// use rust_decimal::Decimal;
    ///
    /// let result = GpaResult::new(Decimal::new(4, 0), 1);
    /// assert_eq!(result.display_value(), "4.00");
    /// ```
    pub fn new(value: Decimal, course_count: usize) -> Self {
        Self {
            value,
            course_count,
            total_points: Decimal::ZERO,
            total_credits: 0,
        }
    }

    /// Returns the GPA rounded half away from zero to two decimal places.
    pub fn rounded(&self) -> Decimal {
        self.value.round_dp_with_strategy(
            GPA_DISPLAY_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Returns the GPA formatted with exactly two decimal places (e.g. "3.70").
    pub fn display_value(&self) -> String {
        let mut value = self.rounded();
        value.rescale(GPA_DISPLAY_PRECISION);
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_display_value_pads_to_two_places() {
        assert_eq!(GpaResult::new(dec("3.7"), 1).display_value(), "3.70");
        assert_eq!(GpaResult::new(dec("4"), 1).display_value(), "4.00");
        assert_eq!(GpaResult::new(Decimal::ZERO, 0).display_value(), "0.00");
    }

    #[test]
    fn test_display_value_rounds_long_fractions() {
        // 10 / 3
        let value = Decimal::from(10) / Decimal::from(3);
        assert_eq!(GpaResult::new(value, 3).display_value(), "3.33");
    }

    #[test]
    fn test_rounded_midpoint_goes_up() {
        assert_eq!(GpaResult::new(dec("3.345"), 2).rounded(), dec("3.35"));
        assert_eq!(GpaResult::new(dec("2.125"), 2).rounded(), dec("2.13"));
    }

    #[test]
    fn test_gpa_result_deserialization_defaults_totals() {
        let json = r#"{ "value": "3.60", "course_count": 2 }"#;
        let result: GpaResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.value, dec("3.60"));
        assert_eq!(result.course_count, 2);
        assert_eq!(result.total_credits, 0);
    }
}

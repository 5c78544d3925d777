//! Performance tier classification.
//!
//! Maps a GPA value onto one of four fixed performance tiers.

use rust_decimal::Decimal;

use crate::models::{PerformanceTier, Severity};

/// The performance tiers, most selective first.
pub static PERFORMANCE_TIERS: [PerformanceTier; 4] = [
    PerformanceTier {
        min_gpa: Decimal::from_parts(37, 0, 0, false, 1),
        label: "Dean's List — Outstanding Achievement",
        severity: Severity::Top,
    },
    PerformanceTier {
        min_gpa: Decimal::from_parts(30, 0, 0, false, 1),
        label: "Excellent Performance",
        severity: Severity::Good,
    },
    PerformanceTier {
        min_gpa: Decimal::from_parts(20, 0, 0, false, 1),
        label: "Good effort — keep improving",
        severity: Severity::Fair,
    },
    PerformanceTier {
        min_gpa: Decimal::ZERO,
        label: "Below passing — seek academic support",
        severity: Severity::Low,
    },
];

/// Returns the performance tiers, most selective first.
pub fn tiers() -> &'static [PerformanceTier] {
    &PERFORMANCE_TIERS
}

/// Classifies a GPA into its performance tier.
///
/// Tiers are checked top-down and the first whose threshold the GPA meets
/// wins. Values above 4.0 land in the top tier and negative values in the
/// lowest, so the mapping is total.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::classify;
/// use gpa_engine::models::Severity;
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify(Decimal::new(40, 1)).severity, Severity::Top);
/// assert_eq!(classify(Decimal::new(369, 2)).severity, Severity::Good);
/// assert_eq!(classify(Decimal::ZERO).severity, Severity::Low);
/// ```
pub fn classify(gpa: Decimal) -> PerformanceTier {
    PERFORMANCE_TIERS
        .iter()
        .find(|tier| tier.admits(gpa))
        .copied()
        .unwrap_or(PERFORMANCE_TIERS[PERFORMANCE_TIERS.len() - 1])
}

//! Property tests for the GPA engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use gpa_engine::calculation::{GRADE_TABLE, GradeScale, classify, compute};
use gpa_engine::models::Course;
use gpa_engine::report::render;

fn valid_course() -> impl Strategy<Value = Course> {
    ("[A-Za-z ]{0,12}", 1u8..=4, 0usize..GRADE_TABLE.len())
        .prop_map(|(name, credits, idx)| Course::new(name, credits, GRADE_TABLE[idx].letter))
}

fn any_course() -> impl Strategy<Value = Course> {
    prop_oneof![
        3 => valid_course(),
        1 => ("[A-Za-z]{0,8}", 1u8..=4, "[F-Z]{1,2}")
            .prop_map(|(name, credits, grade)| Course::new(name, credits, grade)),
    ]
}

proptest! {
    #[test]
    fn gpa_equals_weighted_mean(courses in prop::collection::vec(valid_course(), 1..20)) {
        let mut points = Decimal::ZERO;
        let mut credits = Decimal::ZERO;
        for course in &courses {
            let entry = GradeScale::lookup(&course.grade).unwrap();
            points += entry.points * Decimal::from(course.credits);
            credits += Decimal::from(course.credits);
        }

        let result = compute(&courses);
        prop_assert_eq!(result.value, points / credits);
        prop_assert_eq!(result.course_count, courses.len());
    }

    #[test]
    fn gpa_stays_within_scale(courses in prop::collection::vec(any_course(), 0..20)) {
        let result = compute(&courses);
        prop_assert!(result.value >= Decimal::ZERO);
        prop_assert!(result.value <= Decimal::new(4, 0));
        prop_assert_eq!(result.course_count, courses.len());
    }

    #[test]
    fn unknown_grades_do_not_change_the_average(
        courses in prop::collection::vec(valid_course(), 0..10),
        junk in prop::collection::vec(("[F-Z]{1,2}", 1u8..=4), 0..5),
    ) {
        let baseline = compute(&courses);
        let mut mixed = courses.clone();
        for (grade, credits) in &junk {
            mixed.push(Course::new("", *credits, grade.as_str()));
        }

        let result = compute(&mixed);
        prop_assert_eq!(result.value, baseline.value);
        prop_assert_eq!(result.total_credits, baseline.total_credits);
        prop_assert_eq!(result.course_count, courses.len() + junk.len());
    }

    #[test]
    fn classification_is_monotonic(a in 0i64..=400, b in 0i64..=400) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_tier = classify(Decimal::new(low, 2));
        let high_tier = classify(Decimal::new(high, 2));
        prop_assert!(high_tier.severity <= low_tier.severity);
    }

    #[test]
    fn report_has_one_line_per_course(courses in prop::collection::vec(any_course(), 0..15)) {
        let report = render(&courses, &compute(&courses));
        prop_assert_eq!(report.lines().count(), courses.len() + 5);
        let expected_footer = format!("Final GPA: {}", compute(&courses).display_value());
        prop_assert!(report.ends_with(&expected_footer));
    }
}

//! Assertion utilities for testing.
//!
//! Helpers for comparing the floating-point values the API returns.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a JSON statistics object holds the expected min/max/avg.
pub fn assert_stats(json: &serde_json::Value, min: f64, max: f64, avg: f64) {
    let field = |name: &str| {
        json[name]
            .as_f64()
            .unwrap_or_else(|| panic!("{} is not a number in {}", name, json))
    };

    assert_approx_eq(field("min_temp"), min, None);
    assert_approx_eq(field("max_temp"), max, None);
    assert_approx_eq(field("avg_temp"), avg, None);
}

/// Assert that every statistic in a JSON statistics object is null.
pub fn assert_null_stats(json: &serde_json::Value) {
    for name in ["min_temp", "max_temp", "avg_temp"] {
        assert!(json[name].is_null(), "{} should be null in {}", name, json);
    }
}

/// Assert that a list of strings is in ascending order.
pub fn assert_sorted(values: &[&str]) {
    for pair in values.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "Values out of order: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

//! Assertion utilities for color and drag tests
//!
//! Conversions round through integer channels, so most comparisons here
//! accept a small tolerance instead of demanding exact equality.

use chromakit_ui_graphics::Color;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that every channel of `actual` is within `tolerance` of `expected`.
pub fn assert_color_close(actual: Color, expected: Color, tolerance: u8, msg: &str) {
    let channels = [
        ("r", actual.r(), expected.r()),
        ("g", actual.g(), expected.g()),
        ("b", actual.b(), expected.b()),
    ];
    for (name, a, e) in channels {
        assert!(
            a.abs_diff(e) <= tolerance,
            "{}: expected {} (±{} per channel), got {} ({} off by {})",
            msg,
            expected,
            tolerance,
            actual,
            name,
            a.abs_diff(e)
        );
    }
}

/// Assert that `actual` holds exactly the colors written in `expected`, in order.
pub fn assert_same_colors(actual: &[Color], expected: &[&str], msg: &str) {
    let actual_hex: Vec<String> = actual.iter().map(Color::to_hex).collect();
    let expected_hex: Vec<String> = expected
        .iter()
        .map(|hex| match Color::from_hex(hex) {
            Ok(color) => color.to_hex(),
            Err(err) => panic!("{}: bad expected color {:?}: {}", msg, hex, err),
        })
        .collect();
    assert_eq!(actual_hex, expected_hex, "{}", msg);
}

//! Assertion helpers for gesture tests.

use pinscroll_foundation::ScrollContainer;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
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

/// Assert that every offset lies within the container's scroll range.
pub fn assert_offsets_in_bounds(
    container: &(impl ScrollContainer + ?Sized),
    offsets: &[f32],
    msg: &str,
) {
    let max = container.max_scroll_left().max(0.0);
    for (index, offset) in offsets.iter().enumerate() {
        assert!(
            (0.0..=max).contains(offset),
            "{}: write #{} = {} outside [0, {}]",
            msg,
            index,
            offset,
            max
        );
    }
}

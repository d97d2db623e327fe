//! Utility helpers for tests.
//!
//! [`physics::Rig`] bundles a [`kinetic::ManualHost`], a graphic and its draw
//! strategy so tests can step frames without repeating the wiring.
pub mod physics;

use glam::Vec2;

/// Assert that `actual` lies within `tolerance` of `expected`.
///
/// # Panics
/// Panics with both vectors in the message when they are too far apart.
pub fn assert_vec2_near(actual: Vec2, expected: Vec2, tolerance: f32) {
    let gap = actual.distance(expected);
    assert!(
        gap <= tolerance,
        "expected {expected:?} within {tolerance}, got {actual:?} (off by {gap})"
    );
}

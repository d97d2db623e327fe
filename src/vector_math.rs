//! Basic vector math helper functions.
//! Small helpers for calculating magnitudes, normalised vectors and linear
//! remapping of scalars.
use glam::Vec2;

/// Returns the magnitude of a 2D vector.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use kinetic::vector_math::vec_mag;
/// let magnitude = vec_mag(Vec2::new(3.0, 4.0));
/// assert!((magnitude - 5.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn vec_mag(vector: Vec2) -> f32 {
    vector.length()
}

/// Returns the unit vector pointing the same way as `vector`.
///
/// Non-finite input and the zero vector both yield [`Vec2::ZERO`], so the
/// result is always safe to scale.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use kinetic::vec_normalize;
/// let unit = vec_normalize(Vec2::new(3.0, 4.0));
/// assert!((unit.x - 0.6).abs() < 1e-6);
/// assert!((unit.y - 0.8).abs() < 1e-6);
///
/// assert_eq!(vec_normalize(Vec2::ZERO), Vec2::ZERO);
/// ```
#[must_use]
pub fn vec_normalize(vector: Vec2) -> Vec2 {
    if !vector.is_finite() {
        return Vec2::ZERO;
    }

    vector.try_normalize().unwrap_or(Vec2::ZERO)
}

/// Maps `value` from the domain `[domain_low, domain_high]` onto the range
/// `[range_low, range_high]`.
///
/// The mapping is not clamped: values outside the domain extrapolate along
/// the same line. A degenerate domain (`domain_low == domain_high`) has no
/// slope and yields `range_low`.
///
/// # Examples
///
/// ```
/// use kinetic::linear_map;
/// // Ramp from 1000 down to 10 as distance falls from 120 to 0.
/// assert!((linear_map(120.0, 120.0, 0.0, 1000.0, 10.0) - 1000.0).abs() < 1e-3);
/// assert!((linear_map(0.0, 120.0, 0.0, 1000.0, 10.0) - 10.0).abs() < 1e-3);
/// assert!((linear_map(60.0, 120.0, 0.0, 1000.0, 10.0) - 505.0).abs() < 1e-3);
/// ```
#[must_use]
pub fn linear_map(
    value: f32,
    domain_low: f32,
    domain_high: f32,
    range_low: f32,
    range_high: f32,
) -> f32 {
    let span = domain_high - domain_low;
    if span.abs() < f32::EPSILON {
        return range_low;
    }
    range_low + (value - domain_low) * (range_high - range_low) / span
}

use nalgebra::{UnitQuaternion, Vector3};

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Clamp to [0, 1], mapping NaN to 0
#[inline]
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Clamp to [-1, 1], mapping NaN to 0
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Sanitize a timestep: negative or non-finite values become zero.
#[inline]
pub fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// Rotate `vector` about `axis` by `angle` radians. Returns `vector` unchanged
/// when the axis has zero length.
pub fn rotate_about(vector: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    match nalgebra::Unit::try_new(*axis, f64::EPSILON) {
        Some(unit_axis) => UnitQuaternion::from_axis_angle(&unit_axis, angle) * vector,
        None => *vector,
    }
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

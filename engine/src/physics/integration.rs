//! Frame-stepped integration
//!
//! The course advances once per rendered frame with no delta time. Vertical
//! motion is a semi-implicit Euler step: velocity is updated first, then the
//! new velocity moves the position.

use std::f64::consts::TAU;

use glam::Vec3;

/// One Euler step of vertical motion under constant gravity.
///
/// Returns `(new_y, new_velocity)`.
///
/// # Arguments
/// * `y` - Current height
/// * `velocity` - Current vertical velocity (positive = up)
/// * `gravity` - Downward acceleration per frame (positive number)
#[inline]
pub fn euler_step(y: f32, velocity: f32, gravity: f32) -> (f32, f32) {
    let velocity = velocity - gravity;
    (y + velocity, velocity)
}

/// Advance an unbounded rotation angle by `speed` radians.
///
/// The angle is never wrapped. It accumulates in f64 so the per-frame
/// increment stays exact over long sessions; narrow it with [`wrap_angle`].
#[inline]
pub fn advance_angle(angle: f64, speed: f32) -> f64 {
    angle + f64::from(speed)
}

/// Reduce an accumulated angle to `[0, 2pi)` as f32.
#[inline]
pub fn wrap_angle(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}

/// Lateral carry applied by a spinner at rotation `angle`.
///
/// `strength * (sin(angle), 0, cos(angle))`: an ad-hoc push that cycles
/// direction as the spinner turns.
#[inline]
pub fn spinner_push(angle: f64, strength: f32) -> Vec3 {
    let (sin, cos) = wrap_angle(angle).sin_cos();
    Vec3::new(strength * sin, 0.0, strength * cos)
}

// Math utilities and helper functions

use glam::Vec2;
use rand::{Rng, RngCore};
use rapier2d::prelude::{vector, Real, Vector};

/// Unit direction from `from` toward `to`.
///
/// When the two points coincide the result is not finite (NaN components).
/// Callers that care must check `is_finite()` themselves.
pub fn direction_towards(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize()
}

/// Rotation angle (radians, counter-clockwise) that turns the local +Y axis onto `direction`
pub fn facing_angle(direction: Vec2) -> f32 {
    (-direction.x).atan2(direction.y)
}

/// Local +Y axis after rotating by `angle`
pub fn forward_from_angle(angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(-sin, cos)
}

/// Uniform point inside the unit disk (rejection sampled from the enclosing square)
pub fn random_inside_unit_circle<R: RngCore + ?Sized>(rng: &mut R) -> Vec2 {
    loop {
        let candidate = Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
        if candidate.length_squared() <= 1.0 {
            return candidate;
        }
    }
}

/// Uniform sample from the closed range `[min, max]`
pub fn random_in_range<R: RngCore + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min == max {
        return min;
    }
    rng.random_range(min..=max)
}

/// glam -> rapier vector
pub fn to_physics(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

/// rapier -> glam vector
pub fn from_physics(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

//! 2D vector helpers on top of `glam::Vec2`
//!
//! `Vec2` already provides add, subtract, scale, dot, length and
//! normalize. `Vec2::normalize` is meaningless for a zero vector, so
//! callers here branch on zero length before normalizing.

use glam::Vec2;

/// Closest point to `p` on the segment `a`-`b`, with its clamped parameter
///
/// Returns `None` for a zero-length segment (no direction to project on).
#[inline]
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Option<(Vec2, f32)> {
    let edge = b - a;
    let len_sq = edge.length_squared();
    if len_sq == 0.0 {
        return None;
    }
    let t = ((p - a).dot(edge) / len_sq).clamp(0.0, 1.0);
    Some((a + edge * t, t))
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n, with `normal` of unit length.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Linear velocity of a point rigidly rotating about `center`
#[inline]
pub fn rotating_point_velocity(point: Vec2, center: Vec2, angular_speed: f32) -> Vec2 {
    (point - center).perp() * angular_speed
}

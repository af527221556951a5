//! Collision detection and response against hexagon walls
//!
//! The tricky part: a circle against a finite, moving wall segment. Each
//! wall is tested via the closest point on the segment, the ball is pushed
//! back out along the contact normal, and its velocity is mirrored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::vector::{closest_point_on_segment, reflect, rotating_point_velocity};

/// Normal used when the ball center sits exactly on the wall (straight down)
pub const FALLBACK_NORMAL: Vec2 = Vec2::Y;

/// How the wall's own motion enters the bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallMotion {
    /// Treat the wall as stationary at the instant of contact
    #[default]
    Stationary,
    /// Reflect in the frame of the rotating wall point
    Rotating,
}

/// Result of a ball-vs-edge overlap test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeContact {
    /// Index of the edge (0 = vertex pair 0-1)
    pub edge: usize,
    /// Closest point on the edge to the ball center
    pub point: Vec2,
    /// Unit normal pointing from the wall toward the ball center
    pub normal: Vec2,
    /// Ball center to closest point distance
    pub distance: f32,
    /// How far the ball intrudes past the wall (radius - distance)
    pub penetration: f32,
}

/// Check a ball against one wall segment
///
/// Touching exactly (`distance == radius`) is not a hit. Zero-length edges
/// never collide.
pub fn ball_edge_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    edge: usize,
    start: Vec2,
    end: Vec2,
) -> Option<EdgeContact> {
    let (closest, _) = closest_point_on_segment(ball_pos, start, end)?;
    let offset = ball_pos - closest;
    let distance = offset.length();

    if distance >= ball_radius {
        return None;
    }

    let normal = if distance == 0.0 {
        FALLBACK_NORMAL
    } else {
        offset.normalize()
    };

    Some(EdgeContact {
        edge,
        point: closest,
        normal,
        distance,
        penetration: ball_radius - distance,
    })
}

/// Push the ball out of the wall and bounce it
///
/// With the center exactly on the wall there is no direction to push along,
/// so only the velocity is reflected (about the fallback normal).
pub fn resolve_contact(ball: &mut Ball, contact: &EdgeContact, wall_velocity: Vec2) {
    if contact.distance != 0.0 {
        ball.position += contact.normal * contact.penetration;
    }

    let relative = ball.velocity - wall_velocity;
    ball.velocity = reflect(relative, contact.normal) + wall_velocity;
}

/// Velocity of the wall at the contact point under the given mode
pub fn wall_velocity_at(
    mode: WallMotion,
    point: Vec2,
    rotation_center: Vec2,
    angular_speed: f32,
) -> Vec2 {
    match mode {
        WallMotion::Stationary => Vec2::ZERO,
        WallMotion::Rotating => rotating_point_velocity(point, rotation_center, angular_speed),
    }
}

//! The bouncing ball

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ensure_finite_vec, ensure_radius};
use crate::renderer::{Color, Surface};

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BallFields")]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Unchecked serialized form, validated through `Ball::new`
#[derive(Deserialize)]
struct BallFields {
    position: Vec2,
    velocity: Vec2,
    radius: f32,
    color: Color,
}

impl TryFrom<BallFields> for Ball {
    type Error = Error;

    fn try_from(f: BallFields) -> Result<Self> {
        Ball::new(f.position, f.velocity, f.radius, f.color)
    }
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Color) -> Result<Self> {
        ensure_finite_vec("ball position", position)?;
        ensure_finite_vec("ball velocity", velocity)?;
        ensure_radius("ball", radius)?;
        Ok(Self {
            position,
            velocity,
            radius,
            color,
        })
    }

    /// Accelerate downward (+y) by `gravity` over `dt`
    #[inline]
    pub fn apply_gravity(&mut self, gravity: f32, dt: f32) {
        self.velocity.y += gravity * dt;
    }

    /// Explicit Euler position update
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Pixel position used for drawing (truncated toward zero)
    pub fn pixel_position(&self) -> IVec2 {
        self.position.as_ivec2()
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pixel_position(), self.radius, self.color);
    }
}

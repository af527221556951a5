//! Rotating hexagon enclosure
//!
//! Vertices and edges are derived from (center, circumradius, rotation) on
//! every call and never cached, so they can't go stale after `advance`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HEXAGON_LINE_WIDTH, HEXAGON_SIDES};
use crate::error::{Error, Result, ensure_finite, ensure_finite_vec, ensure_radius};
use crate::renderer::{Color, Surface};
use crate::{polar_to_cartesian, wrap_angle};

/// Angular step between consecutive vertices (degrees)
const VERTEX_STEP_DEG: f32 = 360.0 / HEXAGON_SIDES as f32;

/// A wall segment (start, end)
pub type Edge = (Vec2, Vec2);

/// A regular hexagon spinning about its center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HexagonFields")]
pub struct Hexagon {
    pub center: Vec2,
    pub circumradius: f32,
    /// Current rotation (radians, kept in [0, 2π))
    rotation: f32,
    /// Signed angular speed (radians/sec)
    pub angular_speed: f32,
    pub color: Color,
}

/// Unchecked serialized form, validated through `Hexagon::new`
#[derive(Deserialize)]
struct HexagonFields {
    center: Vec2,
    circumradius: f32,
    rotation: f32,
    angular_speed: f32,
    color: Color,
}

impl TryFrom<HexagonFields> for Hexagon {
    type Error = Error;

    fn try_from(f: HexagonFields) -> Result<Self> {
        Hexagon::new(f.center, f.circumradius, f.angular_speed, f.color)?
            .with_rotation(f.rotation)
    }
}

impl Hexagon {
    pub fn new(center: Vec2, circumradius: f32, angular_speed: f32, color: Color) -> Result<Self> {
        ensure_finite_vec("hexagon center", center)?;
        ensure_radius("hexagon", circumradius)?;
        ensure_finite("hexagon angular speed", angular_speed)?;
        Ok(Self {
            center,
            circumradius,
            rotation: 0.0,
            angular_speed,
            color,
        })
    }

    /// Start from a given rotation instead of 0
    pub fn with_rotation(mut self, rotation: f32) -> Result<Self> {
        ensure_finite("hexagon rotation", rotation)?;
        self.rotation = wrap_angle(rotation);
        Ok(self)
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Current corner positions, vertex `i` at 60°·i plus the rotation
    pub fn vertices(&self) -> [Vec2; HEXAGON_SIDES] {
        let rotation_deg = self.rotation.to_degrees();
        std::array::from_fn(|i| {
            let theta = (VERTEX_STEP_DEG * i as f32 + rotation_deg).to_radians();
            polar_to_cartesian(self.center, self.circumradius, theta)
        })
    }

    /// Wall segments in order 0-1, 1-2, ..., 5-0
    pub fn edges(&self) -> [Edge; HEXAGON_SIDES] {
        let v = self.vertices();
        std::array::from_fn(|i| (v[i], v[(i + 1) % HEXAGON_SIDES]))
    }

    /// Spin by `angular_speed * dt`, re-wrapping every call
    pub fn advance(&mut self, dt: f32) {
        self.rotation = wrap_angle(self.rotation + self.angular_speed * dt);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.stroke_polygon(&self.vertices(), self.color, HEXAGON_LINE_WIDTH);
    }
}

//! Simulation settings
//!
//! Loaded from a JSON file; every field falls back to its default, so a
//! config only needs to name what it changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::renderer::{Color, colors};
use crate::sim::{Ball, Hexagon, PhysicsEngine, Simulation, WallMotion};

/// Window/frame settings for the outer loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f32,
    pub height: f32,
    /// Target frame rate
    pub fps: u32,
    /// Frame dt is clamped to this before stepping
    pub max_frame_dt: f32,
    pub background: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            fps: TARGET_FPS,
            max_frame_dt: MAX_FRAME_DT,
            background: colors::BACKGROUND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    /// Start position; `None` means horizontal center, one quarter down
    pub position: Option<Vec2>,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            position: None,
            velocity: Vec2::new(BALL_START_VEL_X, BALL_START_VEL_Y),
            radius: BALL_RADIUS,
            color: colors::BALL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexagonSettings {
    /// Center; `None` means canvas center
    pub center: Option<Vec2>,
    pub circumradius: f32,
    /// Radians/sec, sign picks the direction
    pub angular_speed: f32,
    /// Initial rotation (radians)
    pub rotation: f32,
    pub color: Color,
}

impl Default for HexagonSettings {
    fn default() -> Self {
        Self {
            center: None,
            circumradius: HEXAGON_CIRCUMRADIUS,
            angular_speed: HEXAGON_ANGULAR_SPEED,
            rotation: 0.0,
            color: colors::HEXAGON,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub wall_motion: WallMotion,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            wall_motion: WallMotion::Stationary,
        }
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub canvas: CanvasSettings,
    pub ball: BallSettings,
    pub hexagon: HexagonSettings,
    pub physics: PhysicsSettings,
}

impl SimConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Ball start position after applying the canvas-relative default
    pub fn ball_position(&self) -> Vec2 {
        self.ball.position.unwrap_or_else(|| {
            Vec2::new(
                (self.canvas.width / 2.0).floor(),
                (self.canvas.height / 4.0).floor(),
            )
        })
    }

    /// Hexagon center after applying the canvas-relative default
    pub fn hexagon_center(&self) -> Vec2 {
        self.hexagon.center.unwrap_or_else(|| {
            Vec2::new(
                (self.canvas.width / 2.0).floor(),
                (self.canvas.height / 2.0).floor(),
            )
        })
    }

    /// Validate and build the simulation
    pub fn build(&self) -> Result<Simulation> {
        let ball = Ball::new(
            self.ball_position(),
            self.ball.velocity,
            self.ball.radius,
            self.ball.color,
        )?;
        let hexagon = Hexagon::new(
            self.hexagon_center(),
            self.hexagon.circumradius,
            self.hexagon.angular_speed,
            self.hexagon.color,
        )?
        .with_rotation(self.hexagon.rotation)?;
        let engine =
            PhysicsEngine::new(self.physics.gravity)?.with_wall_motion(self.physics.wall_motion);

        Simulation::new(ball, hexagon, engine)
            .with_background(self.canvas.background)
            .with_max_frame_dt(self.canvas.max_frame_dt)
    }
}

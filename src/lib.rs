//! Hexbounce - a ball bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Physics core (ball, hexagon, collision, engine, frame loop)
//! - `renderer`: Draw-call boundary and CPU tessellation
//! - `settings`: JSON-backed simulation configuration

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::SimConfig;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Target frame rate of the outer loop
    pub const TARGET_FPS: u32 = 60;
    /// Largest dt handed to the engine in one frame (hitch protection)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_START_VEL_X: f32 = 50.0;
    pub const BALL_START_VEL_Y: f32 = 0.0;

    /// Hexagon defaults
    pub const HEXAGON_CIRCUMRADIUS: f32 = 150.0;
    pub const HEXAGON_ANGULAR_SPEED: f32 = 0.5; // rad/s
    pub const HEXAGON_SIDES: usize = 6;
    /// Outline width used when drawing the hexagon
    pub const HEXAGON_LINE_WIDTH: f32 = 2.0;

    /// Gravity (pixels/s², +y is down). Exaggerated so the bounce reads well.
    pub const GRAVITY: f32 = 500.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y) around `center`
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

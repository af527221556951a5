//! Frame loop: owns the scene and steps it once per frame
//!
//! The quit signal comes from the [`FrameSource`] and is only checked
//! between frames, never in the middle of a step.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::engine::{PhysicsEngine, StepReport};
use super::hexagon::Hexagon;
use crate::consts::MAX_FRAME_DT;
use crate::error::{Error, Result};
use crate::renderer::{Color, Surface, colors};

/// Supplies per-frame elapsed time; `None` means quit
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<f32>;
}

/// A fixed number of frames at a constant dt (headless, deterministic)
#[derive(Debug, Clone)]
pub struct FixedFrames {
    dt: f32,
    remaining: u64,
}

impl FixedFrames {
    pub fn new(dt: f32, frames: u64) -> Self {
        Self {
            dt,
            remaining: frames,
        }
    }

    pub fn from_fps(fps: u32, frames: u64) -> Self {
        Self::new(1.0 / fps.max(1) as f32, frames)
    }
}

impl FrameSource for FixedFrames {
    fn next_frame(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.dt)
    }
}

/// Wall-clock frame pacing, sleeping to hold the target frame rate
#[derive(Debug, Clone)]
pub struct RealtimeClock {
    frame_time: Duration,
    last: Instant,
    deadline: Option<Instant>,
}

impl RealtimeClock {
    pub fn new(fps: u32, run_for: Option<Duration>) -> Self {
        let now = Instant::now();
        Self {
            frame_time: Duration::from_secs(1) / fps.max(1),
            last: now,
            deadline: run_for.map(|d| now + d),
        }
    }
}

impl FrameSource for RealtimeClock {
    fn next_frame(&mut self) -> Option<f32> {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame_time {
            std::thread::sleep(self.frame_time - elapsed);
        }
        let now = Instant::now();
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            return None;
        }
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        Some(dt)
    }
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: u64,
    pub collisions: u64,
    pub simulated_seconds: f32,
    pub ball: Ball,
    pub hexagon: Hexagon,
}

/// The scene: one ball, one hexagon, and the engine stepping them
#[derive(Debug, Clone)]
pub struct Simulation {
    pub ball: Ball,
    pub hexagon: Hexagon,
    pub engine: PhysicsEngine,
    pub background: Color,
    max_frame_dt: f32,
    frames: u64,
    collisions: u64,
    simulated_seconds: f32,
}

impl Simulation {
    pub fn new(ball: Ball, hexagon: Hexagon, engine: PhysicsEngine) -> Self {
        Self {
            ball,
            hexagon,
            engine,
            background: colors::BACKGROUND,
            max_frame_dt: MAX_FRAME_DT,
            frames: 0,
            collisions: 0,
            simulated_seconds: 0.0,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Cap on the dt of a single frame; must be positive and finite
    pub fn with_max_frame_dt(mut self, max_frame_dt: f32) -> Result<Self> {
        if !(max_frame_dt.is_finite() && max_frame_dt > 0.0) {
            return Err(Error::InvalidTimestep(max_frame_dt));
        }
        self.max_frame_dt = max_frame_dt;
        Ok(self)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Step the physics once for a frame of length `dt`
    pub fn update(&mut self, dt: f32) -> Result<StepReport> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::InvalidTimestep(dt));
        }
        let dt = if dt > self.max_frame_dt {
            log::warn!("Frame dt {:.3}s clamped to {:.3}s", dt, self.max_frame_dt);
            self.max_frame_dt
        } else {
            dt
        };

        let report = self.engine.step(&mut self.ball, &mut self.hexagon, dt)?;
        self.frames += 1;
        self.collisions += report.contacts.len() as u64;
        self.simulated_seconds += dt;
        Ok(report)
    }

    /// Draw the current frame: background, hexagon, then ball
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.background);
        self.hexagon.render(surface);
        self.ball.render(surface);
    }

    /// Run frames until the source signals quit
    pub fn run<F, S>(&mut self, frames: &mut F, surface: &mut S) -> Result<RunSummary>
    where
        F: FrameSource + ?Sized,
        S: Surface + ?Sized,
    {
        log::info!("Simulation starting");
        while let Some(dt) = frames.next_frame() {
            self.update(dt)?;
            self.render(surface);
        }
        log::info!(
            "Simulation finished after {} frames ({} collisions)",
            self.frames,
            self.collisions
        );
        Ok(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            collisions: self.collisions,
            simulated_seconds: self.simulated_seconds,
            ball: self.ball.clone(),
            hexagon: self.hexagon.clone(),
        }
    }
}

//! Physics core
//!
//! Everything that moves lives here. The engine is a pure per-step function
//! over a borrowed ball and hexagon:
//! - Gravity, then integration, then rotation, then collisions
//! - Edges always tested in the fixed order 0-1, 1-2, ..., 5-0
//! - No rendering or platform dependencies beyond the `Surface` trait

pub mod ball;
pub mod collision;
pub mod engine;
pub mod hexagon;
pub mod runner;
pub mod vector;

pub use ball::Ball;
pub use collision::{EdgeContact, WallMotion, ball_edge_collision, resolve_contact};
pub use engine::{PhysicsEngine, StepReport};
pub use hexagon::{Edge, Hexagon};
pub use runner::{FixedFrames, FrameSource, RealtimeClock, RunSummary, Simulation};

//! One physics step: gravity, integration, rotation, then wall collisions

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{
    EdgeContact, WallMotion, ball_edge_collision, resolve_contact, wall_velocity_at,
};
use super::hexagon::Hexagon;
use crate::error::{Error, Result, ensure_finite};

/// Contacts resolved during one step, in edge order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub contacts: Vec<EdgeContact>,
}

impl StepReport {
    pub fn collided(&self) -> bool {
        !self.contacts.is_empty()
    }
}

/// Stateless stepper holding only its configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EngineFields")]
pub struct PhysicsEngine {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    pub wall_motion: WallMotion,
}

#[derive(Deserialize)]
struct EngineFields {
    gravity: f32,
    #[serde(default)]
    wall_motion: WallMotion,
}

impl TryFrom<EngineFields> for PhysicsEngine {
    type Error = Error;

    fn try_from(f: EngineFields) -> Result<Self> {
        Ok(PhysicsEngine::new(f.gravity)?.with_wall_motion(f.wall_motion))
    }
}

impl PhysicsEngine {
    pub fn new(gravity: f32) -> Result<Self> {
        ensure_finite("gravity", gravity)?;
        Ok(Self {
            gravity,
            wall_motion: WallMotion::Stationary,
        })
    }

    pub fn with_wall_motion(mut self, wall_motion: WallMotion) -> Self {
        self.wall_motion = wall_motion;
        self
    }

    /// Advance ball and hexagon by `dt`, then resolve wall contacts
    ///
    /// Velocity picks up gravity before it moves the ball (semi-implicit
    /// Euler). Edges are tested 0-1, 1-2, ..., 5-0 against the post-rotation
    /// geometry, each contact resolved before the next edge is tested, so a
    /// ball wedged in a corner can bounce off both walls in one step.
    pub fn step(&self, ball: &mut Ball, hexagon: &mut Hexagon, dt: f32) -> Result<StepReport> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::InvalidTimestep(dt));
        }

        ball.apply_gravity(self.gravity, dt);
        ball.integrate(dt);
        hexagon.advance(dt);

        let mut report = StepReport::default();
        for (i, (start, end)) in hexagon.edges().into_iter().enumerate() {
            let Some(contact) = ball_edge_collision(ball.position, ball.radius, i, start, end)
            else {
                continue;
            };

            let wall_velocity = wall_velocity_at(
                self.wall_motion,
                contact.point,
                hexagon.center,
                hexagon.angular_speed,
            );
            resolve_contact(ball, &contact, wall_velocity);

            log::debug!(
                "edge {} hit: penetration {:.3}, velocity now ({:.1}, {:.1})",
                i,
                contact.penetration,
                ball.velocity.x,
                ball.velocity.y
            );
            report.contacts.push(contact);
        }

        log::trace!(
            "step dt={:.4}: ball ({:.2}, {:.2}) rotation {:.4}",
            dt,
            ball.position.x,
            ball.position.y,
            hexagon.rotation()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;
    use crate::sim::vector::closest_point_on_segment;
    use glam::Vec2;

    fn ball(pos: Vec2, vel: Vec2, radius: f32) -> Ball {
        Ball::new(pos, vel, radius, colors::BALL).unwrap()
    }

    fn hexagon(radius: f32, speed: f32) -> Hexagon {
        Hexagon::new(Vec2::new(400.0, 300.0), radius, speed, colors::HEXAGON).unwrap()
    }

    fn distance_to_edge(ball: &Ball, hexagon: &Hexagon, edge: usize) -> f32 {
        let (start, end) = hexagon.edges()[edge];
        let (closest, _) = closest_point_on_segment(ball.position, start, end).unwrap();
        (ball.position - closest).length()
    }

    #[test]
    fn test_gravity_accumulates() {
        let engine = PhysicsEngine::new(500.0).unwrap();
        let mut b = ball(Vec2::new(400.0, 300.0), Vec2::new(0.0, -20.0), 15.0);
        let mut h = hexagon(1.0e5, 0.0);
        let dt = 0.01;
        let steps = 50;
        for _ in 0..steps {
            let report = engine.step(&mut b, &mut h, dt).unwrap();
            assert!(!report.collided());
        }
        let expected = -20.0 + 500.0 * dt * steps as f32;
        assert!((b.velocity.y - expected).abs() < 1e-2);
        assert_eq!(b.velocity.x, 0.0);
    }

    #[test]
    fn test_semi_implicit_order() {
        // Position moves with the velocity already updated by gravity
        let engine = PhysicsEngine::new(100.0).unwrap();
        let mut b = ball(Vec2::new(400.0, 300.0), Vec2::ZERO, 5.0);
        let mut h = hexagon(1.0e5, 0.0);
        engine.step(&mut b, &mut h, 0.5).unwrap();
        assert!((b.velocity.y - 50.0).abs() < 1e-4);
        assert!((b.position.y - 325.0).abs() < 1e-3);
    }

    #[test]
    fn test_step_advances_rotation() {
        let engine = PhysicsEngine::new(0.0).unwrap();
        let mut b = ball(Vec2::new(400.0, 300.0), Vec2::ZERO, 5.0);
        let mut h = hexagon(150.0, 0.5);
        engine.step(&mut b, &mut h, 0.2).unwrap();
        assert!((h.rotation() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_ball_falls_onto_top_edge() {
        let engine = PhysicsEngine::new(500.0).unwrap();
        let mut b = ball(Vec2::new(400.0, 150.0), Vec2::ZERO, 15.0);
        let mut h = hexagon(150.0, 0.0);
        let top_edge_y = h.edges()[4].0.y;

        let mut hit_step = None;
        for step in 0..20 {
            let vy_before = b.velocity.y;
            let report = engine.step(&mut b, &mut h, 0.1).unwrap();
            if report.collided() {
                assert_eq!(report.contacts.len(), 1);
                assert_eq!(report.contacts[0].edge, 4);
                // Bounced upward in the very step the overlap appeared
                assert!(vy_before > 0.0);
                assert!(b.velocity.y < 0.0);
                assert!((distance_to_edge(&b, &h, 4) - 15.0).abs() < 1e-3);
                hit_step = Some(step);
                break;
            }
            assert!(b.velocity.y > 0.0);
            assert!(b.position.y <= top_edge_y - 15.0 + 1e-3);
        }
        // y=155 after the first step, y=165 (overlapping) after the second
        assert_eq!(hit_step, Some(1));
        assert!((b.velocity.y - (-100.0)).abs() < 1e-3);
    }

    #[test]
    fn test_single_hit_removes_penetration() {
        let engine = PhysicsEngine::new(0.0).unwrap();
        let h_template = hexagon(150.0, 0.0);
        // Edge 0-1 runs from (550, 300) to (475, 430); aim at its midpoint
        let (a, c) = h_template.edges()[0];
        let mid = (a + c) * 0.5;
        let inward = (h_template.center - mid).normalize();
        let mut b = ball(mid + inward * 10.0, -inward * 120.0, 15.0);
        let mut h = h_template.clone();
        let speed_before = b.velocity.length();

        let report = engine.step(&mut b, &mut h, 0.01).unwrap();
        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.contacts[0].edge, 0);
        assert!((distance_to_edge(&b, &h, 0) - 15.0).abs() < 1e-3);
        assert!((b.velocity.length() - speed_before).abs() < 1e-3);
        // Now heading back toward the center
        assert!(b.velocity.dot(inward) > 0.0);
    }

    #[test]
    fn test_corner_reflects_off_both_edges() {
        let engine = PhysicsEngine::new(0.0).unwrap();
        let mut h = hexagon(150.0, 0.0);
        // Just inside vertex 0, overlapping edges 5-0 and 0-1
        let corner = h.vertices()[0];
        let mut b = ball(corner - Vec2::new(12.0, 0.0), Vec2::new(80.0, 0.0), 15.0);

        let report = engine.step(&mut b, &mut h, 0.0).unwrap();
        let edges: Vec<usize> = report.contacts.iter().map(|c| c.edge).collect();
        assert_eq!(edges, vec![0, 5]);
        assert!((b.velocity.length() - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotating_wall_mode_changes_bounce() {
        let h_template = hexagon(150.0, 2.0);
        let (a, c) = h_template.edges()[0];
        let mid = (a + c) * 0.5;
        let inward = (h_template.center - mid).normalize();
        // Off the midpoint, where the spinning wall moves along its normal
        let quarter = a + (c - a) * 0.25;
        let start = ball(quarter + inward * 10.0, -inward * 50.0, 15.0);

        let stationary = PhysicsEngine::new(0.0).unwrap();
        let rotating = stationary.with_wall_motion(WallMotion::Rotating);

        let (mut b1, mut h1) = (start.clone(), h_template.clone());
        let (mut b2, mut h2) = (start.clone(), h_template.clone());
        stationary.step(&mut b1, &mut h1, 0.0).unwrap();
        rotating.step(&mut b2, &mut h2, 0.0).unwrap();

        assert!((b1.velocity.length() - 50.0).abs() < 1e-3);
        assert!((b2.velocity - b1.velocity).length() > 1.0);
        // Positional correction doesn't depend on the mode
        assert!((b1.position - b2.position).length() < 1e-4);
    }

    #[test]
    fn test_rejects_bad_timestep() {
        let engine = PhysicsEngine::new(500.0).unwrap();
        let mut b = ball(Vec2::new(400.0, 300.0), Vec2::ZERO, 15.0);
        let mut h = hexagon(150.0, 0.5);
        let before = (b.clone(), h.clone());
        assert!(matches!(
            engine.step(&mut b, &mut h, -0.1),
            Err(Error::InvalidTimestep(_))
        ));
        assert!(engine.step(&mut b, &mut h, f32::NAN).is_err());
        assert_eq!((b, h), before);
        assert!(PhysicsEngine::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let engine: PhysicsEngine = serde_json::from_str(r#"{"gravity":9.81}"#).unwrap();
        assert_eq!(engine.wall_motion, WallMotion::Stationary);
        assert!(serde_json::from_str::<PhysicsEngine>(r#"{"gravity":1e40}"#).is_err());
    }

    // Property-based tests (proptest)
    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::f32::consts::TAU;

        proptest! {
            #[test]
            fn speed_preserved_without_gravity(
                r in 0.0f32..130.0,
                theta in 0.0f32..TAU,
                vx in -400.0f32..400.0,
                vy in -400.0f32..400.0,
                dt in 0.0f32..0.05,
            ) {
                let engine = PhysicsEngine::new(0.0).unwrap();
                let mut h = hexagon(150.0, 0.0);
                let pos = h.center + Vec2::new(theta.cos(), theta.sin()) * r;
                let mut b = ball(pos, Vec2::new(vx, vy), 15.0);
                let before = b.velocity.length();
                engine.step(&mut b, &mut h, dt).unwrap();
                prop_assert!((b.velocity.length() - before).abs() <= 1e-3 * before.max(1.0));
            }

            #[test]
            fn rotation_stays_in_range(
                speed in -20.0f32..20.0,
                dts in proptest::collection::vec(0.0f32..0.1, 1..100),
            ) {
                let engine = PhysicsEngine::new(500.0).unwrap();
                let mut h = hexagon(150.0, speed);
                let mut b = ball(h.center, Vec2::ZERO, 15.0);
                for dt in dts {
                    engine.step(&mut b, &mut h, dt).unwrap();
                    prop_assert!(h.rotation() >= 0.0 && h.rotation() < TAU);
                    for v in h.vertices() {
                        prop_assert!(((v - h.center).length() - 150.0).abs() < 1e-2);
                    }
                }
            }
        }
    }
}

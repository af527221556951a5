//! Draw-call interface consumed by `Ball` and `Hexagon`

use glam::{IVec2, Vec2};

/// RGBA color, each channel in 0-1
pub type Color = [f32; 4];

/// Something the simulation can draw onto
pub trait Surface {
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Color);

    /// Filled circle at a pixel position
    fn fill_circle(&mut self, center: IVec2, radius: f32, color: Color);

    /// Closed polygon outline (last point joins the first)
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle {
        center: IVec2,
        radius: f32,
        color: Color,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
    },
}

/// Surface that just remembers what was drawn (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: IVec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
            width,
        });
    }
}

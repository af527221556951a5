//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::surface::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    use super::Color;

    pub const BALL: Color = [1.0, 0.0, 0.0, 1.0]; // Red
    pub const HEXAGON: Color = [0.0, 0.0, 1.0, 1.0]; // Blue
    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
}

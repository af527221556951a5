//! Shape generation for 2D primitives

use glam::{IVec2, Vec2};
use std::f32::consts::TAU;

use super::surface::{Color, Surface};
use super::vertex::Vertex;
use crate::polar_to_cartesian;

/// Triangle fan resolution for filled circles
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Triangle fan for a disc centered on a pixel
pub fn pixel_disc(center: IVec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let hub = center.as_vec2();
    let step = TAU / segments as f32;
    let rim: Vec<Vec2> = (0..=segments)
        .map(|i| polar_to_cartesian(hub, radius, step * i as f32))
        .collect();

    rim.windows(2)
        .flat_map(|pair| [hub, pair[0], pair[1]])
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Generate vertices for a closed polygon outline of the given stroke width
///
/// Each side becomes a quad centered on the side; zero-length sides are
/// skipped.
pub fn polygon_outline(points: &[Vec2], color: Color, width: f32) -> Vec<Vertex> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let half = width * 0.5;
    let mut vertices = Vec::with_capacity(n * 6);

    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];

        let dir = (p2 - p1).normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }
        // Perpendicular for width
        let perp = dir.perp() * half;

        let a = p1 + perp;
        let b = p1 - perp;
        let c = p2 + perp;
        let d = p2 - perp;

        // Two triangles
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
        vertices.push(Vertex::new(c.x, c.y, color));

        vertices.push(Vertex::new(c.x, c.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
        vertices.push(Vertex::new(d.x, d.y, color));
    }

    vertices
}

/// CPU surface collecting a triangle list per frame
#[derive(Debug, Clone)]
pub struct VertexSurface {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
}

impl Default for VertexSurface {
    fn default() -> Self {
        Self {
            clear_color: super::colors::BACKGROUND,
            vertices: Vec::new(),
        }
    }
}

impl VertexSurface {
    /// Raw vertex bytes, ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Surface for VertexSurface {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_circle(&mut self, center: IVec2, radius: f32, color: Color) {
        self.vertices.extend(pixel_disc(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.vertices.extend(polygon_outline(points, color, width));
    }
}

//! Rendering boundary
//!
//! The physics core only ever talks to a [`Surface`]. `VertexSurface`
//! tessellates draw calls into triangle lists for a GPU backend to upload.

pub mod shapes;
pub mod surface;
pub mod vertex;

pub use shapes::VertexSurface;
pub use surface::{Color, Surface};
pub use vertex::{Vertex, colors};

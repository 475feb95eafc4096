//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte distance between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex slice as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND_ROCK: [f32; 4] = [0.4, 0.4, 0.4, 0.4];
    pub const SHIP_HULL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SHIP_DETAIL: [f32; 4] = [0.0, 0.47, 1.0, 1.0];
    pub const FLAME_OUTER: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const FLAME_INNER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ROCKET_BODY: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ROCKET_NOSE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ROCKET_EXHAUST: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const ASTEROID_FILL: [f32; 4] = [0.59, 0.59, 0.59, 1.0];
    pub const ASTEROID_EDGE: [f32; 4] = [0.39, 0.39, 0.39, 1.0];
    pub const ASTEROID_CRATER: [f32; 4] = [0.47, 0.47, 0.47, 1.0];
    pub const EXPLOSION_CORE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const EXPLOSION_SPARK: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

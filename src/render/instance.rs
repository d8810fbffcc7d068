//! GPU instance data for rectangles

use bytemuck::{Pod, Zeroable};

use crate::sim::Rect;

/// One textured or flat-colored quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    /// Top-left corner in screen units
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    /// Rotation in radians around the quad center
    pub rotation: f32,
}

impl RectInstance {
    pub fn from_rect(rect: &Rect, color: [f32; 4], rotation: f32) -> Self {
        Self {
            pos: rect.pos.to_array(),
            size: rect.size.to_array(),
            color,
            rotation,
        }
    }

    /// Raw bytes for a vertex/instance buffer upload
    pub fn as_bytes(instances: &[RectInstance]) -> &[u8] {
        bytemuck::cast_slice(instances)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BIRD: [f32; 4] = [1.0, 0.85, 0.25, 1.0];
    pub const PIPE: [f32; 4] = [0.36, 0.75, 0.18, 1.0];
    pub const PIPE_CAP: [f32; 4] = [0.25, 0.6, 0.12, 1.0];
}

//! Sprite instance records handed to the presentation layer

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::assets::TextureHandle;
use crate::sim::geometry::Rect;

/// One textured quad, laid out for direct upload as an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Destination rect on the board `[x, y, w, h]`
    pub dest: [f32; 4],
    /// Source rect inside the texture `[x, y, w, h]`
    pub source: [f32; 4],
    /// Rotation around the destination center (radians)
    pub rotation: f32,
    /// 0.0 = front, 1.0 = back
    pub depth: f32,
    pub alpha: f32,
    pub texture: u32,
}

impl SpriteInstance {
    pub fn new(texture: TextureHandle, dest: Rect, source: Rect, depth: f32) -> Self {
        Self {
            dest: dest.to_xywh(),
            source: source.to_xywh(),
            rotation: 0.0,
            depth,
            alpha: 1.0,
            texture: texture.0,
        }
    }

    /// Square sprite centred on `center`
    pub fn centered(
        texture: TextureHandle,
        center: Vec2,
        size: Vec2,
        source: Rect,
        depth: f32,
    ) -> Self {
        Self::new(texture, Rect::from_center_size(center, size), source, depth)
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn dest_rect(&self) -> Rect {
        Rect::from_xywh(self.dest)
    }
}

/// Draw depths per layer (back-to-front sorting)
pub mod depth {
    pub const BALL: f32 = 0.1;
    pub const PADDLE: f32 = 0.1;
    pub const WEAK_POINT: f32 = 0.2;
    pub const TRAIL: f32 = 0.3;
    pub const FRAME: f32 = 0.5;
    pub const OBSTACLE: f32 = 0.7;
    pub const HOLE: f32 = 0.8;
}

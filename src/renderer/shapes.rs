//! Composite sprite shapes

use glam::Vec2;

use super::instance::{SpriteInstance, depth};
use crate::assets::TextureHandle;
use crate::sim::geometry::Rect;

/// Shadow scale per trail slot, most recent position first
pub const TRAIL_SCALES: [f32; 4] = [0.8, 0.6, 0.4, 0.2];

/// Shrinking, fading shadow sprites behind the ball
///
/// `trail` is oldest-first; the newest entry gets the largest shadow and
/// anything older than the scale table is not drawn.
pub fn ball_trail(
    trail: impl DoubleEndedIterator<Item = Vec2>,
    ball_size: Vec2,
    texture: TextureHandle,
    shadow: Rect,
) -> Vec<SpriteInstance> {
    trail
        .rev()
        .zip(TRAIL_SCALES)
        .map(|(pos, scale)| {
            SpriteInstance::centered(texture, pos, ball_size * scale, shadow, depth::TRAIL)
                .with_alpha(scale)
        })
        .collect()
}

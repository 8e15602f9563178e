//! Top and bottom boundary frame

use glam::Vec2;

use super::ball::Ball;
use super::entity::{Body, Entity, EntityKind};
use super::geometry::Rect;
use super::input::FrameStep;
use super::state::MatchContext;
use crate::assets::{AssetProvider, SoundHandle, TextureHandle};
use crate::consts::FRAME_OFFSET;
use crate::error::AssetError;
use crate::renderer::{DrawList, SpriteInstance, depth};

#[derive(Debug, Clone)]
pub struct BoundaryFrame {
    pub body: Body,
    /// Upper bounce line
    top: f32,
    /// Lower bounce line
    bottom: f32,

    texture: TextureHandle,
    hit_sound: SoundHandle,
}

impl BoundaryFrame {
    pub fn new(ctx: &mut MatchContext, assets: &dyn AssetProvider) -> Result<Self, AssetError> {
        let board = ctx.board();
        let body = Body::new(
            ctx.next_entity_id(),
            EntityKind::Frame,
            board.center(),
            board.size(),
        );
        Ok(Self {
            body,
            top: board.top() + FRAME_OFFSET,
            bottom: board.bottom() - FRAME_OFFSET,
            texture: assets.texture("Frame")?,
            hit_sound: assets.sound("HitSound")?,
        })
    }

    /// The band the ball is kept inside
    pub fn lines(&self) -> (f32, f32) {
        (self.top, self.bottom)
    }
}

impl Entity for BoundaryFrame {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, _step: &FrameStep<'_>, _ctx: &mut MatchContext) {}

    fn is_colliding(&self, ball: &Ball) -> bool {
        let bounds = ball.body.bounds();
        bounds.top() < self.top || bounds.bottom() > self.bottom
    }

    fn handle_collision(&mut self, ball: &mut Ball, ctx: &mut MatchContext) {
        let half = ball.size().y / 2.0;
        let bounds = ball.body.bounds();
        let dir = ball.direction();

        if bounds.top() < self.top {
            ball.body.position.y = self.top + half;
            ball.set_direction(Vec2::new(dir.x, dir.y.abs()));
        } else if bounds.bottom() > self.bottom {
            ball.body.position.y = self.bottom - half;
            ball.set_direction(Vec2::new(dir.x, -dir.y.abs()));
        }
        ctx.audio.play(self.hit_sound);
    }

    fn draw(&self, out: &mut DrawList) {
        let board = self.body.bounds();
        // Full-screen overlay; the source is the whole frame texture
        let source = Rect::new(0.0, 0.0, board.size().x, board.size().y);
        out.push(SpriteInstance::new(self.texture, board, source, depth::FRAME));
    }
}

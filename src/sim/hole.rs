//! Black holes
//!
//! Each hole drifts toward a random interior target. A hole that pulls the
//! ball in posts a transfer request; another hole claims it on its own update
//! and spits the ball out in a fresh direction.

use glam::Vec2;

use super::ball::{Ball, serve_direction};
use super::entity::{Body, Entity, EntityKind};
use super::geometry::Rect;
use super::input::FrameStep;
use super::state::MatchContext;
use super::transfer::BallTransfer;
use crate::assets::{AssetProvider, SoundHandle, TextureHandle};
use crate::consts::*;
use crate::error::AssetError;
use crate::renderer::{DrawList, SpriteInstance, depth};

#[derive(Debug, Clone)]
pub struct BlackHole {
    pub body: Body,
    target: Vec2,
    move_area: Rect,
    move_timer: f32,
    /// Seconds left before this hole may pull again
    cooldown: f32,

    texture: TextureHandle,
    sprite: Rect,
    pull_sound: SoundHandle,
}

impl BlackHole {
    pub fn new(ctx: &mut MatchContext, assets: &dyn AssetProvider) -> Result<Self, AssetError> {
        let move_area = ctx.board().inset(HOLE_MOVE_MARGIN);
        let position = move_area.random_point(&mut ctx.rng);
        let target = move_area.random_point(&mut ctx.rng);
        let mut body = Body::new(
            ctx.next_entity_id(),
            EntityKind::Hole,
            position,
            Vec2::splat(HOLE_SIZE),
        );
        body.set_direction(target - position);

        Ok(Self {
            body,
            target,
            move_area,
            move_timer: 0.0,
            cooldown: 0.0,
            texture: assets.texture("SpriteSheet")?,
            sprite: assets.sprite_region("BlackHole")?,
            pull_sound: assets.sound("BlackHoleSound")?,
        })
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown > 0.0
    }

    fn wander(&mut self, dt: f32, ctx: &mut MatchContext) {
        self.move_timer += dt;
        if self.move_timer <= HOLE_STEP_INTERVAL {
            return;
        }
        self.move_timer = 0.0;
        self.body.position += self.body.direction * HOLE_STEP;

        if self.body.position.distance(self.target) < HOLE_ARRIVE_TOLERANCE {
            self.target = self.move_area.random_point(&mut ctx.rng);
        }
        self.body.set_direction(self.target - self.body.position);
    }

    /// Take over a ball another hole swallowed
    fn receive(&mut self, ctx: &mut MatchContext) {
        let Some(request) = ctx.transfers.claim(self.body.id) else {
            return;
        };
        let exit_position = self.body.position + self.body.direction * HOLE_EJECT_OFFSET;
        let exit_direction = serve_direction(&mut ctx.rng);
        ctx.transfers.complete(BallTransfer {
            sender: request.sender,
            receiver: self.body.id,
            exit_position,
            exit_direction,
        });
        self.cooldown = HOLE_PORT_COOLDOWN;
        log::debug!(
            "Hole {} -> hole {}: ball out at ({:.0}, {:.0})",
            request.sender.0,
            self.body.id.0,
            exit_position.x,
            exit_position.y
        );
    }
}

impl Entity for BlackHole {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, step: &FrameStep<'_>, ctx: &mut MatchContext) {
        self.wander(step.dt, ctx);
        self.cooldown = (self.cooldown - step.dt).max(0.0);
        self.receive(ctx);
    }

    fn is_colliding(&self, ball: &Ball) -> bool {
        if self.is_cooling_down() {
            return false;
        }
        let offset = ball.position() - self.body.position;
        if offset.length() >= HOLE_PULL_RADIUS {
            return false;
        }
        // A ball already heading away is left alone
        offset.normalize_or_zero().dot(ball.direction()) <= 0.0
    }

    fn handle_collision(&mut self, ball: &mut Ball, ctx: &mut MatchContext) {
        if ctx.transfers.request(self.body.id, ball.position()) {
            ctx.audio.play(self.pull_sound);
        }
    }

    fn draw(&self, out: &mut DrawList) {
        out.push(SpriteInstance::centered(
            self.texture,
            self.body.position,
            self.body.size,
            self.sprite,
            depth::HOLE,
        ));
    }
}

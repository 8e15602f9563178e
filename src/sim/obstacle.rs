//! Rotating asteroid obstacle
//!
//! Lifecycle: wait a random delay at a random spot, pop in at the spawn
//! diameter, grow and spin until the maximum, then start over somewhere else.
//! The same instance is recycled for the whole match.

use glam::Vec2;
use rand::Rng;

use super::ball::Ball;
use super::entity::{Body, Entity, EntityKind};
use super::geometry::{Rect, reflect};
use super::input::FrameStep;
use super::state::MatchContext;
use crate::assets::{AssetProvider, SoundHandle, TextureHandle};
use crate::consts::*;
use crate::error::AssetError;
use crate::renderer::{DrawList, SpriteInstance, depth};

/// Hit circle is this fraction of the drawn diameter
const HIT_SCALE: f32 = 0.8;
/// Hit circle center is shifted up-left by this fraction of the diameter
const HIT_OFFSET: f32 = 0.1;
/// Extra clearance when pushing the ball out
const SEPARATION_SLACK: f32 = 2.0;
/// Bound on separation steps; a unit step crosses the largest circle well within this
const MAX_SEPARATION_STEPS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstaclePhase {
    /// Invisible, counting down to the next spawn
    Waiting { delay: f32 },
    /// Visible and solid
    Growing,
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub body: Body,
    phase: ObstaclePhase,
    diameter: f32,
    rotation: f32,
    timer: f32,
    spawn_area: Rect,

    texture: TextureHandle,
    sprite: Rect,
    hit_sound: SoundHandle,
}

impl Obstacle {
    pub fn new(ctx: &mut MatchContext, assets: &dyn AssetProvider) -> Result<Self, AssetError> {
        let spawn_area = ctx.board().inset(OBSTACLE_SPAWN_MARGIN);
        let body = Body::new(
            ctx.next_entity_id(),
            EntityKind::Obstacle,
            spawn_area.center(),
            Vec2::ZERO,
        );
        let mut obstacle = Self {
            body,
            phase: ObstaclePhase::Waiting { delay: 0.0 },
            diameter: 0.0,
            rotation: 0.0,
            timer: 0.0,
            spawn_area,
            texture: assets.texture("SpriteSheet")?,
            sprite: assets.sprite_region("Asteroid")?,
            hit_sound: assets.sound("HitSound")?,
        };
        obstacle.respawn(&mut ctx.rng);
        Ok(obstacle)
    }

    pub fn phase(&self) -> ObstaclePhase {
        self.phase
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// New spot, new delay, invisible until the delay runs out
    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.body.position = self.spawn_area.random_point(rng);
        let delay = rng.random_range(0.0..OBSTACLE_MAX_WAIT);
        self.phase = ObstaclePhase::Waiting { delay };
        self.diameter = 0.0;
        self.timer = 0.0;
        self.sync_size();
        log::debug!(
            "Asteroid {} respawns at ({:.0}, {:.0}) in {:.2}s",
            self.body.id.0,
            self.body.position.x,
            self.body.position.y,
            delay
        );
    }

    fn sync_size(&mut self) {
        debug_assert!(self.diameter >= 0.0, "negative asteroid diameter");
        self.body.size = Vec2::splat(self.diameter);
    }

    /// Center and radius of the solid part
    fn hit_circle(&self) -> (Vec2, f32) {
        let center = self.body.position - Vec2::splat(self.diameter * HIT_OFFSET);
        (center, self.diameter * HIT_SCALE / 2.0)
    }
}

impl Entity for Obstacle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, step: &FrameStep<'_>, ctx: &mut MatchContext) {
        self.timer += step.dt;
        match self.phase {
            ObstaclePhase::Waiting { delay } => {
                if self.timer > delay {
                    self.phase = ObstaclePhase::Growing;
                    self.diameter = OBSTACLE_SPAWN_DIAMETER;
                    self.timer = 0.0;
                    self.sync_size();
                }
            }
            ObstaclePhase::Growing => {
                if self.timer > OBSTACLE_GROW_INTERVAL {
                    self.timer = 0.0;
                    self.diameter += 1.0;
                    self.rotation += OBSTACLE_ROTATION_STEP;
                    self.sync_size();
                    if self.diameter >= OBSTACLE_MAX_DIAMETER {
                        self.respawn(&mut ctx.rng);
                    }
                }
            }
        }
    }

    fn is_colliding(&self, ball: &Ball) -> bool {
        if self.diameter < OBSTACLE_SPAWN_DIAMETER {
            return false;
        }
        let (center, radius) = self.hit_circle();
        center.distance(ball.position()) < radius + ball.size().x / 2.0
    }

    fn handle_collision(&mut self, ball: &mut Ball, ctx: &mut MatchContext) {
        let (center, radius) = self.hit_circle();
        let normal = (ball.position() - center)
            .try_normalize()
            .unwrap_or(-ball.direction());
        ball.set_direction(reflect(ball.direction(), normal));

        // Walk the ball out along its new heading until it clears the rock
        let clear = radius + (SEPARATION_SLACK + ball.size().x) / 2.0;
        let push = if ball.direction() == Vec2::ZERO {
            normal
        } else {
            ball.direction()
        };
        let mut steps = 0;
        while center.distance(ball.position()) < clear && steps < MAX_SEPARATION_STEPS {
            ball.body.position += push;
            steps += 1;
        }

        ball.increment_speed();
        ctx.audio.play(self.hit_sound);
    }

    fn draw(&self, out: &mut DrawList) {
        if self.diameter <= 0.0 {
            return;
        }
        out.push(
            SpriteInstance::centered(
                self.texture,
                self.body.position,
                self.body.size,
                self.sprite,
                depth::OBSTACLE,
            )
            .with_rotation(self.rotation),
        );
    }
}

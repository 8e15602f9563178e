//! The ball
//!
//! Moves in fixed steps on its own animation clock, keeps a short trail of
//! past positions, and scores when it leaves the board sideways.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use super::entity::{Body, Entity, EntityKind};
use super::geometry::Rect;
use super::input::FrameStep;
use super::state::MatchContext;
use crate::Player;
use crate::assets::{AssetProvider, SoundHandle, TextureHandle};
use crate::consts::*;
use crate::error::AssetError;
use crate::renderer::{DrawList, SpriteInstance, depth, shapes};

/// Random serve / eject direction
///
/// Horizontal magnitude is forced to at least half the range so the ball
/// never leaves near-vertical.
pub fn serve_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let mut x = rng.random_range(1..=100).max(50) as f32;
    let mut y = rng.random_range(1..=100) as f32;
    if rng.random_bool(0.5) {
        x = -x;
    }
    if rng.random_bool(0.5) {
        y = -y;
    }
    Vec2::new(x, y).normalize()
}

/// Smallest |x| a serve direction can have (50 / |(50, 100)|)
pub const MIN_SERVE_X: f32 = 0.447_213_6;

#[derive(Debug, Clone)]
pub struct Ball {
    pub body: Body,
    /// Distance per motion step
    speed: f32,
    base_speed: f32,
    speed_increment: f32,
    /// Oldest first, newest last
    trail: VecDeque<Vec2>,
    animation_frame: usize,
    step_timer: f32,

    texture: TextureHandle,
    frames: [Rect; BALL_ANIMATION_FRAMES],
    shadow: Rect,
    score_sound: SoundHandle,
}

impl Ball {
    /// Ball at the board center with a fresh serve direction
    pub fn new(ctx: &mut MatchContext, assets: &dyn AssetProvider) -> Result<Self, AssetError> {
        let frames = [
            assets.sprite_region("Ball1")?,
            assets.sprite_region("Ball2")?,
            assets.sprite_region("Ball3")?,
            assets.sprite_region("Ball4")?,
            assets.sprite_region("Ball5")?,
        ];
        let id = ctx.next_entity_id();
        let mut body = Body::new(
            id,
            EntityKind::Ball,
            ctx.board().center(),
            Vec2::splat(BALL_SIZE),
        );
        body.set_direction(serve_direction(&mut ctx.rng));

        Ok(Self {
            body,
            speed: ctx.settings.ball_base_speed,
            base_speed: ctx.settings.ball_base_speed,
            speed_increment: ctx.settings.ball_speed_increment,
            trail: VecDeque::with_capacity(TRAIL_LENGTH),
            animation_frame: 0,
            step_timer: 0.0,
            texture: assets.texture("SpriteSheet")?,
            frames,
            shadow: assets.sprite_region("Shadow")?,
            score_sound: assets.sound("ScoreSound")?,
        })
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.body.direction
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.body.size
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn animation_frame(&self) -> usize {
        self.animation_frame
    }

    /// Past positions, oldest first
    pub fn trail(&self) -> impl DoubleEndedIterator<Item = Vec2> + '_ {
        self.trail.iter().copied()
    }

    /// Faster after every paddle or obstacle hit
    pub fn increment_speed(&mut self) {
        self.speed += self.speed_increment;
    }

    pub fn set_direction(&mut self, direction: Vec2) {
        self.body.set_direction(direction);
    }

    /// Teleport with a new heading (black hole exit)
    pub fn relocate(&mut self, position: Vec2, direction: Vec2) {
        self.body.position = position;
        self.body.set_direction(direction);
    }

    /// Recenter, reset speed and draw a new direction
    pub fn serve<R: Rng + ?Sized>(&mut self, center: Vec2, rng: &mut R) {
        self.body.position = center;
        self.body.set_direction(serve_direction(rng));
        self.speed = self.base_speed;
        self.trail.clear();
    }

    /// Park at `center` with no direction
    pub fn freeze(&mut self, center: Vec2) {
        self.body.position = center;
        self.body.direction = Vec2::ZERO;
    }

    /// Record current position to trail
    fn record_trail(&mut self) {
        if self.trail.len() >= TRAIL_LENGTH {
            self.trail.pop_front();
        }
        self.trail.push_back(self.body.position);
    }

    fn score_exit(&mut self, scorer: Player, ctx: &mut MatchContext) {
        ctx.state.award_point(scorer);
        ctx.audio.play(self.score_sound);
        let center = ctx.board().center();
        self.serve(center, &mut ctx.rng);
    }
}

impl Entity for Ball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, step: &FrameStep<'_>, ctx: &mut MatchContext) {
        self.step_timer += step.dt;
        if self.step_timer > BALL_STEP_INTERVAL {
            self.step_timer = 0.0;
            self.animation_frame = (self.animation_frame + 1) % BALL_ANIMATION_FRAMES;
            self.record_trail();
            self.body.position += self.body.direction * self.speed;
        }

        let board = ctx.board();
        if self.body.position.x < board.left() {
            self.score_exit(Player::Two, ctx);
        } else if self.body.position.x > board.right() {
            self.score_exit(Player::One, ctx);
        }

        if ctx.state.is_over {
            self.freeze(board.center());
        }
    }

    fn is_colliding(&self, _ball: &Ball) -> bool {
        // Whatever the ball hits handles the collision
        false
    }

    fn handle_collision(&mut self, _ball: &mut Ball, _ctx: &mut MatchContext) {}

    fn draw(&self, out: &mut DrawList) {
        out.extend(shapes::ball_trail(
            self.trail(),
            self.body.size,
            self.texture,
            self.shadow,
        ));
        out.push(SpriteInstance::centered(
            self.texture,
            self.body.position,
            self.body.size,
            self.frames[self.animation_frame],
            depth::BALL,
        ));
    }
}

//! Paddles - human and computer controlled
//!
//! Both use plain box overlap against the ball. There is no swept test, so a
//! ball stepping further than paddle + ball width per motion step can pass
//! straight through.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::ball::Ball;
use super::entity::{Body, Entity, EntityKind};
use super::geometry::{Rect, reflect};
use super::input::FrameStep;
use super::state::MatchContext;
use crate::Player;
use crate::assets::{AssetProvider, SoundHandle, TextureHandle};
use crate::consts::*;
use crate::error::AssetError;
use crate::renderer::{DrawList, SpriteInstance, depth};

/// Gap left between the paddle face and a bounced ball
const CONTACT_GAP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Driven by that player's input
    Human,
    /// Tracks the ball while it is incoming
    Computer,
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub body: Body,
    side: Player,
    controller: Controller,
    /// Ball (position, direction) seen on the last collision test
    last_seen: Option<(Vec2, Vec2)>,
    min_y: f32,
    max_y: f32,

    texture: TextureHandle,
    sprite: Rect,
    hit_sound: SoundHandle,
}

impl Paddle {
    pub fn new(
        side: Player,
        controller: Controller,
        ctx: &mut MatchContext,
        assets: &dyn AssetProvider,
    ) -> Result<Self, AssetError> {
        let board = ctx.board();
        let x = match side {
            Player::One => board.left() + PADDLE_EDGE_OFFSET,
            Player::Two => board.right() - PADDLE_EDGE_OFFSET,
        };
        let body = Body::new(
            ctx.next_entity_id(),
            EntityKind::Paddle,
            Vec2::new(x, board.center().y),
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        );

        Ok(Self {
            body,
            side,
            controller,
            last_seen: None,
            min_y: PADDLE_TOP_LIMIT + PADDLE_HEIGHT / 2.0,
            max_y: board.bottom() - PADDLE_BOTTOM_MARGIN - PADDLE_HEIGHT / 2.0,
            texture: assets.texture("SpriteSheet")?,
            sprite: assets.sprite_region("Satellite")?,
            hit_sound: assets.sound("HitSound")?,
        })
    }

    pub fn side(&self) -> Player {
        self.side
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    /// The hit box
    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    /// Direction the hitting face points
    fn face_normal(&self) -> Vec2 {
        match self.side {
            Player::One => Vec2::X,
            Player::Two => Vec2::NEG_X,
        }
    }

    /// Discrete move, clamped to the margins
    fn shift(&mut self, dy: f32) {
        self.body.position.y = (self.body.position.y + dy).clamp(self.min_y, self.max_y);
    }

    fn human_move(&mut self, step: &FrameStep<'_>) {
        let input = step.input.player(self.side);
        if input.wants_up() {
            self.shift(-PADDLE_STEP);
        }
        if input.wants_down() {
            self.shift(PADDLE_STEP);
        }
    }

    fn computer_move(&mut self) {
        let Some((ball_pos, ball_dir)) = self.last_seen else {
            return;
        };
        // Only chase a ball headed this way
        let incoming = ball_dir.dot(self.face_normal()) < 0.0;
        if !incoming {
            return;
        }
        let y = self.body.position.y;
        if ball_pos.y < y - PADDLE_STEP {
            self.shift(-PADDLE_STEP);
        } else if ball_pos.y > y + PADDLE_STEP {
            self.shift(PADDLE_STEP);
        }
    }
}

impl Entity for Paddle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, step: &FrameStep<'_>, _ctx: &mut MatchContext) {
        match self.controller {
            Controller::Human => self.human_move(step),
            Controller::Computer => self.computer_move(),
        }
    }

    fn observe(&mut self, ball: &Ball) {
        self.last_seen = Some((ball.position(), ball.direction()));
    }

    fn is_colliding(&self, ball: &Ball) -> bool {
        self.bounds().intersects(&ball.body.bounds())
    }

    fn handle_collision(&mut self, ball: &mut Ball, ctx: &mut MatchContext) {
        let normal = self.face_normal();
        if ball.direction().dot(normal) < 0.0 {
            ball.set_direction(reflect(ball.direction(), Vec2::X));
        }

        let bounds = self.bounds();
        let half = ball.size().x / 2.0 + CONTACT_GAP;
        ball.body.position.x = match self.side {
            Player::One => bounds.right() + half,
            Player::Two => bounds.left() - half,
        };

        ball.increment_speed();
        ctx.audio.play(self.hit_sound);
    }

    fn draw(&self, out: &mut DrawList) {
        // The satellite art is horizontal; stand it up facing the board
        let rotation = match self.side {
            Player::One => -FRAC_PI_2,
            Player::Two => FRAC_PI_2,
        };
        out.push(
            SpriteInstance::centered(
                self.texture,
                self.body.position,
                Vec2::new(PADDLE_HEIGHT, PADDLE_WIDTH),
                self.sprite,
                depth::PADDLE,
            )
            .with_rotation(rotation),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCatalog;
    use crate::sim::input::TickInput;

    fn setup(side: Player, controller: Controller) -> (MatchContext, Paddle, Ball) {
        let mut ctx = MatchContext::seeded(3);
        let assets = AssetCatalog::builtin();
        let ball = Ball::new(&mut ctx, &assets).unwrap();
        let paddle = Paddle::new(side, controller, &mut ctx, &assets).unwrap();
        (ctx, paddle, ball)
    }

    fn step(paddle: &mut Paddle, ctx: &mut MatchContext, input: &TickInput) {
        paddle.update(&FrameStep::new(0.016, input), ctx);
    }

    #[test]
    fn test_bounce_reflects_and_separates() {
        let (mut ctx, mut paddle, mut ball) = setup(Player::One, Controller::Human);
        let face = paddle.bounds().right();
        ball.relocate(Vec2::new(face + 5.0, 240.0), Vec2::new(-0.8, 0.6));
        assert!(paddle.is_colliding(&ball));

        let speed_before = ball.speed();
        paddle.handle_collision(&mut ball, &mut ctx);

        assert!((ball.direction() - Vec2::new(0.8, 0.6)).length() < 1e-5);
        assert_eq!(ball.speed(), speed_before + BALL_SPEED_INC);
        assert!(ball.position().x - ball.size().x / 2.0 >= face);
        // No immediate re-trigger
        assert!(!paddle.is_colliding(&ball));
        assert_eq!(ctx.audio.len(), 1);
    }

    #[test]
    fn test_right_paddle_sends_ball_left() {
        let (mut ctx, mut paddle, mut ball) = setup(Player::Two, Controller::Computer);
        let face = paddle.bounds().left();
        ball.relocate(Vec2::new(face - 5.0, 240.0), Vec2::new(0.6, -0.8));
        assert!(paddle.is_colliding(&ball));

        paddle.handle_collision(&mut ball, &mut ctx);
        assert!(ball.direction().x < 0.0);
        assert!(!paddle.is_colliding(&ball));
    }

    #[test]
    fn test_miss_above_paddle() {
        let (_ctx, paddle, mut ball) = setup(Player::One, Controller::Human);
        let top = paddle.bounds().top();
        ball.relocate(Vec2::new(paddle.body.position.x, top - 13.0), Vec2::X);
        assert!(!paddle.is_colliding(&ball));
    }

    #[test]
    fn test_human_moves_and_clamps() {
        let (mut ctx, mut paddle, _ball) = setup(Player::One, Controller::Human);
        let start = paddle.body.position.y;

        let mut input = TickInput::default();
        input.player_mut(Player::One).up = true;
        step(&mut paddle, &mut ctx, &input);
        assert_eq!(paddle.body.position.y, start - PADDLE_STEP);

        for _ in 0..200 {
            step(&mut paddle, &mut ctx, &input);
        }
        assert_eq!(paddle.bounds().top(), PADDLE_TOP_LIMIT);

        let mut input = TickInput::default();
        input.player_mut(Player::One).stick_y = -1.0;
        for _ in 0..200 {
            step(&mut paddle, &mut ctx, &input);
        }
        assert_eq!(
            paddle.bounds().bottom(),
            BOARD_HEIGHT - PADDLE_BOTTOM_MARGIN
        );
    }

    #[test]
    fn test_human_ignores_other_player() {
        let (mut ctx, mut paddle, _ball) = setup(Player::One, Controller::Human);
        let start = paddle.body.position.y;
        let mut input = TickInput::default();
        input.player_mut(Player::Two).down = true;
        step(&mut paddle, &mut ctx, &input);
        assert_eq!(paddle.body.position.y, start);
    }

    #[test]
    fn test_computer_tracks_incoming_ball_only() {
        let (mut ctx, mut paddle, mut ball) = setup(Player::Two, Controller::Computer);
        let start = paddle.body.position.y;
        let input = TickInput::default();

        // Ball below, moving away: stay put
        ball.relocate(Vec2::new(400.0, 380.0), Vec2::NEG_X);
        paddle.observe(&ball);
        step(&mut paddle, &mut ctx, &input);
        assert_eq!(paddle.body.position.y, start);

        // Same ball heading right: follow it down
        ball.relocate(Vec2::new(400.0, 380.0), Vec2::X);
        paddle.observe(&ball);
        step(&mut paddle, &mut ctx, &input);
        assert_eq!(paddle.body.position.y, start + PADDLE_STEP);
    }

    #[test]
    fn test_computer_idle_before_seeing_ball() {
        let (mut ctx, mut paddle, _ball) = setup(Player::Two, Controller::Computer);
        let start = paddle.body.position.y;
        step(&mut paddle, &mut ctx, &TickInput::default());
        assert_eq!(paddle.body.position.y, start);
    }
}

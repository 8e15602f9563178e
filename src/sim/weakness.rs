//! Weak point behind each paddle
//!
//! A ball whose center lands inside the square ends the match for the owner.

use glam::Vec2;

use super::ball::Ball;
use super::entity::{Body, Entity, EntityKind};
use super::geometry::Rect;
use super::input::FrameStep;
use super::state::MatchContext;
use crate::Player;
use crate::assets::{AssetProvider, SoundHandle, TextureHandle};
use crate::consts::{WEAK_POINT_EDGE_OFFSET, WEAK_POINT_SIZE};
use crate::error::AssetError;
use crate::renderer::{DrawList, SpriteInstance, depth};

#[derive(Debug, Clone)]
pub struct WeakPoint {
    pub body: Body,
    /// Side that loses when this is hit
    owner: Player,

    texture: TextureHandle,
    sprite: Rect,
    hit_sound: SoundHandle,
}

impl WeakPoint {
    pub fn new(
        owner: Player,
        ctx: &mut MatchContext,
        assets: &dyn AssetProvider,
    ) -> Result<Self, AssetError> {
        let board = ctx.board();
        let x = match owner {
            Player::One => board.left() + WEAK_POINT_EDGE_OFFSET,
            Player::Two => board.right() - WEAK_POINT_EDGE_OFFSET,
        };
        let body = Body::new(
            ctx.next_entity_id(),
            EntityKind::Weakness,
            Vec2::new(x, board.center().y),
            Vec2::splat(WEAK_POINT_SIZE),
        );
        Ok(Self {
            body,
            owner,
            texture: assets.texture("SpriteSheet")?,
            sprite: assets.sprite_region("RedBox")?,
            hit_sound: assets.sound("ScoreSound")?,
        })
    }

    pub fn owner(&self) -> Player {
        self.owner
    }
}

impl Entity for WeakPoint {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, _step: &FrameStep<'_>, _ctx: &mut MatchContext) {}

    fn is_colliding(&self, ball: &Ball) -> bool {
        self.body.bounds().contains_strict(ball.position())
    }

    fn handle_collision(&mut self, _ball: &mut Ball, ctx: &mut MatchContext) {
        if ctx.state.is_over {
            return;
        }
        ctx.state.award_match(self.owner.opponent());
        ctx.audio.play(self.hit_sound);
    }

    fn draw(&self, out: &mut DrawList) {
        out.push(SpriteInstance::centered(
            self.texture,
            self.body.position,
            self.body.size,
            self.sprite,
            depth::WEAK_POINT,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCatalog;
    use crate::consts::{BALL_SIZE, BOARD_HEIGHT, BOARD_WIDTH, MAX_SCORE};

    fn setup(owner: Player) -> (MatchContext, WeakPoint, Ball) {
        let mut ctx = MatchContext::seeded(9);
        let assets = AssetCatalog::builtin();
        let ball = Ball::new(&mut ctx, &assets).unwrap();
        let weak = WeakPoint::new(owner, &mut ctx, &assets).unwrap();
        (ctx, weak, ball)
    }

    #[test]
    fn test_placed_at_board_edges() {
        let (_ctx, one, _) = setup(Player::One);
        let (_ctx, two, _) = setup(Player::Two);
        assert_eq!(one.body.position, Vec2::new(8.0, BOARD_HEIGHT / 2.0));
        assert_eq!(two.body.position, Vec2::new(BOARD_WIDTH - 8.0, BOARD_HEIGHT / 2.0));
    }

    #[test]
    fn test_center_hit_ends_match() {
        let (mut ctx, mut weak, mut ball) = setup(Player::One);
        ctx.state.award_point(Player::One);
        ball.relocate(weak.body.position + Vec2::new(3.0, -2.0), Vec2::NEG_X);
        assert!(weak.is_colliding(&ball));

        weak.handle_collision(&mut ball, &mut ctx);
        assert!(ctx.state.is_over);
        assert_eq!(ctx.state.score(Player::Two), MAX_SCORE);
        assert_eq!(ctx.state.winner(), Some(Player::Two));
        assert_eq!(ctx.audio.len(), 1);
    }

    #[test]
    fn test_overlap_without_center_is_ignored() {
        let (_ctx, weak, mut ball) = setup(Player::Two);
        // Ball box overlaps the square but its center sits outside
        let offset = WEAK_POINT_SIZE / 2.0 + BALL_SIZE / 4.0;
        ball.relocate(weak.body.position - Vec2::new(offset, 0.0), Vec2::X);
        assert!(ball.body.bounds().intersects(&weak.body.bounds()));
        assert!(!weak.is_colliding(&ball));
    }

    #[test]
    fn test_center_on_border_is_ignored() {
        let (_ctx, weak, mut ball) = setup(Player::One);
        ball.relocate(
            weak.body.position + Vec2::new(0.0, WEAK_POINT_SIZE / 2.0),
            Vec2::X,
        );
        assert!(!weak.is_colliding(&ball));
    }
}

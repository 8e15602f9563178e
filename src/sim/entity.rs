//! Entity capability contract
//!
//! Collision detection is driven from the obstacle side: the manager asks
//! every entity whether it touches the ball and lets that entity respond. The
//! ball never tests itself against anything.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geometry::{Rect, is_unit_or_zero};
use super::input::FrameStep;
use super::state::MatchContext;
use crate::renderer::DrawList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ball,
    Paddle,
    Frame,
    Obstacle,
    Hole,
    Weakness,
}

/// State every entity carries
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Center on the board
    pub position: Vec2,
    /// Unit length, or zero when stationary
    pub direction: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(id: EntityId, kind: EntityKind, position: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind,
            position,
            direction: Vec2::ZERO,
            size,
        }
    }

    /// Bounding box around the center
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }

    /// Assign a direction, normalizing it (zero stays zero)
    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction.normalize_or_zero();
        debug_assert!(is_unit_or_zero(self.direction));
    }
}

pub trait Entity {
    fn body(&self) -> &Body;

    fn id(&self) -> EntityId {
        self.body().id
    }

    fn kind(&self) -> EntityKind {
        self.body().kind
    }

    /// Advance timers and position
    fn update(&mut self, step: &FrameStep<'_>, ctx: &mut MatchContext);

    /// Called with the ball before every collision test, hit or not
    fn observe(&mut self, _ball: &Ball) {}

    /// Pure overlap test against the ball
    fn is_colliding(&self, ball: &Ball) -> bool;

    /// Respond to a hit reported by `is_colliding` in the same tick
    fn handle_collision(&mut self, ball: &mut Ball, ctx: &mut MatchContext);

    fn draw(&self, out: &mut DrawList);
}

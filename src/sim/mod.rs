//! Entity simulation
//!
//! All gameplay logic lives here:
//! - Frame-stepped: every timer accumulates the `dt` handed to `tick`
//! - Seeded RNG only, owned by the match context
//! - Stable iteration order (registration order)
//! - No rendering, audio or platform dependencies beyond the sinks in
//!   [`MatchContext`] and [`crate::renderer::DrawList`]

pub mod ball;
pub mod boundary;
pub mod entity;
pub mod geometry;
pub mod hole;
pub mod input;
pub mod manager;
pub mod obstacle;
pub mod paddle;
pub mod setup;
pub mod state;
pub mod transfer;
pub mod weakness;

pub use ball::{Ball, serve_direction};
pub use boundary::BoundaryFrame;
pub use entity::{Body, Entity, EntityId, EntityKind};
pub use geometry::{Rect, reflect};
pub use hole::BlackHole;
pub use input::{FrameStep, PlayerInput, TickInput};
pub use manager::SimulationManager;
pub use obstacle::{Obstacle, ObstaclePhase};
pub use paddle::{Controller, Paddle};
pub use setup::build_match;
pub use state::{MatchContext, MatchState};
pub use transfer::{BallTransfer, TransferQueue, TransferRequest};
pub use weakness::WeakPoint;

//! Per-frame simulation driver
//!
//! Each tick runs in a fixed order:
//! 1. pause edge detection (either player's start button)
//! 2. ball update (motion, side exits, scoring)
//! 3. every other entity observes the ball, tests it and responds on a hit
//! 4. every other entity updates; ball transfers completed by that update
//!    are applied before the next entity runs
//! 5. unclaimed transfer requests expire

use super::ball::Ball;
use super::entity::{Entity, EntityId, EntityKind};
use super::input::{FrameStep, TickInput};
use super::state::{MatchContext, MatchState};
use crate::assets::SoundHandle;
use crate::audio::Cue;
use crate::renderer::DrawList;

pub struct SimulationManager {
    ball: Ball,
    /// Everything but the ball, in insertion order
    entities: Vec<Box<dyn Entity>>,
    ctx: MatchContext,
    paused: bool,
    /// Start buttons as seen last tick
    prev_start: [bool; 2],
    game_over_sound: Option<SoundHandle>,
}

impl SimulationManager {
    pub fn new(ball: Ball, ctx: MatchContext) -> Self {
        Self {
            ball,
            entities: Vec::new(),
            ctx,
            paused: false,
            prev_start: [false; 2],
            game_over_sound: None,
        }
    }

    /// Cue played once when the match ends
    pub fn with_game_over_sound(mut self, sound: SoundHandle) -> Self {
        self.game_over_sound = Some(sound);
        self
    }

    /// Register an entity; it is tested and updated after those added before it
    pub fn add_entity(&mut self, entity: Box<dyn Entity>) -> EntityId {
        debug_assert!(entity.kind() != EntityKind::Ball, "the ball is owned separately");
        let id = entity.id();
        log::debug!("Registered {:?} {}", entity.kind(), id.0);
        self.entities.push(entity);
        id
    }

    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> {
        self.entities.iter().map(|e| e.as_ref())
    }

    pub fn entity(&self, id: EntityId) -> Option<&dyn Entity> {
        self.entities().find(|e| e.id() == id)
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn ctx(&self) -> &MatchContext {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut MatchContext {
        &mut self.ctx
    }

    /// Scores and game-over flag for the HUD
    pub fn match_state(&self) -> &MatchState {
        &self.ctx.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Sound cues raised since the last drain
    pub fn drain_audio(&mut self) -> Vec<Cue> {
        self.ctx.audio.drain()
    }

    /// Advance one frame of `dt` seconds
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        let start = [input.players[0].start, input.players[1].start];
        // One toggle per rising edge; two presses in the same frame cancel out
        let toggle = start
            .iter()
            .zip(self.prev_start.iter())
            .fold(false, |acc, (now, before)| acc ^ (*now && !*before));
        self.prev_start = start;

        if self.ctx.state.is_over {
            return;
        }
        if toggle {
            self.paused = !self.paused;
            log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        }
        if self.paused {
            return;
        }

        let step = FrameStep::new(dt, input);
        self.ball.update(&step, &mut self.ctx);

        if !self.ctx.state.is_over {
            self.resolve_collisions();
        }
        if !self.ctx.state.is_over {
            self.update_entities(&step);
        }
        self.ctx.transfers.expire_unclaimed();
        self.ctx.frame += 1;

        if self.ctx.state.is_over {
            self.finish();
        }
    }

    fn resolve_collisions(&mut self) {
        for entity in &mut self.entities {
            entity.observe(&self.ball);
            if entity.is_colliding(&self.ball) {
                entity.handle_collision(&mut self.ball, &mut self.ctx);
                if self.ctx.state.is_over {
                    break;
                }
            }
        }
    }

    fn update_entities(&mut self, step: &FrameStep<'_>) {
        for entity in &mut self.entities {
            entity.update(step, &mut self.ctx);
            while let Some(transfer) = self.ctx.transfers.take_completed() {
                self.ball
                    .relocate(transfer.exit_position, transfer.exit_direction);
            }
        }
    }

    fn finish(&mut self) {
        let center = self.ctx.board().center();
        self.ball.freeze(center);
        self.ctx.transfers.clear();
        if let Some(sound) = self.game_over_sound {
            self.ctx.audio.play(sound);
        }
        log::info!(
            "Match over after {} frames: {:?} wins {} - {}",
            self.ctx.frame,
            self.ctx.state.winner(),
            self.ctx.state.scores[0],
            self.ctx.state.scores[1]
        );
    }

    /// Append every entity's sprites, then sort far to near
    pub fn draw(&self, out: &mut DrawList) {
        for entity in &self.entities {
            entity.draw(out);
        }
        self.ball.draw(out);
        out.sort_back_to_front();
    }
}

//! Per-frame input snapshot
//!
//! Already abstracted from physical devices: the host folds keyboard and
//! gamepad state into these flags before each tick.

use crate::Player;

/// One player's controls for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Move-up held (W / Up arrow)
    pub up: bool,
    /// Move-down held (S / Down arrow)
    pub down: bool,
    /// Left stick Y, positive is up
    pub stick_y: f32,
    /// Pause button held
    pub start: bool,
}

impl PlayerInput {
    pub fn wants_up(&self) -> bool {
        self.up || self.stick_y > 0.0
    }

    pub fn wants_down(&self) -> bool {
        self.down || self.stick_y < 0.0
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub players: [PlayerInput; 2],
}

impl TickInput {
    pub fn player(&self, player: Player) -> &PlayerInput {
        &self.players[player.index()]
    }

    pub fn player_mut(&mut self, player: Player) -> &mut PlayerInput {
        &mut self.players[player.index()]
    }
}

/// What an entity sees of the current frame
#[derive(Debug, Clone, Copy)]
pub struct FrameStep<'a> {
    /// Elapsed wall-clock time (seconds)
    pub dt: f32,
    pub input: &'a TickInput,
}

impl<'a> FrameStep<'a> {
    pub fn new(dt: f32, input: &'a TickInput) -> Self {
        Self { dt, input }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stick_and_keys_combine() {
        let mut input = PlayerInput::default();
        assert!(!input.wants_up() && !input.wants_down());

        input.stick_y = 0.4;
        assert!(input.wants_up());

        input.stick_y = 0.0;
        input.down = true;
        assert!(input.wants_down());
    }

    #[test]
    fn test_player_lookup() {
        let mut input = TickInput::default();
        input.player_mut(Player::Two).start = true;
        assert!(input.player(Player::Two).start);
        assert!(!input.player(Player::One).start);
    }
}

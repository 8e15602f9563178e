//! Match state and the shared context injected into every entity

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::geometry::Rect;
use super::transfer::TransferQueue;
use crate::Player;
use crate::audio::AudioQueue;
use crate::settings::MatchSettings;

/// Scores and game-over status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Indexed by [`Player::index`]
    pub scores: [u32; 2],
    pub max_score: u32,
    pub is_over: bool,
}

impl MatchState {
    pub fn new(max_score: u32) -> Self {
        debug_assert!(max_score > 0, "max score must be positive");
        Self {
            scores: [0, 0],
            max_score,
            is_over: false,
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Add one point. Returns true if this point won the match.
    pub fn award_point(&mut self, player: Player) -> bool {
        let score = &mut self.scores[player.index()];
        *score = (*score + 1).min(self.max_score);
        log::info!(
            "Point to {:?}: {} - {}",
            player,
            self.scores[0],
            self.scores[1]
        );
        self.check_over()
    }

    /// Hand the whole match to `player`
    pub fn award_match(&mut self, player: Player) {
        self.scores[player.index()] = self.max_score;
        log::info!("{:?} wins outright", player);
        self.check_over();
    }

    fn check_over(&mut self) -> bool {
        if !self.is_over && self.scores.iter().any(|&s| s >= self.max_score) {
            self.is_over = true;
            return true;
        }
        false
    }

    pub fn winner(&self) -> Option<Player> {
        if !self.is_over {
            return None;
        }
        [Player::One, Player::Two]
            .into_iter()
            .find(|p| self.score(*p) >= self.max_score)
    }
}

/// Everything entities share without holding references to each other
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub settings: MatchSettings,
    pub state: MatchState,
    pub rng: Pcg32,
    pub transfers: TransferQueue,
    pub audio: AudioQueue,
    /// Frames simulated (paused frames excluded)
    pub frame: u64,
    next_id: u32,
}

impl MatchContext {
    pub fn new(settings: MatchSettings, rng: Pcg32) -> Self {
        let rng = match settings.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => rng,
        };
        Self {
            state: MatchState::new(settings.max_score),
            settings,
            rng,
            transfers: TransferQueue::new(),
            audio: AudioQueue::new(),
            frame: 0,
            next_id: 1,
        }
    }

    /// Context with default settings and a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(MatchSettings::default(), Pcg32::seed_from_u64(seed))
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        EntityId(id)
    }

    /// The whole board
    pub fn board(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.settings.board_width,
            self.settings.board_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_point_until_over() {
        let mut state = MatchState::new(3);
        assert!(!state.award_point(Player::Two));
        assert!(!state.award_point(Player::Two));
        assert!(state.award_point(Player::Two));
        assert!(state.is_over);
        assert_eq!(state.winner(), Some(Player::Two));
        // Further points do not re-trigger the end or overflow the cap
        assert!(!state.award_point(Player::Two));
        assert_eq!(state.score(Player::Two), 3);
    }

    #[test]
    fn test_award_match() {
        let mut state = MatchState::new(3);
        state.award_point(Player::One);
        state.award_match(Player::Two);
        assert!(state.is_over);
        assert_eq!(state.score(Player::Two), 3);
        assert_eq!(state.score(Player::One), 1);
        assert_eq!(state.winner(), Some(Player::Two));
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut ctx = MatchContext::seeded(1);
        let a = ctx.next_entity_id();
        let b = ctx.next_entity_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_settings_seed_overrides_provider_rng() {
        use rand::Rng;
        let settings = MatchSettings {
            seed: Some(99),
            ..MatchSettings::default()
        };
        let mut a = MatchContext::new(settings.clone(), Pcg32::seed_from_u64(1));
        let mut b = MatchContext::new(settings, Pcg32::seed_from_u64(2));
        assert_eq!(a.rng.random::<u64>(), b.rng.random::<u64>());
    }
}

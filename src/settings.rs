//! Match settings
//!
//! Defaults mirror the compile-time constants in [`crate::consts`]; a JSON
//! document can override any subset of them.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Who controls the right-hand paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchMode {
    /// Player one against the computer
    #[default]
    SinglePlayer,
    /// Two human players
    Multiplayer,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::SinglePlayer => "Singleplayer",
            MatchMode::Multiplayer => "Multiplayer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "singleplayer" | "single" | "1p" => Some(MatchMode::SinglePlayer),
            "multiplayer" | "multi" | "2p" => Some(MatchMode::Multiplayer),
            _ => None,
        }
    }

    /// Whether player two is driven by the tracking AI
    pub fn computer_opponent(&self) -> bool {
        *self == MatchMode::SinglePlayer
    }
}

/// Tunable match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub mode: MatchMode,

    // === Board ===
    pub board_width: f32,
    pub board_height: f32,

    // === Rules ===
    /// Score that ends the match
    pub max_score: u32,

    // === Ball ===
    pub ball_base_speed: f32,
    pub ball_speed_increment: f32,

    // === Hazards ===
    pub obstacle_count: usize,
    pub hole_count: usize,

    /// Overrides the asset provider's random seed when set
    pub seed: Option<u64>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            mode: MatchMode::SinglePlayer,

            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,

            max_score: MAX_SCORE,

            ball_base_speed: BALL_BASE_SPEED,
            ball_speed_increment: BALL_SPEED_INC,

            obstacle_count: OBSTACLE_COUNT,
            hole_count: HOLE_COUNT,

            seed: None,
        }
    }
}

impl MatchSettings {
    /// Default settings for the given mode
    pub fn from_mode(mode: MatchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Parse a JSON override document and validate the result
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded match settings: {} to {}",
            settings.mode.as_str(),
            settings.max_score
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_score == 0 {
            return Err(invalid("max_score", "must be at least 1"));
        }
        if !(self.ball_base_speed > 0.0) {
            return Err(invalid("ball_base_speed", "must be positive"));
        }
        if self.ball_speed_increment < 0.0 {
            return Err(invalid(
                "ball_speed_increment",
                "must not be negative (speed never decreases within a rally)",
            ));
        }
        let min_width = 2.0 * OBSTACLE_SPAWN_MARGIN.max(HOLE_MOVE_MARGIN) + 1.0;
        if self.board_width < min_width {
            return Err(invalid(
                "board_width",
                format!("must be at least {min_width}"),
            ));
        }
        let min_height = (2.0 * OBSTACLE_SPAWN_MARGIN.max(HOLE_MOVE_MARGIN) + 1.0)
            .max(PADDLE_TOP_LIMIT + PADDLE_HEIGHT + PADDLE_BOTTOM_MARGIN);
        if self.board_height < min_height {
            return Err(invalid(
                "board_height",
                format!("must be at least {min_height}"),
            ));
        }
        if self.hole_count == 1 {
            return Err(invalid(
                "hole_count",
                "a single black hole has nowhere to send the ball",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = MatchSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_score, MAX_SCORE);
        assert!(settings.mode.computer_opponent());
    }

    #[test]
    fn test_partial_override() {
        let settings =
            MatchSettings::from_json(r#"{ "mode": "Multiplayer", "max_score": 5 }"#).unwrap();
        assert_eq!(settings.mode, MatchMode::Multiplayer);
        assert_eq!(settings.max_score, 5);
        // Untouched fields keep their defaults
        assert_eq!(settings.board_width, BOARD_WIDTH);
        assert_eq!(settings.hole_count, HOLE_COUNT);
    }

    #[test]
    fn test_rejects_zero_max_score() {
        let err = MatchSettings::from_json(r#"{ "max_score": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "max_score",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_single_hole() {
        let err = MatchSettings::from_json(r#"{ "hole_count": 1 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "hole_count",
                ..
            }
        ));
        assert!(MatchSettings::from_json(r#"{ "hole_count": 0 }"#).is_ok());
    }

    #[test]
    fn test_rejects_tiny_board() {
        assert!(MatchSettings::from_json(r#"{ "board_width": 200.0 }"#).is_err());
        assert!(MatchSettings::from_json(r#"{ "board_height": 150.0 }"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = MatchSettings::from_json("{ max_score: ").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(MatchMode::from_str("2P"), Some(MatchMode::Multiplayer));
        assert_eq!(MatchMode::from_str("single"), Some(MatchMode::SinglePlayer));
        assert_eq!(MatchMode::from_str("coop"), None);
    }

    #[test]
    fn test_json_roundtrip_keeps_mode() {
        let settings = MatchSettings::from_mode(MatchMode::Multiplayer);
        let parsed = MatchSettings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed.mode, MatchMode::Multiplayer);
    }
}

//! Hubble Pong - Pong in orbit
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, match state)
//! - `renderer`: Draw sink the entities write sprite instances into
//! - `assets`: Sprite-sheet / texture / sound lookup by symbolic key
//! - `audio`: Sound cue queue drained by the host
//! - `settings`: Data-driven match configuration

pub mod assets;
pub mod audio;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetCatalog, AssetProvider};
pub use error::{AssetError, SettingsError, SetupError};
pub use settings::{MatchMode, MatchSettings};

/// Game configuration constants
pub mod consts {
    /// Board dimensions (pixels)
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 480.0;

    /// Points needed to win a match
    pub const MAX_SCORE: u32 = 3;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 25.0;
    /// Distance travelled per motion step at rally start
    pub const BALL_BASE_SPEED: f32 = 15.0;
    /// Added to the step distance on every paddle / obstacle hit
    pub const BALL_SPEED_INC: f32 = 2.0;
    /// Motion + animation step interval (seconds)
    pub const BALL_STEP_INTERVAL: f32 = 0.050;
    pub const BALL_ANIMATION_FRAMES: usize = 5;
    pub const TRAIL_LENGTH: usize = 5;

    /// Paddle box
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Horizontal distance from the board edge to the paddle center
    pub const PADDLE_EDGE_OFFSET: f32 = 50.0;
    /// Vertical move per frame while a direction is held
    pub const PADDLE_STEP: f32 = 5.0;
    /// Paddle top may not rise above this line
    pub const PADDLE_TOP_LIMIT: f32 = 75.0;
    /// Paddle bottom may not sink below (board height - this)
    pub const PADDLE_BOTTOM_MARGIN: f32 = 45.0;

    /// Top/bottom bounce lines sit this far inside the board
    pub const FRAME_OFFSET: f32 = 84.0;

    /// Rotating obstacle lifecycle
    pub const OBSTACLE_SPAWN_DIAMETER: f32 = 20.0;
    pub const OBSTACLE_MAX_DIAMETER: f32 = 80.0;
    pub const OBSTACLE_GROW_INTERVAL: f32 = 0.030;
    pub const OBSTACLE_ROTATION_STEP: f32 = 0.2;
    /// Upper bound of the random wait before a spawn (seconds)
    pub const OBSTACLE_MAX_WAIT: f32 = 5.0;
    /// Spawn area inset from every board edge
    pub const OBSTACLE_SPAWN_MARGIN: f32 = 150.0;
    pub const OBSTACLE_COUNT: usize = 3;

    /// Black hole behaviour
    pub const HOLE_SIZE: f32 = 100.0;
    pub const HOLE_PULL_RADIUS: f32 = 40.0;
    pub const HOLE_STEP_INTERVAL: f32 = 0.010;
    pub const HOLE_STEP: f32 = 0.5;
    pub const HOLE_ARRIVE_TOLERANCE: f32 = 5.0;
    pub const HOLE_PORT_COOLDOWN: f32 = 0.250;
    /// Ejected ball is placed this many direction units from the hole center
    pub const HOLE_EJECT_OFFSET: f32 = 2.0;
    pub const HOLE_MOVE_MARGIN: f32 = 100.0;
    pub const HOLE_COUNT: usize = 2;

    /// Weak point square edge length
    pub const WEAK_POINT_SIZE: f32 = 16.0;
    /// Distance from the board edge to the weak point center
    pub const WEAK_POINT_EDGE_OFFSET: f32 = 8.0;
}

/// The two sides of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Player {
    /// Left side
    One,
    /// Right side
    Two,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

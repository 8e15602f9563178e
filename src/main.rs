//! Hubble Pong headless runner
//!
//! Plays a match without a window: the left paddle is steered by a simple
//! autopilot folded into the input snapshot, the right one by the built-in
//! computer opponent. Pass a JSON settings file as the first argument to
//! override the defaults.

use hubble_pong::renderer::DrawList;
use hubble_pong::sim::{EntityKind, TickInput, build_match};
use hubble_pong::{AssetCatalog, MatchSettings, Player};

/// Simulated frame length (seconds)
const SIM_DT: f32 = 1.0 / 60.0;
/// Give up after this much simulated time
const MAX_MATCH_SECONDS: f32 = 600.0;

fn load_settings() -> Result<MatchSettings, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Reading settings from {path}");
            let json = std::fs::read_to_string(&path)?;
            Ok(MatchSettings::from_json(&json)?)
        }
        None => Ok(MatchSettings::default()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings()?;
    let assets = AssetCatalog::builtin();
    let mut sim = build_match(settings, &assets).inspect_err(|e| {
        if let Some(key) = e.missing_key() {
            log::error!("Asset manifest has no `{key}` entry");
        }
    })?;

    let mut input = TickInput::default();
    let mut list = DrawList::new();
    let mut cues = 0usize;
    let mut elapsed = 0.0;

    while !sim.match_state().is_over && elapsed < MAX_MATCH_SECONDS {
        // Autopilot: chase the ball's height with the left paddle
        let ball_y = sim.ball().position().y;
        let mid = sim.ctx().board().center().x;
        let paddle_y = sim
            .entities()
            .find(|e| e.kind() == EntityKind::Paddle && e.body().position.x < mid)
            .map(|e| e.body().position.y);
        let left = input.player_mut(Player::One);
        left.up = paddle_y.is_some_and(|y| ball_y < y - 5.0);
        left.down = paddle_y.is_some_and(|y| ball_y > y + 5.0);

        sim.tick(&input, SIM_DT);
        elapsed += SIM_DT;

        cues += sim.drain_audio().len();
        list.clear();
        sim.draw(&mut list);
    }

    let state = sim.match_state();
    match state.winner() {
        Some(winner) => log::info!(
            "{winner:?} wins {} - {} after {elapsed:.1}s ({cues} sound cues)",
            state.scores[0],
            state.scores[1]
        ),
        None => log::warn!(
            "No winner after {elapsed:.0}s, stopped at {} - {}",
            state.scores[0],
            state.scores[1]
        ),
    }
    log::debug!("Last frame drew {} sprites", list.len());
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hubble Pong (headless) starting...");
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives the simulation through the library
}

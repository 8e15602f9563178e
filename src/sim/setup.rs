//! Match construction
//!
//! Registration order is fixed: frame, left paddle, right paddle, asteroids,
//! black holes, then the two weak points. The ball is built first and handed
//! to the manager directly.

use super::ball::Ball;
use super::boundary::BoundaryFrame;
use super::hole::BlackHole;
use super::manager::SimulationManager;
use super::obstacle::Obstacle;
use super::paddle::{Controller, Paddle};
use super::state::MatchContext;
use super::weakness::WeakPoint;
use crate::Player;
use crate::assets::AssetProvider;
use crate::error::SetupError;
use crate::settings::MatchSettings;

/// Build a ready-to-tick match
pub fn build_match(
    settings: MatchSettings,
    assets: &dyn AssetProvider,
) -> Result<SimulationManager, SetupError> {
    settings.validate()?;

    let mut ctx = MatchContext::new(settings, assets.random_source());
    let ball = Ball::new(&mut ctx, assets)?;

    let frame = BoundaryFrame::new(&mut ctx, assets)?;
    let left = Paddle::new(Player::One, Controller::Human, &mut ctx, assets)?;
    let right_controller = if ctx.settings.mode.computer_opponent() {
        Controller::Computer
    } else {
        Controller::Human
    };
    let right = Paddle::new(Player::Two, right_controller, &mut ctx, assets)?;

    let mut obstacles = Vec::with_capacity(ctx.settings.obstacle_count);
    for _ in 0..ctx.settings.obstacle_count {
        obstacles.push(Obstacle::new(&mut ctx, assets)?);
    }
    let mut holes = Vec::with_capacity(ctx.settings.hole_count);
    for _ in 0..ctx.settings.hole_count {
        holes.push(BlackHole::new(&mut ctx, assets)?);
    }
    let weak_left = WeakPoint::new(Player::One, &mut ctx, assets)?;
    let weak_right = WeakPoint::new(Player::Two, &mut ctx, assets)?;
    let game_over = assets.sound("GameOverSound")?;

    log::info!(
        "New {} match: first to {}, {} asteroids, {} black holes",
        ctx.settings.mode.as_str(),
        ctx.settings.max_score,
        obstacles.len(),
        holes.len()
    );

    let mut sim = SimulationManager::new(ball, ctx).with_game_over_sound(game_over);
    sim.add_entity(Box::new(frame));
    sim.add_entity(Box::new(left));
    sim.add_entity(Box::new(right));
    for obstacle in obstacles {
        sim.add_entity(Box::new(obstacle));
    }
    for hole in holes {
        sim.add_entity(Box::new(hole));
    }
    sim.add_entity(Box::new(weak_left));
    sim.add_entity(Box::new(weak_right));
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCatalog;
    use crate::error::AssetError;
    use crate::renderer::DrawList;
    use crate::settings::MatchMode;
    use crate::sim::entity::EntityKind;
    use crate::sim::input::TickInput;

    #[test]
    fn test_default_layout() {
        let sim = build_match(MatchSettings::default(), &AssetCatalog::builtin()).unwrap();
        let kinds: Vec<EntityKind> = sim.entities().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Frame,
                EntityKind::Paddle,
                EntityKind::Paddle,
                EntityKind::Obstacle,
                EntityKind::Obstacle,
                EntityKind::Obstacle,
                EntityKind::Hole,
                EntityKind::Hole,
                EntityKind::Weakness,
                EntityKind::Weakness,
            ]
        );
        assert_eq!(sim.match_state().scores, [0, 0]);
        assert!(!sim.match_state().is_over);
    }

    #[test]
    fn test_same_seed_same_match() {
        let assets = AssetCatalog::builtin();
        let mut a = build_match(MatchSettings::default(), &assets).unwrap();
        let mut b = build_match(MatchSettings::default(), &assets).unwrap();
        let input = TickInput::default();
        for _ in 0..300 {
            a.tick(&input, 0.016);
            b.tick(&input, 0.016);
        }
        assert_eq!(a.ball().position(), b.ball().position());
        assert_eq!(a.match_state(), b.match_state());
    }

    #[test]
    fn test_missing_asset_is_reported() {
        let assets = AssetCatalog::builtin().without("BlackHole");
        let err = build_match(MatchSettings::default(), &assets).err().unwrap();
        assert_eq!(err.missing_key(), Some("BlackHole"));
        assert!(matches!(
            err,
            SetupError::Asset(AssetError::MissingSprite(ref k)) if k == "BlackHole"
        ));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = MatchSettings {
            max_score: 0,
            ..MatchSettings::default()
        };
        assert!(matches!(
            build_match(settings, &AssetCatalog::builtin()),
            Err(SetupError::Settings(_))
        ));
    }

    #[test]
    fn test_multiplayer_long_run_stays_in_bounds() {
        let settings = MatchSettings::from_mode(MatchMode::Multiplayer);
        let mut sim = build_match(settings, &AssetCatalog::builtin().with_seed(77)).unwrap();
        let input = TickInput::default();
        let mut list = DrawList::new();
        for _ in 0..5000 {
            sim.tick(&input, 0.016);
            let ball = sim.ball();
            let dir = ball.direction();
            assert!(dir == glam::Vec2::ZERO || (dir.length() - 1.0).abs() < 1e-3);
            assert!(ball.speed() >= ball.base_speed());
            list.clear();
            sim.draw(&mut list);
            assert!(!list.is_empty());
        }
    }
}

use glam::DVec2;

use onslaught_sim::core::commands::PlayerCommand;
use onslaught_sim::core::constants::DT;
use onslaught_sim::core::enums::{GamePhase, WeaponKind};
use onslaught_sim::core::events::{AudioEvent, GameEvent};
use onslaught_sim::core::input::InputState;
use onslaught_sim::{SimConfig, SimulationEngine};

/// Circle the map center and hold fire toward the pointer.
fn circling_input(tick: usize) -> InputState {
    let phase = (tick / 45) % 4;
    InputState {
        up: phase == 0,
        right: phase == 1,
        down: phase == 2,
        left: phase == 3,
        fire: true,
        dash: tick % 240 == 120,
        shield: tick % 600 == 300,
        time_slow: false,
        pointer: Some(DVec2::new(1200.0, 900.0)),
    }
}

#[test]
fn test_autopilot_session_kills_enemies() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 7,
        ..Default::default()
    });
    engine.queue_commands([PlayerCommand::StartGame, PlayerCommand::ToggleAutoShoot]);

    let mut kills = 0usize;
    let mut shots = 0usize;
    for tick in 0..(30 * 60) {
        let snap = engine.tick(&circling_input(tick), DT);
        kills += snap
            .game_events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyKilled { .. }))
            .count();
        shots += snap
            .audio_events
            .iter()
            .filter(|a| **a == AudioEvent::Shoot)
            .count();
        if snap.phase == GamePhase::GameOver {
            break;
        }
    }

    assert!(shots > 0, "Autopilot should fire");
    assert!(kills > 0, "Thirty seconds of auto-shoot should kill something");
    assert_eq!(engine.score().total_kills as usize, kills);
    assert!(engine.score().score >= kills as u64 * 10);
}

#[test]
fn test_high_score_survives_repeated_resets() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 99,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick(&InputState::default(), DT);

    let mut best = 0;
    for round in 0..3 {
        engine.queue_command(PlayerCommand::ToggleAutoShoot);
        for tick in 0..(10 * 60) {
            engine.tick(&circling_input(tick + round), DT);
        }
        best = best.max(engine.score().score);
        assert_eq!(engine.score().high_score, best);

        engine.queue_command(PlayerCommand::Reset);
        let snap = engine.tick(&InputState::default(), DT);
        assert_eq!(snap.hud.score, 0);
        assert_eq!(snap.hud.high_score, best);
        assert_eq!(snap.player.weapon, WeaponKind::Rifle);
        assert!(!snap.hud.auto_shoot, "Reset restores default toggles");
    }
}

#[test]
fn test_config_fills_missing_fields() {
    let config: SimConfig = serde_json::from_str(r#"{ "seed": 5, "spawn_chance": 0.5 }"#).unwrap();
    let defaults = SimConfig::default();
    assert_eq!(config.seed, 5);
    assert_eq!(config.spawn_chance, 0.5);
    assert_eq!(config.max_live_enemies, defaults.max_live_enemies);
    assert_eq!(config.viewport_width, defaults.viewport_width);
}

#[test]
fn test_commands_deserialize_from_shell_json() {
    let json = r#"[
        {"type": "StartGame"},
        {"type": "UpgradeSkill", "skill": "Damage"},
        {"type": "ToggleAutoShoot"}
    ]"#;
    let commands: Vec<PlayerCommand> = serde_json::from_str(json).unwrap();
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_commands(commands);
    let snap = engine.tick(&InputState::default(), DT);
    assert_eq!(snap.phase, GamePhase::Active);
    assert!(snap.hud.auto_shoot);
    assert!(
        !snap
            .game_events
            .iter()
            .any(|e| matches!(e, GameEvent::SkillUpgraded { .. })),
        "No skill points yet, so the upgrade is refused"
    );
}

//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use onslaught_core::components::*;
use onslaught_core::enums::GamePhase;
use onslaught_core::state::*;

use crate::session::Session;

/// Build a complete GameStateSnapshot from the current world and session.
/// Drains the session's per-tick audio and game events into it.
pub fn build_snapshot(world: &World, session: &mut Session, phase: GamePhase) -> GameStateSnapshot {
    let audio_events = std::mem::take(&mut session.feedback.audio);
    let game_events = std::mem::take(&mut session.feedback.events);

    GameStateSnapshot {
        time: session.time,
        phase,
        player: session.player.view(),
        enemies: build_enemies(world),
        player_shots: build_player_shots(world),
        enemy_shots: build_enemy_shots(world),
        power_ups: build_power_ups(world),
        hazards: build_hazards(world),
        particles: build_particles(world),
        camera: session.camera.view(),
        hud: build_hud(session),
        achievements: session.achievements.views(),
        audio_events,
        game_events,
    }
}

/// Enemies sorted by entity id so output order is stable.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &DotEffects)>()
        .iter()
        .map(|(entity, (enemy, pos, dots))| EnemyView {
            id: entity.to_bits().get(),
            kind: enemy.kind,
            position: pos.0,
            display_size: enemy.display_size,
            health: enemy.health,
            max_health: enemy.max_health,
            burning: !dots.is_empty(),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_player_shots(world: &World) -> Vec<ShotView> {
    world
        .query::<(&PlayerShot, &Position, &Hitbox)>()
        .iter()
        .map(|(_, (shot, pos, hitbox))| ShotView {
            position: pos.0,
            size: hitbox.size(),
            angle: shot.angle,
            kind: Some(shot.kind),
        })
        .collect()
}

fn build_enemy_shots(world: &World) -> Vec<ShotView> {
    world
        .query::<(&EnemyShot, &Position, &Hitbox)>()
        .iter()
        .map(|(_, (shot, pos, hitbox))| ShotView {
            position: pos.0,
            size: hitbox.size(),
            angle: shot.angle,
            kind: None,
        })
        .collect()
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    world
        .query::<(&PowerUp, &Position, &Hitbox)>()
        .iter()
        .map(|(_, (power_up, pos, hitbox))| PowerUpView {
            kind: power_up.kind,
            position: pos.0,
            size: hitbox.width,
            weapon: match power_up.payload {
                PowerUpPayload::Weapon { weapon } => Some(weapon),
                _ => None,
            },
        })
        .collect()
}

fn build_hazards(world: &World) -> Vec<HazardView> {
    world
        .query::<(&Hazard, &Position, &Hitbox)>()
        .iter()
        .map(|(_, (hazard, pos, hitbox))| HazardView {
            kind: hazard.kind,
            position: pos.0,
            size: hitbox.size(),
            time_left: hazard.time_left,
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Particle, &Position)>()
        .iter()
        .map(|(_, (particle, pos))| ParticleView {
            kind: particle.kind,
            position: pos.0,
            size: particle.size,
            alpha: if particle.max_lifetime > 0.0 {
                (particle.lifetime / particle.max_lifetime).clamp(0.0, 1.0)
            } else {
                0.0
            },
        })
        .collect()
}

fn build_hud(session: &Session) -> HudView {
    let player = &session.player;
    HudView {
        score: session.score.score,
        high_score: session.score.high_score,
        wave: session.waves.wave,
        enemies_remaining: session.waves.enemies_in_wave,
        ammo: player.ammo,
        max_ammo: player.max_ammo,
        health: player.health,
        max_health: player.max_health,
        level: player.level,
        experience: player.experience,
        experience_to_next_level: player.experience_to_next_level,
        skill_points: player.skill_points,
        dash_charges: player.abilities.dash.charges,
        dash_max_charges: player.abilities.dash.max_charges,
        abilities: player.abilities.views(),
        kill_streak: session.score.kill_streak,
        combo: session.score.combo,
        auto_shoot: player.auto_shoot,
        time_scale: session.time_scale,
    }
}

//! Enemy damage and the single death path.
//!
//! Every source of enemy damage (shots, explosions, dash, nuke, hazards,
//! DOT) goes through `damage_enemy`. A dead enemy is despawned before this
//! returns, so later lookups fail and death is handled exactly once.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use tracing::debug;

use onslaught_core::components::{Enemy, Hitbox, Position, PowerUpPayload};
use onslaught_core::constants::*;
use onslaught_core::enums::*;
use onslaught_core::events::{AudioEvent, GameEvent};
use onslaught_core::registry::hazard_params;

use crate::session::Session;
use crate::systems::particles;
use crate::world_setup;

/// What dealt the final blow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillCause {
    Weapon { critical: bool },
    Dash,
    Nuke,
    /// Hazards and damage-over-time.
    Environment,
}

/// Apply `amount` to `entity`. Returns true if this call killed it.
/// Entities that are gone or are not enemies are ignored.
pub fn damage_enemy(
    world: &mut World,
    session: &mut Session,
    entity: Entity,
    amount: f64,
    cause: KillCause,
) -> bool {
    let dead = match world.get::<&mut Enemy>(entity) {
        Ok(mut enemy) => {
            enemy.health -= amount;
            shrink(&mut enemy);
            enemy.health <= 0.0
        }
        Err(_) => return false,
    };
    if dead {
        kill_enemy(world, session, entity, cause);
    }
    dead
}

/// Display size follows the health fraction; the hitbox does not.
pub fn shrink(enemy: &mut Enemy) {
    let fraction = (enemy.health / enemy.max_health).max(0.0);
    enemy.display_size = enemy.initial_size * fraction;
}

/// Award, record and remove a dead enemy.
pub fn kill_enemy(world: &mut World, session: &mut Session, entity: Entity, cause: KillCause) {
    let Ok((kind, points, pos, center)) = world
        .query_one_mut::<(&Enemy, &Position, &Hitbox)>(entity)
        .map(|(e, p, hb)| (e.kind, e.points, p.0, hb.center_of(p.0)))
    else {
        return;
    };
    let _ = world.despawn(entity);

    let now = session.time.elapsed_secs;
    let awarded = session.score.record_kill(points, now);
    if session.score.multikill_count >= 3 {
        session.feedback.notify(GameEvent::MultiKill {
            count: session.score.multikill_count,
        });
    }

    // Environmental kills leave their experience on the floor as an orb.
    if cause == KillCause::Environment {
        world_setup::spawn_drop(
            world,
            PowerUpKind::Experience,
            PowerUpPayload::Amount {
                value: points as f64,
            },
            center - DVec2::splat(EXPERIENCE_ORB_SIZE / 2.0),
        );
    } else {
        let Session {
            player, feedback, ..
        } = session;
        player.gain_experience(points as f64, feedback);
    }

    if kind == EnemyKind::Tank {
        session.achievements.increment(AchievementKind::TankKiller);
    }
    if session.player.is_dashing() {
        session.achievements.increment(AchievementKind::Speedster);
    }
    if cause == (KillCause::Weapon { critical: true }) {
        session.achievements.increment(AchievementKind::Sharpshooter);
    }

    particles::emit(
        world,
        &mut session.rng,
        ParticleKind::Explosion,
        center,
        0.0,
        session.config.max_particles,
    );
    session.feedback.sound(AudioEvent::EnemyDeath);
    session.feedback.notify(GameEvent::EnemyKilled {
        kind,
        points: awarded as u32,
    });

    if kind == EnemyKind::Chemical {
        let cloud = hazard_params(HazardKind::ChemicalCloud);
        world_setup::spawn_hazard(
            world,
            HazardKind::ChemicalCloud,
            center - DVec2::new(cloud.width, cloud.height) / 2.0,
        );
    }

    if session.rng.gen_bool(session.config.powerup_drop_chance.clamp(0.0, 1.0)) {
        let idx = session.rng.gen_range(0..PowerUpKind::DROPPABLE.len());
        let drop = PowerUpKind::DROPPABLE[idx];
        world_setup::spawn_drop(world, drop, PowerUpPayload::None, pos);
    }

    debug!(?kind, ?cause, awarded, "Enemy killed");
}

/// Damage every enemy by `amount`; deaths go through the normal path.
pub fn damage_all_enemies(world: &mut World, session: &mut Session, amount: f64, cause: KillCause) {
    let targets: Vec<Entity> = world.query::<&Enemy>().iter().map(|(e, _)| e).collect();
    for entity in targets {
        damage_enemy(world, session, entity, amount, cause);
    }
}

/// Damage enemies whose centers lie within `radius` of `at`, skipping `except`.
pub fn damage_in_radius(
    world: &mut World,
    session: &mut Session,
    at: DVec2,
    radius: f64,
    amount: f64,
    cause: KillCause,
    except: Option<Entity>,
) {
    let targets: Vec<Entity> = world
        .query::<(&Enemy, &Position, &Hitbox)>()
        .iter()
        .filter(|(e, _)| Some(*e) != except)
        .filter(|(_, (_, p, hb))| hb.center_of(p.0).distance(at) <= radius)
        .map(|(e, _)| e)
        .collect();
    for entity in targets {
        damage_enemy(world, session, entity, amount, cause);
    }
}

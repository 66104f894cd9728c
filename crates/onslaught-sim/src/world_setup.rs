//! Entity spawn factories.
//!
//! Each factory builds the full component bundle for one entity kind from
//! the registry tables in `onslaught_core::registry`.

use glam::DVec2;
use hecs::{Entity, World};

use onslaught_core::components::*;
use onslaught_core::constants::*;
use onslaught_core::enums::*;
use onslaught_core::registry::{enemy_params, hazard_params, projectile_size, WeaponParams};
use onslaught_core::types::direction_from_angle;

/// Spawn an enemy with its top-left corner at `pos`.
pub fn spawn_enemy(world: &mut World, kind: EnemyKind, pos: DVec2) -> Entity {
    let params = enemy_params(kind);
    let size = DVec2::new(params.width, params.height);
    world.spawn((
        Position(pos),
        Hitbox {
            width: params.width,
            height: params.height,
        },
        Enemy {
            kind,
            health: params.health,
            max_health: params.health,
            speed: params.speed,
            damage: params.damage,
            points: params.points,
            display_size: size,
            initial_size: size,
            fire_cooldown: 0.0,
        },
        DotEffects::default(),
    ))
}

/// Spawn a player projectile centered on `center`.
pub fn spawn_player_shot(
    world: &mut World,
    center: DVec2,
    angle: f64,
    weapon: &WeaponParams,
    damage: f64,
) -> Entity {
    let size = projectile_size(weapon.projectile_kind);
    let hitbox = Hitbox::square(size);
    world.spawn((
        Position(center - hitbox.size() * 0.5),
        Velocity(direction_from_angle(angle) * weapon.projectile_speed),
        hitbox,
        PlayerShot {
            kind: weapon.projectile_kind,
            angle,
            speed: weapon.projectile_speed,
            damage,
            penetrating: weapon.penetrating,
            dot: weapon.dot,
            explosion_radius: weapon.explosion_radius,
        },
    ))
}

/// Spawn an enemy projectile at `pos` (top-left).
pub fn spawn_enemy_shot(world: &mut World, pos: DVec2, angle: f64, speed: f64, damage: f64) -> Entity {
    world.spawn((
        Position(pos),
        Velocity(direction_from_angle(angle) * speed),
        Hitbox::square(ENEMY_SHOT_SIZE),
        EnemyShot {
            angle,
            speed,
            damage,
        },
    ))
}

fn power_up_size(kind: PowerUpKind) -> f64 {
    if kind == PowerUpKind::Experience {
        EXPERIENCE_ORB_SIZE
    } else {
        POWERUP_SIZE
    }
}

/// A power-up the player can collect right away.
pub fn spawn_power_up(
    world: &mut World,
    kind: PowerUpKind,
    payload: PowerUpPayload,
    pos: DVec2,
) -> Entity {
    world.spawn((
        Position(pos),
        Hitbox::square(power_up_size(kind)),
        PowerUp {
            kind,
            payload,
            collectible: true,
        },
    ))
}

/// A power-up left by a dying enemy. Collectible after `DROP_PICKUP_DELAY`.
pub fn spawn_drop(
    world: &mut World,
    kind: PowerUpKind,
    payload: PowerUpPayload,
    pos: DVec2,
) -> Entity {
    world.spawn((
        Position(pos),
        Hitbox::square(power_up_size(kind)),
        PowerUp {
            kind,
            payload,
            collectible: false,
        },
        PickupDelay(DROP_PICKUP_DELAY),
    ))
}

pub fn spawn_hazard(world: &mut World, kind: HazardKind, pos: DVec2) -> Entity {
    let params = hazard_params(kind);
    world.spawn((
        Position(pos),
        Hitbox {
            width: params.width,
            height: params.height,
        },
        Hazard {
            kind,
            damage: params.damage,
            dot_damage: params.dot_damage,
            time_left: params.duration,
            duration: params.duration,
        },
    ))
}

/// Number of live enemies.
pub fn enemy_count(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}

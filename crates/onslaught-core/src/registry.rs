//! Static per-kind configuration tables.
//!
//! Every kind enum maps to one params struct through a `match`, so adding a
//! kind is a single edit here plus the enum variant.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Tuning for one enemy archetype.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyParams {
    pub width: f64,
    pub height: f64,
    /// Pursuit speed (px/s).
    pub speed: f64,
    pub health: f64,
    /// Contact damage per second; also the damage of a shooter's shot.
    pub damage: f64,
    /// Score and experience awarded on death.
    pub points: u32,
    /// Seconds between shots, for kinds that fire.
    pub fire_rate: Option<f64>,
    pub projectile_speed: f64,
}

pub fn enemy_params(kind: EnemyKind) -> EnemyParams {
    match kind {
        EnemyKind::Normal => EnemyParams {
            width: 40.0,
            height: 40.0,
            speed: 50.0,
            health: 40.0,
            damage: 10.0,
            points: 10,
            fire_rate: None,
            projectile_speed: 0.0,
        },
        EnemyKind::Fast => EnemyParams {
            width: 30.0,
            height: 30.0,
            speed: 90.0,
            health: 20.0,
            damage: 5.0,
            points: 20,
            fire_rate: None,
            projectile_speed: 0.0,
        },
        EnemyKind::Tank => EnemyParams {
            width: 120.0,
            height: 120.0,
            speed: 20.0,
            health: 1500.0,
            damage: 30.0,
            points: 50,
            fire_rate: None,
            projectile_speed: 0.0,
        },
        EnemyKind::Shooter => EnemyParams {
            width: 40.0,
            height: 40.0,
            speed: 40.0,
            health: 40.0,
            damage: 10.0,
            points: 15,
            fire_rate: Some(2.0),
            projectile_speed: 200.0,
        },
        EnemyKind::Chemical => EnemyParams {
            width: 50.0,
            height: 50.0,
            speed: 45.0,
            health: 60.0,
            damage: 15.0,
            points: 25,
            fire_rate: None,
            projectile_speed: 0.0,
        },
    }
}

/// Weighted spawn table: (kind, weight).
pub const ENEMY_SPAWN_WEIGHTS: [(EnemyKind, u32); 5] = [
    (EnemyKind::Normal, 3),
    (EnemyKind::Fast, 2),
    (EnemyKind::Tank, 1),
    (EnemyKind::Shooter, 1),
    (EnemyKind::Chemical, 1),
];

/// Pick an enemy kind from a roll in `0..total_spawn_weight()`.
pub fn enemy_kind_for_roll(roll: u32) -> EnemyKind {
    let mut acc = 0;
    for &(kind, weight) in &ENEMY_SPAWN_WEIGHTS {
        acc += weight;
        if roll < acc {
            return kind;
        }
    }
    EnemyKind::Normal
}

pub fn total_spawn_weight() -> u32 {
    ENEMY_SPAWN_WEIGHTS.iter().map(|(_, w)| w).sum()
}

/// Damage-over-time payload carried by a projectile or hazard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotPayload {
    pub damage_per_sec: f64,
    pub duration: f64,
}

/// Tuning for one player weapon.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeaponParams {
    pub name: &'static str,
    pub damage: f64,
    /// Seconds between shots.
    pub fire_rate: f64,
    pub projectile_speed: f64,
    pub ammo_capacity: u32,
    /// Total spread cone in radians; each shot is offset within +/- half.
    pub spread: f64,
    /// Shots created per trigger pull.
    pub projectiles: u32,
    pub projectile_kind: ProjectileKind,
    pub penetrating: bool,
    pub dot: Option<DotPayload>,
    pub explosion_radius: Option<f64>,
}

pub fn weapon_params(kind: WeaponKind) -> WeaponParams {
    match kind {
        WeaponKind::Rifle => WeaponParams {
            name: "Assault Rifle",
            damage: 50.0,
            fire_rate: 0.05,
            projectile_speed: 800.0,
            ammo_capacity: 200,
            spread: 0.02,
            projectiles: 1,
            projectile_kind: ProjectileKind::Laser,
            penetrating: true,
            dot: None,
            explosion_radius: None,
        },
        WeaponKind::Shotgun => WeaponParams {
            name: "Shotgun",
            damage: 30.0,
            fire_rate: 0.6,
            projectile_speed: 700.0,
            ammo_capacity: 40,
            spread: 0.5,
            projectiles: 6,
            projectile_kind: ProjectileKind::Pellet,
            penetrating: false,
            dot: None,
            explosion_radius: None,
        },
        WeaponKind::Flamethrower => WeaponParams {
            name: "Flamethrower",
            damage: 8.0,
            fire_rate: 0.04,
            projectile_speed: 400.0,
            ammo_capacity: 300,
            spread: 0.3,
            projectiles: 1,
            projectile_kind: ProjectileKind::Flame,
            penetrating: true,
            dot: Some(DotPayload {
                damage_per_sec: 10.0,
                duration: 2.0,
            }),
            explosion_radius: None,
        },
        WeaponKind::RocketLauncher => WeaponParams {
            name: "Rocket Launcher",
            damage: 120.0,
            fire_rate: 0.8,
            projectile_speed: 500.0,
            ammo_capacity: 20,
            spread: 0.05,
            projectiles: 1,
            projectile_kind: ProjectileKind::Explosive,
            penetrating: false,
            dot: None,
            explosion_radius: Some(100.0),
        },
    }
}

/// Edge length of a player projectile's hitbox.
pub fn projectile_size(kind: ProjectileKind) -> f64 {
    match kind {
        ProjectileKind::Laser => 4.0,
        ProjectileKind::Pellet | ProjectileKind::Flame | ProjectileKind::Explosive => 8.0,
    }
}

/// Tuning for one hazard kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HazardParams {
    pub width: f64,
    pub height: f64,
    /// Contact damage per second.
    pub damage: f64,
    /// Seconds until expiry; `None` is permanent.
    pub duration: Option<f64>,
    /// Damage per second of the DOT attached on contact.
    pub dot_damage: Option<f64>,
}

pub fn hazard_params(kind: HazardKind) -> HazardParams {
    match kind {
        HazardKind::Spikes => HazardParams {
            width: 40.0,
            height: 40.0,
            damage: 30.0,
            duration: None,
            dot_damage: None,
        },
        HazardKind::Acid => HazardParams {
            width: 60.0,
            height: 60.0,
            damage: 20.0,
            duration: Some(10.0),
            dot_damage: Some(5.0),
        },
        HazardKind::Fire => HazardParams {
            width: 50.0,
            height: 50.0,
            damage: 15.0,
            duration: Some(8.0),
            dot_damage: Some(8.0),
        },
        HazardKind::ChemicalCloud => HazardParams {
            width: 100.0,
            height: 100.0,
            damage: 20.0,
            duration: Some(3.0),
            dot_damage: None,
        },
    }
}

/// Inclusive-exclusive range used for randomized particle attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

const fn span(min: f64, max: f64) -> Span {
    Span { min, max }
}

/// Tuning for one particle kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleParams {
    pub size: Span,
    pub speed: Span,
    pub lifetime: Span,
    /// Emission cone in radians around the requested direction.
    pub spread: f64,
    pub count_min: u32,
    pub count_max: u32,
    /// Downward acceleration (px/s²).
    pub gravity: f64,
}

pub fn particle_params(kind: ParticleKind) -> ParticleParams {
    use std::f64::consts::{PI, TAU};

    match kind {
        ParticleKind::Blood => ParticleParams {
            size: span(2.0, 4.0),
            speed: span(100.0, 200.0),
            lifetime: span(0.3, 0.6),
            spread: PI / 2.0,
            count_min: 4,
            count_max: 8,
            gravity: BLOOD_GRAVITY,
        },
        ParticleKind::Explosion => ParticleParams {
            size: span(2.0, 6.0),
            speed: span(100.0, 200.0),
            lifetime: span(0.2, 0.4),
            spread: TAU,
            count_min: 8,
            count_max: 12,
            gravity: 0.0,
        },
        ParticleKind::Sparkle => ParticleParams {
            size: span(1.0, 2.0),
            speed: span(50.0, 100.0),
            lifetime: span(0.1, 0.3),
            spread: TAU,
            count_min: 3,
            count_max: 5,
            gravity: 0.0,
        },
        ParticleKind::DashTrail => ParticleParams {
            size: span(4.0, 6.0),
            speed: span(0.0, 0.0),
            lifetime: span(0.8, 1.0),
            spread: 0.0,
            count_min: 1,
            count_max: 1,
            gravity: 0.0,
        },
    }
}

/// Skill-point cost of one upgrade.
pub fn skill_cost(skill: SkillKind) -> u32 {
    match skill {
        SkillKind::MaxHealth | SkillKind::Speed | SkillKind::Damage => 1,
        SkillKind::CriticalChance => 2,
    }
}

/// Stat increment granted by one upgrade.
pub fn skill_increment(skill: SkillKind) -> f64 {
    match skill {
        SkillKind::MaxHealth => 20.0,
        SkillKind::Speed => 20.0,
        SkillKind::Damage => 5.0,
        SkillKind::CriticalChance => 0.05,
    }
}

/// Achievement goal and display name.
pub fn achievement_goal(kind: AchievementKind) -> (&'static str, u32) {
    match kind {
        AchievementKind::Sharpshooter => ("Sharpshooter", 50),
        AchievementKind::Survivor => ("Survivor", 10),
        AchievementKind::Arsenal => ("Arsenal Master", WeaponKind::ALL.len() as u32),
        AchievementKind::Speedster => ("Speedster", 100),
        AchievementKind::TankKiller => ("Tank Killer", 20),
    }
}

/// Experience thresholds: entry `i` is the amount needed to leave level `i + 1`.
pub fn level_thresholds() -> Vec<f64> {
    (0..LEVEL_COUNT)
        .map(|i| (LEVEL_BASE_EXPERIENCE * LEVEL_GROWTH.powi(i as i32)).floor())
        .collect()
}

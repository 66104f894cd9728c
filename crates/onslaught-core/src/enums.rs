//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Per-kind tuning lives in `registry::enemy_params`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Normal,
    Fast,
    Tank,
    /// Fires aimed shots at the player on its own cooldown.
    Shooter,
    /// Leaves a chemical cloud hazard on death.
    Chemical,
}

/// Player weapon. Per-kind tuning lives in `registry::weapon_params`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Rifle,
    Shotgun,
    Flamethrower,
    RocketLauncher,
}

impl WeaponKind {
    /// Every weapon in cycle order (used by the weapon-upgrade power-up).
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Rifle,
        WeaponKind::Shotgun,
        WeaponKind::Flamethrower,
        WeaponKind::RocketLauncher,
    ];

    /// The weapon after this one in cycle order, wrapping around.
    pub fn next(self) -> WeaponKind {
        let idx = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Visual/behavioral class of a player projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Laser,
    Pellet,
    /// Attaches a damage-over-time effect on hit.
    Flame,
    /// Splash damage around the impact point.
    Explosive,
}

/// Power-up pickup kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Health,
    Ammo,
    SpeedBoost,
    WeaponUpgrade,
    Nuke,
    Experience,
    /// Switches to the weapon carried in the payload.
    Weapon,
}

impl PowerUpKind {
    /// Kinds that may drop from a dying enemy.
    pub const DROPPABLE: [PowerUpKind; 5] = [
        PowerUpKind::Health,
        PowerUpKind::Ammo,
        PowerUpKind::SpeedBoost,
        PowerUpKind::WeaponUpgrade,
        PowerUpKind::Nuke,
    ];
}

/// Environmental hazard kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    /// Permanent contact damage.
    Spikes,
    Acid,
    Fire,
    /// Short-lived cloud left by a chemical enemy.
    ChemicalCloud,
}

impl HazardKind {
    /// Kinds seeded by the wave director on wave completion.
    pub const SEEDABLE: [HazardKind; 3] = [HazardKind::Spikes, HazardKind::Acid, HazardKind::Fire];
}

/// Cosmetic particle kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleKind {
    Blood,
    Explosion,
    Sparkle,
    DashTrail,
}

/// Player special ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    Dash,
    Shield,
    TimeSlow,
}

/// Stat purchasable with skill points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    MaxHealth,
    Speed,
    Damage,
    CriticalChance,
}

/// Session achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementKind {
    /// Kills landed with a critical hit.
    Sharpshooter,
    /// Waves reached.
    Survivor,
    /// Distinct weapons collected.
    Arsenal,
    /// Kills while dashing.
    Speedster,
    TankKiller,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 5] = [
        AchievementKind::Sharpshooter,
        AchievementKind::Survivor,
        AchievementKind::Arsenal,
        AchievementKind::Speedster,
        AchievementKind::TankKiller,
    ];
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Engine created, world not yet populated.
    #[default]
    Ready,
    Active,
    Paused,
    /// Terminal state; only `Reset` leaves it.
    GameOver,
}

//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Systems in `onslaught-sim` own the behavior.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::registry::DotPayload;
use crate::types::Rect;

/// Top-left anchor in world pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Velocity in px/s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Collision extent anchored at the entity's `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn rect_at(&self, pos: DVec2) -> Rect {
        Rect::at(pos, self.size())
    }

    pub fn center_of(&self, pos: DVec2) -> DVec2 {
        pos + self.size() * 0.5
    }
}

/// A hostile walker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub health: f64,
    pub max_health: f64,
    pub speed: f64,
    /// Contact damage per second.
    pub damage: f64,
    pub points: u32,
    /// Rendered size; shrinks with the health fraction while the hitbox stays fixed.
    pub display_size: DVec2,
    pub initial_size: DVec2,
    /// Seconds until the next shot, for kinds that fire.
    pub fire_cooldown: f64,
}

/// One damage-over-time effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotEffect {
    pub damage_per_sec: f64,
    pub remaining: f64,
    /// Entity bits of the hazard that attached it, if any.
    pub source: Option<u64>,
}

/// All DOT effects on one entity. Effects tick independently and stack.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DotEffects {
    pub effects: Vec<DotEffect>,
}

impl DotEffects {
    /// Add an effect. An effect from the same source is refreshed in place.
    pub fn apply(&mut self, effect: DotEffect) {
        if let Some(src) = effect.source {
            if let Some(existing) = self.effects.iter_mut().find(|e| e.source == Some(src)) {
                existing.remaining = existing.remaining.max(effect.remaining);
                existing.damage_per_sec = effect.damage_per_sec;
                return;
            }
        }
        self.effects.push(effect);
    }

    /// Advance every effect by `dt` and return the damage dealt this step.
    /// Effects whose remaining time runs out are removed without dealing damage.
    pub fn tick(&mut self, dt: f64) -> f64 {
        let mut total = 0.0;
        self.effects.retain_mut(|e| {
            e.remaining -= dt;
            if e.remaining <= 0.0 {
                false
            } else {
                total += e.damage_per_sec * dt;
                true
            }
        });
        total
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

/// A projectile fired by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShot {
    pub kind: ProjectileKind,
    pub angle: f64,
    pub speed: f64,
    pub damage: f64,
    pub penetrating: bool,
    pub dot: Option<DotPayload>,
    pub explosion_radius: Option<f64>,
}

/// A projectile fired by an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShot {
    pub angle: f64,
    pub speed: f64,
    pub damage: f64,
}

/// Extra data carried by a power-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PowerUpPayload {
    None,
    Amount { value: f64 },
    Weapon { weapon: WeaponKind },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub payload: PowerUpPayload,
    /// False while a `PickupDelay` is still counting down.
    pub collectible: bool,
}

/// Seconds until a fresh drop becomes collectible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickupDelay(pub f64);

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    /// Contact damage per second.
    pub damage: f64,
    pub dot_damage: Option<f64>,
    /// Seconds until expiry; `None` is permanent.
    pub time_left: Option<f64>,
    pub duration: Option<f64>,
}

/// Cosmetic particle; never collides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub kind: ParticleKind,
    pub size: f64,
    pub lifetime: f64,
    pub max_lifetime: f64,
    pub gravity: f64,
}

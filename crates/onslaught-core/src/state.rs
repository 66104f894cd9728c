//! Game state snapshot: the complete visible state handed to the shell each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, GameEvent};
use crate::types::SimTime;

/// Everything a renderer, HUD and sound system need for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub player_shots: Vec<ShotView>,
    pub enemy_shots: Vec<ShotView>,
    pub power_ups: Vec<PowerUpView>,
    pub hazards: Vec<HazardView>,
    pub particles: Vec<ParticleView>,
    pub camera: CameraView,
    pub hud: HudView,
    pub achievements: Vec<AchievementView>,
    pub audio_events: Vec<AudioEvent>,
    pub game_events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec2,
    pub size: f64,
    pub angle: f64,
    pub health: f64,
    pub max_health: f64,
    pub weapon: WeaponKind,
    pub dashing: bool,
    pub shielded: bool,
    pub reloading: bool,
    /// Reload completion in `[0, 1]`.
    pub reload_fraction: f64,
    pub active_dots: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub kind: EnemyKind,
    pub position: DVec2,
    pub display_size: DVec2,
    pub health: f64,
    pub max_health: f64,
    pub burning: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotView {
    pub position: DVec2,
    pub size: DVec2,
    pub angle: f64,
    /// `None` for enemy shots.
    pub kind: Option<ProjectileKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub position: DVec2,
    pub size: f64,
    pub weapon: Option<WeaponKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardView {
    pub kind: HazardKind,
    pub position: DVec2,
    pub size: DVec2,
    /// `None` for permanent hazards.
    pub time_left: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub kind: ParticleKind,
    pub position: DVec2,
    pub size: f64,
    /// Remaining life fraction in `[0, 1]`, used for fade-out.
    pub alpha: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Current screen shake magnitude.
    pub shake: f64,
}

/// Cooldown readout for one ability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityView {
    pub kind: AbilityKind,
    pub active: bool,
    pub cooldown: f64,
    pub remaining_cooldown: f64,
}

/// Numbers shown on the heads-up display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u64,
    pub high_score: u64,
    pub wave: u32,
    pub enemies_remaining: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub health: f64,
    pub max_health: f64,
    pub level: u32,
    pub experience: f64,
    pub experience_to_next_level: f64,
    pub skill_points: u32,
    pub dash_charges: u32,
    pub dash_max_charges: u32,
    pub abilities: Vec<AbilityView>,
    pub kill_streak: u32,
    pub combo: u32,
    pub auto_shoot: bool,
    pub time_scale: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementView {
    pub kind: AchievementKind,
    pub name: String,
    pub progress: u32,
    pub goal: u32,
    pub unlocked: bool,
}

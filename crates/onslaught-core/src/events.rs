//! Events emitted by the simulation for audio and UI feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Audio cues for the shell's sound system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    Shoot,
    Reload,
    LevelUp,
    EnemyDeath,
    PlayerHit,
    PowerUp,
    Dash,
    GameOver,
    StopMusic,
    StartMusic,
}

/// Gameplay notifications for the HUD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    LevelUp { level: u32 },
    CriticalHit { damage: f64 },
    /// Three or more kills inside the multikill window.
    MultiKill { count: u32 },
    EnemyKilled { kind: EnemyKind, points: u32 },
    WaveComplete { wave: u32 },
    AchievementUnlocked { achievement: AchievementKind },
    PowerUpCollected { kind: PowerUpKind },
    SkillUpgraded { skill: SkillKind },
    AbilityActivated { ability: AbilityKind },
    GameOver { score: u64 },
    LightningStrike { position: DVec2 },
}

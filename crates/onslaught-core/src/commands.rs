//! Player commands sent from the shell to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Discrete player actions. Continuous input (movement, aim, fire) arrives
/// through `InputState` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Populate the world and enter the active phase.
    StartGame,
    /// Discard the session and return to a fresh, active game.
    Reset,
    Pause,
    Resume,
    /// Spend skill points on one stat.
    UpgradeSkill { skill: SkillKind },
    ToggleAutoShoot,
    /// Begin a reload if the magazine is not full.
    Reload,
}

//! Per-frame input snapshot.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Held keys and pointer state, read once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Primary action (manual fire).
    pub fire: bool,
    pub dash: bool,
    pub shield: bool,
    pub time_slow: bool,
    /// Pointer in world coordinates.
    pub pointer: Option<DVec2>,
}

impl InputState {
    /// Raw key direction, not normalized. Each axis is -1, 0 or 1.
    pub fn key_direction(&self) -> DVec2 {
        let mut d = DVec2::ZERO;
        if self.up {
            d.y -= 1.0;
        }
        if self.down {
            d.y += 1.0;
        }
        if self.left {
            d.x -= 1.0;
        }
        if self.right {
            d.x += 1.0;
        }
        d
    }

    pub fn is_moving(&self) -> bool {
        self.key_direction() != DVec2::ZERO
    }
}

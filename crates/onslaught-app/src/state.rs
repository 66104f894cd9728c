//! Handles the driver keeps on a running game loop.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use onslaught_core::commands::PlayerCommand;
use onslaught_core::input::InputState;
use onslaught_core::state::GameStateSnapshot;

/// Messages from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    PlayerCommand(PlayerCommand),
    /// Held input for every tick until the next `Input`.
    Input(InputState),
    Shutdown,
}

/// Latest published snapshot, written by the loop thread after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// A spawned loop: its inbox and its thread.
pub struct LoopHandle {
    pub commands: Sender<GameLoopCommand>,
    pub thread: JoinHandle<()>,
}

/// Runner state. At most one loop runs at a time.
#[derive(Default)]
pub struct AppState {
    pub game_loop: Mutex<Option<LoopHandle>>,
    pub latest_snapshot: SharedSnapshot,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.game_loop
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_has_no_loop() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
    }
}

//! Control surface over the game loop thread.
//!
//! These functions bridge a driver (the CLI, a test, a future shell) to the
//! loop thread via channels. Errors are plain strings for the caller to show.

use onslaught_core::commands::PlayerCommand;
use onslaught_core::input::InputState;
use onslaught_core::state::GameStateSnapshot;
use onslaught_sim::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand, LoopHandle};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), String> {
    let mut slot = state.game_loop.lock().map_err(|e| e.to_string())?;

    if slot.is_some() {
        return Err("Simulation already running".into());
    }

    let (commands, thread) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())
        .map_err(|e| format!("Failed to spawn game loop: {}", e))?;
    *slot = Some(LoopHandle { commands, thread });

    Ok(())
}

fn send(state: &AppState, message: GameLoopCommand) -> Result<(), String> {
    let slot = state.game_loop.lock().map_err(|e| e.to_string())?;

    match slot.as_ref() {
        Some(handle) => handle
            .commands
            .send(message)
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Replace the input held for subsequent ticks.
pub fn send_input(state: &AppState, input: InputState) -> Result<(), String> {
    send(state, GameLoopCommand::Input(input))
}

/// Get the latest snapshot, if a tick has run.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the loop thread and wait for it to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    let handle = state
        .game_loop
        .lock()
        .map_err(|e| e.to_string())?
        .take()
        .ok_or_else(|| "Simulation not started".to_string())?;

    // A closed channel means the loop already exited.
    let _ = handle.commands.send(GameLoopCommand::Shutdown);
    handle
        .thread
        .join()
        .map_err(|_| "Game loop thread panicked".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_rejected_before_start() {
        let state = AppState::new();
        let err = send_command(&state, PlayerCommand::StartGame).unwrap_err();
        assert_eq!(err, "Simulation not started");
        assert!(get_snapshot(&state).unwrap().is_none());
        assert!(stop_simulation(&state).is_err());
    }

    #[test]
    fn test_start_twice_rejected_and_stop() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default()).unwrap();
        assert_eq!(
            start_simulation(&state, SimConfig::default()).unwrap_err(),
            "Simulation already running"
        );
        send_command(&state, PlayerCommand::StartGame).unwrap();
        send_input(&state, InputState::default()).unwrap();
        stop_simulation(&state).unwrap();
        assert!(!state.is_running());
        assert!(send_command(&state, PlayerCommand::Pause).is_err());
    }
}

//! Game loop thread: runs the simulation engine at 60 Hz and publishes snapshots.
//!
//! The engine is created inside this thread and never shared. Commands and
//! input arrive over an `mpsc` channel; the latest snapshot is stored in
//! shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use onslaught_core::constants::{DT, TICK_RATE};
use onslaught_core::input::InputState;
use onslaught_core::state::GameStateSnapshot;
use onslaught_sim::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop in a new thread.
///
/// Returns the command sender and the thread's join handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("onslaught-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Drain pending messages into the engine and held input.
/// Returns false when the loop must stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    input: &mut InputState,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                debug!(?cmd, "Command received");
                engine.queue_command(cmd);
            }
            Ok(GameLoopCommand::Input(next)) => *input = next,
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut input = InputState::default();
    let mut next_tick_time = Instant::now();
    info!("Game loop started");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &mut input, &cmd_rx) {
            break;
        }

        // 2. Advance one fixed step (engine handles phases internally)
        let snapshot = engine.tick(&input, DT);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }

    info!(ticks = engine.time().tick, "Game loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use onslaught_core::commands::PlayerCommand;
    use onslaught_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputState {
            fire: true,
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();

        let mut engine = SimulationEngine::new(SimConfig::default());
        let mut input = InputState::default();
        assert!(drain_commands(&mut engine, &mut input, &rx));
        assert!(input.fire, "Held input replaced");

        let snap = engine.tick(&input, DT);
        assert_eq!(snap.phase, GamePhase::Paused, "Start then pause in one drain");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &mut input, &rx));
    }

    #[test]
    fn test_disconnect_stops_loop() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        drop(tx);
        let mut engine = SimulationEngine::new(SimConfig::default());
        let mut input = InputState::default();
        assert!(!drain_commands(&mut engine, &mut input, &rx));
    }

    #[test]
    fn test_loop_thread_publishes_snapshots() {
        let latest = SharedSnapshot::default();
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        std::thread::sleep(TICK_DURATION * 10);
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snap = latest.lock().unwrap().clone().expect("a published snapshot");
        assert_eq!(snap.phase, GamePhase::Active);
        assert!(snap.time.tick > 0);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);

        // Run enough ticks to populate entities
        for _ in 0..120 {
            engine.tick(&InputState::default(), DT);
        }

        let snapshot = engine.tick(&InputState::default(), DT);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}

//! Onslaught headless runner.
//!
//! Drives the simulation engine on its own thread at a fixed rate and
//! exposes a small channel-backed control surface.

pub mod autopilot;
pub mod control;
pub mod game_loop;
pub mod state;

pub use onslaught_core as core;

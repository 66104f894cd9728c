//! Simulation engine for ONSLAUGHT.
//!
//! Owns the hecs ECS world, runs the per-frame systems in a fixed order,
//! and produces GameStateSnapshots for whatever shell drives it.

pub mod abilities;
pub mod camera;
pub mod engine;
pub mod player;
pub mod scoring;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use onslaught_core as core;

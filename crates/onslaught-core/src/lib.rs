//! Core types and definitions for the ONSLAUGHT simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, per-kind registries, commands, input, events,
//! state snapshots, and constants. It has no dependency on any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod registry;
pub mod state;
pub mod types;

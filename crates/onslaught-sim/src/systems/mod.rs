//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions taking `&mut World` plus the session state
//! they touch. They never hold state of their own.

pub mod abilities;
pub mod combat;
pub mod dot;
pub mod enemies;
pub mod hazards;
pub mod lightning;
pub mod particles;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
pub mod wave;

//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. Entity state lives in components, and the
//! engine passes in whatever else they need.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod player_control;
pub mod snapshot;
pub mod wave_spawner;
pub mod weapons;

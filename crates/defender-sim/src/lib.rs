//! Simulation engine for Space Defender 3D.
//!
//! Owns the hecs ECS world, advances it one frame at a time,
//! and produces FrameSnapshots for the renderer.

pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use defender_core as core;
pub use engine::{SimConfig, SimulationEngine};

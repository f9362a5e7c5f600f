//! Space Defender 3D headless frontend.
//!
//! This crate wires the simulation to a fixed-rate frame driver, an input
//! source, and a renderer, and reports the final score.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod render;

pub use defender_core as core;

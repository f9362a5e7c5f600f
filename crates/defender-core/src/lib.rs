//! Core types and definitions for the Space Defender 3D simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, input, commands, frame snapshots, events, and constants.
//! It has no dependency on any windowing or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

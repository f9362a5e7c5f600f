//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Every entity also
//! carries a `Position`.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// The player's ship. Exactly one exists while a game runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Current weapon level (1..=MAX_WEAPON_LEVEL).
    pub weapon_level: u8,
    /// Whether shoot was pressed on the previous frame. Firing happens
    /// only on the press edge.
    pub shoot_held: bool,
}

/// A laser bolt travelling away from the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Laser {
    pub speed: f64,
    /// Cleared on hit or when out of range; pruned next frame.
    pub alive: bool,
}

/// An enemy ship flying toward the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub health: u32,
    /// Approach speed along -z.
    pub speed: f64,
    /// Lateral speed (non-zero for movers only).
    pub lateral_speed: f64,
    /// +1.0 moving right, -1.0 moving left.
    pub lateral_dir: f64,
    /// Score awarded on kill.
    pub points: u32,
    pub alive: bool,
}

/// A background star. Recycled rather than destroyed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub speed: f64,
    pub brightness: f32,
}

//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variant. Kind-specific data lives on the `Enemy` component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// One hit, flies straight.
    #[default]
    Weak,
    /// Two hits, weaves side to side.
    Mover,
    /// Three hits, slow.
    Tough,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// An enemy reached the player. Terminal until `Restart`.
    GameOver,
}

/// What a drawable represents, with the data the renderer needs for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawableKind {
    Star { brightness: f32 },
    Player,
    Laser,
    Enemy { kind: EnemyKind },
}

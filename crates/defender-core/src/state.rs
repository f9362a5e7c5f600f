//! Frame snapshot: the complete visible state handed to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::enums::{DrawableKind, GamePhase};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Everything the renderer and HUD need after a frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub weapon_level: u8,
    /// Draw list in order: stars, player, lasers, enemies.
    pub drawables: Vec<Drawable>,
    pub events: Vec<GameEvent>,
}

/// One thing to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub position: Position,
    pub kind: DrawableKind,
    /// RGB in 0.0..=1.0.
    pub color: [f32; 3],
    pub size: f32,
}

impl FrameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Iterate the drawables of enemies only.
    pub fn enemies(&self) -> impl Iterator<Item = &Drawable> {
        self.drawables
            .iter()
            .filter(|d| matches!(d.kind, DrawableKind::Enemy { .. }))
    }

    /// The player's position, if present in the draw list.
    pub fn player_position(&self) -> Option<Position> {
        self.drawables
            .iter()
            .find(|d| d.kind == DrawableKind::Player)
            .map(|d| d.position)
    }
}

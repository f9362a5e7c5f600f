//! Events emitted by the simulation for audio, UI and logging.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// Something notable that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player fired a volley.
    LasersFired { count: u32, weapon_level: u8 },
    /// A new enemy entered the playfield.
    EnemySpawned { kind: EnemyKind },
    /// A laser damaged an enemy that survived.
    EnemyHit { kind: EnemyKind, remaining_health: u32 },
    /// An enemy was shot down.
    EnemyDestroyed { kind: EnemyKind, points: u32 },
    /// Score crossed a weapon threshold.
    WeaponUpgraded { level: u8 },
    /// An enemy reached the player.
    GameOver { score: u32 },
}

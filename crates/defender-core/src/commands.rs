//! Control commands sent from the frame driver to the simulation.
//!
//! Commands are queued and processed at the start of the next frame.

use serde::{Deserialize, Serialize};

/// Out-of-band actions that are not part of the per-frame input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Freeze the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Discard the current game and start a fresh one.
    Restart,
}

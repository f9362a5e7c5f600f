//! Per-frame input snapshot supplied by the frame driver.

use serde::{Deserialize, Serialize};

/// Which controls are held during this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
}

impl InputState {
    /// Horizontal axis in {-1, 0, 1}. Opposite keys cancel.
    pub fn axis_x(&self) -> f64 {
        (self.right as i8 - self.left as i8) as f64
    }

    /// Vertical axis in {-1, 0, 1}. Opposite keys cancel.
    pub fn axis_y(&self) -> f64 {
        (self.up as i8 - self.down as i8) as f64
    }
}

//! Input sources standing in for device polling.
//!
//! The frame driver asks its input source for an `InputState` once per frame,
//! handing it the previous frame's snapshot to react to.

use defender_core::input::InputState;
use defender_core::state::FrameSnapshot;
use defender_core::types::Position;

/// Produces the control state for the next frame.
pub trait InputSource {
    fn poll(&mut self, last: Option<&FrameSnapshot>) -> InputState;
}

/// Nothing pressed, ever.
#[derive(Debug, Default, Clone, Copy)]
pub struct Idle;

impl InputSource for Idle {
    fn poll(&mut self, _last: Option<&FrameSnapshot>) -> InputState {
        InputState::default()
    }
}

/// Lines up with the nearest enemy and taps shoot on a fixed cadence.
#[derive(Debug, Clone)]
pub struct Autopilot {
    fire_every_frames: u32,
    frame: u64,
}

/// Closer than this on an axis counts as lined up.
const AIM_DEAD_ZONE: f64 = 0.05;

impl Autopilot {
    pub fn new(fire_every_frames: u32) -> Self {
        Self {
            fire_every_frames: fire_every_frames.max(2),
            frame: 0,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, last: Option<&FrameSnapshot>) -> InputState {
        let frame = self.frame;
        self.frame += 1;

        let mut input = InputState {
            shoot: frame % self.fire_every_frames as u64 == 0,
            ..Default::default()
        };

        let Some(snapshot) = last else {
            return input;
        };
        let Some(player) = snapshot.player_position() else {
            return input;
        };
        if let Some(target) = nearest_enemy(snapshot) {
            let dx = target.x - player.x;
            let dy = target.y - player.y;
            input.left = dx < -AIM_DEAD_ZONE;
            input.right = dx > AIM_DEAD_ZONE;
            input.down = dy < -AIM_DEAD_ZONE;
            input.up = dy > AIM_DEAD_ZONE;
        }
        input
    }
}

/// The enemy with the smallest depth still in front of the player.
fn nearest_enemy(snapshot: &FrameSnapshot) -> Option<Position> {
    snapshot
        .enemies()
        .map(|d| d.position)
        .filter(|p| p.z >= 0.0)
        .min_by(|a, b| a.z.total_cmp(&b.z))
}

//! Frame driver: advances the simulation at a fixed rate until game over.
//!
//! Each frame polls the input source, advances the engine by one frame of
//! simulated time, and hands the snapshot to the renderer. In realtime mode
//! frames are paced to the wall clock; otherwise they run back to back.

use std::fmt;
use std::time::{Duration, Instant};

use defender_core::state::FrameSnapshot;
use defender_sim::engine::{SimConfig, SimulationEngine};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::input::InputSource;
use crate::render::Renderer;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOutcome {
    pub score: u32,
    pub frames: u64,
    pub game_over: bool,
    pub elapsed_secs: f64,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.game_over {
            write!(f, "GAME OVER! Final Score: {}", self.score)
        } else {
            write!(
                f,
                "Session ended after {} frames. Final Score: {}",
                self.frames, self.score
            )
        }
    }
}

/// Wall-clock duration of one frame.
pub fn frame_duration(frame_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / frame_rate.max(1) as u64)
}

/// Run one session. Returns when the game ends or the frame limit is hit.
pub fn run(
    config: &AppConfig,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
) -> Result<RunOutcome, AppError> {
    let mut engine = SimulationEngine::new(SimConfig { seed: config.seed });
    let dt = config.frame_dt();
    let frame_time = frame_duration(config.frame_rate);
    let mut next_frame_time = Instant::now();
    let mut last: Option<FrameSnapshot> = None;

    log::info!(
        "starting session: seed {}, {} Hz, frame limit {}",
        config.seed,
        config.frame_rate,
        config.max_frames
    );

    loop {
        // 1. Sample input against what the player last saw
        let state = input.poll(last.as_ref());

        // 2. Advance one frame
        let snapshot = engine.advance(dt, &state);

        // 3. Draw
        renderer.render(&snapshot)?;

        let frames = snapshot.time.frame;
        let done = snapshot.is_game_over()
            || (config.max_frames > 0 && frames >= config.max_frames);
        last = Some(snapshot);
        if done {
            break;
        }

        // 4. Sleep until the next frame
        if config.realtime {
            next_frame_time += frame_time;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_time * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_frame_time = now;
            }
        }
    }

    renderer.finish()?;

    let time = engine.time();
    let outcome = RunOutcome {
        score: engine.score().score,
        frames: time.frame,
        game_over: engine.is_game_over(),
        elapsed_secs: time.elapsed_secs,
    };
    log::info!(
        "session ended: {} enemies destroyed, {} lasers fired, {:.1}s simulated",
        engine.score().enemies_destroyed,
        engine.score().lasers_fired,
        outcome.elapsed_secs
    );
    Ok(outcome)
}

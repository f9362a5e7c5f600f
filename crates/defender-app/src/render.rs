//! Renderers that consume frame snapshots.
//!
//! Renderers are stateless with respect to the simulation: each frame's
//! snapshot carries everything to draw.

use std::io::{self, Write};

use defender_core::enums::DrawableKind;
use defender_core::events::GameEvent;
use defender_core::state::FrameSnapshot;

/// Receives one snapshot per frame.
pub trait Renderer {
    fn render(&mut self, snapshot: &FrameSnapshot) -> io::Result<()>;

    /// Called once after the last frame.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logs a one-line summary per frame at `trace` and notable events at `debug`.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &FrameSnapshot) -> io::Result<()> {
        if log::log_enabled!(log::Level::Trace) {
            let mut lasers = 0;
            let mut enemies = 0;
            for drawable in &snapshot.drawables {
                match drawable.kind {
                    DrawableKind::Laser => lasers += 1,
                    DrawableKind::Enemy { .. } => enemies += 1,
                    DrawableKind::Star { .. } | DrawableKind::Player => {}
                }
            }
            log::trace!(
                "frame {} score {} weapon {} lasers {} enemies {}",
                snapshot.time.frame,
                snapshot.score,
                snapshot.weapon_level,
                lasers,
                enemies
            );
        }
        for event in &snapshot.events {
            match event {
                GameEvent::LasersFired { .. } | GameEvent::EnemySpawned { .. } => {}
                _ => log::debug!("frame {}: {event:?}", snapshot.time.frame),
            }
        }
        Ok(())
    }
}

/// Writes each snapshot as a single JSON line.
pub struct JsonLinesRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, snapshot: &FrameSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

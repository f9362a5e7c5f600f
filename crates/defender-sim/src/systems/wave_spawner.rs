//! Wave spawning system: spawns one enemy per spawn interval.

use hecs::World;
use rand::Rng;

use defender_core::constants::{MOVER_SCORE_THRESHOLD, TOUGH_SCORE_THRESHOLD};
use defender_core::enums::EnemyKind;
use defender_core::events::GameEvent;

/// Accumulates time since the last enemy spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    pub interval_secs: f64,
    pub elapsed_secs: f64,
}

impl SpawnTimer {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            elapsed_secs: 0.0,
        }
    }

    /// Add `dt` and report whether a spawn is due. Resets on firing.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.elapsed_secs += dt;
        if self.elapsed_secs >= self.interval_secs {
            self.elapsed_secs = 0.0;
            true
        } else {
            false
        }
    }
}

/// Enemy kinds available at a given score.
pub fn spawn_pool(score: u32) -> &'static [EnemyKind] {
    if score >= TOUGH_SCORE_THRESHOLD {
        &[EnemyKind::Weak, EnemyKind::Mover, EnemyKind::Tough]
    } else if score >= MOVER_SCORE_THRESHOLD {
        &[EnemyKind::Weak, EnemyKind::Mover]
    } else {
        &[EnemyKind::Weak]
    }
}

/// Pick a kind uniformly from the pool unlocked by `score`.
pub fn choose_enemy_kind<R: Rng + ?Sized>(rng: &mut R, score: u32) -> EnemyKind {
    let pool = spawn_pool(score);
    pool[rng.gen_range(0..pool.len())]
}

/// Advance the spawn timer and spawn an enemy when it is due.
pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    timer: &mut SpawnTimer,
    dt: f64,
    score: u32,
    events: &mut Vec<GameEvent>,
) {
    if !timer.tick(dt) {
        return;
    }
    let kind = choose_enemy_kind(rng, score);
    let entity = crate::world_setup::spawn_enemy(world, rng, kind);
    log::debug!("spawned {kind:?} enemy {entity:?} at score {score}");
    events.push(GameEvent::EnemySpawned { kind });
}

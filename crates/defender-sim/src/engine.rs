//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes control commands,
//! runs all systems once per frame, and produces `FrameSnapshot`s. Completely
//! headless (no window or renderer dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use defender_core::commands::PlayerCommand;
use defender_core::constants::SPAWN_INTERVAL_SECS;
use defender_core::enums::GamePhase;
use defender_core::events::GameEvent;
use defender_core::input::InputState;
use defender_core::state::FrameSnapshot;
use defender_core::types::SimTime;

use crate::score::ScoreState;
use crate::systems;
use crate::systems::wave_spawner::SpawnTimer;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
///
/// Generic over the random source so tests can inject their own.
pub struct SimulationEngine<R = ChaCha8Rng> {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: R,
    spawn_timer: SpawnTimer,
    score: ScoreState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine<ChaCha8Rng> {
    /// Create a new simulation engine seeded from the config.
    pub fn new(config: SimConfig) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Create a new simulation engine drawing randomness from `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let mut world = World::new();
        world_setup::setup_game(&mut world, &mut rng);
        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::Active,
            rng,
            spawn_timer: SpawnTimer::new(SPAWN_INTERVAL_SECS),
            score: ScoreState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// A non-finite or negative `dt` counts as zero.
    pub fn advance(&mut self, dt: f64, input: &InputState) -> FrameSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt, input);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.score,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the running score.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage exact scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Overwrite the score (for tests of score-gated behavior).
    #[cfg(test)]
    pub fn set_score(&mut self, score: u32) {
        self.score.score = score;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single control command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Restart => {
                log::info!("restarting game (previous score {})", self.score.score);
                self.world.clear();
                world_setup::setup_game(&mut self.world, &mut self.rng);
                self.time = SimTime::default();
                self.phase = GamePhase::Active;
                self.spawn_timer = SpawnTimer::new(SPAWN_INTERVAL_SECS);
                self.score = ScoreState::default();
                self.events.clear();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64, input: &InputState) {
        // 1. Player movement and firing
        systems::player_control::run(
            &mut self.world,
            input,
            dt,
            &mut self.score,
            &mut self.events,
        );
        // 2. Prune entities flagged dead last frame
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 3. Lasers
        systems::movement::run_lasers(&mut self.world, dt);
        // 4. Enemies
        systems::movement::run_enemies(&mut self.world, dt);
        // 5. Star field
        systems::movement::run_stars(&mut self.world, &mut self.rng, dt);
        // 6. Enemy spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            dt,
            self.score.score,
            &mut self.events,
        );
        // 7. Laser hits, then weapon upgrades from the new score
        systems::collision::run(&mut self.world, &mut self.score, &mut self.events);
        systems::weapons::update_level(&mut self.world, self.score.score, &mut self.events);
        // 8. Enemy reached the player
        if systems::collision::player_hit(&self.world) {
            self.phase = GamePhase::GameOver;
            log::info!(
                "game over at frame {} with score {}",
                self.time.frame,
                self.score.score
            );
            self.events.push(GameEvent::GameOver {
                score: self.score.score,
            });
        }
    }
}

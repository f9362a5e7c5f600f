//! Score bookkeeping owned by the engine, NOT stored in the ECS world.

/// Running score state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    /// Points earned. Only ever increases within a game.
    pub score: u32,
    pub enemies_destroyed: u32,
    pub lasers_fired: u32,
}

impl ScoreState {
    /// Credit a kill worth `points`.
    pub fn record_kill(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.enemies_destroyed += 1;
    }
}

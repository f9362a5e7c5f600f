//! Weapon system: laser fan patterns and score-gated weapon upgrades.

use hecs::World;

use defender_core::components::Player;
use defender_core::constants::{MAX_WEAPON_LEVEL, WEAPON_LEVEL_THRESHOLDS};
use defender_core::events::GameEvent;
use defender_core::types::Position;

use crate::world_setup;

/// Horizontal laser offsets fired at each weapon level.
pub fn laser_offsets(level: u8) -> &'static [f64] {
    match level.clamp(1, MAX_WEAPON_LEVEL) {
        1 => &[0.0],
        2 => &[-0.2, 0.2],
        3 => &[-0.2, 0.0, 0.2],
        4 => &[-0.3, -0.1, 0.1, 0.3],
        _ => &[-0.3, -0.15, 0.0, 0.15, 0.3],
    }
}

/// Weapon level earned by a score.
pub fn weapon_level_for_score(score: u32) -> u8 {
    let reached = WEAPON_LEVEL_THRESHOLDS
        .iter()
        .filter(|&&threshold| score >= threshold)
        .count() as u8;
    (1 + reached).min(MAX_WEAPON_LEVEL)
}

/// Spawn one volley from `origin`. Returns the number of lasers created.
pub fn fire(world: &mut World, origin: Position, level: u8) -> u32 {
    let offsets = laser_offsets(level);
    for &dx in offsets {
        world_setup::spawn_laser(world, origin.offset_x(dx));
    }
    offsets.len() as u32
}

/// Raise the player's weapon level to match the score. Never lowers it.
pub fn update_level(world: &mut World, score: u32, events: &mut Vec<GameEvent>) {
    let earned = weapon_level_for_score(score);
    for (_entity, player) in world.query_mut::<&mut Player>() {
        if earned > player.weapon_level {
            player.weapon_level = earned;
            log::info!("weapon upgraded to level {earned} at score {score}");
            events.push(GameEvent::WeaponUpgraded { level: earned });
        }
    }
}

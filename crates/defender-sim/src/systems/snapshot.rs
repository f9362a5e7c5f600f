//! Snapshot system: queries the ECS world and builds the frame's draw list.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use defender_core::components::*;
use defender_core::constants::*;
use defender_core::enums::{DrawableKind, EnemyKind, GamePhase};
use defender_core::events::GameEvent;
use defender_core::state::{Drawable, FrameSnapshot};
use defender_core::types::{Position, SimTime};

use crate::score::ScoreState;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    let mut drawables = Vec::new();
    push_stars(world, &mut drawables);
    let weapon_level = push_player(world, &mut drawables);
    push_lasers(world, &mut drawables);
    push_enemies(world, &mut drawables);

    FrameSnapshot {
        time: *time,
        phase,
        score: score.score,
        weapon_level,
        drawables,
        events,
    }
}

fn push_stars(world: &World, out: &mut Vec<Drawable>) {
    for (_, (star, pos)) in world.query::<(&Star, &Position)>().iter() {
        let b = star.brightness;
        out.push(Drawable {
            position: *pos,
            kind: DrawableKind::Star { brightness: b },
            color: [b, b, b],
            size: STAR_SIZE,
        });
    }
}

/// Returns the player's weapon level (1 if there is no player).
fn push_player(world: &World, out: &mut Vec<Drawable>) -> u8 {
    let mut weapon_level = 1;
    for (_, (player, pos)) in world.query::<(&Player, &Position)>().iter() {
        weapon_level = player.weapon_level;
        out.push(Drawable {
            position: *pos,
            kind: DrawableKind::Player,
            color: PLAYER_COLOR,
            size: PLAYER_SIZE,
        });
    }
    weapon_level
}

fn push_lasers(world: &World, out: &mut Vec<Drawable>) {
    for (_, (laser, pos)) in world.query::<(&Laser, &Position)>().iter() {
        if !laser.alive {
            continue;
        }
        out.push(Drawable {
            position: *pos,
            kind: DrawableKind::Laser,
            color: LASER_COLOR,
            size: LASER_SIZE,
        });
    }
}

fn push_enemies(world: &World, out: &mut Vec<Drawable>) {
    for (_, (enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
        if !enemy.alive {
            continue;
        }
        out.push(Drawable {
            position: *pos,
            kind: DrawableKind::Enemy { kind: enemy.kind },
            color: enemy_color(enemy.kind),
            size: ENEMY_SIZE,
        });
    }
}

fn enemy_color(kind: EnemyKind) -> [f32; 3] {
    match kind {
        EnemyKind::Weak => WEAK_COLOR,
        EnemyKind::Mover => MOVER_COLOR,
        EnemyKind::Tough => TOUGH_COLOR,
    }
}

//! Collision system: laser hits on enemies, and enemies reaching the player.
//!
//! Lasers are resolved in iteration order against enemies in iteration
//! order. A laser damages at most the first enemy it touches and is spent.
//! An enemy killed earlier in the same frame cannot absorb a later laser.

use hecs::{Entity, World};

use defender_core::components::{Enemy, Laser, Player};
use defender_core::constants::{LASER_HIT_RADIUS, PLAYER_HITBOX_RADIUS};
use defender_core::events::GameEvent;
use defender_core::types::Position;

use crate::score::ScoreState;

/// Resolve laser/enemy hits, applying damage, kills, and score.
pub fn run(world: &mut World, score: &mut ScoreState, events: &mut Vec<GameEvent>) {
    let lasers: Vec<(Entity, Position)> = world
        .query::<(&Laser, &Position)>()
        .iter()
        .filter(|(_, (laser, _))| laser.alive)
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    if lasers.is_empty() {
        return;
    }

    let enemies: Vec<(Entity, Position)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| enemy.alive)
        .map(|(entity, (_, pos))| (entity, *pos))
        .collect();

    for (laser_entity, laser_pos) in lasers {
        for &(enemy_entity, enemy_pos) in &enemies {
            if laser_pos.distance_to(&enemy_pos) >= LASER_HIT_RADIUS {
                continue;
            }
            let Ok(mut enemy) = world.get::<&mut Enemy>(enemy_entity) else {
                continue;
            };
            if !enemy.alive || enemy.health == 0 {
                continue;
            }

            enemy.health -= 1;
            if enemy.health == 0 {
                enemy.alive = false;
                score.record_kill(enemy.points);
                log::debug!(
                    "{:?} enemy {enemy_entity:?} destroyed, score {}",
                    enemy.kind,
                    score.score
                );
                events.push(GameEvent::EnemyDestroyed {
                    kind: enemy.kind,
                    points: enemy.points,
                });
            } else {
                events.push(GameEvent::EnemyHit {
                    kind: enemy.kind,
                    remaining_health: enemy.health,
                });
            }
            drop(enemy);

            if let Ok(mut laser) = world.get::<&mut Laser>(laser_entity) {
                laser.alive = false;
            }
            break;
        }
    }
}

/// Whether any live enemy is inside the player's hitbox.
pub fn player_hit(world: &World) -> bool {
    let Some(player_pos) = find_player_position(world) else {
        return false;
    };
    world
        .query::<(&Enemy, &Position)>()
        .iter()
        .any(|(_, (enemy, pos))| {
            enemy.alive && pos.distance_to(&player_pos) < PLAYER_HITBOX_RADIUS
        })
}

/// The player's position, if the player exists.
pub fn find_player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

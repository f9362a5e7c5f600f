//! Kinematic integration for lasers, enemies, and the star field.
//!
//! Lasers fly along +z, enemies and stars along -z. Entities that leave
//! the playfield are flagged dead (lasers, enemies) or recycled (stars).

use hecs::World;
use rand::Rng;

use defender_core::components::{Enemy, Laser, Star};
use defender_core::constants::*;
use defender_core::enums::EnemyKind;
use defender_core::types::Position;

use crate::world_setup;

/// Advance live lasers; flag those past the far depth.
pub fn run_lasers(world: &mut World, dt: f64) {
    for (_entity, (laser, pos)) in world.query_mut::<(&mut Laser, &mut Position)>() {
        if !laser.alive {
            continue;
        }
        pos.z += laser.speed * dt;
        if pos.z > LASER_MAX_DEPTH {
            laser.alive = false;
        }
    }
}

/// Advance live enemies toward the player; movers also weave sideways.
pub fn run_enemies(world: &mut World, dt: f64) {
    for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        if !enemy.alive {
            continue;
        }
        pos.z -= enemy.speed * dt;

        if enemy.kind == EnemyKind::Mover {
            pos.x += enemy.lateral_dir * enemy.lateral_speed * dt;
            let past_right = pos.x > MOVER_LATERAL_BOUND && enemy.lateral_dir > 0.0;
            let past_left = pos.x < -MOVER_LATERAL_BOUND && enemy.lateral_dir < 0.0;
            if past_right || past_left {
                enemy.lateral_dir = -enemy.lateral_dir;
            }
        }

        if pos.z < ENEMY_DESPAWN_DEPTH {
            enemy.alive = false;
        }
    }
}

/// Advance stars; a star passing the camera is moved back to the far field
/// in place (same entity, new coordinates).
pub fn run_stars<R: Rng + ?Sized>(world: &mut World, rng: &mut R, dt: f64) {
    for (_entity, (star, pos)) in world.query_mut::<(&Star, &mut Position)>() {
        pos.z -= star.speed * dt;
        if pos.z < STAR_NEAR_DEPTH {
            *pos = world_setup::far_star_position(rng);
        }
    }
}

//! Cleanup system: prunes lasers and enemies whose liveness flag was cleared.

use hecs::{Entity, World};

use defender_core::components::{Enemy, Laser};

/// Despawn every dead laser and enemy.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, laser) in world.query_mut::<&Laser>() {
        if !laser.alive {
            despawn_buffer.push(entity);
        }
    }

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if !enemy.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

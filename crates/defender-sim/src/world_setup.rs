//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, the star field, enemies, and lasers with
//! appropriate component bundles.

use hecs::World;
use rand::Rng;

use defender_core::components::*;
use defender_core::constants::*;
use defender_core::enums::EnemyKind;
use defender_core::types::Position;

/// Set up a fresh game world: the player and the star field.
/// Enemies are spawned by the wave spawner system.
pub fn setup_game<R: Rng + ?Sized>(world: &mut World, rng: &mut R) {
    spawn_player(world);
    spawn_stars(world, rng);
}

/// Spawn the player's ship at the origin with the starting weapon.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player {
            weapon_level: 1,
            shoot_held: false,
        },
        Position::new(0.0, 0.0, 0.0),
    ))
}

/// Fill the star field. Initial stars span the whole depth range so the
/// field looks populated from the first frame.
pub fn spawn_stars<R: Rng + ?Sized>(world: &mut World, rng: &mut R) {
    for _ in 0..STAR_COUNT {
        let mut position = far_star_position(rng);
        position.z = rng.gen_range(STAR_NEAR_DEPTH..STAR_FAR_DEPTH_MAX);
        let star = Star {
            speed: rng.gen_range(STAR_SPEED_MIN..STAR_SPEED_MAX),
            brightness: rng.gen_range(STAR_BRIGHTNESS_MIN..=STAR_BRIGHTNESS_MAX),
        };
        world.spawn((star, position));
    }
}

/// A random position in the far band of the star field.
pub fn far_star_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position::new(
        rng.gen_range(-STAR_FIELD_HALF_WIDTH..=STAR_FIELD_HALF_WIDTH),
        rng.gen_range(-STAR_FIELD_HALF_HEIGHT..=STAR_FIELD_HALF_HEIGHT),
        rng.gen_range(STAR_FAR_DEPTH_MIN..=STAR_FAR_DEPTH_MAX),
    )
}

/// Spawn an enemy of the given kind at a random point of the spawn plane.
pub fn spawn_enemy<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    kind: EnemyKind,
) -> hecs::Entity {
    let position = Position::new(
        rng.gen_range(-ENEMY_SPAWN_HALF_WIDTH..=ENEMY_SPAWN_HALF_WIDTH),
        rng.gen_range(-ENEMY_SPAWN_HALF_HEIGHT..=ENEMY_SPAWN_HALF_HEIGHT),
        ENEMY_SPAWN_DEPTH,
    );
    let lateral_dir = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    spawn_enemy_at(world, kind, position, lateral_dir)
}

/// Spawn an enemy at an exact position.
pub fn spawn_enemy_at(
    world: &mut World,
    kind: EnemyKind,
    position: Position,
    lateral_dir: f64,
) -> hecs::Entity {
    let (health, speed, lateral_speed, points) = enemy_kind_params(kind);
    let enemy = Enemy {
        kind,
        health,
        speed,
        lateral_speed,
        lateral_dir,
        points,
        alive: true,
    };
    world.spawn((enemy, position))
}

/// Spawn one laser bolt.
pub fn spawn_laser(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((
        Laser {
            speed: LASER_SPEED,
            alive: true,
        },
        position,
    ))
}

/// Parameters for an enemy kind: (health, speed, lateral speed, points).
pub fn enemy_kind_params(kind: EnemyKind) -> (u32, f64, f64, u32) {
    match kind {
        EnemyKind::Weak => (WEAK_HEALTH, WEAK_SPEED, 0.0, WEAK_POINTS),
        EnemyKind::Mover => (MOVER_HEALTH, MOVER_SPEED, MOVER_LATERAL_SPEED, MOVER_POINTS),
        EnemyKind::Tough => (TOUGH_HEALTH, TOUGH_SPEED, 0.0, TOUGH_POINTS),
    }
}

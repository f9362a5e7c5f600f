//! Simulation constants and tuning parameters.
//!
//! Coordinates: x = horizontal, y = vertical, z = depth away from the camera.
//! The player sits on the z = 0 plane; enemies fly in from positive z.

/// Target frame rate of the frame driver (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per frame at the target frame rate.
pub const DT: f64 = 1.0 / FRAME_RATE as f64;

// --- Player ---

/// Player movement speed (units per second).
pub const PLAYER_SPEED: f64 = 5.0;

/// Horizontal clamp for the player position (|x| <= bound).
pub const PLAYER_BOUND_X: f64 = 5.0;

/// Vertical clamp for the player position (|y| <= bound).
pub const PLAYER_BOUND_Y: f64 = 3.0;

/// Player hitbox radius. An enemy closer than this ends the game.
pub const PLAYER_HITBOX_RADIUS: f64 = 0.5;

// --- Lasers ---

/// Laser forward speed (units per second, along +z).
pub const LASER_SPEED: f64 = 30.0;

/// Depth past which a laser is discarded.
pub const LASER_MAX_DEPTH: f64 = 50.0;

/// Laser-enemy hit distance.
pub const LASER_HIT_RADIUS: f64 = 0.5;

// --- Enemies ---

/// Depth at which new enemies appear.
pub const ENEMY_SPAWN_DEPTH: f64 = 40.0;

/// Half-width of the horizontal spawn band.
pub const ENEMY_SPAWN_HALF_WIDTH: f64 = 4.0;

/// Half-height of the vertical spawn band.
pub const ENEMY_SPAWN_HALF_HEIGHT: f64 = 2.5;

/// Depth behind the camera at which enemies are discarded.
pub const ENEMY_DESPAWN_DEPTH: f64 = -5.0;

/// Horizontal bound where a mover reverses its lateral direction.
pub const MOVER_LATERAL_BOUND: f64 = 4.0;

/// Seconds between enemy spawns.
pub const SPAWN_INTERVAL_SECS: f64 = 1.0;

/// Score from which movers join the spawn pool.
pub const MOVER_SCORE_THRESHOLD: u32 = 200;

/// Score from which tough enemies join the spawn pool.
pub const TOUGH_SCORE_THRESHOLD: u32 = 2000;

pub const WEAK_HEALTH: u32 = 1;
pub const WEAK_SPEED: f64 = 6.0;
pub const WEAK_POINTS: u32 = 10;

pub const MOVER_HEALTH: u32 = 2;
pub const MOVER_SPEED: f64 = 5.0;
pub const MOVER_LATERAL_SPEED: f64 = 3.0;
pub const MOVER_POINTS: u32 = 20;

pub const TOUGH_HEALTH: u32 = 3;
pub const TOUGH_SPEED: f64 = 3.5;
pub const TOUGH_POINTS: u32 = 50;

// --- Weapon ---

/// Maximum weapon level.
pub const MAX_WEAPON_LEVEL: u8 = 5;

/// Score needed for weapon levels 2 through 5.
pub const WEAPON_LEVEL_THRESHOLDS: [u32; 4] = [300, 800, 1500, 3000];

// --- Star field ---

/// Number of background stars.
pub const STAR_COUNT: usize = 150;

/// Half-width of the star field.
pub const STAR_FIELD_HALF_WIDTH: f64 = 20.0;

/// Half-height of the star field.
pub const STAR_FIELD_HALF_HEIGHT: f64 = 12.0;

/// Depth at which a star is recycled to the far field.
pub const STAR_NEAR_DEPTH: f64 = -5.0;

/// Nearest depth a recycled star is placed at.
pub const STAR_FAR_DEPTH_MIN: f64 = 40.0;

/// Farthest depth a star is placed at.
pub const STAR_FAR_DEPTH_MAX: f64 = 80.0;

pub const STAR_SPEED_MIN: f64 = 10.0;
pub const STAR_SPEED_MAX: f64 = 25.0;

pub const STAR_BRIGHTNESS_MIN: f32 = 0.3;
pub const STAR_BRIGHTNESS_MAX: f32 = 1.0;

// --- Display ---

pub const PLAYER_COLOR: [f32; 3] = [0.2, 0.6, 1.0];
pub const PLAYER_SIZE: f32 = 0.5;

pub const LASER_COLOR: [f32; 3] = [1.0, 0.2, 0.2];
pub const LASER_SIZE: f32 = 0.1;

pub const WEAK_COLOR: [f32; 3] = [0.2, 1.0, 0.2];
pub const MOVER_COLOR: [f32; 3] = [1.0, 0.6, 0.1];
pub const TOUGH_COLOR: [f32; 3] = [0.7, 0.2, 0.9];
pub const ENEMY_SIZE: f32 = 0.6;

pub const STAR_SIZE: f32 = 0.05;

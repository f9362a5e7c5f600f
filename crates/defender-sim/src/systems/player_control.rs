//! Player control system: applies the input snapshot to the player's ship.

use hecs::World;

use defender_core::components::Player;
use defender_core::constants::{PLAYER_BOUND_X, PLAYER_BOUND_Y, PLAYER_SPEED};
use defender_core::events::GameEvent;
use defender_core::input::InputState;
use defender_core::types::Position;

use crate::score::ScoreState;
use crate::systems::weapons;

/// Move and clamp the player, then fire a volley on a fresh shoot press.
pub fn run(
    world: &mut World,
    input: &InputState,
    dt: f64,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) {
    let mut volley: Option<(Position, u8)> = None;

    for (_entity, (player, pos)) in world.query_mut::<(&mut Player, &mut Position)>() {
        pos.x = (pos.x + input.axis_x() * PLAYER_SPEED * dt)
            .clamp(-PLAYER_BOUND_X, PLAYER_BOUND_X);
        pos.y = (pos.y + input.axis_y() * PLAYER_SPEED * dt)
            .clamp(-PLAYER_BOUND_Y, PLAYER_BOUND_Y);

        if input.shoot && !player.shoot_held {
            volley = Some((*pos, player.weapon_level));
        }
        player.shoot_held = input.shoot;
    }

    if let Some((origin, level)) = volley {
        let count = weapons::fire(world, origin, level);
        score.lasers_fired += count;
        events.push(GameEvent::LasersFired {
            count,
            weapon_level: level,
        });
    }
}

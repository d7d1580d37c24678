//! Shooting: turn the ship's shoot intent into laser entities.

use hecs::World;

use starfall_core::components::{Laser, Ship};
use starfall_core::constants::*;
use starfall_core::events::AudioEvent;
use starfall_core::types::Position;

use crate::run::RunState;
use crate::world_setup;

/// Fire if the intent flag is set, the cooldown elapsed, and the laser
/// cap allows it. Triple shot fans three lasers; the cap is re-checked
/// per laser so a nearly-full belt fires a partial spread.
pub fn run(world: &mut World, run: &mut RunState, audio: &mut Vec<AudioEvent>) {
    let Some((ship_pos, heading)) = fire_request(world, run) else {
        return;
    };

    let mut live = world.query::<&Laser>().iter().count() as u32;
    let spread: &[f64] = if run.powers.triple_active() {
        &[-TRIPLE_SPREAD, 0.0, TRIPLE_SPREAD]
    } else {
        &[0.0]
    };

    for offset in spread {
        if live >= run.tuning.laser_max {
            break;
        }
        let angle = heading + offset;
        let muzzle = Position::new(
            ship_pos.x + MUZZLE_OFFSET * SHIP_RADIUS * angle.cos(),
            ship_pos.y + MUZZLE_OFFSET * SHIP_RADIUS * angle.sin(),
        );
        world_setup::spawn_laser(world, muzzle, angle, run.tuning.laser_speed);
        run.shots_fired += 1;
        live += 1;
    }

    audio.push(AudioEvent::LaserFired);
}

/// Check the fire gates and arm the cooldown. Returns the ship pose
/// when a shot should happen this tick.
fn fire_request(world: &mut World, run: &RunState) -> Option<(Position, f64)> {
    let live = world.query::<&Laser>().iter().count() as u32;

    let mut request = None;
    for (_, (ship, pos)) in world.query_mut::<(&mut Ship, &Position)>() {
        if !ship.shooting || ship.dead || ship.shoot_cd > 0.0 {
            continue;
        }
        if live >= run.tuning.laser_max {
            continue;
        }
        ship.shoot_cd = run.shoot_cd();
        request = Some((*pos, ship.heading));
    }
    request
}

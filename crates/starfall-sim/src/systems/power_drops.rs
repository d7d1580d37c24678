//! Power-drop lifecycle and pickup.

use hecs::World;

use starfall_core::components::{PowerDrop, Ship};
use starfall_core::constants::*;
use starfall_core::enums::PowerKind;
use starfall_core::events::AudioEvent;
use starfall_core::types::{Position, Velocity};

use crate::combat;
use crate::run::RunState;
use crate::world_setup;

/// Age, move, and wrap drops; collect any within pickup range of a
/// living ship. Shield applies instantly as a charge, timed powers
/// refresh their timers.
pub fn run(
    world: &mut World,
    run: &mut RunState,
    audio: &mut Vec<AudioEvent>,
    despawn: &mut Vec<hecs::Entity>,
    ts: f64,
) {
    let ship = world
        .query::<(&Ship, &Position)>()
        .iter()
        .next()
        .map(|(_, (ship, pos))| (*pos, ship.dead));

    despawn.clear();
    let mut picked: Vec<PowerKind> = Vec::new();

    for (entity, (drop, pos, vel)) in
        world.query_mut::<(&mut PowerDrop, &mut Position, &Velocity)>()
    {
        drop.life -= DT;
        if drop.life <= 0.0 {
            despawn.push(entity);
            continue;
        }

        pos.x += vel.x * DT * ts;
        pos.y += vel.y * DT * ts;
        pos.wrap_axes();

        if let Some((ship_pos, dead)) = ship {
            if !dead && ship_pos.distance_to(pos) < SHIP_RADIUS + drop.radius + PICKUP_MARGIN {
                picked.push(drop.kind);
                despawn.push(entity);
            }
        }
    }

    for entity in despawn.drain(..) {
        let _ = world.despawn(entity);
    }

    for kind in picked {
        apply_power(world, run, audio, kind);
    }
}

fn apply_power(world: &mut World, run: &mut RunState, audio: &mut Vec<AudioEvent>, kind: PowerKind) {
    let at = combat::ship_position(world).unwrap_or_default();

    if kind == PowerKind::Shield {
        for (_, ship) in world.query_mut::<&mut Ship>() {
            ship.shield = 1;
        }
        world_setup::spawn_floater(world, at, "SHIELD!", FLOATER_LIFE);
    } else {
        run.powers.activate(kind);
        world_setup::spawn_floater(world, at, format!("{}!", kind.label()), FLOATER_LIFE);
    }

    audio.push(AudioEvent::PowerPickup { kind });
}

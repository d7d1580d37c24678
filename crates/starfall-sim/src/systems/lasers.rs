//! Laser lifecycle: range cutoff, impact flash countdown, integration,
//! trail upkeep, and edge wrapping.

use hecs::World;

use starfall_core::components::Laser;
use starfall_core::constants::*;
use starfall_core::types::{Position, Velocity};

use crate::run::RunState;

/// A laser that exceeds its range without ever hitting anything breaks
/// the precision streak.
pub fn run(world: &mut World, run: &mut RunState, despawn: &mut Vec<hecs::Entity>, ts: f64) {
    despawn.clear();

    for (entity, (laser, pos, vel)) in
        world.query_mut::<(&mut Laser, &mut Position, &Velocity)>()
    {
        if laser.dist > LASER_DIST * PLAYFIELD_WIDTH {
            if !laser.hit {
                run.hit_streak = 0;
            }
            despawn.push(entity);
            continue;
        }

        if laser.explode_ticks > 0 {
            laser.explode_ticks -= 1;
            if laser.explode_ticks == 0 {
                despawn.push(entity);
                continue;
            }
        } else {
            pos.x += vel.x * DT * ts;
            pos.y += vel.y * DT * ts;
            laser.dist += vel.speed() * DT * ts;

            laser.trail.push(*pos);
            if laser.trail.len() > LASER_TRAIL_MAX {
                laser.trail.remove(0);
            }
        }

        pos.wrap_axes();
    }

    for entity in despawn.drain(..) {
        let _ = world.despawn(entity);
    }
}

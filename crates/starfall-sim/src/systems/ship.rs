//! Ship control, integration, explosion resolution, and blink cadence.

use hecs::World;

use starfall_core::components::{Laser, Ship};
use starfall_core::constants::*;
use starfall_core::types::{Position, Velocity};

use crate::combat;
use crate::run::RunState;
use crate::world_setup;

/// What explosion resolution decided this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipOutcome {
    Continue,
    /// Lives are exhausted; the caller must end the run.
    OutOfLives,
}

/// Steering and drive: smooth the angular velocity toward its target,
/// decay the shoot cooldown and grace window, then apply thrust or
/// friction and clamp speed. Runs before shooting and integration.
pub fn steer(world: &mut World, run: &RunState) {
    let max_speed = run.tuning.max_speed * TICK_RATE as f64;

    for (_, (ship, vel)) in world.query_mut::<(&mut Ship, &mut Velocity)>() {
        ship.rot += (ship.rot_target - ship.rot) * ROT_SMOOTHING;
        ship.shoot_cd = (ship.shoot_cd - DT).max(0.0);
        ship.grace = (ship.grace - DT).max(0.0);

        if ship.thrusting && !ship.dead {
            vel.x += run.tuning.thrust * ship.heading.cos();
            vel.y += run.tuning.thrust * ship.heading.sin();
        } else {
            vel.x -= run.tuning.friction * vel.x * DT;
            vel.y -= run.tuning.friction * vel.y * DT;
        }

        vel.clamp_speed(max_speed);
    }
}

/// Integrate the ship, resolve a finished explosion (life loss and
/// respawn), and advance the invulnerability blink.
pub fn integrate(world: &mut World, run: &mut RunState, ts: f64) -> ShipOutcome {
    let mut respawn = false;
    let mut out_of_lives = false;

    for (_, (ship, pos, vel)) in world.query_mut::<(&mut Ship, &mut Position, &Velocity)>() {
        let exploding = ship.explode_ticks > 0;

        if !exploding && !ship.dead {
            ship.heading += ship.rot * ts;
            pos.x += vel.x * DT * ts;
            pos.y += vel.y * DT * ts;
            pos.wrap_padded(SHIP_RADIUS);
        } else if exploding {
            ship.explode_ticks -= 1;
            if ship.explode_ticks == 0 {
                run.lives = run.lives.saturating_sub(1);
                run.deaths += 1;
                if run.lives == 0 {
                    out_of_lives = true;
                } else {
                    respawn = true;
                }
            }
        }

        if ship.blink_num > 0 && !ship.dead {
            ship.blink_ticks -= 1;
            if ship.blink_ticks == 0 {
                ship.blink_ticks = world_setup::blink_ticks();
                ship.blink_num -= 1;
            }
        }
    }

    if out_of_lives {
        return ShipOutcome::OutOfLives;
    }

    if respawn {
        respawn_ship(world, run);
    }

    ShipOutcome::Continue
}

/// Replace the ship wholesale at the center and clear all lasers in
/// flight. Losing a life also drops the combo.
fn respawn_ship(world: &mut World, run: &mut RunState) {
    let lasers: Vec<hecs::Entity> = world.query::<&Laser>().iter().map(|(e, _)| e).collect();
    for entity in lasers {
        let _ = world.despawn(entity);
    }

    for (_, (ship, pos, vel)) in world.query_mut::<(&mut Ship, &mut Position, &mut Velocity)>() {
        *ship = world_setup::fresh_ship(&run.tuning);
        *pos = Position::center();
        *vel = Velocity::default();
    }

    combat::reset_combo(run);
}

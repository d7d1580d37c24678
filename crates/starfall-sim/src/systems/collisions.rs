//! Collision resolution: lasers against asteroids, lasers against the
//! UFO, and the ship against asteroids.
//!
//! Split children spawned this tick are not revisited by the laser
//! pass, but the ship pass sees them.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{Asteroid, Laser, Ship, Ufo};
use starfall_core::constants::*;
use starfall_core::enums::GamePhase;
use starfall_core::events::AudioEvent;
use starfall_core::types::{Position, Velocity};

use crate::combat;
use crate::run::RunState;
use crate::systems::ufo;
use crate::world_setup;

pub fn run(
    world: &mut World,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    phase: &mut GamePhase,
    audio: &mut Vec<AudioEvent>,
) {
    lasers_vs_asteroids(world, run, rng, phase, audio);
    lasers_vs_ufo(world, run, rng, audio);
    ship_vs_asteroids(world, run, rng, phase, audio);
}

/// Each asteroid takes at most one laser hit per tick: the laser marks
/// itself hit, starts its impact flash, and the asteroid is destroyed.
fn lasers_vs_asteroids(
    world: &mut World,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    phase: &mut GamePhase,
    audio: &mut Vec<AudioEvent>,
) {
    let asteroids: Vec<(hecs::Entity, Position, f64)> = world
        .query::<(&Asteroid, &Position)>()
        .iter()
        .map(|(entity, (roid, pos))| (entity, *pos, roid.radius))
        .collect();
    let lasers: Vec<hecs::Entity> = world.query::<&Laser>().iter().map(|(e, _)| e).collect();

    for (roid_entity, roid_pos, radius) in asteroids {
        for &laser_entity in &lasers {
            let hit_at = match world.query_one_mut::<(&Laser, &Position)>(laser_entity) {
                Ok((laser, pos)) if laser.explode_ticks == 0 => {
                    if roid_pos.distance_to(pos) < radius {
                        Some(*pos)
                    } else {
                        None
                    }
                }
                _ => None,
            };

            if let Some(at) = hit_at {
                if let Ok(laser) = world.query_one_mut::<&mut Laser>(laser_entity) {
                    laser.hit = true;
                    laser.explode_ticks = world_setup::laser_explode_ticks();
                }
                combat::destroy_asteroid(world, rng, run, phase, audio, roid_entity, at);
                break;
            }
        }
    }
}

/// A laser inside the UFO's padded radius kills it outright.
fn lasers_vs_ufo(
    world: &mut World,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
) {
    let Some((ufo_entity, ufo_pos, radius, score)) = world
        .query::<(&Ufo, &Position)>()
        .iter()
        .next()
        .map(|(entity, (ufo, pos))| (entity, *pos, ufo.radius, ufo.class.score()))
    else {
        return;
    };

    let lasers: Vec<hecs::Entity> = world.query::<&Laser>().iter().map(|(e, _)| e).collect();

    for laser_entity in lasers {
        let hit = match world.query_one_mut::<(&Laser, &Position)>(laser_entity) {
            Ok((laser, pos)) => {
                laser.explode_ticks == 0 && ufo_pos.distance_to(pos) < radius + UFO_HIT_MARGIN
            }
            Err(_) => false,
        };
        if !hit {
            continue;
        }

        if let Ok(laser) = world.query_one_mut::<&mut Laser>(laser_entity) {
            laser.hit = true;
            laser.explode_ticks = world_setup::laser_explode_ticks();
        }

        world_setup::spawn_particles(world, rng, ufo_pos, 70, 360.0, 0.25, 1.1, 1.1, 2.8);
        combat::add_score(world, run, score, ufo_pos);
        combat::bump_combo(world, run);
        combat::precision_hit(world, run);
        run.ufo_kills += 1;

        audio.push(AudioEvent::UfoHit);
        ufo::despawn_ufo(world, ufo_entity, audio);
        break;
    }
}

/// Ramming an asteroid: a shield charge absorbs it and bounces the ship
/// back; otherwise the ship explodes and takes the asteroid with it.
fn ship_vs_asteroids(
    world: &mut World,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    phase: &mut GamePhase,
    audio: &mut Vec<AudioEvent>,
) {
    let Some((dead, explode, blink, grace, ship_pos)) =
        world.query::<(&Ship, &Position)>().iter().next().map(
            |(_, (ship, pos))| (ship.dead, ship.explode_ticks, ship.blink_num, ship.grace, *pos),
        )
    else {
        return;
    };
    if dead || explode > 0 || blink > 0 || grace > 0.0 {
        return;
    }

    let asteroids: Vec<(hecs::Entity, Position, f64)> = world
        .query::<(&Asteroid, &Position)>()
        .iter()
        .map(|(entity, (roid, pos))| (entity, *pos, roid.radius))
        .collect();

    for (roid_entity, roid_pos, radius) in asteroids {
        if ship_pos.distance_to(&roid_pos) >= SHIP_RADIUS + radius {
            continue;
        }

        let mut shielded = false;
        for (_, (ship, vel)) in world.query_mut::<(&mut Ship, &mut Velocity)>() {
            if ship.shield > 0 {
                ship.shield = 0;
                ship.grace = HIT_GRACE_SECS;
                vel.x *= -SHIELD_BOUNCE;
                vel.y *= -SHIELD_BOUNCE;
                shielded = true;
            }
        }

        if shielded {
            world_setup::spawn_floater(world, ship_pos, "SHIELD BROKE", FLOATER_LIFE);
            combat::reset_combo(run);
            audio.push(AudioEvent::ShieldBroken);
        } else {
            combat::reset_combo(run);
            combat::explode_ship(world, rng, audio);
            combat::destroy_asteroid(world, rng, run, phase, audio, roid_entity, ship_pos);
        }
        break;
    }
}

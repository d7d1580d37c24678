//! UFO spawn clock, flight, aimed fire, and bullet resolution.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{Ship, Ufo, UfoBullet};
use starfall_core::constants::*;
use starfall_core::events::AudioEvent;
use starfall_core::types::{Position, Velocity};

use crate::combat;
use crate::run::RunState;
use crate::world_setup;

/// One UFO pass: spawn roll, flight and fire, despawn, then bullets.
pub fn run(
    world: &mut World,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    despawn: &mut Vec<hecs::Entity>,
    ts: f64,
) {
    spawn_clock(world, run, rng, audio);
    update_ufo(world, run, rng, audio, ts);
    update_bullets(world, run, rng, audio, despawn, ts);
}

/// The spawn clock runs even while a UFO is alive; a new roll only
/// happens once the field is clear and the clock has lapsed. Cadence
/// tightens with wave, capped; the roll improves with wave and score.
fn spawn_clock(
    world: &mut World,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
) {
    run.ufo_spawn_timer -= DT;

    let present = world.query::<&Ufo>().iter().next().is_some();
    if present || run.ufo_spawn_timer > 0.0 {
        return;
    }

    let next = 10.0 - (run.wave as f64 * 0.5).min(6.0);
    run.ufo_spawn_timer = (next / run.tuning.ufo_rate).clamp(3.5, 12.0);

    let chance =
        0.25 + (run.wave as f64 * 0.03).min(0.35) + (run.score as f64 / 1200.0).min(0.2);
    if rng.gen::<f64>() < chance {
        world_setup::spawn_ufo(world, rng, &run.tuning);
        world_setup::spawn_floater(
            world,
            Position::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT - 90.0),
            "UFO!",
            FLOATER_LIFE,
        );
        audio.push(AudioEvent::UfoSpawned);
    }
}

fn update_ufo(
    world: &mut World,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    ts: f64,
) {
    let ship_pos = combat::ship_position(world);

    let mut shot_from: Option<Position> = None;
    let mut gone: Option<hecs::Entity> = None;

    for (entity, (ufo, pos, vel)) in world.query_mut::<(&mut Ufo, &mut Position, &Velocity)>() {
        ufo.life -= DT;
        pos.x += vel.x * DT * ts;

        ufo.shoot_timer -= DT;
        if ufo.shoot_timer <= 0.0 {
            ufo.shoot_timer = 0.9 + rng.gen::<f64>() * ufo.class.shot_jitter();
            shot_from = Some(*pos);
        }

        let exited = (ufo.dir > 0.0 && pos.x > PLAYFIELD_WIDTH + UFO_EXIT_MARGIN)
            || (ufo.dir < 0.0 && pos.x < -UFO_EXIT_MARGIN);
        if ufo.life <= 0.0 || exited {
            gone = Some(entity);
        }
    }

    if let (Some(from), Some(target)) = (shot_from, ship_pos) {
        world_setup::spawn_ufo_bullet(world, from, target);
    }

    if let Some(entity) = gone {
        despawn_ufo(world, entity, audio);
    }
}

/// Remove the UFO and every bullet it has in flight.
pub fn despawn_ufo(world: &mut World, entity: hecs::Entity, audio: &mut Vec<AudioEvent>) {
    let _ = world.despawn(entity);
    let bullets: Vec<hecs::Entity> = world.query::<&UfoBullet>().iter().map(|(e, _)| e).collect();
    for bullet in bullets {
        let _ = world.despawn(bullet);
    }
    audio.push(AudioEvent::UfoGone);
}

/// Age, move, and wrap bullets, then resolve hits on the ship. The ship
/// is only hittable when alive, not exploding, past its spawn blinks,
/// and outside the post-hit grace window.
fn update_bullets(
    world: &mut World,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    despawn: &mut Vec<hecs::Entity>,
    ts: f64,
) {
    despawn.clear();
    let mut live: Vec<hecs::Entity> = Vec::new();

    for (entity, (bullet, pos, vel)) in
        world.query_mut::<(&mut UfoBullet, &mut Position, &Velocity)>()
    {
        bullet.life -= DT;
        if bullet.life <= 0.0 {
            despawn.push(entity);
            continue;
        }
        pos.x += vel.x * DT * ts;
        pos.y += vel.y * DT * ts;
        pos.wrap_axes();
        live.push(entity);
    }

    for entity in despawn.drain(..) {
        let _ = world.despawn(entity);
    }

    for entity in live {
        let hit = {
            let Some(ship) = world.query::<(&Ship, &Position)>().iter().next().map(
                |(_, (ship, pos))| (ship.dead, ship.explode_ticks, ship.blink_num, ship.grace, *pos),
            ) else {
                break;
            };
            let (dead, explode, blink, grace, ship_pos) = ship;
            if dead || explode > 0 || blink > 0 || grace > 0.0 {
                break;
            }

            match world.query_one_mut::<(&UfoBullet, &Position)>(entity) {
                Ok((bullet, pos)) => ship_pos.distance_to(pos) < SHIP_RADIUS + bullet.radius,
                Err(_) => false,
            }
        };

        if hit {
            let _ = world.despawn(entity);
            shield_or_explode(world, run, rng, audio);
        }
    }
}

/// A shield absorbs the hit and opens the grace window; otherwise the
/// ship explodes. Either way the combo is gone.
fn shield_or_explode(
    world: &mut World,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
) {
    let mut shielded = false;
    for (_, ship) in world.query_mut::<&mut Ship>() {
        if ship.shield > 0 {
            ship.shield = 0;
            ship.grace = HIT_GRACE_SECS;
            shielded = true;
        }
    }

    if shielded {
        let at = combat::ship_position(world).unwrap_or_default();
        world_setup::spawn_floater(world, at, "SHIELD BROKE", FLOATER_LIFE);
        combat::reset_combo(run);
        audio.push(AudioEvent::ShieldBroken);
    } else {
        combat::reset_combo(run);
        combat::explode_ship(world, rng, audio);
    }
}

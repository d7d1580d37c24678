//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot. Read-only; it never modifies the world.

use hecs::World;

use starfall_core::components::*;
use starfall_core::enums::{Difficulty, GameMode, GamePhase};
use starfall_core::events::AudioEvent;
use starfall_core::state::*;
use starfall_core::types::{Position, SimTime, Velocity};

use crate::run::RunState;

/// Build a complete snapshot of the current tick.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    mode: GameMode,
    difficulty: Difficulty,
    run: &RunState,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        mode,
        difficulty,
        wave: run.wave,
        score: run.score,
        best: run.best,
        lives: run.lives,
        time_left: run.time_left,
        countdown: run.hold.remaining(),
        combo: ComboView {
            streak: run.combo_streak,
            mult: run.combo_mult,
            time_left: run.combo_time,
        },
        active_powers: run.powers.views(),
        ship: build_ship(world),
        lasers: build_lasers(world),
        asteroids: build_asteroids(world),
        ufo: build_ufo(world),
        ufo_bullets: build_ufo_bullets(world),
        power_drops: build_power_drops(world),
        particles: build_particles(world),
        floaters: build_floaters(world),
        stats: run.stats_view(),
        audio_events,
        summary: run.summary.clone(),
    }
}

fn build_ship(world: &World) -> Option<ShipView> {
    world
        .query::<(&Ship, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (ship, pos, vel))| ShipView {
            position: *pos,
            velocity: *vel,
            heading: ship.heading,
            radius: starfall_core::constants::SHIP_RADIUS,
            thrusting: ship.thrusting,
            shield: ship.shield,
            blink_on: ship.blink_num % 2 == 0,
            invulnerable: ship.blink_num > 0,
            exploding: ship.explode_ticks > 0,
            dead: ship.dead,
        })
}

fn build_lasers(world: &World) -> Vec<LaserView> {
    world
        .query::<(&Laser, &Position)>()
        .iter()
        .map(|(_, (laser, pos))| LaserView {
            position: *pos,
            trail: laser.trail.clone(),
            exploding: laser.explode_ticks > 0,
        })
        .collect()
}

fn build_asteroids(world: &World) -> Vec<AsteroidView> {
    world
        .query::<(&Asteroid, &Position)>()
        .iter()
        .map(|(_, (roid, pos))| AsteroidView {
            position: *pos,
            tier: roid.tier,
            radius: roid.radius,
            angle: roid.angle,
            vert: roid.vert,
            offs: roid.offs.clone(),
        })
        .collect()
}

fn build_ufo(world: &World) -> Option<UfoView> {
    world
        .query::<(&Ufo, &Position)>()
        .iter()
        .next()
        .map(|(_, (ufo, pos))| UfoView {
            position: *pos,
            class: ufo.class,
            radius: ufo.radius,
        })
}

fn build_ufo_bullets(world: &World) -> Vec<UfoBulletView> {
    world
        .query::<(&UfoBullet, &Position)>()
        .iter()
        .map(|(_, (bullet, pos))| UfoBulletView {
            position: *pos,
            radius: bullet.radius,
        })
        .collect()
}

fn build_power_drops(world: &World) -> Vec<PowerDropView> {
    world
        .query::<(&PowerDrop, &Position)>()
        .iter()
        .map(|(_, (drop, pos))| PowerDropView {
            position: *pos,
            kind: drop.kind,
            radius: drop.radius,
            life: drop.life,
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Particle, &Position)>()
        .iter()
        .map(|(_, (particle, pos))| ParticleView {
            position: *pos,
            life: particle.life,
            max_life: particle.max_life,
            size: particle.size,
        })
        .collect()
}

fn build_floaters(world: &World) -> Vec<FloaterView> {
    world
        .query::<(&Floater, &Position)>()
        .iter()
        .map(|(_, (floater, pos))| FloaterView {
            position: *pos,
            text: floater.text.clone(),
            life: floater.life,
            max_life: floater.max_life,
        })
        .collect()
}

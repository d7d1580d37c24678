//! Entity spawn factories.
//!
//! Creates the ship, asteroids, lasers, the UFO, its bullets, power
//! drops, and the cosmetic particles and floaters with appropriate
//! component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::*;
use starfall_core::constants::*;
use starfall_core::enums::{PowerKind, RoidTier, UfoClass};
use starfall_core::tuning::Tuning;
use starfall_core::types::{Position, Velocity};

/// Ticks per invulnerability blink.
pub fn blink_ticks() -> u32 {
    (SHIP_BLINK_DUR * TICK_RATE as f64).ceil() as u32
}

/// Ticks of the ship explosion animation.
pub fn explode_ticks() -> u32 {
    (SHIP_EXPLODE_DUR * TICK_RATE as f64).ceil() as u32
}

/// Ticks of the laser impact flash.
pub fn laser_explode_ticks() -> u32 {
    (LASER_EXPLODE_DUR * TICK_RATE as f64).ceil() as u32
}

/// A fresh ship component: centered spawn heading, full invulnerability
/// blinks, and the tuning's starting shield charge.
pub fn fresh_ship(tuning: &Tuning) -> Ship {
    let inv_dur = SHIP_INV_DUR * tuning.invuln_mul;
    Ship {
        heading: std::f64::consts::FRAC_PI_2,
        rot: 0.0,
        rot_target: 0.0,
        thrusting: false,
        shooting: false,
        shoot_cd: 0.0,
        explode_ticks: 0,
        blink_num: (inv_dur / SHIP_BLINK_DUR).ceil() as u32,
        blink_ticks: blink_ticks(),
        shield: tuning.start_shield.min(1),
        grace: 0.0,
        dead: false,
    }
}

/// Spawn the player's ship at the center of the playfield.
pub fn spawn_ship(world: &mut World, tuning: &Tuning) -> hecs::Entity {
    world.spawn((fresh_ship(tuning), Position::center(), Velocity::default()))
}

fn random_sign(rng: &mut ChaCha8Rng) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// Spawn an asteroid of the given tier. Axis speeds are rolled
/// independently, scaled by the wave ramp and the split multiplier.
pub fn spawn_asteroid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    wave: u32,
    position: Position,
    tier: RoidTier,
    speed_mult: f64,
) -> hecs::Entity {
    let speed = tuning.roid_speed * (1.0 + WAVE_SPEED_RAMP * wave as f64) * speed_mult;

    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
    let vert =
        (rng.gen::<f64>() * (ROIDS_VERT as f64 + 1.0) + ROIDS_VERT as f64 / 2.0).floor() as u32;
    let vx = rng.gen::<f64>() * speed * random_sign(rng);
    let vy = rng.gen::<f64>() * speed * random_sign(rng);

    let mut offs = Vec::with_capacity(vert as usize);
    for _ in 0..vert {
        offs.push(rng.gen::<f64>() * ROIDS_JAG * 2.0 + 1.0 - ROIDS_JAG);
    }

    world.spawn((
        Asteroid {
            tier,
            radius: tier.radius(),
            angle,
            vert,
            offs,
        },
        position,
        Velocity::new(vx, vy),
    ))
}

/// Spawn one laser at the muzzle point, heading along `angle`.
pub fn spawn_laser(world: &mut World, muzzle: Position, angle: f64, speed: f64) -> hecs::Entity {
    world.spawn((
        Laser {
            dist: 0.0,
            explode_ticks: 0,
            hit: false,
            trail: vec![muzzle],
        },
        muzzle,
        Velocity::from_heading(angle, speed),
    ))
}

/// Spawn the UFO just off a random side edge, drifting across.
pub fn spawn_ufo(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning) -> hecs::Entity {
    let dir = random_sign(rng);
    let class = if rng.gen::<f64>() < UFO_SMALL_PROB {
        UfoClass::Small
    } else {
        UfoClass::Large
    };

    let y = (UFO_BAND_MARGIN + rng.gen::<f64>() * (PLAYFIELD_HEIGHT - 2.0 * UFO_BAND_MARGIN))
        .clamp(UFO_BAND_MARGIN, PLAYFIELD_HEIGHT - UFO_BAND_MARGIN);
    let x = if dir > 0.0 {
        -UFO_EDGE_OFFSET
    } else {
        PLAYFIELD_WIDTH + UFO_EDGE_OFFSET
    };

    let speed = class.base_speed() * tuning.ufo_rate;

    world.spawn((
        Ufo {
            class,
            radius: class.radius(),
            dir,
            shoot_timer: 0.9 + rng.gen::<f64>() * 0.8,
            life: UFO_LIFE_SECS,
        },
        Position::new(x, y),
        Velocity::new(speed * dir, 0.0),
    ))
}

/// Spawn a UFO bullet aimed at the ship's current position.
pub fn spawn_ufo_bullet(world: &mut World, from: Position, target: Position) -> hecs::Entity {
    let angle = (target.y - from.y).atan2(target.x - from.x);
    world.spawn((
        UfoBullet {
            radius: UFO_BULLET_RADIUS,
            life: UFO_BULLET_LIFE,
        },
        from,
        Velocity::from_heading(angle, UFO_BULLET_SPEED),
    ))
}

/// Spawn a drifting power-up drop.
pub fn spawn_power_drop(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Position,
    kind: PowerKind,
) -> hecs::Entity {
    let vx = rng.gen::<f64>() * 20.0 * random_sign(rng);
    let vy = rng.gen::<f64>() * 24.0 * random_sign(rng);
    world.spawn((
        PowerDrop {
            kind,
            radius: DROP_RADIUS,
            life: DROP_LIFE,
        },
        position,
        Velocity::new(vx, vy),
    ))
}

/// Spawn a burst of explosion particles around a point.
#[allow(clippy::too_many_arguments)]
pub fn spawn_particles(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: Position,
    count: u32,
    base_speed: f64,
    life_min: f64,
    life_max: f64,
    size_min: f64,
    size_max: f64,
) {
    for _ in 0..count {
        let angle = rng.gen::<f64>() * std::f64::consts::TAU;
        let speed = base_speed * (0.35 + rng.gen::<f64>() * 0.9);
        let life = life_min + rng.gen::<f64>() * (life_max - life_min);
        let size = size_min + rng.gen::<f64>() * (size_max - size_min);
        world.spawn((
            Particle {
                life,
                max_life: life,
                size,
            },
            center,
            Velocity::from_heading(angle, speed),
        ));
    }
}

/// Spawn a rising text floater.
pub fn spawn_floater(world: &mut World, position: Position, text: impl Into<String>, life: f64) {
    world.spawn((
        Floater {
            text: text.into(),
            life,
            max_life: life,
        },
        position,
        Velocity::new(0.0, FLOATER_RISE),
    ));
}

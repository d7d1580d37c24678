//! Shared combat helpers: scoring, combo bookkeeping, asteroid
//! destruction, power drops, and the ship explosion.
//!
//! These are called from more than one system and must keep their exact
//! ordering: score is awarded with the combo multiplier as it was
//! before the kill bumps it.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{Asteroid, Ship};
use starfall_core::constants::*;
use starfall_core::enums::{GamePhase, PowerKind};
use starfall_core::events::AudioEvent;
use starfall_core::types::Position;

use crate::run::RunState;
use crate::world_setup;

/// Ship position, if a ship entity exists.
pub fn ship_position(world: &World) -> Option<Position> {
    world
        .query::<(&Ship, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

/// Award score: base, doubled under score2x, scaled by the combo
/// multiplier, floored. Spawns a "+n" floater at the award point.
pub fn add_score(world: &mut World, run: &mut RunState, base: u32, at: Position) {
    let mult = run.powers.score_mult() * run.combo_mult;
    let add = base * mult;
    run.score += add;
    run.best = run.best.max(run.score);
    world_setup::spawn_floater(world, at, format!("+{}", add), 0.8);
}

/// Register a kill for the combo: rearm the window, step the multiplier
/// every third kill, and announce every sixth.
pub fn bump_combo(world: &mut World, run: &mut RunState) {
    run.combo_streak += 1;
    run.combo_time = COMBO_WINDOW_SECS;
    run.combo_mult = (1 + run.combo_streak / COMBO_STEP).clamp(1, COMBO_MAX_MULT);
    run.max_combo = run.max_combo.max(run.combo_mult);

    if run.combo_streak % 6 == 0 {
        world_setup::spawn_floater(
            world,
            Position::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT * 0.65),
            format!("COMBO x{}!", run.combo_mult),
            1.1,
        );
    }
}

/// Drop the combo and the precision streak.
pub fn reset_combo(run: &mut RunState) {
    run.combo_streak = 0;
    run.combo_mult = 1;
    run.combo_time = 0.0;
    run.hit_streak = 0;
}

/// Register a landed shot. Every fifth consecutive hit pays a flat
/// bonus, combo-scaled like any other score.
pub fn precision_hit(world: &mut World, run: &mut RunState) {
    run.shots_hit += 1;
    run.hit_streak += 1;

    if run.hit_streak >= PRECISION_STREAK {
        run.hit_streak = 0;
        world_setup::spawn_floater(
            world,
            Position::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT * 0.67),
            format!("PRECISION +{}", PRECISION_BONUS),
            1.0,
        );
        let at = ship_position(world).unwrap_or_default();
        add_score(world, run, PRECISION_BONUS, at);
    }
}

/// Start the ship explosion animation.
pub fn explode_ship(world: &mut World, rng: &mut ChaCha8Rng, audio: &mut Vec<AudioEvent>) {
    let at = ship_position(world).unwrap_or_default();
    for (_, ship) in world.query_mut::<&mut Ship>() {
        ship.explode_ticks = world_setup::explode_ticks();
    }
    world_setup::spawn_particles(world, rng, at, 120, 420.0, 0.25, 1.3, 1.4, 3.5);
    world_setup::spawn_particles(world, rng, at, 80, 360.0, 0.25, 1.1, 1.1, 3.0);
    world_setup::spawn_particles(world, rng, at, 60, 300.0, 0.2, 0.9, 1.0, 2.2);
    audio.push(AudioEvent::ShipExploded);
}

/// Roll the power-drop chance at a destruction site and spawn a drop on
/// success, with its label floater.
pub fn roll_power_drop(world: &mut World, rng: &mut ChaCha8Rng, run: &RunState, at: Position) {
    let base = DROP_BASE_CHANCE + (run.wave as f64 * DROP_WAVE_BONUS).min(DROP_WAVE_BONUS_CAP);
    let chance = (base * run.tuning.drop_chance_mul).clamp(0.0, DROP_CHANCE_CAP);
    if rng.gen::<f64>() > chance {
        return;
    }

    let roll = rng.gen::<f64>();
    let kind = if roll < 0.2 {
        PowerKind::Shield
    } else if roll < 0.45 {
        PowerKind::Triple
    } else if roll < 0.62 {
        PowerKind::Rapid
    } else if roll < 0.8 {
        PowerKind::Score2x
    } else {
        PowerKind::Slow
    };

    world_setup::spawn_power_drop(world, rng, at, kind);
    world_setup::spawn_floater(world, at, kind.label(), 0.8);
}

/// Destroy an asteroid: particles, drop roll, score, combo, precision,
/// splits, removal. Clearing the last asteroid enters the wave-clear
/// hold.
#[allow(clippy::too_many_arguments)]
pub fn destroy_asteroid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    run: &mut RunState,
    phase: &mut GamePhase,
    audio: &mut Vec<AudioEvent>,
    entity: hecs::Entity,
    hit_at: Position,
) {
    let Ok((pos, tier, radius)) = world
        .query_one_mut::<(&Position, &Asteroid)>(entity)
        .map(|(pos, roid)| (*pos, roid.tier, roid.radius))
    else {
        return;
    };

    let size_factor = radius / (ROID_SIZE / 2.0);
    let count = (18.0 + 22.0 * size_factor).floor() as u32;
    world_setup::spawn_particles(world, rng, pos, count, 220.0, 0.25, 0.7, 1.2, 2.6);

    roll_power_drop(world, rng, run, pos);
    add_score(world, run, tier.score(), hit_at);
    bump_combo(world, run);
    precision_hit(world, run);

    if let Some((child, speed_mult)) = tier.split() {
        for _ in 0..2 {
            world_setup::spawn_asteroid(world, rng, &run.tuning, run.wave, pos, child, speed_mult);
        }
    }

    let _ = world.despawn(entity);
    audio.push(AudioEvent::AsteroidHit { tier });

    let remaining = world.query::<&Asteroid>().iter().count();
    if remaining == 0 {
        *phase = GamePhase::WaveClear;
        run.hold.reset(WAVE_CLEAR_SECS);
        audio.push(AudioEvent::WaveCleared);

        let center = Position::center();
        world_setup::spawn_particles(world, rng, center, 90, 320.0, 0.25, 1.2, 1.2, 2.8);
        world_setup::spawn_particles(world, rng, center, 70, 300.0, 0.25, 1.0, 1.2, 2.6);
    }
}

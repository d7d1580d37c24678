//! Wave construction: the repeating size pattern, contract extras, and
//! safe placement away from the ship.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::Asteroid;
use starfall_core::constants::*;
use starfall_core::enums::RoidTier;
use starfall_core::types::Position;

use crate::combat;
use crate::run::RunState;
use crate::world_setup;

/// Asteroid counts (large, medium, small) for a zero-based wave index.
/// The pattern repeats every four waves.
pub fn wave_pattern(wave: u32) -> (u32, u32, u32) {
    match wave % 4 {
        0 => (1, 3, 6),
        1 => (3, 0, 2),
        2 => (0, 6, 0),
        _ => (2, 2, 4),
    }
}

/// Replace the field with a fresh wave. Contract extras spawn as
/// mediums. Placement rejects positions inside the ship's safe zone.
pub fn create_wave(world: &mut World, rng: &mut ChaCha8Rng, run: &RunState) {
    let leftovers: Vec<hecs::Entity> = world.query::<&Asteroid>().iter().map(|(e, _)| e).collect();
    for entity in leftovers {
        let _ = world.despawn(entity);
    }

    let ship_pos = combat::ship_position(world).unwrap_or_else(Position::center);
    let (large, medium, small) = wave_pattern(run.wave);

    spawn_count(world, rng, run, ship_pos, large, RoidTier::Large, 1.0);
    spawn_count(
        world,
        rng,
        run,
        ship_pos,
        medium,
        RoidTier::Medium,
        SPLIT_SPEED_MEDIUM,
    );
    spawn_count(
        world,
        rng,
        run,
        ship_pos,
        small,
        RoidTier::Small,
        SPLIT_SPEED_SMALL,
    );
    spawn_count(
        world,
        rng,
        run,
        ship_pos,
        run.tuning.extra_roids,
        RoidTier::Medium,
        SPLIT_SPEED_MEDIUM,
    );
}

fn spawn_count(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    run: &RunState,
    ship_pos: Position,
    count: u32,
    tier: RoidTier,
    speed_mult: f64,
) {
    for _ in 0..count {
        let pos = safe_position(rng, ship_pos);
        world_setup::spawn_asteroid(world, rng, &run.tuning, run.wave, pos, tier, speed_mult);
    }
}

fn safe_position(rng: &mut ChaCha8Rng, ship_pos: Position) -> Position {
    loop {
        let pos = Position::new(
            (rng.gen::<f64>() * PLAYFIELD_WIDTH).floor(),
            (rng.gen::<f64>() * PLAYFIELD_HEIGHT).floor(),
        );
        if ship_pos.distance_to(&pos) >= ROID_SIZE * SAFE_SPAWN_FACTOR + SHIP_RADIUS {
            return pos;
        }
    }
}

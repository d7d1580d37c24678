//! Engine integration tests.
//!
//! Determinism is asserted structurally: serialize snapshots and
//! compare the JSON strings.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::commands::PlayerCommand;
use starfall_core::components::{Asteroid, Laser, Ship};
use starfall_core::constants::*;
use starfall_core::enums::*;
use starfall_core::types::{Position, Velocity};

use crate::combat;
use crate::engine::{GameEngine, SimConfig};
use crate::systems;
use crate::systems::wave_spawner::wave_pattern;
use crate::world_setup;

fn engine_with(mode: GameMode, difficulty: Difficulty, seed: u64) -> GameEngine {
    GameEngine::new(SimConfig {
        seed,
        mode,
        difficulty,
        ..SimConfig::default()
    })
}

/// Start a run and tick through the opening countdown.
fn playing_engine(mode: GameMode, difficulty: Difficulty, seed: u64) -> GameEngine {
    let mut engine = engine_with(mode, difficulty, seed);
    engine.queue_command(PlayerCommand::StartRun);
    for _ in 0..200 {
        engine.tick();
        if engine.phase() == GamePhase::Playing {
            return engine;
        }
    }
    panic!("countdown never finished");
}

fn asteroid_count(engine: &GameEngine) -> usize {
    engine.world().query::<&Asteroid>().iter().count()
}

fn laser_count(engine: &GameEngine) -> usize {
    engine.world().query::<&Laser>().iter().count()
}

#[test]
fn test_menu_is_frozen() {
    let mut engine = engine_with(GameMode::Classic, Difficulty::Normal, 1);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Menu);
    assert_eq!(snap.time.tick, 0);
    assert!(snap.ship.is_none());
    assert!(snap.asteroids.is_empty());
}

#[test]
fn test_start_run_builds_first_wave() {
    let mut engine = engine_with(GameMode::Classic, Difficulty::Normal, 1);
    engine.queue_command(PlayerCommand::StartRun);
    let snap = engine.tick();

    assert_eq!(snap.phase, GamePhase::Countdown);
    assert!(snap.ship.is_some());
    assert_eq!(snap.lives, 3);
    // Wave 0 pattern: 1 large, 3 medium, 6 small.
    assert_eq!(snap.asteroids.len(), 10);
    assert!(snap.countdown > 0.0);
}

#[test]
fn test_countdown_reaches_playing() {
    let engine = playing_engine(GameMode::Classic, Difficulty::Normal, 1);
    assert_eq!(engine.phase(), GamePhase::Playing);
}

#[test]
fn test_wave_patterns_cycle() {
    assert_eq!(wave_pattern(0), (1, 3, 6));
    assert_eq!(wave_pattern(1), (3, 0, 2));
    assert_eq!(wave_pattern(2), (0, 6, 0));
    assert_eq!(wave_pattern(3), (2, 2, 4));
    assert_eq!(wave_pattern(4), (1, 3, 6));
}

#[test]
fn test_wave_spawn_respects_safe_zone() {
    let engine = playing_engine(GameMode::Classic, Difficulty::Normal, 7);
    let ship = Position::center();
    for (_, (roid, pos)) in engine.world().query::<(&Asteroid, &Position)>().iter() {
        let _ = roid;
        assert!(ship.distance_to(pos) >= ROID_SIZE * SAFE_SPAWN_FACTOR + SHIP_RADIUS);
    }
}

#[test]
fn test_pause_freezes_time() {
    let mut engine = playing_engine(GameMode::Classic, Difficulty::Normal, 1);
    engine.tick();
    let before = engine.time().tick;

    engine.queue_command(PlayerCommand::Pause);
    engine.tick();
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::Paused);
    assert_eq!(engine.time().tick, before);

    engine.queue_command(PlayerCommand::Resume);
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert_eq!(engine.time().tick, before + 1);
}

#[test]
fn test_same_seed_same_simulation() {
    let commands = |engine: &mut GameEngine, i: u32| {
        if i == 10 {
            engine.queue_command(PlayerCommand::SetThrust { active: true });
        }
        if i == 30 {
            engine.queue_command(PlayerCommand::SetShoot { active: true });
        }
        if i == 60 {
            engine.queue_command(PlayerCommand::SetTurn { dir: TurnDir::Left });
        }
    };

    let mut a = playing_engine(GameMode::Classic, Difficulty::Normal, 99);
    let mut b = playing_engine(GameMode::Classic, Difficulty::Normal, 99);

    let mut last_a = None;
    let mut last_b = None;
    for i in 0..150 {
        commands(&mut a, i);
        commands(&mut b, i);
        last_a = Some(a.tick());
        last_b = Some(b.tick());
    }

    let json_a = serde_json::to_string(&last_a.unwrap()).unwrap();
    let json_b = serde_json::to_string(&last_b.unwrap()).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn test_different_seed_diverges() {
    let mut a = engine_with(GameMode::Classic, Difficulty::Normal, 1);
    let mut b = engine_with(GameMode::Classic, Difficulty::Normal, 2);
    a.queue_command(PlayerCommand::StartRun);
    b.queue_command(PlayerCommand::StartRun);

    let snap_a = a.tick();
    let snap_b = b.tick();

    let json_a = serde_json::to_string(&snap_a.asteroids).unwrap();
    let json_b = serde_json::to_string(&snap_b.asteroids).unwrap();
    assert_ne!(json_a, json_b);
}

#[test]
fn test_shooting_spawns_laser_and_counts_shots() {
    let mut engine = playing_engine(GameMode::Classic, Difficulty::Normal, 3);
    engine.queue_command(PlayerCommand::SetShoot { active: true });
    let snap = engine.tick();

    assert_eq!(snap.lasers.len(), 1);
    assert_eq!(snap.stats.shots_fired, 1);
    assert!(snap
        .audio_events
        .iter()
        .any(|e| matches!(e, starfall_core::events::AudioEvent::LaserFired)));
}

#[test]
fn test_triple_shot_fans_three() {
    let mut engine = playing_engine(GameMode::Classic, Difficulty::Normal, 3);
    engine.run_state_mut().powers.activate(PowerKind::Triple);
    engine.queue_command(PlayerCommand::SetShoot { active: true });
    let snap = engine.tick();

    assert_eq!(snap.lasers.len(), 3);
    assert_eq!(snap.stats.shots_fired, 3);
}

#[test]
fn test_laser_cap_blocks_fire() {
    let mut engine = playing_engine(GameMode::Classic, Difficulty::Normal, 3);
    let cap = engine.run_state().tuning.laser_max;
    for _ in 0..cap {
        world_setup::spawn_laser(
            engine.world_mut(),
            Position::new(5.0, 5.0),
            0.0,
            LASER_SPD,
        );
    }

    engine.queue_command(PlayerCommand::SetShoot { active: true });
    engine.tick();
    assert_eq!(engine.run_state().shots_fired, 0);
}

#[test]
fn test_max_speed_is_clamped() {
    let mut engine = playing_engine(GameMode::Classic, Difficulty::Normal, 3);
    engine.queue_command(PlayerCommand::SetThrust { active: true });
    for _ in 0..300 {
        engine.tick();
        if engine.phase() != GamePhase::Playing {
            return; // ran into an asteroid; clamp already exercised
        }
        let max = engine.run_state().tuning.max_speed * TICK_RATE as f64;
        for (_, (ship, vel)) in engine.world().query::<(&Ship, &Velocity)>().iter() {
            let _ = ship;
            assert!(vel.speed() <= max + 1e-6);
        }
    }
}

#[test]
fn test_destroy_large_scores_and_splits() {
    let mut world = hecs::World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut run = crate::run::RunState::default();
    let mut phase = GamePhase::Playing;
    let mut audio = Vec::new();

    let tuning = run.tuning;
    world_setup::spawn_ship(&mut world, &tuning);
    let roid = world_setup::spawn_asteroid(
        &mut world,
        &mut rng,
        &tuning,
        0,
        Position::new(100.0, 100.0),
        RoidTier::Large,
        1.0,
    );

    combat::destroy_asteroid(
        &mut world,
        &mut rng,
        &mut run,
        &mut phase,
        &mut audio,
        roid,
        Position::new(100.0, 100.0),
    );

    assert_eq!(run.score, 20);
    assert_eq!(run.combo_streak, 1);
    assert_eq!(run.shots_hit, 1);

    let children: Vec<RoidTier> = world
        .query::<&Asteroid>()
        .iter()
        .map(|(_, a)| a.tier)
        .collect();
    assert_eq!(children.len(), 2);
    assert!(children.iter().all(|t| *t == RoidTier::Medium));
    // Field still populated, no wave clear.
    assert_eq!(phase, GamePhase::Playing);
}

#[test]
fn test_destroy_last_small_clears_wave() {
    let mut world = hecs::World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut run = crate::run::RunState::default();
    let mut phase = GamePhase::Playing;
    let mut audio = Vec::new();

    let tuning = run.tuning;
    world_setup::spawn_ship(&mut world, &tuning);
    let roid = world_setup::spawn_asteroid(
        &mut world,
        &mut rng,
        &tuning,
        0,
        Position::new(100.0, 100.0),
        RoidTier::Small,
        1.0,
    );

    combat::destroy_asteroid(
        &mut world,
        &mut rng,
        &mut run,
        &mut phase,
        &mut audio,
        roid,
        Position::new(100.0, 100.0),
    );

    assert_eq!(run.score, 100);
    assert_eq!(phase, GamePhase::WaveClear);
    assert!(run.hold.is_running());
    assert!(audio
        .iter()
        .any(|e| matches!(e, starfall_core::events::AudioEvent::WaveCleared)));
}

#[test]
fn test_shield_blocks_asteroid_and_bounces() {
    let mut world = hecs::World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut run = crate::run::RunState::default();
    let mut phase = GamePhase::Playing;
    let mut audio = Vec::new();

    let tuning = run.tuning;
    let ship = world_setup::spawn_ship(&mut world, &tuning);
    {
        let (s, vel) = world
            .query_one_mut::<(&mut Ship, &mut Velocity)>(ship)
            .unwrap();
        s.shield = 1;
        s.blink_num = 0;
        vel.x = 100.0;
    }
    world_setup::spawn_asteroid(
        &mut world,
        &mut rng,
        &tuning,
        0,
        Position::center(),
        RoidTier::Medium,
        1.0,
    );

    run.combo_streak = 4;
    systems::collisions::run(&mut world, &mut run, &mut rng, &mut phase, &mut audio);

    let (s, vel) = world
        .query_one_mut::<(&mut Ship, &mut Velocity)>(ship)
        .unwrap();
    assert_eq!(s.shield, 0);
    assert!(s.grace > 0.0);
    assert_eq!(s.explode_ticks, 0);
    assert!((vel.x - (-100.0 * SHIELD_BOUNCE)).abs() < 1e-9);
    // Asteroid survives a shield block.
    assert_eq!(world.query::<&Asteroid>().iter().count(), 1);
    assert_eq!(run.combo_streak, 0);
}

#[test]
fn test_unshielded_ram_explodes_both() {
    let mut world = hecs::World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut run = crate::run::RunState::default();
    let mut phase = GamePhase::Playing;
    let mut audio = Vec::new();

    let tuning = run.tuning;
    let ship = world_setup::spawn_ship(&mut world, &tuning);
    if let Ok(s) = world.query_one_mut::<&mut Ship>(ship) {
        s.blink_num = 0;
    }
    world_setup::spawn_asteroid(
        &mut world,
        &mut rng,
        &tuning,
        0,
        Position::center(),
        RoidTier::Small,
        1.0,
    );

    systems::collisions::run(&mut world, &mut run, &mut rng, &mut phase, &mut audio);

    let s = world.query_one_mut::<&mut Ship>(ship).unwrap();
    assert!(s.explode_ticks > 0);
    assert_eq!(world.query::<&Asteroid>().iter().count(), 0);
    // The rammed asteroid still pays out.
    assert_eq!(run.score, 100);
    assert_eq!(phase, GamePhase::WaveClear);
}

#[test]
fn test_blinking_ship_is_untouchable() {
    let mut world = hecs::World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut run = crate::run::RunState::default();
    let mut phase = GamePhase::Playing;
    let mut audio = Vec::new();

    let tuning = run.tuning;
    let ship = world_setup::spawn_ship(&mut world, &tuning);
    world_setup::spawn_asteroid(
        &mut world,
        &mut rng,
        &tuning,
        0,
        Position::center(),
        RoidTier::Small,
        1.0,
    );

    systems::collisions::run(&mut world, &mut run, &mut rng, &mut phase, &mut audio);

    // Fresh ships spawn with blinks remaining, so nothing happens.
    let s = world.query_one_mut::<&mut Ship>(ship).unwrap();
    assert_eq!(s.explode_ticks, 0);
    assert_eq!(world.query::<&Asteroid>().iter().count(), 1);
}

#[test]
fn test_explosion_resolves_into_respawn() {
    let mut engine = playing_engine(GameMode::Classic, Difficulty::Normal, 3);
    engine.queue_command(PlayerCommand::SetShoot { active: true });
    engine.tick();
    engine.queue_command(PlayerCommand::SetShoot { active: false });
    assert!(laser_count(&engine) > 0);

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut audio = Vec::new();
    combat::explode_ship(engine.world_mut(), &mut rng, &mut audio);

    for _ in 0..30 {
        engine.tick();
        if engine.phase() != GamePhase::Playing {
            break;
        }
        let exploding = engine
            .world()
            .query::<&Ship>()
            .iter()
            .next()
            .map(|(_, s)| s.explode_ticks > 0)
            .unwrap_or(false);
        if !exploding {
            break;
        }
    }

    assert_eq!(engine.run_state().lives, 2);
    assert_eq!(engine.run_state().deaths, 1);
    // Respawn recenters the ship and clears lasers in flight.
    assert_eq!(laser_count(&engine), 0);
    let pos = combat::ship_position(engine.world()).unwrap();
    assert_eq!(pos, Position::center());
}

#[test]
fn test_one_life_run_ends_on_first_death() {
    let mut engine = playing_engine(GameMode::OneLife, Difficulty::Normal, 3);
    assert_eq!(engine.run_state().lives, 1);

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut audio = Vec::new();
    combat::explode_ship(engine.world_mut(), &mut rng, &mut audio);

    let mut last = None;
    for _ in 0..30 {
        last = Some(engine.tick());
        if engine.phase() == GamePhase::GameOver {
            break;
        }
    }

    assert_eq!(engine.phase(), GamePhase::GameOver);
    let summary = last.unwrap().summary.expect("summary after game over");
    assert_eq!(summary.reason, EndReason::Dead);
}

#[test]
fn test_time_attack_expiry_ends_run() {
    let mut engine = playing_engine(GameMode::TimeAttack, Difficulty::Normal, 3);
    assert!(engine.run_state().time_left.is_some());

    engine.run_state_mut().time_left = Some(0.01);
    let snap = engine.tick();

    assert_eq!(snap.phase, GamePhase::GameOver);
    let summary = snap.summary.expect("summary after game over");
    assert_eq!(summary.reason, EndReason::Time);
}

#[test]
fn test_game_over_restart_resets_run() {
    let mut engine = playing_engine(GameMode::TimeAttack, Difficulty::Normal, 3);
    engine.run_state_mut().score = 1234;
    engine.run_state_mut().time_left = Some(0.01);
    engine.tick();
    assert_eq!(engine.phase(), GamePhase::GameOver);

    engine.queue_command(PlayerCommand::StartRun);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Countdown);
    assert_eq!(snap.score, 0);
    assert!(snap.summary.is_none());
    // Best survives across runs.
    assert_eq!(snap.best, 1234);
}

#[test]
fn test_combo_steps_and_saturates() {
    let mut world = hecs::World::new();
    let mut run = crate::run::RunState::default();

    for _ in 0..3 {
        combat::bump_combo(&mut world, &mut run);
    }
    assert_eq!(run.combo_mult, 2);

    for _ in 0..30 {
        combat::bump_combo(&mut world, &mut run);
    }
    assert_eq!(run.combo_mult, COMBO_MAX_MULT);
    assert_eq!(run.max_combo, COMBO_MAX_MULT);
}

#[test]
fn test_score_uses_combo_before_bump() {
    let mut world = hecs::World::new();
    let mut run = crate::run::RunState::default();
    run.combo_mult = 3;

    combat::add_score(&mut world, &mut run, 100, Position::center());
    assert_eq!(run.score, 300);
    assert_eq!(run.best, 300);
}

#[test]
fn test_wave_clear_advances_to_next_wave() {
    let mut engine = playing_engine(GameMode::Classic, Difficulty::Normal, 11);

    // Replace the field with a lone straggler and park a zero-speed
    // laser on top of it.
    let all: Vec<hecs::Entity> = engine
        .world()
        .query::<&Asteroid>()
        .iter()
        .map(|(e, _)| e)
        .collect();
    for e in all {
        let _ = engine.world_mut().despawn(e);
    }
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let tuning = engine.run_state().tuning;
    world_setup::spawn_asteroid(
        engine.world_mut(),
        &mut rng,
        &tuning,
        0,
        Position::new(300.0, 300.0),
        RoidTier::Small,
        1.0,
    );
    world_setup::spawn_laser(engine.world_mut(), Position::new(300.0, 300.0), 0.0, 0.0);

    engine.tick();
    assert_eq!(engine.phase(), GamePhase::WaveClear);
    assert_eq!(asteroid_count(&engine), 0);

    // Ride out the hold; the next wave builds and counts down.
    for _ in 0..((WAVE_CLEAR_SECS / DT) as u32 + 2) {
        engine.tick();
    }
    assert_eq!(engine.phase(), GamePhase::Countdown);
    assert_eq!(engine.run_state().wave, 1);
    // Wave 1 pattern: 3 large, 2 small.
    assert_eq!(asteroid_count(&engine), 5);
}

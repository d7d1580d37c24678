//! Unit tests for core types.

use crate::commands::PlayerCommand;
use crate::constants::*;
use crate::enums::*;
use crate::tuning::{MetaMods, Tuning};
use crate::types::{Countdown, Position, Velocity};

#[test]
fn test_countdown_fires_once() {
    let mut cd = Countdown::new(0.1);
    assert!(cd.is_running());
    assert!(!cd.tick(0.04));
    assert!(!cd.tick(0.04));
    // Crosses zero here.
    assert!(cd.tick(0.04));
    // Already expired, must not fire again.
    assert!(!cd.tick(0.04));
    assert_eq!(cd.remaining(), 0.0);
}

#[test]
fn test_countdown_reset_rearms() {
    let mut cd = Countdown::expired();
    assert!(!cd.is_running());
    assert!(!cd.tick(1.0));
    cd.reset(2.0);
    assert!(cd.is_running());
    assert!(cd.tick(2.0));
}

#[test]
fn test_wrap_padded_roundtrips_edges() {
    let mut p = Position::new(-20.1, 100.0);
    p.wrap_padded(20.0);
    assert_eq!(p.x, PLAYFIELD_WIDTH + 20.0);

    let mut p = Position::new(PLAYFIELD_WIDTH + 20.1, 100.0);
    p.wrap_padded(20.0);
    assert_eq!(p.x, -20.0);

    let mut p = Position::new(100.0, PLAYFIELD_HEIGHT + 20.1);
    p.wrap_padded(20.0);
    assert_eq!(p.y, -20.0);

    // Inside the padded band: untouched.
    let mut p = Position::new(-5.0, 5.0);
    p.wrap_padded(20.0);
    assert_eq!(p, Position::new(-5.0, 5.0));
}

#[test]
fn test_wrap_axes_teleports_at_bounds() {
    let mut p = Position::new(-0.5, PLAYFIELD_HEIGHT + 0.5);
    p.wrap_axes();
    assert_eq!(p.x, PLAYFIELD_WIDTH);
    assert_eq!(p.y, 0.0);
}

#[test]
fn test_clamp_speed_preserves_direction() {
    let mut v = Velocity::new(30.0, 40.0);
    v.clamp_speed(25.0);
    assert!((v.speed() - 25.0).abs() < 1e-9);
    // Same direction as (3, 4).
    assert!((v.x / v.y - 0.75).abs() < 1e-9);

    // Under the cap: untouched.
    let mut v = Velocity::new(3.0, 4.0);
    v.clamp_speed(25.0);
    assert_eq!(v, Velocity::new(3.0, 4.0));
}

#[test]
fn test_velocity_from_heading() {
    let v = Velocity::from_heading(std::f64::consts::FRAC_PI_2, 10.0);
    assert!(v.x.abs() < 1e-9);
    assert!((v.y - 10.0).abs() < 1e-9);
}

#[test]
fn test_meta_mods_clamp_bounds() {
    let mut mods = MetaMods {
        shoot_cd_mul: 0.1,
        power_dur_mul: 9.0,
        laser_speed_mul: 5.0,
        thrust_mul: 0.0,
        max_speed_mul: 4.0,
        drop_chance_mul: 10.0,
        invuln_mul: 0.0,
        roid_speed_mul: 0.1,
        ufo_rate_mul: 9.0,
        yield_add: 3.0,
        ..MetaMods::default()
    };
    mods.clamp();
    assert_eq!(mods.shoot_cd_mul, 0.45);
    assert_eq!(mods.power_dur_mul, 2.5);
    assert_eq!(mods.laser_speed_mul, 3.5);
    assert_eq!(mods.thrust_mul, 0.75);
    assert_eq!(mods.max_speed_mul, 3.5);
    assert_eq!(mods.drop_chance_mul, 3.5);
    assert_eq!(mods.invuln_mul, 0.6);
    assert_eq!(mods.roid_speed_mul, 0.7);
    assert_eq!(mods.ufo_rate_mul, 3.5);
    assert_eq!(mods.yield_add, 2.0);
}

#[test]
fn test_meta_mods_clamp_leaves_friction_alone() {
    let mut mods = MetaMods {
        friction_mul: 0.2,
        ..MetaMods::default()
    };
    mods.clamp();
    assert_eq!(mods.friction_mul, 0.2);
}

#[test]
fn test_tuning_compose_defaults() {
    let tun = Tuning::compose(GameMode::Classic, Difficulty::Normal, &MetaMods::default());
    assert_eq!(tun.lives, 3);
    assert_eq!(tun.laser_speed, LASER_SPD);
    assert_eq!(tun.laser_max, LASER_MAX);
    assert_eq!(tun.start_shield, 0);
}

#[test]
fn test_tuning_compose_one_life_overrides_lives() {
    let tun = Tuning::compose(GameMode::OneLife, Difficulty::Easy, &MetaMods::default());
    assert_eq!(tun.lives, 1);
}

#[test]
fn test_tuning_compose_applies_mods() {
    let mods = MetaMods {
        laser_speed_mul: 1.2,
        laser_max_add: 3,
        roid_speed_mul: 1.5,
        start_shield: 1,
        ..MetaMods::default()
    };
    let tun = Tuning::compose(GameMode::Classic, Difficulty::Normal, &mods);
    assert!((tun.laser_speed - LASER_SPD * 1.2).abs() < 1e-9);
    assert_eq!(tun.laser_max, LASER_MAX + 3);
    assert!((tun.roid_speed - 52.0 * 1.5).abs() < 1e-9);
    assert_eq!(tun.start_shield, 1);
}

#[test]
fn test_roid_tier_split_chain() {
    assert_eq!(
        RoidTier::Large.split(),
        Some((RoidTier::Medium, SPLIT_SPEED_MEDIUM))
    );
    assert_eq!(
        RoidTier::Medium.split(),
        Some((RoidTier::Small, SPLIT_SPEED_SMALL))
    );
    assert_eq!(RoidTier::Small.split(), None);
}

#[test]
fn test_roid_tier_radii() {
    assert_eq!(RoidTier::Large.radius(), 50.0);
    assert_eq!(RoidTier::Medium.radius(), 25.0);
    assert_eq!(RoidTier::Small.radius(), 13.0);
}

#[test]
fn test_command_serde_tagged() {
    let cmd = PlayerCommand::SetTurn {
        dir: TurnDir::Left,
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert!(json.contains("\"type\":\"SetTurn\""));
    let back: PlayerCommand = serde_json::from_str(&json).unwrap();
    match back {
        PlayerCommand::SetTurn { dir } => assert_eq!(dir, TurnDir::Left),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_mode_keys_are_stable() {
    assert_eq!(GameMode::TimeAttack.as_key(), "time_attack");
    assert_eq!(Difficulty::Hard.as_key(), "hard");
    assert_eq!(GameMode::TimeAttack.time_limit(), Some(TIME_ATTACK_SECS));
    assert_eq!(GameMode::Classic.time_limit(), None);
}

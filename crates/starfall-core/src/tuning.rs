//! Per-run tuning: difficulty presets, meta modifier bundles, and their
//! composition into the frozen `Tuning` record.
//!
//! `Tuning` is created once at run reset and never mutated mid-run.
//! Temporary power-ups apply their own multipliers at read time.

use serde::{Deserialize, Serialize};

use crate::constants::{LASER_MAX, LASER_SPD};
use crate::enums::{Difficulty, GameMode};

/// Base physics/spawn numbers for a difficulty level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DiffPreset {
    pub lives: u32,
    /// Asteroid base speed (units/s).
    pub roid_speed: f64,
    /// Ship velocity gain per tick while thrusting (units/s).
    pub thrust: f64,
    /// Per-second velocity damping coefficient while coasting.
    pub friction: f64,
    /// Ship speed cap in per-frame units; the effective cap is
    /// `max_speed * TICK_RATE` units/s.
    pub max_speed: f64,
    /// UFO aggression multiplier (speed and spawn cadence).
    pub ufo_rate: f64,
}

impl Difficulty {
    pub fn preset(&self) -> DiffPreset {
        match self {
            Difficulty::Easy => DiffPreset {
                lives: 4,
                roid_speed: 42.0,
                thrust: 4.6,
                friction: 0.86,
                max_speed: 6.4,
                ufo_rate: 0.75,
            },
            Difficulty::Normal => DiffPreset {
                lives: 3,
                roid_speed: 52.0,
                thrust: 5.0,
                friction: 0.82,
                max_speed: 7.2,
                ufo_rate: 1.0,
            },
            Difficulty::Hard => DiffPreset {
                lives: 2,
                roid_speed: 64.0,
                thrust: 5.3,
                friction: 0.78,
                max_speed: 8.1,
                ufo_rate: 1.25,
            },
        }
    }
}

/// Modifier bundle folded from all unlocked skills.
/// Multiplicative fields default to 1.0, additive fields to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetaMods {
    pub thrust_mul: f64,
    pub friction_mul: f64,
    pub max_speed_mul: f64,

    pub laser_speed_mul: f64,
    pub laser_max_add: u32,
    pub shoot_cd_mul: f64,

    pub power_dur_mul: f64,
    pub invuln_mul: f64,

    pub drop_chance_mul: f64,
    pub start_shield: u32,

    pub roid_speed_mul: f64,
    pub ufo_rate_mul: f64,
    pub extra_roids: u32,

    /// Fractional cores-yield bonus (0.10 = +10%).
    pub yield_add: f64,
}

impl Default for MetaMods {
    fn default() -> Self {
        Self {
            thrust_mul: 1.0,
            friction_mul: 1.0,
            max_speed_mul: 1.0,
            laser_speed_mul: 1.0,
            laser_max_add: 0,
            shoot_cd_mul: 1.0,
            power_dur_mul: 1.0,
            invuln_mul: 1.0,
            drop_chance_mul: 1.0,
            start_shield: 0,
            roid_speed_mul: 1.0,
            ufo_rate_mul: 1.0,
            extra_roids: 0,
            yield_add: 0.0,
        }
    }
}

impl MetaMods {
    /// Apply the safety clamps. Bounds are part of the contract: they keep
    /// runaway builds inside the simulation's numeric assumptions.
    pub fn clamp(&mut self) {
        self.shoot_cd_mul = self.shoot_cd_mul.clamp(0.45, 1.0);
        self.power_dur_mul = self.power_dur_mul.clamp(0.75, 2.5);
        self.laser_speed_mul = self.laser_speed_mul.clamp(0.75, 3.5);
        self.thrust_mul = self.thrust_mul.clamp(0.75, 3.5);
        self.max_speed_mul = self.max_speed_mul.clamp(0.75, 3.5);

        self.drop_chance_mul = self.drop_chance_mul.clamp(0.5, 3.5);
        self.invuln_mul = self.invuln_mul.clamp(0.6, 3.0);

        self.roid_speed_mul = self.roid_speed_mul.clamp(0.7, 3.5);
        self.ufo_rate_mul = self.ufo_rate_mul.clamp(0.7, 3.5);

        self.yield_add = self.yield_add.clamp(0.0, 2.0);
    }
}

/// Frozen per-run bundle of physics and spawn constants: the single source
/// of truth for all tuning-dependent logic during a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tuning {
    pub lives: u32,

    pub roid_speed: f64,
    pub ufo_rate: f64,
    pub extra_roids: u32,

    pub thrust: f64,
    pub friction: f64,
    pub max_speed: f64,

    pub laser_speed: f64,
    pub laser_max: u32,
    pub shoot_cd_mul: f64,

    pub start_shield: u32,
    pub invuln_mul: f64,

    pub drop_chance_mul: f64,
    pub power_dur_mul: f64,

    pub yield_bonus: f64,
}

impl Tuning {
    /// Compose the per-run tuning from the difficulty preset and the
    /// folded meta modifiers. Called once at run reset.
    pub fn compose(mode: GameMode, difficulty: Difficulty, mods: &MetaMods) -> Self {
        let preset = difficulty.preset();
        Self {
            lives: if mode == GameMode::OneLife {
                1
            } else {
                preset.lives
            },

            roid_speed: preset.roid_speed * mods.roid_speed_mul,
            ufo_rate: preset.ufo_rate * mods.ufo_rate_mul,
            extra_roids: mods.extra_roids,

            thrust: preset.thrust * mods.thrust_mul,
            friction: preset.friction * mods.friction_mul,
            max_speed: preset.max_speed * mods.max_speed_mul,

            laser_speed: LASER_SPD * mods.laser_speed_mul,
            laser_max: LASER_MAX + mods.laser_max_add,
            shoot_cd_mul: mods.shoot_cd_mul,

            start_shield: mods.start_shield,
            invuln_mul: mods.invuln_mul,

            drop_chance_mul: mods.drop_chance_mul,
            power_dur_mul: mods.power_dur_mul,

            yield_bonus: mods.yield_add,
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::compose(
            GameMode::default(),
            Difficulty::default(),
            &MetaMods::default(),
        )
    }
}

//! Per-run bookkeeping that lives outside the ECS world: score, lives,
//! combo, power timers, and the UFO spawn clock.

use starfall_core::constants::*;
use starfall_core::enums::{GameMode, PowerKind};
use starfall_core::state::{ActivePowerView, RunStatsView, RunSummaryView};
use starfall_core::tuning::Tuning;
use starfall_core::types::Countdown;

/// Timers for the four duration-based power-ups. Shield is not here: it
/// lives on the ship as a charge, not a clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerTimers {
    pub triple: f64,
    pub rapid: f64,
    pub score2x: f64,
    pub slow: f64,

    pub triple_max: f64,
    pub rapid_max: f64,
    pub score2x_max: f64,
    pub slow_max: f64,
}

impl PowerTimers {
    /// Fresh timers with per-run maximums scaled by the duration mod.
    pub fn new(dur_mul: f64) -> Self {
        Self {
            triple_max: PowerKind::Triple.duration() * dur_mul,
            rapid_max: PowerKind::Rapid.duration() * dur_mul,
            score2x_max: PowerKind::Score2x.duration() * dur_mul,
            slow_max: PowerKind::Slow.duration() * dur_mul,
            ..Self::default()
        }
    }

    /// Refresh a power to its full duration. Picking up an active power
    /// never shortens it.
    pub fn activate(&mut self, kind: PowerKind) {
        match kind {
            PowerKind::Triple => self.triple = self.triple.max(self.triple_max),
            PowerKind::Rapid => self.rapid = self.rapid.max(self.rapid_max),
            PowerKind::Score2x => self.score2x = self.score2x.max(self.score2x_max),
            PowerKind::Slow => self.slow = self.slow.max(self.slow_max),
            PowerKind::Shield => {}
        }
    }

    /// Decay all timers by real (unscaled) time.
    pub fn tick(&mut self, dt: f64) {
        self.triple = (self.triple - dt).max(0.0);
        self.rapid = (self.rapid - dt).max(0.0);
        self.score2x = (self.score2x - dt).max(0.0);
        self.slow = (self.slow - dt).max(0.0);
    }

    pub fn score_mult(&self) -> u32 {
        if self.score2x > 0.0 {
            2
        } else {
            1
        }
    }

    /// World time scale: slow-mo stretches entity motion, never clocks.
    pub fn time_scale(&self) -> f64 {
        if self.slow > 0.0 {
            SLOW_TIME_SCALE
        } else {
            1.0
        }
    }

    pub fn triple_active(&self) -> bool {
        self.triple > 0.0
    }

    /// Current shoot cooldown, before the per-run cooldown mod.
    pub fn base_shoot_cd(&self) -> f64 {
        if self.rapid > 0.0 {
            SHOOT_CD_RAPID
        } else {
            SHOOT_CD
        }
    }

    /// Active timers for the HUD power bar.
    pub fn views(&self) -> Vec<ActivePowerView> {
        let pairs = [
            (PowerKind::Triple, self.triple, self.triple_max),
            (PowerKind::Rapid, self.rapid, self.rapid_max),
            (PowerKind::Score2x, self.score2x, self.score2x_max),
            (PowerKind::Slow, self.slow, self.slow_max),
        ];
        pairs
            .into_iter()
            .filter(|(_, t, _)| *t > 0.0)
            .map(|(kind, remaining, max)| ActivePowerView {
                kind,
                remaining,
                max,
            })
            .collect()
    }
}

/// All mutable run state that is not an entity.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Zero-based wave index.
    pub wave: u32,
    pub score: u32,
    pub best: u32,
    pub lives: u32,
    /// Remaining run time; Some only in time-attack.
    pub time_left: Option<f64>,
    /// Countdown and wave-clear hold timer.
    pub hold: Countdown,

    pub combo_streak: u32,
    pub combo_mult: u32,
    pub combo_time: f64,
    /// Consecutive landed shots toward the precision bonus.
    pub hit_streak: u32,

    pub shots_fired: u32,
    pub shots_hit: u32,
    pub deaths: u32,
    pub ufo_kills: u32,
    pub max_combo: u32,

    pub powers: PowerTimers,
    pub ufo_spawn_timer: f64,

    pub tuning: Tuning,
    /// End-of-run summary; set by game over, cleared by restart.
    pub summary: Option<RunSummaryView>,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new(GameMode::default(), Tuning::default(), 0)
    }
}

impl RunState {
    /// Fresh run state for the given mode and composed tuning.
    pub fn new(mode: GameMode, tuning: Tuning, best: u32) -> Self {
        Self {
            wave: 0,
            score: 0,
            best,
            lives: tuning.lives,
            time_left: mode.time_limit(),
            hold: Countdown::expired(),
            combo_streak: 0,
            combo_mult: 1,
            combo_time: 0.0,
            hit_streak: 0,
            shots_fired: 0,
            shots_hit: 0,
            deaths: 0,
            ufo_kills: 0,
            max_combo: 1,
            powers: PowerTimers::new(tuning.power_dur_mul),
            ufo_spawn_timer: UFO_FIRST_SPAWN_SECS,
            tuning,
            summary: None,
        }
    }

    /// Effective shoot cooldown in seconds.
    pub fn shoot_cd(&self) -> f64 {
        self.powers.base_shoot_cd() * self.tuning.shoot_cd_mul
    }

    pub fn stats_view(&self) -> RunStatsView {
        RunStatsView {
            shots_fired: self.shots_fired,
            shots_hit: self.shots_hit,
            deaths: self.deaths,
            ufo_kills: self.ufo_kills,
            max_combo: self.max_combo,
        }
    }
}

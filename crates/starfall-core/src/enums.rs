//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    /// Pre-wave countdown; physics frozen, hold timer running.
    Countdown,
    Playing,
    Paused,
    /// Celebration hold after the last asteroid dies.
    WaveClear,
    /// Terminal for the run; only an explicit restart leaves it.
    GameOver,
}

/// Run mode selected from the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Classic,
    /// Fixed 120-second countdown; run ends when it expires.
    TimeAttack,
    /// Single life regardless of difficulty.
    OneLife,
    Endless,
}

/// Difficulty preset selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Asteroid size tier. Tiers split downward on destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoidTier {
    Large,
    Medium,
    Small,
}

/// Power-up kinds. Shield applies instantly; the rest run on timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerKind {
    Shield,
    Triple,
    Rapid,
    Score2x,
    Slow,
}

/// UFO size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UfoClass {
    /// Faster, smaller, worth more.
    Small,
    Large,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Lives exhausted.
    Dead,
    /// Time-attack clock expired.
    Time,
}

/// Turn intent set by input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDir {
    Left,
    #[default]
    None,
    Right,
}

impl GameMode {
    /// Optional run time limit in seconds.
    pub fn time_limit(&self) -> Option<f64> {
        match self {
            GameMode::TimeAttack => Some(TIME_ATTACK_SECS),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::TimeAttack => "Time Attack",
            GameMode::OneLife => "One Life",
            GameMode::Endless => "Endless",
        }
    }

    /// Stable key used in persistence file names.
    pub fn as_key(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::TimeAttack => "time_attack",
            GameMode::OneLife => "one_life",
            GameMode::Endless => "endless",
        }
    }
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Stable key used in persistence file names.
    pub fn as_key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl RoidTier {
    /// Collision radius for the tier.
    pub fn radius(&self) -> f64 {
        match self {
            RoidTier::Large => (ROID_SIZE / 2.0).ceil(),
            RoidTier::Medium => (ROID_SIZE / 4.0).ceil(),
            RoidTier::Small => (ROID_SIZE / 8.0).ceil(),
        }
    }

    /// Base score for destroying this tier.
    pub fn score(&self) -> u32 {
        match self {
            RoidTier::Large => 20,
            RoidTier::Medium => 50,
            RoidTier::Small => 100,
        }
    }

    /// Split product: (child tier, child speed multiplier), or None for
    /// the terminal tier.
    pub fn split(&self) -> Option<(RoidTier, f64)> {
        match self {
            RoidTier::Large => Some((RoidTier::Medium, SPLIT_SPEED_MEDIUM)),
            RoidTier::Medium => Some((RoidTier::Small, SPLIT_SPEED_SMALL)),
            RoidTier::Small => None,
        }
    }
}

impl PowerKind {
    /// Base effect duration in seconds; 0 for instantaneous powers.
    pub fn duration(&self) -> f64 {
        match self {
            PowerKind::Shield => 0.0,
            PowerKind::Triple => 8.0,
            PowerKind::Rapid => 8.0,
            PowerKind::Score2x => 10.0,
            PowerKind::Slow => 4.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PowerKind::Shield => "SHIELD",
            PowerKind::Triple => "TRIPLE",
            PowerKind::Rapid => "RAPID",
            PowerKind::Score2x => "SCORE x2",
            PowerKind::Slow => "SLOW-MO",
        }
    }
}

impl UfoClass {
    pub fn radius(&self) -> f64 {
        match self {
            UfoClass::Small => 14.0,
            UfoClass::Large => 20.0,
        }
    }

    /// Base horizontal speed before the UFO-rate multiplier (units/s).
    pub fn base_speed(&self) -> f64 {
        match self {
            UfoClass::Small => 110.0,
            UfoClass::Large => 80.0,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            UfoClass::Small => 250,
            UfoClass::Large => 150,
        }
    }

    /// Upper bound of the random component of the shot interval.
    pub fn shot_jitter(&self) -> f64 {
        match self {
            UfoClass::Small => 0.8,
            UfoClass::Large => 1.1,
        }
    }
}

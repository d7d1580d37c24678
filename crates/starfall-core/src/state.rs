//! Game state snapshot — the complete visible state handed to the host
//! after every tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub difficulty: Difficulty,

    /// Zero-based wave index (displayed as wave + 1).
    pub wave: u32,
    pub score: u32,
    pub best: u32,
    pub lives: u32,
    /// Remaining run time (time-attack only).
    pub time_left: Option<f64>,
    /// Remaining countdown/wave-clear hold (seconds).
    pub countdown: f64,

    pub combo: ComboView,
    pub active_powers: Vec<ActivePowerView>,

    pub ship: Option<ShipView>,
    pub lasers: Vec<LaserView>,
    pub asteroids: Vec<AsteroidView>,
    pub ufo: Option<UfoView>,
    pub ufo_bullets: Vec<UfoBulletView>,
    pub power_drops: Vec<PowerDropView>,
    pub particles: Vec<ParticleView>,
    pub floaters: Vec<FloaterView>,

    pub stats: RunStatsView,
    pub audio_events: Vec<AudioEvent>,
    /// Present from game over until the next restart.
    pub summary: Option<RunSummaryView>,
}

/// Combo state for the HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboView {
    pub streak: u32,
    pub mult: u32,
    pub time_left: f64,
}

impl Default for ComboView {
    fn default() -> Self {
        Self {
            streak: 0,
            mult: 1,
            time_left: 0.0,
        }
    }
}

/// One active timed power for the power bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivePowerView {
    pub kind: PowerKind,
    pub remaining: f64,
    pub max: f64,
}

/// Ship state for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub velocity: Velocity,
    pub heading: f64,
    pub radius: f64,
    pub thrusting: bool,
    pub shield: u32,
    /// Whether the ship is on the visible half of a blink cycle.
    pub blink_on: bool,
    pub invulnerable: bool,
    pub exploding: bool,
    pub dead: bool,
}

/// Laser state for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserView {
    pub position: Position,
    pub trail: Vec<Position>,
    pub exploding: bool,
}

/// Asteroid state for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidView {
    pub position: Position,
    pub tier: RoidTier,
    pub radius: f64,
    pub angle: f64,
    pub vert: u32,
    pub offs: Vec<f64>,
}

/// UFO state for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UfoView {
    pub position: Position,
    pub class: UfoClass,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UfoBulletView {
    pub position: Position,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerDropView {
    pub position: Position,
    pub kind: PowerKind,
    pub radius: f64,
    pub life: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub life: f64,
    pub max_life: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloaterView {
    pub position: Position,
    pub text: String,
    pub life: f64,
    pub max_life: f64,
}

/// Running telemetry for the current run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStatsView {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub deaths: u32,
    pub ufo_kills: u32,
    pub max_combo: u32,
}

/// One line of the cores-earned breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardLineView {
    pub label: String,
    pub cores: u32,
}

/// End-of-run summary, carried in the snapshot until restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummaryView {
    pub score: u32,
    pub best: u32,
    /// Rounded accuracy percentage (0 when no shots were fired).
    pub accuracy_pct: u32,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub reason: EndReason,
    pub cores_earned: u32,
    pub breakdown: Vec<RewardLineView>,
}

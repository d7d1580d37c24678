//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// The player's ship. At most one ship entity is live at a time; respawn
/// replaces this component wholesale rather than patching fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Heading angle (radians, counterclockwise from +x).
    pub heading: f64,
    /// Smoothed angular velocity (radians per tick).
    pub rot: f64,
    /// Angular velocity target set by turn intent (radians per tick).
    pub rot_target: f64,
    /// Thrust intent flag.
    pub thrusting: bool,
    /// Shoot intent flag.
    pub shooting: bool,
    /// Remaining shoot cooldown (seconds, real time).
    pub shoot_cd: f64,
    /// Ticks left in the explosion animation; 0 = not exploding.
    pub explode_ticks: u32,
    /// Invulnerability blinks remaining; 0 = vulnerable.
    pub blink_num: u32,
    /// Ticks left in the current blink.
    pub blink_ticks: u32,
    /// Shield charge (0 or 1).
    pub shield: u32,
    /// Post-hit grace window (seconds, real time).
    pub grace: f64,
    /// Set when the run has ended; a dead ship no longer moves or fires.
    pub dead: bool,
}

/// An asteroid. Radius is fixed per tier; the polygon fields only affect
/// rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub tier: RoidTier,
    pub radius: f64,
    /// Outline rotation angle (radians).
    pub angle: f64,
    /// Polygon vertex count.
    pub vert: u32,
    /// Per-vertex radial offsets (jaggedness), fixed per instance.
    pub offs: Vec<f64>,
}

/// A laser fired by the ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    /// Distance traveled so far (for the range cutoff).
    pub dist: f64,
    /// Post-impact flash ticks; 0 = in flight.
    pub explode_ticks: u32,
    /// Whether this laser ever connected (for accuracy bookkeeping).
    pub hit: bool,
    /// Recent positions, oldest first, capped at LASER_TRAIL_MAX.
    pub trail: Vec<Position>,
}

/// The UFO. At most one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ufo {
    pub class: UfoClass,
    pub radius: f64,
    /// Horizontal travel direction: +1 rightward, -1 leftward.
    pub dir: f64,
    /// Seconds until the next aimed shot.
    pub shoot_timer: f64,
    /// Seconds until forced despawn.
    pub life: f64,
}

/// A bullet fired by the UFO, aimed at the ship's position at fire time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UfoBullet {
    pub radius: f64,
    /// Seconds until pruned.
    pub life: f64,
}

/// A floating power-up drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerDrop {
    pub kind: PowerKind,
    pub radius: f64,
    /// Seconds until pruned.
    pub life: f64,
}

/// Cosmetic explosion particle. Never wraps, never collides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub life: f64,
    pub max_life: f64,
    pub size: f64,
}

/// Cosmetic rising text (score pops, pickups, announcements).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floater {
    pub text: String,
    pub life: f64,
    pub max_life: f64,
}

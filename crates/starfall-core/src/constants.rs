//! Simulation constants and base tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Logical playfield width in world units.
pub const PLAYFIELD_WIDTH: f64 = 960.0;

/// Logical playfield height in world units.
pub const PLAYFIELD_HEIGHT: f64 = 640.0;

// --- Ship ---

/// Ship size (collision diameter).
pub const SHIP_SIZE: f64 = 30.0;

/// Ship collision radius.
pub const SHIP_RADIUS: f64 = SHIP_SIZE / 2.0;

/// Turn speed in degrees per second.
pub const TURN_SPEED_DEG: f64 = 360.0;

/// Exponential approach factor for angular velocity smoothing (per tick).
pub const ROT_SMOOTHING: f64 = 0.35;

/// Duration of one invulnerability blink (seconds).
pub const SHIP_BLINK_DUR: f64 = 0.11;

/// Base invulnerability duration after spawn (seconds).
pub const SHIP_INV_DUR: f64 = 2.6;

/// Ship explosion duration (seconds).
pub const SHIP_EXPLODE_DUR: f64 = 0.35;

/// Post-hit grace window after a shield absorbs a hit (seconds).
pub const HIT_GRACE_SECS: f64 = 0.35;

/// Velocity dampening factor applied when a shield bounces the ship off
/// an asteroid (velocity is negated and scaled by this).
pub const SHIELD_BOUNCE: f64 = 0.4;

// --- Asteroids ---

/// Base asteroid size; tier radii derive from this.
pub const ROID_SIZE: f64 = 100.0;

/// Jaggedness of asteroid outlines (0 = circle).
pub const ROIDS_JAG: f64 = 0.4;

/// Base vertex count for asteroid polygons.
pub const ROIDS_VERT: u32 = 10;

/// Per-wave asteroid speed escalation factor: 1 + RAMP * wave.
pub const WAVE_SPEED_RAMP: f64 = 0.085;

/// Speed multiplier for medium asteroids (wave spawn and large splits).
pub const SPLIT_SPEED_MEDIUM: f64 = 1.05;

/// Speed multiplier for small asteroids (wave spawn and medium splits).
pub const SPLIT_SPEED_SMALL: f64 = 1.12;

/// Wave placement rejects positions closer than ROID_SIZE * this + ship radius.
pub const SAFE_SPAWN_FACTOR: f64 = 1.7;

// --- Lasers ---

/// Base laser speed (units/s).
pub const LASER_SPD: f64 = 540.0;

/// Maximum laser travel distance as a fraction of playfield width.
pub const LASER_DIST: f64 = 0.62;

/// Base cap on simultaneous lasers.
pub const LASER_MAX: u32 = 12;

/// Laser impact flash duration (seconds).
pub const LASER_EXPLODE_DUR: f64 = 0.12;

/// Maximum trail points kept per laser.
pub const LASER_TRAIL_MAX: usize = 7;

/// Base shoot cooldown (seconds).
pub const SHOOT_CD: f64 = 0.22;

/// Shoot cooldown under the rapid power-up (seconds).
pub const SHOOT_CD_RAPID: f64 = 0.1;

/// Angular offset of the side lasers under the triple power-up (radians).
pub const TRIPLE_SPREAD: f64 = 0.14;

/// Muzzle offset along the heading, as a multiple of ship radius.
pub const MUZZLE_OFFSET: f64 = 4.0 / 3.0;

// --- State machine ---

/// Pre-wave countdown hold (seconds).
pub const COUNTDOWN_SECS: f64 = 3.0;

/// Wave-clear celebration hold (seconds).
pub const WAVE_CLEAR_SECS: f64 = 3.0;

/// Time-attack mode run length (seconds).
pub const TIME_ATTACK_SECS: f64 = 120.0;

// --- Scoring ---

/// Combo decay window; each destruction rearms it (seconds).
pub const COMBO_WINDOW_SECS: f64 = 3.0;

/// Destructions per combo multiplier step.
pub const COMBO_STEP: u32 = 3;

/// Combo multiplier saturation.
pub const COMBO_MAX_MULT: u32 = 5;

/// Consecutive hits required for a precision bonus.
pub const PRECISION_STREAK: u32 = 5;

/// Base score of a precision bonus.
pub const PRECISION_BONUS: u32 = 150;

// --- Power-ups ---

/// Time scale applied to world motion while the slow power is active.
pub const SLOW_TIME_SCALE: f64 = 0.55;

/// Power-drop collision radius.
pub const DROP_RADIUS: f64 = 10.0;

/// Power-drop lifetime (seconds).
pub const DROP_LIFE: f64 = 9.0;

/// Extra pickup distance beyond the sum of radii.
pub const PICKUP_MARGIN: f64 = 4.0;

/// Base drop chance on asteroid destruction.
pub const DROP_BASE_CHANCE: f64 = 0.14;

/// Per-wave drop chance growth, capped at DROP_WAVE_BONUS_CAP.
pub const DROP_WAVE_BONUS: f64 = 0.004;

/// Cap on the wave-derived drop chance growth.
pub const DROP_WAVE_BONUS_CAP: f64 = 0.06;

/// Absolute cap on the final drop chance.
pub const DROP_CHANCE_CAP: f64 = 0.35;

// --- UFO ---

/// Delay before the first UFO spawn roll of a run (seconds).
pub const UFO_FIRST_SPAWN_SECS: f64 = 6.5;

/// UFO lifetime before forced despawn (seconds).
pub const UFO_LIFE_SECS: f64 = 12.0;

/// Probability a spawned UFO is the small (fast, high-value) class.
pub const UFO_SMALL_PROB: f64 = 0.55;

/// Horizontal margin beyond the playfield at which a UFO despawns.
pub const UFO_EXIT_MARGIN: f64 = 60.0;

/// Horizontal offset off the entry edge at which a UFO spawns.
pub const UFO_EDGE_OFFSET: f64 = 40.0;

/// Vertical band margin for UFO spawn height.
pub const UFO_BAND_MARGIN: f64 = 60.0;

/// UFO bullet speed (units/s).
pub const UFO_BULLET_SPEED: f64 = 260.0;

/// UFO bullet collision radius.
pub const UFO_BULLET_RADIUS: f64 = 3.5;

/// UFO bullet lifetime (seconds).
pub const UFO_BULLET_LIFE: f64 = 2.8;

/// Extra hit distance beyond the UFO radius for laser impacts.
pub const UFO_HIT_MARGIN: f64 = 2.0;

// --- Visual FX ---

/// Upward drift speed of score floaters (units/s).
pub const FLOATER_RISE: f64 = 22.0;

/// Default floater lifetime (seconds).
pub const FLOATER_LIFE: f64 = 0.9;

//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// 2D position in playfield space (world units, y up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in playfield space (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each simulated tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// A countdown timer decremented by an explicit delta each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of the playfield.
    pub fn center() -> Self {
        Self::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Toroidal wrap padded by `radius`: an object fully exits one edge
    /// before reappearing just off the opposite edge.
    pub fn wrap_padded(&mut self, radius: f64) {
        if self.x < -radius {
            self.x = PLAYFIELD_WIDTH + radius;
        } else if self.x > PLAYFIELD_WIDTH + radius {
            self.x = -radius;
        }
        if self.y < -radius {
            self.y = PLAYFIELD_HEIGHT + radius;
        } else if self.y > PLAYFIELD_HEIGHT + radius {
            self.y = -radius;
        }
    }

    /// Hard axis wrap: crossing an edge teleports to the opposite edge.
    /// Used by lasers, UFO bullets, and power drops.
    pub fn wrap_axes(&mut self) {
        if self.x < 0.0 {
            self.x = PLAYFIELD_WIDTH;
        } else if self.x > PLAYFIELD_WIDTH {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = PLAYFIELD_HEIGHT;
        } else if self.y > PLAYFIELD_HEIGHT {
            self.y = 0.0;
        }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity from a heading angle and speed.
    pub fn from_heading(heading: f64, speed: f64) -> Self {
        Self::new(heading.cos() * speed, heading.sin() * speed)
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rescale the vector so its magnitude does not exceed `max`,
    /// preserving direction.
    pub fn clamp_speed(&mut self, max: f64) {
        let v = DVec2::new(self.x, self.y);
        let speed = v.length();
        if speed > max {
            let scaled = v * (max / speed);
            self.x = scaled.x;
            self.y = scaled.y;
        }
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

impl Countdown {
    /// A countdown with `secs` remaining.
    pub fn new(secs: f64) -> Self {
        Self { remaining: secs }
    }

    /// An already-expired countdown.
    pub fn expired() -> Self {
        Self { remaining: 0.0 }
    }

    /// Decrement by `dt`. Returns true exactly once, on the tick the
    /// countdown crosses from positive to zero.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining == 0.0
    }

    /// Rearm to `secs`.
    pub fn reset(&mut self, secs: f64) {
        self.remaining = secs;
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }
}

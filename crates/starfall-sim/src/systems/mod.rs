//! Simulation systems, run in a fixed order each playing tick.

pub mod asteroids;
pub mod collisions;
pub mod effects;
pub mod lasers;
pub mod power_drops;
pub mod ship;
pub mod snapshot;
pub mod timers;
pub mod ufo;
pub mod wave_spawner;
pub mod weapons;

//! Deterministic fixed-timestep arcade simulation.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands at
//! tick boundaries, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless: same seed and same
//! command sequence always yield the same run.

pub mod combat;
pub mod engine;
pub mod run;
pub mod systems;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig};

#[cfg(test)]
mod tests;

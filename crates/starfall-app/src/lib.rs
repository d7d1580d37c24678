//! Headless host for the simulation.
//!
//! This crate wires the simulation, meta, and persistence crates into
//! a 30Hz game-loop thread, shares the latest snapshot with the stdin
//! command pump, and persists run results on game over.

pub mod game_loop;
pub mod session;
pub mod state;

//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Intent
//! commands only set flags on the ship; they never touch entity
//! populations directly.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Menu ---
    /// Select the run mode (menu only).
    SelectMode { mode: GameMode },
    /// Select the difficulty preset (menu only).
    SelectDifficulty { difficulty: Difficulty },
    /// Start a run from the menu, or restart after game over.
    /// Performs a full run reset and enters the countdown.
    StartRun,

    // --- Simulation control ---
    /// Pause the simulation.
    Pause,
    /// Resume from pause. Never happens implicitly.
    Resume,
    /// Host window lost focus; forces a pause while playing.
    FocusLost,
    /// Leave a paused or finished run for the menu.
    ReturnToMenu,

    // --- Ship intent ---
    /// Set or clear the thrust intent flag.
    SetThrust { active: bool },
    /// Set the turn intent direction.
    SetTurn { dir: TurnDir },
    /// Set or clear the shoot intent flag.
    SetShoot { active: bool },
}

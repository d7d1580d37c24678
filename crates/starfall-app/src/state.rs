//! State shared between the stdin pump and the game loop thread.

use std::sync::{Arc, Mutex};

use starfall_core::commands::PlayerCommand;
use starfall_core::state::GameStateSnapshot;

/// Commands sent into the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, updated by the loop thread after each tick and
/// read synchronously by the host.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = new_shared_snapshot();
        assert!(shared.lock().unwrap().is_none());
    }
}

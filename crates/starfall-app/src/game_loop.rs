//! Game loop thread — runs the simulation engine at 30Hz.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot
//! is stored in shared state for synchronous polling. Slow-mo is a
//! simulation-internal time scale, so wall-clock pacing stays fixed.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::{info, warn};

use starfall_core::constants::TICK_RATE;
use starfall_core::enums::GamePhase;
use starfall_sim::engine::{GameEngine, SimConfig};

use crate::session;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    data_dir: PathBuf,
    config: SimConfig,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("starfall-game-loop".into())
        .spawn(move || {
            run_game_loop(data_dir, config, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// The game loop. Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    data_dir: PathBuf,
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut run_persisted = false;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Persist each finished run exactly once
        if snapshot.phase == GamePhase::GameOver {
            if !run_persisted {
                run_persisted = true;
                if let Some(summary) = &snapshot.summary {
                    match session::persist_run_end(&data_dir, summary) {
                        Ok(balance) => info!(
                            "run over: score {}, +{} cores (balance {})",
                            summary.score, summary.cores_earned, balance
                        ),
                        Err(err) => warn!("failed to persist run: {err}"),
                    }
                }
            }
        } else {
            run_persisted = false;
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

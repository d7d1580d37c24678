//! Headless host binary.
//!
//! Reads one JSON `PlayerCommand` per stdin line and forwards it to the
//! 30Hz game-loop thread. `snapshot` prints the latest snapshot as JSON
//! on stdout; `quit` (or EOF) shuts the loop down.

use std::io::BufRead;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{error, info, warn};

use starfall_core::commands::PlayerCommand;
use starfall_core::enums::{Difficulty, GameMode};
use starfall_meta::fold::compute_meta_mods;
use starfall_sim::engine::SimConfig;

use starfall_app::game_loop;
use starfall_app::state::{self, GameLoopCommand};

fn data_dir() -> PathBuf {
    std::env::var_os("STARFALL_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("starfall-data"))
}

fn seed() -> u64 {
    if let Some(seed) = std::env::var("STARFALL_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
    {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

fn main() {
    env_logger::init();

    let dir = data_dir();
    let mode = GameMode::default();
    let difficulty = Difficulty::default();

    let meta = starfall_persist::load_meta(&dir);
    let mods = compute_meta_mods(&meta.unlocked);
    let best = starfall_persist::leaderboard::best_score(&dir, mode, difficulty);

    let config = SimConfig {
        seed: seed(),
        mode,
        difficulty,
        mods,
        best_score: best,
    };
    info!(
        "starting: data dir {:?}, {} skills unlocked, {} cores banked, best {}",
        dir,
        meta.unlocked.len(),
        meta.cores,
        best
    );

    let latest = state::new_shared_snapshot();
    let cmd_tx = match game_loop::spawn_game_loop(dir, config, latest.clone()) {
        Ok(tx) => tx,
        Err(err) => {
            error!("failed to spawn game loop thread: {err}");
            return;
        }
    };

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "snapshot" => {
                let snapshot = latest.lock().ok().and_then(|s| s.clone());
                match snapshot.map(|s| serde_json::to_string(&s)) {
                    Some(Ok(json)) => println!("{json}"),
                    Some(Err(err)) => warn!("snapshot serialization failed: {err}"),
                    None => println!("null"),
                }
            }
            _ => match serde_json::from_str::<PlayerCommand>(line) {
                Ok(command) => {
                    if cmd_tx.send(GameLoopCommand::Player(command)).is_err() {
                        error!("game loop thread is gone");
                        break;
                    }
                }
                Err(err) => warn!("unrecognized command {line:?}: {err}"),
            },
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    info!("shutting down");
}

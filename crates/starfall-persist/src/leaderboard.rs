//! Local top-10 leaderboard, one JSON file per (mode, difficulty).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use starfall_core::enums::{Difficulty, GameMode};

/// How many entries a board keeps.
pub const BOARD_SIZE: usize = 10;

/// One scored run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u32,
    /// Unix seconds when the run ended.
    pub timestamp: u64,
}

fn board_path(dir: &Path, mode: GameMode, difficulty: Difficulty) -> PathBuf {
    dir.join(format!("lb_{}_{}.json", mode.as_key(), difficulty.as_key()))
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Read a board. Missing or corrupt files read as empty.
pub fn load_leaderboard(dir: &Path, mode: GameMode, difficulty: Difficulty) -> Vec<LeaderboardEntry> {
    let path = board_path(dir, mode, difficulty);
    let Ok(json) = fs::read_to_string(&path) else {
        return Vec::new();
    };
    serde_json::from_str(&json).unwrap_or_default()
}

/// Best score on a board, 0 when empty.
pub fn best_score(dir: &Path, mode: GameMode, difficulty: Difficulty) -> u32 {
    load_leaderboard(dir, mode, difficulty)
        .iter()
        .map(|e| e.score)
        .max()
        .unwrap_or(0)
}

/// Append a score, keep the top 10 sorted descending, and write the
/// board back.
pub fn record_score(
    dir: &Path,
    mode: GameMode,
    difficulty: Difficulty,
    score: u32,
) -> Result<(), String> {
    record_score_at(dir, mode, difficulty, score, now_secs())
}

/// `record_score` with an explicit timestamp.
pub fn record_score_at(
    dir: &Path,
    mode: GameMode,
    difficulty: Difficulty,
    score: u32,
    timestamp: u64,
) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create data directory: {e}"))?;

    let mut board = load_leaderboard(dir, mode, difficulty);
    board.push(LeaderboardEntry { score, timestamp });
    board.sort_by(|a, b| b.score.cmp(&a.score));
    board.truncate(BOARD_SIZE);

    let json = serde_json::to_string_pretty(&board)
        .map_err(|e| format!("Failed to serialize leaderboard: {e}"))?;
    let path = board_path(dir, mode, difficulty);
    fs::write(&path, json).map_err(|e| format!("Failed to write leaderboard file: {e}"))?;
    Ok(())
}

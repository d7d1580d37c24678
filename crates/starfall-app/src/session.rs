//! Run-end persistence: bank earned cores and record the score.

use std::path::Path;

use starfall_core::state::RunSummaryView;
use starfall_persist::{leaderboard, meta_store};

/// Apply a finished run to the data directory: earned cores are added
/// to the meta ledger, and the score goes onto the (mode, difficulty)
/// board. Returns the new core balance.
pub fn persist_run_end(dir: &Path, summary: &RunSummaryView) -> Result<u32, String> {
    let mut meta = meta_store::load_meta(dir);
    if summary.cores_earned > 0 {
        meta.cores += summary.cores_earned;
        meta_store::save_meta(dir, &meta)?;
    }

    leaderboard::record_score(dir, summary.mode, summary.difficulty, summary.score)?;
    Ok(meta.cores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    use starfall_core::enums::{Difficulty, EndReason, GameMode};

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("starfall_test_{name}"));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn summary(score: u32, cores: u32) -> RunSummaryView {
        RunSummaryView {
            score,
            best: score,
            accuracy_pct: 50,
            mode: GameMode::Classic,
            difficulty: Difficulty::Normal,
            reason: EndReason::Dead,
            cores_earned: cores,
            breakdown: Vec::new(),
        }
    }

    #[test]
    fn test_run_end_banks_cores_and_records_score() {
        let dir = test_dir("session_bank");

        let balance = persist_run_end(&dir, &summary(800, 3)).unwrap();
        assert_eq!(balance, 3);

        let balance = persist_run_end(&dir, &summary(1200, 2)).unwrap();
        assert_eq!(balance, 5);

        let meta = meta_store::load_meta(&dir);
        assert_eq!(meta.cores, 5);
        assert_eq!(
            leaderboard::best_score(&dir, GameMode::Classic, Difficulty::Normal),
            1200
        );
        let board = leaderboard::load_leaderboard(&dir, GameMode::Classic, Difficulty::Normal);
        assert_eq!(board.len(), 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_zero_core_run_still_records_score() {
        let dir = test_dir("session_zero");

        let balance = persist_run_end(&dir, &summary(150, 0)).unwrap();
        assert_eq!(balance, 0);
        assert_eq!(
            leaderboard::best_score(&dir, GameMode::Classic, Difficulty::Normal),
            150
        );

        let _ = fs::remove_dir_all(&dir);
    }
}

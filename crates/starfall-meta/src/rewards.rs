//! End-of-run core rewards.
//!
//! Cores are the meta currency. The calculator is deliberately stingy:
//! short runs earn nothing, and every award names its reason so the
//! summary screen can itemize them.

use starfall_core::enums::{Difficulty, GameMode};
use starfall_core::state::RewardLineView;

/// Run telemetry fed into the reward calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    pub score: u32,
    /// Zero-based index of the wave the run ended on.
    pub wave_index: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub deaths: u32,
    pub ufo_kills: u32,
}

pub type RewardLine = RewardLineView;

fn line(label: impl Into<String>, cores: u32) -> RewardLine {
    RewardLine {
        label: label.into(),
        cores,
    }
}

/// Compute cores earned for a finished run, with an itemized breakdown.
/// `yield_bonus` is the fractional contracts bonus from the run tuning.
pub fn calc_cores_earned(
    stats: &RunStats,
    mode: GameMode,
    difficulty: Difficulty,
    yield_bonus: f64,
) -> (u32, Vec<RewardLine>) {
    let mut breakdown = Vec::new();
    let mut cores = 0u32;

    let wave = stats.wave_index + 1;
    let acc = if stats.shots_fired > 0 {
        stats.shots_hit as f64 / stats.shots_fired as f64
    } else {
        0.0
    };

    if stats.score < 400 || wave < 3 {
        return (0, vec![line("No cores: run too short.", 0)]);
    }

    if wave >= 6 {
        cores += 1;
        breakdown.push(line("Wave 6+ (+1)", 1));
    }
    if wave >= 11 {
        cores += 1;
        breakdown.push(line("Wave 11+ (+1)", 1));
    }
    if wave >= 16 {
        cores += 1;
        breakdown.push(line("Wave 16+ (+1)", 1));
    }

    let ufo_cores = stats.ufo_kills.min(2);
    if ufo_cores > 0 {
        cores += ufo_cores;
        breakdown.push(line(
            format!("UFO destroyed x{} (+{})", ufo_cores, ufo_cores),
            ufo_cores,
        ));
    }

    if acc >= 0.7 && stats.score >= 2500 {
        cores += 1;
        breakdown.push(line("Accuracy 70%+ and 2500+ pts (+1)", 1));
    }

    if stats.deaths == 0 && wave >= 8 {
        cores += 1;
        breakdown.push(line("Deathless run (Wave 8+) (+1)", 1));
    }

    if mode == GameMode::OneLife && wave >= 6 {
        cores += 1;
        breakdown.push(line("One Life: Wave 6+ (+1)", 1));
    }

    if mode == GameMode::TimeAttack {
        if stats.score >= 4000 {
            cores += 2;
            breakdown.push(line("Time Attack: 4000+ pts (+2)", 2));
        } else if stats.score >= 2500 {
            cores += 1;
            breakdown.push(line("Time Attack: 2500+ pts (+1)", 1));
        }
    }

    if difficulty == Difficulty::Hard && (wave >= 8 || stats.score >= 3000) {
        cores += 1;
        breakdown.push(line("Hard bonus (+1)", 1));
    }

    // Contracts yield applies only to an already-positive payout.
    if yield_bonus > 0.0 && cores > 0 {
        let extra = (cores as f64 * yield_bonus).floor() as u32;
        let pct = (yield_bonus * 100.0).round() as u32;
        if extra > 0 {
            cores += extra;
            breakdown.push(line(format!("Contracts: +{}% (+{})", pct, extra), extra));
        } else {
            breakdown.push(line(format!("Contracts active (+{}%)", pct), 0));
        }
    }

    (cores, breakdown)
}

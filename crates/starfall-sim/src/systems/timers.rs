//! Run clocks: the time-attack countdown, the combo window, and the
//! power-up timers. All decay in real time, unaffected by slow-mo.

use starfall_core::constants::DT;

use crate::combat;
use crate::run::RunState;

/// Advance the run clocks. Returns true when the time-attack clock
/// expires this tick; the caller must end the run immediately.
pub fn run(run: &mut RunState) -> bool {
    if let Some(t) = run.time_left.as_mut() {
        *t -= DT;
        if *t <= 0.0 {
            return true;
        }
    }

    if run.combo_time > 0.0 {
        run.combo_time -= DT;
        if run.combo_time <= 0.0 {
            combat::reset_combo(run);
        }
    }

    run.powers.tick(DT);
    false
}

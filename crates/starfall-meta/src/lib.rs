//! Meta-progression: the skill catalog, the unlock ledger, the fold from
//! unlocked skills into run modifiers, and the end-of-run core rewards.
//!
//! Everything here is pure data and pure functions; persistence lives in
//! `starfall-persist`.

pub mod catalog;
pub mod fold;
pub mod rewards;
pub mod store;

pub use catalog::{skill_by_id, Branch, Skill, SkillEffect, SKILLS};
pub use fold::compute_meta_mods;
pub use rewards::{calc_cores_earned, RewardLine, RunStats};
pub use store::{Meta, UnlockError, META_VERSION};

#[cfg(test)]
mod tests;

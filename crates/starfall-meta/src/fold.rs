//! Fold unlocked skills into a [`MetaMods`] bundle.

use std::collections::BTreeSet;

use starfall_core::tuning::MetaMods;

use crate::catalog::{SkillEffect, SKILLS};

/// Fold every owned skill's effects into a modifier bundle and apply the
/// safety clamps. Pure: same unlock set in, same mods out. Unlocked ids
/// that are not in the catalog are ignored.
pub fn compute_meta_mods(unlocked: &BTreeSet<String>) -> MetaMods {
    let mut mods = MetaMods::default();

    for skill in SKILLS.iter() {
        if !unlocked.contains(&skill.id) {
            continue;
        }
        for effect in &skill.effects {
            match *effect {
                SkillEffect::ThrustMul(m) => mods.thrust_mul *= m,
                SkillEffect::FrictionMul(m) => mods.friction_mul *= m,
                SkillEffect::MaxSpeedMul(m) => mods.max_speed_mul *= m,
                SkillEffect::LaserSpeedMul(m) => mods.laser_speed_mul *= m,
                SkillEffect::LaserMaxAdd(n) => mods.laser_max_add += n,
                SkillEffect::ShootCdMul(m) => mods.shoot_cd_mul *= m,
                SkillEffect::PowerDurMul(m) => mods.power_dur_mul *= m,
                SkillEffect::InvulnMul(m) => mods.invuln_mul *= m,
                SkillEffect::DropChanceMul(m) => mods.drop_chance_mul *= m,
                SkillEffect::StartShield => mods.start_shield = 1,
                SkillEffect::RoidSpeedMul(m) => mods.roid_speed_mul *= m,
                SkillEffect::UfoRateMul(m) => mods.ufo_rate_mul *= m,
                SkillEffect::ExtraRoids(n) => mods.extra_roids += n,
                SkillEffect::YieldAdd(y) => mods.yield_add += y,
            }
        }
    }

    mods.clamp();
    mods
}

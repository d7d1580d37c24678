//! Unit tests for the meta-progression crate.

use std::collections::BTreeSet;

use starfall_core::enums::{Difficulty, GameMode};

use crate::catalog::{skill_by_id, SKILLS};
use crate::fold::compute_meta_mods;
use crate::rewards::{calc_cores_earned, RunStats};
use crate::store::{Meta, UnlockError};

fn owned(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

// --- catalog ---

#[test]
fn test_catalog_ids_unique() {
    let mut seen = BTreeSet::new();
    for s in SKILLS.iter() {
        assert!(seen.insert(s.id.clone()), "duplicate skill id {}", s.id);
    }
}

#[test]
fn test_catalog_requires_resolve() {
    for s in SKILLS.iter() {
        for req in &s.requires {
            assert!(
                skill_by_id(req).is_some(),
                "skill {} requires unknown id {}",
                s.id,
                req
            );
        }
    }
}

#[test]
fn test_catalog_core_is_free_and_rootless() {
    let core = skill_by_id("core").unwrap();
    assert_eq!(core.cost, 0);
    assert!(core.requires.is_empty());
}

#[test]
fn test_catalog_chain_costs_step_every_two() {
    assert_eq!(skill_by_id("wep_spd_01").unwrap().cost, 2);
    assert_eq!(skill_by_id("wep_spd_02").unwrap().cost, 2);
    assert_eq!(skill_by_id("wep_spd_03").unwrap().cost, 3);
    assert_eq!(skill_by_id("wep_spd_06").unwrap().cost, 4);
    assert_eq!(skill_by_id("mob_thr_07").unwrap().cost, 5);
}

#[test]
fn test_catalog_yield_chain_hangs_off_extra() {
    let yld = skill_by_id("ctr_yield_01").unwrap();
    assert_eq!(yld.requires, vec!["ctr_extra_04".to_string()]);
}

// --- fold ---

#[test]
fn test_fold_empty_set_is_identity() {
    let mods = compute_meta_mods(&BTreeSet::new());
    assert_eq!(mods.thrust_mul, 1.0);
    assert_eq!(mods.laser_max_add, 0);
    assert_eq!(mods.start_shield, 0);
    assert_eq!(mods.yield_add, 0.0);
}

#[test]
fn test_fold_is_pure() {
    let set = owned(&["core", "core_ring_01", "core_ring_02", "wep_root"]);
    assert_eq!(compute_meta_mods(&set), compute_meta_mods(&set));
}

#[test]
fn test_fold_ring_node_boosts_four_stats() {
    let mods = compute_meta_mods(&owned(&["core", "core_ring_01"]));
    assert!((mods.thrust_mul - 1.01).abs() < 1e-12);
    assert!((mods.max_speed_mul - 1.01).abs() < 1e-12);
    assert!((mods.laser_speed_mul - 1.01).abs() < 1e-12);
    assert!((mods.drop_chance_mul - 1.01).abs() < 1e-12);
    assert_eq!(mods.shoot_cd_mul, 1.0);
}

#[test]
fn test_fold_effects_stack_multiplicatively() {
    let mods = compute_meta_mods(&owned(&["wep_spd_01", "wep_spd_02"]));
    assert!((mods.laser_speed_mul - 1.035 * 1.035).abs() < 1e-12);
}

#[test]
fn test_fold_shield_is_idempotent() {
    let mods = compute_meta_mods(&owned(&["def_shield_01", "def_keystone_phalanx"]));
    assert_eq!(mods.start_shield, 1);
}

#[test]
fn test_fold_ignores_unknown_ids() {
    let mods = compute_meta_mods(&owned(&["not_a_skill", "wep_max_01"]));
    assert_eq!(mods.laser_max_add, 1);
}

#[test]
fn test_fold_clamps_shoot_cd_floor() {
    // Every cooldown reducer at once still bottoms out at the clamp.
    let set = owned(&[
        "wep_cd_01",
        "wep_cd_02",
        "wep_cd_03",
        "wep_cd_04",
        "wep_cd_05",
        "wep_cd_06",
        "wep_keystone_overclock",
        "wep_keystone_precision",
        "bridge_mob_wep",
    ]);
    let mods = compute_meta_mods(&set);
    assert!(mods.shoot_cd_mul >= 0.45);
}

// --- store ---

#[test]
fn test_purchase_deducts_and_unlocks() {
    let mut meta = Meta::default();
    meta.cores = 5;
    let left = meta.purchase("core_ring_01").unwrap();
    assert_eq!(left, 4);
    assert!(meta.has_skill("core_ring_01"));
}

#[test]
fn test_purchase_refuses_without_prereq() {
    let mut meta = Meta::default();
    meta.cores = 50;
    let err = meta.purchase("wep_root").unwrap_err();
    assert_eq!(
        err,
        UnlockError::MissingPrereq {
            skill: "wep_root".to_string(),
            missing: "core_ring_01".to_string(),
        }
    );
    // Refusal must not mutate.
    assert_eq!(meta.cores, 50);
    assert!(!meta.has_skill("wep_root"));
}

#[test]
fn test_purchase_refuses_when_broke() {
    let mut meta = Meta::default();
    meta.cores = 0;
    let err = meta.purchase("core_ring_01").unwrap_err();
    assert_eq!(err, UnlockError::InsufficientCores { needed: 1, have: 0 });
}

#[test]
fn test_purchase_refuses_duplicates_and_unknowns() {
    let mut meta = Meta::default();
    assert_eq!(
        meta.purchase("core").unwrap_err(),
        UnlockError::AlreadyOwned("core".to_string())
    );
    assert_eq!(
        meta.purchase("warp_drive").unwrap_err(),
        UnlockError::UnknownSkill("warp_drive".to_string())
    );
}

#[test]
fn test_meta_from_json_roundtrip() {
    let mut meta = Meta::default();
    meta.cores = 7;
    meta.unlocked.insert("core_ring_01".to_string());
    let back = Meta::from_json(&meta.to_json());
    assert_eq!(back.cores, 7);
    assert!(back.has_skill("core_ring_01"));
    assert!(back.has_skill("core"));
}

#[test]
fn test_meta_from_json_corrupt_falls_back() {
    let meta = Meta::from_json("{not json");
    assert_eq!(meta.cores, 0);
    assert!(meta.has_skill("core"));
}

#[test]
fn test_legacy_migration_maps_and_drops() {
    let legacy = r#"{"cores": 9, "unlocked": {"core": true, "thrusters1": true, "shieldStart": true, "ancientRelic": true, "cooling": false}}"#;
    let meta = Meta::from_legacy_json(legacy).unwrap();
    assert_eq!(meta.cores, 9);
    assert!(meta.has_skill("core"));
    assert!(meta.has_skill("mob_thr_01"));
    assert!(meta.has_skill("def_shield_01"));
    // Unknown ids dropped, false entries dropped.
    assert!(!meta.has_skill("ancientRelic"));
    assert!(!meta.has_skill("wep_cd_01"));
}

#[test]
fn test_legacy_migration_rejects_garbage() {
    assert!(Meta::from_legacy_json("[1,2,3]").is_none());
    assert!(Meta::from_legacy_json("{bad").is_none());
}

// --- rewards ---

fn stats(score: u32, wave_index: u32) -> RunStats {
    RunStats {
        score,
        wave_index,
        shots_fired: 100,
        shots_hit: 50,
        deaths: 1,
        ufo_kills: 0,
    }
}

#[test]
fn test_rewards_short_run_earns_nothing() {
    let (cores, lines) = calc_cores_earned(
        &stats(399, 10),
        GameMode::Classic,
        Difficulty::Normal,
        0.0,
    );
    assert_eq!(cores, 0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].cores, 0);

    let (cores, _) = calc_cores_earned(&stats(5000, 1), GameMode::Classic, Difficulty::Normal, 0.0);
    assert_eq!(cores, 0);
}

#[test]
fn test_rewards_wave_milestones() {
    // wave_index 10 is wave 11: both the 6+ and 11+ milestones.
    let (cores, _) = calc_cores_earned(&stats(500, 10), GameMode::Classic, Difficulty::Normal, 0.0);
    assert_eq!(cores, 2);
}

#[test]
fn test_rewards_ufo_kills_capped_at_two() {
    let mut s = stats(500, 5);
    s.ufo_kills = 7;
    let (cores, _) = calc_cores_earned(&s, GameMode::Classic, Difficulty::Normal, 0.0);
    // Wave 6 milestone + capped UFO kills.
    assert_eq!(cores, 3);
}

#[test]
fn test_rewards_accuracy_needs_score_too() {
    let mut s = stats(2499, 5);
    s.shots_hit = 90;
    s.shots_fired = 100;
    let (cores, _) = calc_cores_earned(&s, GameMode::Classic, Difficulty::Normal, 0.0);
    assert_eq!(cores, 1); // wave 6 only

    s.score = 2500;
    let (cores, _) = calc_cores_earned(&s, GameMode::Classic, Difficulty::Normal, 0.0);
    assert_eq!(cores, 2);
}

#[test]
fn test_rewards_deathless_and_one_life() {
    let mut s = stats(500, 7);
    s.deaths = 0;
    let (cores, _) = calc_cores_earned(&s, GameMode::OneLife, Difficulty::Normal, 0.0);
    // Wave 6 + deathless (wave 8) + one-life (wave 6).
    assert_eq!(cores, 3);
}

#[test]
fn test_rewards_time_attack_tiers() {
    let (cores, _) = calc_cores_earned(
        &stats(4000, 4),
        GameMode::TimeAttack,
        Difficulty::Normal,
        0.0,
    );
    assert_eq!(cores, 2);
    let (cores, _) = calc_cores_earned(
        &stats(2500, 4),
        GameMode::TimeAttack,
        Difficulty::Normal,
        0.0,
    );
    assert_eq!(cores, 1);
}

#[test]
fn test_rewards_hard_bonus() {
    let (cores, _) = calc_cores_earned(&stats(3000, 4), GameMode::Classic, Difficulty::Hard, 0.0);
    assert_eq!(cores, 1);
}

#[test]
fn test_rewards_yield_bonus_floors() {
    // 3 base cores, +50% yield = +1 extra.
    let mut s = stats(500, 5);
    s.ufo_kills = 2;
    let (cores, lines) = calc_cores_earned(&s, GameMode::Classic, Difficulty::Normal, 0.5);
    assert_eq!(cores, 4);
    assert!(lines.iter().any(|l| l.cores == 1 && l.label.contains("50%")));

    // Bonus too small to floor to one still gets an informational line.
    let (cores, lines) = calc_cores_earned(&s, GameMode::Classic, Difficulty::Normal, 0.1);
    assert_eq!(cores, 3);
    assert!(lines.iter().any(|l| l.cores == 0));
}

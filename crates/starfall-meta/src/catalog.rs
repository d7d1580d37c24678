//! The skill catalog: a static graph of unlockable nodes.
//!
//! Node identity is the string id; prerequisites reference ids and are
//! all-of. The catalog is data only: effects are folded into run
//! modifiers by [`crate::fold::compute_meta_mods`].

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Which branch of the tree a skill belongs to (cosmetic grouping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    Core,
    Weapons,
    Mobility,
    Defense,
    Salvage,
    Contracts,
    Bridge,
}

/// One modifier contribution from an unlocked skill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillEffect {
    ThrustMul(f64),
    FrictionMul(f64),
    MaxSpeedMul(f64),
    LaserSpeedMul(f64),
    LaserMaxAdd(u32),
    ShootCdMul(f64),
    PowerDurMul(f64),
    InvulnMul(f64),
    DropChanceMul(f64),
    /// Start every life with one shield charge (idempotent).
    StartShield,
    RoidSpeedMul(f64),
    UfoRateMul(f64),
    ExtraRoids(u32),
    /// Additive fraction on end-of-run core yield.
    YieldAdd(f64),
}

/// One node of the skill tree.
#[derive(Debug, Clone)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub cost: u32,
    pub branch: Branch,
    /// Prerequisite skill ids; all must be owned.
    pub requires: Vec<String>,
    pub effects: Vec<SkillEffect>,
}

fn node(
    id: &str,
    name: &str,
    cost: u32,
    branch: Branch,
    requires: &[&str],
    effects: &[SkillEffect],
) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        cost,
        branch,
        requires: requires.iter().map(|r| r.to_string()).collect(),
        effects: effects.to_vec(),
    }
}

fn roman(n: usize) -> &'static str {
    match n {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        5 => "V",
        6 => "VI",
        7 => "VII",
        _ => "VIII",
    }
}

/// Build a sequential chain: node i requires node i-1 (the first requires
/// `req0`) and costs `base + i/2`.
fn chain(
    prefix: &str,
    stem: &str,
    len: usize,
    base_cost: u32,
    branch: Branch,
    req0: &str,
    effects: &[SkillEffect],
) -> Vec<Skill> {
    let mut out = Vec::with_capacity(len);
    let mut prev = req0.to_string();
    for i in 0..len {
        let id = format!("{}{:02}", prefix, i + 1);
        out.push(node(
            &id,
            &format!("{} {}", stem, roman(i + 1)),
            base_cost + (i as u32) / 2,
            branch,
            &[prev.as_str()],
            effects,
        ));
        prev = id;
    }
    out
}

/// The full catalog, in display order.
pub static SKILLS: LazyLock<Vec<Skill>> = LazyLock::new(|| {
    use SkillEffect::*;

    let mut skills = vec![node("core", "Primordial Core", 0, Branch::Core, &[], &[])];

    // Inner ring: eight small all-round boosts around the core.
    let ring_fx = [
        ThrustMul(1.01),
        MaxSpeedMul(1.01),
        LaserSpeedMul(1.01),
        DropChanceMul(1.01),
    ];
    for i in 1..=8u32 {
        skills.push(node(
            &format!("core_ring_{:02}", i),
            &format!("Core Conduit {}", roman(i as usize)),
            1,
            Branch::Core,
            &["core"],
            &ring_fx,
        ));
    }

    // Branch roots, each gated on a pair (or single) of ring nodes.
    skills.push(node(
        "wep_root",
        "Weapons Bay",
        2,
        Branch::Weapons,
        &["core_ring_01", "core_ring_02"],
        &[],
    ));
    skills.push(node(
        "mob_root",
        "Thruster Array",
        2,
        Branch::Mobility,
        &["core_ring_03", "core_ring_04"],
        &[],
    ));
    skills.push(node(
        "def_root",
        "Bulwark Plating",
        2,
        Branch::Defense,
        &["core_ring_05", "core_ring_06"],
        &[],
    ));
    skills.push(node(
        "salv_root",
        "Salvage Rig",
        2,
        Branch::Salvage,
        &["core_ring_07"],
        &[],
    ));
    skills.push(node(
        "ctr_root",
        "Contract Board",
        2,
        Branch::Contracts,
        &["core_ring_08"],
        &[],
    ));

    // Weapons branch.
    skills.extend(chain(
        "wep_spd_",
        "Laser Velocity",
        6,
        2,
        Branch::Weapons,
        "wep_root",
        &[LaserSpeedMul(1.035)],
    ));
    skills.extend(chain(
        "wep_cd_",
        "Rapid Cycling",
        6,
        2,
        Branch::Weapons,
        "wep_root",
        &[ShootCdMul(0.965)],
    ));
    skills.extend(chain(
        "wep_max_",
        "Extended Magazine",
        5,
        3,
        Branch::Weapons,
        "wep_root",
        &[LaserMaxAdd(1)],
    ));
    skills.push(node(
        "wep_keystone_overclock",
        "Overclock",
        8,
        Branch::Weapons,
        &["wep_spd_06", "wep_cd_06", "wep_max_05"],
        &[LaserSpeedMul(1.22), ShootCdMul(0.92)],
    ));
    skills.push(node(
        "wep_keystone_precision",
        "Precision Array",
        7,
        Branch::Weapons,
        &["wep_spd_05", "wep_cd_05"],
        &[LaserSpeedMul(1.14), ShootCdMul(0.93)],
    ));

    // Mobility branch.
    skills.extend(chain(
        "mob_thr_",
        "Drive Output",
        7,
        2,
        Branch::Mobility,
        "mob_root",
        &[ThrustMul(1.045)],
    ));
    skills.extend(chain(
        "mob_fric_",
        "Inertial Dampers",
        6,
        2,
        Branch::Mobility,
        "mob_root",
        &[FrictionMul(0.965)],
    ));
    skills.extend(chain(
        "mob_spd_",
        "Velocity Ceiling",
        6,
        3,
        Branch::Mobility,
        "mob_root",
        &[MaxSpeedMul(1.035)],
    ));
    skills.push(node(
        "mob_keystone_driftking",
        "Drift King",
        8,
        Branch::Mobility,
        &["mob_fric_06", "mob_spd_06"],
        &[MaxSpeedMul(1.16), FrictionMul(0.9)],
    ));
    skills.push(node(
        "mob_keystone_afterburner",
        "Afterburner",
        8,
        Branch::Mobility,
        &["mob_thr_07", "mob_spd_05"],
        &[ThrustMul(1.18), MaxSpeedMul(1.1)],
    ));

    // Defense branch.
    skills.extend(chain(
        "def_inv_",
        "Phase Blink",
        6,
        2,
        Branch::Defense,
        "def_root",
        &[InvulnMul(1.09)],
    ));
    skills.extend(chain(
        "def_shield_",
        "Aegis Charge",
        5,
        3,
        Branch::Defense,
        "def_root",
        &[StartShield, InvulnMul(1.03)],
    ));
    skills.extend(chain(
        "def_grace_",
        "Impact Buffer",
        4,
        3,
        Branch::Defense,
        "def_root",
        &[InvulnMul(1.06)],
    ));
    skills.push(node(
        "def_keystone_phalanx",
        "Phalanx",
        7,
        Branch::Defense,
        &["def_inv_06", "def_shield_05"],
        &[StartShield, InvulnMul(1.12)],
    ));
    skills.push(node(
        "def_keystone_ironwill",
        "Iron Will",
        7,
        Branch::Defense,
        &["def_inv_05", "def_grace_04"],
        &[InvulnMul(1.18)],
    ));

    // Salvage branch.
    skills.extend(chain(
        "salv_drop_",
        "Debris Scanner",
        6,
        2,
        Branch::Salvage,
        "salv_root",
        &[DropChanceMul(1.06)],
    ));
    skills.extend(chain(
        "salv_dur_",
        "Power Cells",
        6,
        2,
        Branch::Salvage,
        "salv_root",
        &[PowerDurMul(1.07)],
    ));
    skills.push(node(
        "salv_keystone_scavenger",
        "Scavenger",
        7,
        Branch::Salvage,
        &["salv_drop_06", "salv_dur_06"],
        &[DropChanceMul(1.18), PowerDurMul(1.18)],
    ));
    skills.push(node(
        "salv_keystone_magnet",
        "Magnet",
        6,
        Branch::Salvage,
        &["salv_drop_05"],
        &[DropChanceMul(1.14)],
    ));

    // Contracts branch: harder runs, better core yield.
    skills.extend(chain(
        "ctr_roid_",
        "Dense Fields",
        6,
        2,
        Branch::Contracts,
        "ctr_root",
        &[RoidSpeedMul(1.07), YieldAdd(0.03)],
    ));
    skills.extend(chain(
        "ctr_ufo_",
        "Hostile Skies",
        5,
        2,
        Branch::Contracts,
        "ctr_root",
        &[UfoRateMul(1.08), YieldAdd(0.02)],
    ));
    skills.extend(chain(
        "ctr_extra_",
        "Crowded Orbit",
        4,
        3,
        Branch::Contracts,
        "ctr_root",
        &[ExtraRoids(1), YieldAdd(0.02)],
    ));
    skills.extend(chain(
        "ctr_yield_",
        "Hazard Pay",
        4,
        4,
        Branch::Contracts,
        "ctr_extra_04",
        &[YieldAdd(0.08)],
    ));
    skills.push(node(
        "ctr_keystone_hell",
        "Hellfield Pact",
        9,
        Branch::Contracts,
        &["ctr_roid_06", "ctr_ufo_05", "ctr_yield_04"],
        &[
            RoidSpeedMul(1.18),
            UfoRateMul(1.18),
            ExtraRoids(2),
            YieldAdd(0.22),
        ],
    ));
    skills.push(node(
        "ctr_keystone_greed",
        "Greed Clause",
        8,
        Branch::Contracts,
        &["ctr_yield_03"],
        &[YieldAdd(0.2)],
    ));

    // Cross-branch bridges.
    skills.push(node(
        "bridge_wep_salv",
        "Ordnance Salvage Link",
        4,
        Branch::Bridge,
        &["wep_root", "salv_root"],
        &[LaserSpeedMul(1.05), DropChanceMul(1.05)],
    ));
    skills.push(node(
        "bridge_mob_wep",
        "Drive-Weapons Link",
        4,
        Branch::Bridge,
        &["mob_root", "wep_root"],
        &[MaxSpeedMul(1.04), ShootCdMul(0.97)],
    ));
    skills.push(node(
        "bridge_def_ctr",
        "Bulwark Contracts Link",
        4,
        Branch::Bridge,
        &["def_root", "ctr_root"],
        &[InvulnMul(1.06), YieldAdd(0.03)],
    ));

    skills
});

/// Look up a skill by id.
pub fn skill_by_id(id: &str) -> Option<&'static Skill> {
    SKILLS.iter().find(|s| s.id == id)
}

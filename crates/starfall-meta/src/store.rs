//! The unlock ledger: owned skills, banked cores, and the purchase rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{skill_by_id, Skill};

/// Current save format version.
pub const META_VERSION: u32 = 3;

/// Legacy (v1) skill ids mapped onto the current tree. Unmapped ids are
/// dropped silently so an old save never blocks loading.
const V1_TO_V3: &[(&str, &str)] = &[
    ("core", "core"),
    ("thrusters1", "mob_thr_01"),
    ("thrusters2", "mob_thr_02"),
    ("stabilizers", "mob_fric_01"),
    ("overdrive", "mob_spd_01"),
    ("capacitors", "wep_spd_01"),
    ("cooling", "wep_cd_01"),
    ("magazine", "wep_max_01"),
    ("powerMastery", "salv_dur_01"),
    ("shieldStart", "def_shield_01"),
    ("blinkMatrix", "def_inv_01"),
    ("salvage", "salv_drop_01"),
    ("contract1", "ctr_roid_01"),
    ("contract2", "ctr_ufo_01"),
    ("contract3", "ctr_extra_01"),
];

/// Why a purchase was refused. Refusal never mutates the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnlockError {
    #[error("unknown skill id: {0}")]
    UnknownSkill(String),
    #[error("skill already owned: {0}")]
    AlreadyOwned(String),
    #[error("skill {skill} requires {missing}")]
    MissingPrereq { skill: String, missing: String },
    #[error("insufficient cores: need {needed}, have {have}")]
    InsufficientCores { needed: u32, have: u32 },
}

/// Persistent meta-progression state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub v: u32,
    pub cores: u32,
    pub unlocked: BTreeSet<String>,
}

impl Default for Meta {
    fn default() -> Self {
        let mut unlocked = BTreeSet::new();
        unlocked.insert("core".to_string());
        Self {
            v: META_VERSION,
            cores: 0,
            unlocked,
        }
    }
}

impl Meta {
    /// Parse a current-format save. Any parse failure falls back to the
    /// default ledger; a corrupt save must never block startup.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Meta>(json) {
            Ok(mut meta) => {
                meta.v = META_VERSION;
                meta.unlocked.insert("core".to_string());
                meta
            }
            Err(_) => Meta::default(),
        }
    }

    /// Migrate a legacy (v1) save: map old ids onto the current tree,
    /// dropping anything unmapped, and keep the banked cores.
    pub fn from_legacy_json(json: &str) -> Option<Self> {
        let raw: serde_json::Value = serde_json::from_str(json).ok()?;
        let obj = raw.as_object()?;

        let cores = obj.get("cores").and_then(|c| c.as_u64()).unwrap_or(0) as u32;

        let mut unlocked = BTreeSet::new();
        if let Some(map) = obj.get("unlocked").and_then(|u| u.as_object()) {
            for (old_id, val) in map {
                if val != &serde_json::Value::Bool(true) {
                    continue;
                }
                if let Some((_, new_id)) = V1_TO_V3.iter().find(|(old, _)| old == old_id) {
                    unlocked.insert(new_id.to_string());
                }
            }
        }
        unlocked.insert("core".to_string());

        Some(Self {
            v: META_VERSION,
            cores,
            unlocked,
        })
    }

    pub fn to_json(&self) -> String {
        // Meta contains only maps and scalars; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn has_skill(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Whether a skill is purchasable right now.
    pub fn can_unlock(&self, skill: &Skill) -> bool {
        !self.has_skill(&skill.id)
            && self.cores >= skill.cost
            && skill.requires.iter().all(|r| self.has_skill(r))
    }

    /// Buy a skill. On success the cost is deducted, the skill is owned,
    /// and the remaining core balance is returned. On failure nothing
    /// changes.
    pub fn purchase(&mut self, id: &str) -> Result<u32, UnlockError> {
        let skill = skill_by_id(id).ok_or_else(|| UnlockError::UnknownSkill(id.to_string()))?;

        if self.has_skill(id) {
            return Err(UnlockError::AlreadyOwned(id.to_string()));
        }
        for req in &skill.requires {
            if !self.has_skill(req) {
                return Err(UnlockError::MissingPrereq {
                    skill: id.to_string(),
                    missing: req.clone(),
                });
            }
        }
        if self.cores < skill.cost {
            return Err(UnlockError::InsufficientCores {
                needed: skill.cost,
                have: self.cores,
            });
        }

        self.cores -= skill.cost;
        self.unlocked.insert(id.to_string());
        Ok(self.cores)
    }
}

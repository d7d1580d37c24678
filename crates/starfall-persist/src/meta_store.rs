//! Meta-progression save file, with migration of legacy (v1/v2) saves.

use std::fs;
use std::path::Path;

use starfall_meta::store::Meta;

const META_FILE: &str = "meta.json";

/// Old save files swept at load time. A successful migration rewrites
/// the current file and removes these.
const LEGACY_FILES: &[&str] = &["meta_v1.json", "meta_v2.json"];

/// Load the meta ledger. Order: current file, then legacy files (which
/// are migrated, rewritten in the current format, and deleted), then
/// the default ledger. Never fails.
pub fn load_meta(dir: &Path) -> Meta {
    if let Ok(json) = fs::read_to_string(dir.join(META_FILE)) {
        if serde_json::from_str::<Meta>(&json).is_ok() {
            return Meta::from_json(&json);
        }
    }

    for name in LEGACY_FILES {
        let Ok(json) = fs::read_to_string(dir.join(name)) else {
            continue;
        };
        if let Some(meta) = Meta::from_legacy_json(&json) {
            let _ = save_meta(dir, &meta);
            for name in LEGACY_FILES {
                let _ = fs::remove_file(dir.join(name));
            }
            return meta;
        }
    }

    Meta::default()
}

pub fn save_meta(dir: &Path, meta: &Meta) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create data directory: {e}"))?;
    fs::write(dir.join(META_FILE), meta.to_json())
        .map_err(|e| format!("Failed to write meta file: {e}"))?;
    Ok(())
}

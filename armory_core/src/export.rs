//! Export, import and sharing of loadouts as JSON documents
//!
//! Documents embed full catalog values (base item, attachments, skin, theme),
//! so they re-import without loss even if the catalog has moved on.

use crate::loadout::Loadout;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Export/import error
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to encode or decode document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize one loadout
pub fn export_loadout(loadout: &Loadout) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(loadout)?)
}

/// Serialize a whole collection
pub fn export_collection(loadouts: &[Loadout]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(loadouts)?)
}

/// Human-copyable text for sharing one loadout
pub fn share_text(loadout: &Loadout) -> Result<String, ExportError> {
    export_loadout(loadout)
}

pub fn import_loadout(document: &str) -> Result<Loadout, ExportError> {
    Ok(serde_json::from_str(document)?)
}

pub fn import_collection(document: &str) -> Result<Vec<Loadout>, ExportError> {
    Ok(serde_json::from_str(document)?)
}

/// File name for a single exported loadout: `loadout-<slug>.json`
///
/// The slug keeps ASCII letters, digits, `-` and `_`; every other run of
/// characters becomes a single `-`, so the name can never leave the export
/// directory.
pub fn loadout_file_name(loadout: &Loadout) -> String {
    let mut slug = String::with_capacity(loadout.name().len());
    for c in loadout.name().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "loadout" } else { slug };
    format!("loadout-{}.json", slug)
}

/// File name for an exported collection: `armory-loadouts-<millis>.json`
pub fn collection_file_name(timestamp_millis: i64) -> String {
    format!("armory-loadouts-{}.json", timestamp_millis)
}

/// Write a document into `dir`, returning the full path
pub fn write_export(dir: &Path, file_name: &str, document: &str) -> Result<std::path::PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, document)?;
    tracing::info!(path = %path.display(), "export written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Attachment, BaseItem, ColorTheme, Skin};
    use crate::types::{LoadoutId, Rarity, SlotCategory, StatMap};
    use chrono::{TimeZone, Utc};

    fn sample() -> Loadout {
        let mut loadout = Loadout::new();
        loadout.set_name("Night  Shift".to_string());
        loadout.set_base_item(BaseItem {
            id: "phantom-smg".to_string(),
            name: "Phantom SMG".to_string(),
            kind: "smg".to_string(),
            rarity: Rarity::Rare,
            base_stats: StatMap::from([("stealth".to_string(), 70)]),
            energy_capacity: 100,
            description: "Compact".to_string(),
        });
        loadout.equip(
            SlotCategory::Muzzle,
            Attachment {
                id: "silencer-1".to_string(),
                category: SlotCategory::Muzzle,
                name: "Silencer".to_string(),
                rarity: Rarity::Rare,
                tier: 2,
                stat_modifiers: StatMap::from([("stealth".to_string(), 15)]),
                energy_cost: 8,
                locked: false,
                description: String::new(),
            },
        );
        loadout.set_skin(Some(Skin {
            id: "urban-camo".to_string(),
            name: "Urban Camo".to_string(),
            rarity: Rarity::Common,
            description: String::new(),
        }));
        loadout.set_color_theme(Some(ColorTheme {
            id: "cyber-blue".to_string(),
            name: "Cyber Blue".to_string(),
            primary: "#00d4ff".to_string(),
            accent: "#0066ff".to_string(),
            glow: "#00ffff".to_string(),
        }));
        loadout.set_id(LoadoutId::from("loadout-1"));
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        loadout.set_created_at(at);
        loadout.touch(at);
        loadout
    }

    #[test]
    fn test_loadout_round_trip_keeps_every_field() {
        let loadout = sample();
        let document = export_loadout(&loadout).unwrap();
        assert!(document.contains("\"baseItem\""));
        assert!(document.contains("\"energyCost\": 8"));
        assert_eq!(import_loadout(&document).unwrap(), loadout);
    }

    #[test]
    fn test_collection_round_trip() {
        let loadouts = vec![sample(), Loadout::new()];
        let document = export_collection(&loadouts).unwrap();
        assert_eq!(import_collection(&document).unwrap(), loadouts);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(import_loadout("[1, 2"), Err(ExportError::Json(_))));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(loadout_file_name(&sample()), "loadout-night-shift.json");
        assert_eq!(collection_file_name(1700000000000), "armory-loadouts-1700000000000.json");
    }

    #[test]
    fn test_file_name_strips_path_characters() {
        let mut loadout = Loadout::new();
        loadout.set_name("AK/47 Build".to_string());
        assert_eq!(loadout_file_name(&loadout), "loadout-ak-47-build.json");

        loadout.set_name("../..\\ --".to_string());
        assert_eq!(loadout_file_name(&loadout), "loadout-loadout.json");

        loadout.set_name("Ghost_Runner ★ v2".to_string());
        assert_eq!(loadout_file_name(&loadout), "loadout-ghost_runner-v2.json");
    }

    #[test]
    fn test_write_export_with_slash_in_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut loadout = sample();
        loadout.set_name("AK/47 Build".to_string());

        let path = write_export(dir.path(), &loadout_file_name(&loadout), &share_text(&loadout).unwrap()).unwrap();
        assert_eq!(path.parent(), Some(dir.path()));
        assert!(path.exists());
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let loadout = sample();
        let path = write_export(
            dir.path(),
            &loadout_file_name(&loadout),
            &share_text(&loadout).unwrap(),
        )
        .unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert_eq!(import_loadout(&written).unwrap(), loadout);
    }
}

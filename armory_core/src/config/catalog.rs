//! Catalog configuration loading

use super::ConfigError;
use crate::catalog::{Attachment, BaseItem, Catalog, ColorTheme, Preset, Skin};
use crate::types::{STAT_MAX, STAT_MIN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// On-disk layout of a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub base_items: Vec<BaseItem>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub skins: Vec<Skin>,
    #[serde(default)]
    pub color_themes: Vec<ColorTheme>,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl CatalogFile {
    /// Check ids, stat ranges and preset references
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unique("base item", self.base_items.iter().map(|b| b.id.as_str()))?;
        check_unique("attachment", self.attachments.iter().map(|a| a.id.as_str()))?;
        check_unique("skin", self.skins.iter().map(|s| s.id.as_str()))?;
        check_unique("color theme", self.color_themes.iter().map(|t| t.id.as_str()))?;
        check_unique("preset", self.presets.iter().map(|p| p.name.as_str()))?;

        for item in &self.base_items {
            for (stat, value) in &item.base_stats {
                if !(STAT_MIN..=STAT_MAX).contains(value) {
                    return Err(ConfigError::ValidationError(format!(
                        "base item '{}' has {} = {} outside {}..={}",
                        item.id, stat, value, STAT_MIN, STAT_MAX
                    )));
                }
            }
        }

        let attachment_ids: HashSet<&str> =
            self.attachments.iter().map(|a| a.id.as_str()).collect();
        for preset in &self.presets {
            if let Some(unknown) = preset
                .preferred_attachment_ids
                .iter()
                .find(|id| !attachment_ids.contains(id.as_str()))
            {
                return Err(ConfigError::ValidationError(format!(
                    "preset '{}' prefers unknown attachment '{}'",
                    preset.name, unknown
                )));
            }
        }

        Ok(())
    }

    pub fn into_catalog(self) -> Catalog {
        Catalog::new(
            self.base_items,
            self.attachments,
            self.skins,
            self.color_themes,
            self.presets,
        )
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate {} id '{}'",
                kind, id
            )));
        }
    }
    Ok(())
}

/// Load a catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = super::load_toml(path)?;
    file.validate()?;
    Ok(file.into_catalog())
}

/// Load a catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let file: CatalogFile = super::parse_toml(content)?;
    file.validate()?;
    Ok(file.into_catalog())
}

/// Get the catalog shipped with the crate
pub fn default_catalog() -> Catalog {
    let toml = include_str!("../../config/catalog.toml");
    parse_catalog(toml).unwrap_or_else(|e| {
        tracing::error!("built-in catalog is invalid: {}", e);
        CatalogFile::default().into_catalog()
    })
}

//! Catalog - immutable reference data a loadout is assembled from

use crate::types::{Rarity, SlotCategory, StatMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Foundation a loadout is built on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseItem {
    pub id: String,
    pub name: String,
    /// Item type (e.g. "rifle", "smg")
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub rarity: Rarity,
    /// Base stats, each in 0..=100
    pub base_stats: StatMap,
    /// Energy budget available to attachments
    pub energy_capacity: u32,
    #[serde(default)]
    pub description: String,
}

/// Modular attachment occupying one slot category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub category: SlotCategory,
    pub name: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default = "default_tier")]
    pub tier: u8,
    /// Signed stat deltas applied on top of the base stats
    #[serde(default)]
    pub stat_modifiers: StatMap,
    #[serde(default)]
    pub energy_cost: u32,
    /// Locked attachments cannot be equipped
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub description: String,
}

fn default_tier() -> u8 {
    1
}

/// Cosmetic skin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub description: String,
}

/// Color theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTheme {
    pub id: String,
    pub name: String,
    pub primary: String,
    pub accent: String,
    pub glow: String,
}

/// Named attachment preference list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Stat the preset leans towards ("stealth", "power", "balanced", ...)
    #[serde(default)]
    pub focus: String,
    pub preferred_attachment_ids: Vec<String>,
}

/// Attachments grouped by slot category, in catalog order
pub type AttachmentsByCategory = BTreeMap<SlotCategory, Vec<Attachment>>;

/// The full read-only catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    base_items: Vec<BaseItem>,
    attachments: AttachmentsByCategory,
    skins: Vec<Skin>,
    color_themes: Vec<ColorTheme>,
    presets: Vec<Preset>,
}

impl Catalog {
    pub fn new(
        base_items: Vec<BaseItem>,
        attachments: Vec<Attachment>,
        skins: Vec<Skin>,
        color_themes: Vec<ColorTheme>,
        presets: Vec<Preset>,
    ) -> Self {
        // Every declared category gets an entry, even if the catalog has nothing for it
        let mut grouped: AttachmentsByCategory = SlotCategory::all()
            .iter()
            .map(|c| (*c, Vec::new()))
            .collect();
        for attachment in attachments {
            grouped.entry(attachment.category).or_default().push(attachment);
        }

        Catalog {
            base_items,
            attachments: grouped,
            skins,
            color_themes,
            presets,
        }
    }

    pub fn base_items(&self) -> &[BaseItem] {
        &self.base_items
    }

    pub fn attachments_by_category(&self) -> &AttachmentsByCategory {
        &self.attachments
    }

    /// Attachments for one category (empty slice if none)
    pub fn attachments_for(&self, category: SlotCategory) -> &[Attachment] {
        self.attachments
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn all_attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments.values().flatten()
    }

    pub fn skins(&self) -> &[Skin] {
        &self.skins
    }

    pub fn color_themes(&self) -> &[ColorTheme] {
        &self.color_themes
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn base_item(&self, id: &str) -> Option<&BaseItem> {
        self.base_items.iter().find(|b| b.id == id)
    }

    pub fn attachment(&self, id: &str) -> Option<&Attachment> {
        self.all_attachments().find(|a| a.id == id)
    }

    pub fn skin(&self, id: &str) -> Option<&Skin> {
        self.skins.iter().find(|s| s.id == id)
    }

    pub fn color_theme(&self, id: &str) -> Option<&ColorTheme> {
        self.color_themes.iter().find(|t| t.id == id)
    }

    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }
}

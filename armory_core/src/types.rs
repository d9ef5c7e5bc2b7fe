//! Core types shared across the armory

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named stat -> integer value
///
/// A `BTreeMap` keeps stat order stable for display and export.
pub type StatMap = BTreeMap<String, i32>;

/// Lowest value a derived stat can take
pub const STAT_MIN: i32 = 0;
/// Highest value a derived stat can take
pub const STAT_MAX: i32 = 100;

/// Energy capacity of a loadout with no base item
pub const DEFAULT_ENERGY_CAPACITY: u32 = 100;

/// Stats every fresh loadout starts with (all zero)
pub const DEFAULT_STATS: [&str; 4] = ["stealth", "mobility", "power", "tech"];

/// Zeroed stat map used by empty loadouts
pub fn zeroed_stats() -> StatMap {
    DEFAULT_STATS.iter().map(|s| (s.to_string(), 0)).collect()
}

/// Attachment slot on a base item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotCategory {
    Optic,
    Barrel,
    Magazine,
    Grip,
    Stock,
    Muzzle,
    Laser,
    Underbarrel,
}

impl SlotCategory {
    /// Get all slot categories, in display order
    pub fn all() -> &'static [SlotCategory] {
        &[
            SlotCategory::Optic,
            SlotCategory::Barrel,
            SlotCategory::Magazine,
            SlotCategory::Grip,
            SlotCategory::Stock,
            SlotCategory::Muzzle,
            SlotCategory::Laser,
            SlotCategory::Underbarrel,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SlotCategory::Optic => "optic",
            SlotCategory::Barrel => "barrel",
            SlotCategory::Magazine => "magazine",
            SlotCategory::Grip => "grip",
            SlotCategory::Stock => "stock",
            SlotCategory::Muzzle => "muzzle",
            SlotCategory::Laser => "laser",
            SlotCategory::Underbarrel => "underbarrel",
        }
    }
}

impl fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rarity tier shared by base items, attachments and skins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// Identifier for a saved loadout
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadoutId(pub String);

impl LoadoutId {
    /// Mint a fresh identifier
    pub fn generate() -> Self {
        LoadoutId(format!("loadout-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LoadoutId {
    fn from(s: &str) -> Self {
        LoadoutId(s.to_string())
    }
}

impl From<String> for LoadoutId {
    fn from(s: String) -> Self {
        LoadoutId(s)
    }
}

impl fmt::Display for LoadoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Loadout - a base item plus attachments, skin and color theme, with derived values

mod slots;

pub use slots::{AttachmentSlots, SlotAssignment};

use crate::catalog::{Attachment, BaseItem, ColorTheme, Skin};
use crate::source::StatSource;
use crate::stats::{aggregate_sources, energy_usage, EnergyStatus};
use crate::types::{zeroed_stats, LoadoutId, Rarity, SlotCategory, StatMap, DEFAULT_ENERGY_CAPACITY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name given to a fresh loadout
pub const DEFAULT_LOADOUT_NAME: &str = "Untitled Loadout";

/// A user-composed configuration
///
/// `stats` and `energy_usage` are derived: every structural mutation below
/// recomputes them before returning. Catalog entries are embedded by value so
/// a saved loadout stays readable if the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loadout {
    // === Identity ===
    id: Option<LoadoutId>,
    name: String,

    // === Composition ===
    base_item: Option<BaseItem>,
    #[serde(default)]
    attachments: AttachmentSlots,
    skin: Option<Skin>,
    color_theme: Option<ColorTheme>,

    // === Derived ===
    stats: StatMap,
    energy_usage: u32,
    energy_capacity: u32,
    #[serde(default)]
    rarity_tier: Rarity,

    // === Timestamps ===
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Default for Loadout {
    fn default() -> Self {
        Self::new()
    }
}

impl Loadout {
    /// Create an empty loadout: nothing selected, stats zeroed, default capacity
    pub fn new() -> Self {
        Loadout {
            id: None,
            name: DEFAULT_LOADOUT_NAME.to_string(),
            base_item: None,
            attachments: AttachmentSlots::new(),
            skin: None,
            color_theme: None,
            stats: zeroed_stats(),
            energy_usage: 0,
            energy_capacity: DEFAULT_ENERGY_CAPACITY,
            rarity_tier: Rarity::Common,
            created_at: None,
            updated_at: None,
        }
    }

    // === Accessors ===

    pub fn id(&self) -> Option<&LoadoutId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_item(&self) -> Option<&BaseItem> {
        self.base_item.as_ref()
    }

    pub fn attachments(&self) -> &AttachmentSlots {
        &self.attachments
    }

    pub fn attachment(&self, category: SlotCategory) -> Option<&Attachment> {
        self.attachments.get(category)
    }

    pub fn skin(&self) -> Option<&Skin> {
        self.skin.as_ref()
    }

    pub fn color_theme(&self) -> Option<&ColorTheme> {
        self.color_theme.as_ref()
    }

    pub fn stats(&self) -> &StatMap {
        &self.stats
    }

    /// Value of one stat (0 if the loadout has no such stat)
    pub fn stat(&self, name: &str) -> i32 {
        self.stats.get(name).copied().unwrap_or(0)
    }

    pub fn energy_usage(&self) -> u32 {
        self.energy_usage
    }

    pub fn energy_capacity(&self) -> u32 {
        self.energy_capacity
    }

    pub fn energy(&self) -> EnergyStatus {
        EnergyStatus::new(self.energy_usage, self.energy_capacity)
    }

    pub fn rarity_tier(&self) -> Rarity {
        self.rarity_tier
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    // === Mutation (engine only) ===

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_base_item(&mut self, item: BaseItem) {
        self.energy_capacity = item.energy_capacity;
        self.rarity_tier = item.rarity;
        self.base_item = Some(item);
        self.recompute();
    }

    pub(crate) fn equip(&mut self, category: SlotCategory, attachment: Attachment) -> Option<Attachment> {
        let previous = self.attachments.insert(category, attachment);
        self.recompute();
        previous
    }

    pub(crate) fn unequip(&mut self, category: SlotCategory) -> Option<Attachment> {
        let removed = self.attachments.remove(category);
        self.recompute();
        removed
    }

    /// Replace every slot at once
    pub(crate) fn assign(&mut self, assignment: SlotAssignment) {
        self.attachments = AttachmentSlots::from(assignment);
        self.recompute();
    }

    pub(crate) fn set_skin(&mut self, skin: Option<Skin>) {
        self.skin = skin;
    }

    pub(crate) fn set_color_theme(&mut self, theme: Option<ColorTheme>) {
        self.color_theme = theme;
    }

    pub(crate) fn set_id(&mut self, id: LoadoutId) {
        self.id = Some(id);
    }

    pub(crate) fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(at);
    }

    pub(crate) fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    /// Re-derive stats and energy usage from the current composition
    pub(crate) fn recompute(&mut self) {
        self.recompute_with(|_| true);
    }

    /// Re-derive stats and energy usage, counting only attachments for which
    /// `resolvable` holds
    ///
    /// Other attachments stay in their slots untouched but add neither stat
    /// modifiers nor energy cost.
    pub(crate) fn recompute_with<F>(&mut self, resolvable: F)
    where
        F: Fn(&Attachment) -> bool,
    {
        let zeroed = zeroed_stats();
        let seed: &dyn StatSource = match &self.base_item {
            Some(item) => item,
            None => &zeroed,
        };
        let counted: Vec<&Attachment> = self.attachments.equipped().filter(|&a| resolvable(a)).collect();
        self.stats = aggregate_sources(seed, counted.iter().copied());
        self.energy_usage = energy_usage(counted.iter().copied());
        tracing::debug!(
            base = self.base_item.as_ref().map(|b| b.id.as_str()),
            attachments = self.attachments.filled_count(),
            counted = counted.len(),
            energy = self.energy_usage,
            "recomputed loadout"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(power: i32, capacity: u32) -> BaseItem {
        BaseItem {
            id: "carbine".to_string(),
            name: "Carbine".to_string(),
            kind: "rifle".to_string(),
            rarity: Rarity::Epic,
            base_stats: StatMap::from([("power".to_string(), power)]),
            energy_capacity: capacity,
            description: String::new(),
        }
    }

    fn attachment(id: &str, category: SlotCategory, power: i32, cost: u32) -> Attachment {
        Attachment {
            id: id.to_string(),
            category,
            name: id.to_string(),
            rarity: Rarity::Common,
            tier: 1,
            stat_modifiers: StatMap::from([("power".to_string(), power)]),
            energy_cost: cost,
            locked: false,
            description: String::new(),
        }
    }

    #[test]
    fn test_new_loadout_defaults() {
        let loadout = Loadout::new();
        assert!(loadout.id().is_none());
        assert_eq!(loadout.name(), DEFAULT_LOADOUT_NAME);
        assert_eq!(loadout.energy_capacity(), 100);
        assert_eq!(loadout.energy_usage(), 0);
        assert_eq!(loadout.rarity_tier(), Rarity::Common);
        assert!(loadout.stats().values().all(|v| *v == 0));
        assert!(loadout.created_at().is_none());
    }

    #[test]
    fn test_base_item_sets_capacity_and_tier() {
        let mut loadout = Loadout::new();
        loadout.set_base_item(base(50, 140));

        assert_eq!(loadout.energy_capacity(), 140);
        assert_eq!(loadout.rarity_tier(), Rarity::Epic);
        assert_eq!(loadout.stats(), &StatMap::from([("power".to_string(), 50)]));
    }

    #[test]
    fn test_equip_recomputes_stats_and_energy() {
        let mut loadout = Loadout::new();
        loadout.set_base_item(base(50, 100));
        loadout.equip(SlotCategory::Barrel, attachment("long", SlotCategory::Barrel, 20, 10));

        assert_eq!(loadout.stat("power"), 70);
        assert_eq!(loadout.energy_usage(), 10);

        let removed = loadout.unequip(SlotCategory::Barrel);
        assert_eq!(removed.map(|a| a.id), Some("long".to_string()));
        assert_eq!(loadout.stat("power"), 50);
        assert_eq!(loadout.energy_usage(), 0);
    }

    #[test]
    fn test_attachments_without_base_start_from_zero() {
        let mut loadout = Loadout::new();
        loadout.equip(SlotCategory::Grip, attachment("grip", SlotCategory::Grip, 15, 4));
        assert_eq!(loadout.stat("power"), 15);
        assert_eq!(loadout.stat("stealth"), 0);
    }

    #[test]
    fn test_assign_replaces_all_slots() {
        let mut loadout = Loadout::new();
        loadout.equip(SlotCategory::Grip, attachment("grip", SlotCategory::Grip, 5, 4));

        let mut assignment = SlotAssignment::new();
        assignment.insert(SlotCategory::Optic, Some(attachment("dot", SlotCategory::Optic, 3, 7)));
        assignment.insert(SlotCategory::Grip, None);
        loadout.assign(assignment);

        assert!(loadout.attachment(SlotCategory::Grip).is_none());
        assert_eq!(loadout.energy_usage(), 7);
        assert_eq!(loadout.stat("power"), 3);
    }

    #[test]
    fn test_unresolvable_attachments_are_kept_but_not_counted() {
        let mut loadout = Loadout::new();
        loadout.set_base_item(base(50, 100));
        loadout.equip(SlotCategory::Barrel, attachment("long", SlotCategory::Barrel, 20, 10));
        loadout.equip(SlotCategory::Grip, attachment("retired", SlotCategory::Grip, 15, 6));

        loadout.recompute_with(|a| a.id != "retired");

        assert_eq!(loadout.stat("power"), 70);
        assert_eq!(loadout.energy_usage(), 10);
        assert_eq!(
            loadout.attachment(SlotCategory::Grip).map(|a| a.stat_modifiers["power"]),
            Some(15)
        );
    }

    #[test]
    fn test_json_uses_camel_case_field_names() {
        let mut loadout = Loadout::new();
        loadout.set_base_item(base(50, 100));
        let value = serde_json::to_value(&loadout).unwrap();

        for key in [
            "id",
            "name",
            "baseItem",
            "attachments",
            "skin",
            "colorTheme",
            "stats",
            "energyUsage",
            "energyCapacity",
            "rarityTier",
            "createdAt",
            "updatedAt",
        ] {
            assert!(value.get(key).is_some(), "missing field {}", key);
        }
        assert_eq!(value["baseItem"]["baseStats"]["power"], 50);
    }
}

//! Completion score and readiness of a loadout

use crate::loadout::Loadout;
use serde::{Deserialize, Serialize};

/// Percentage of slots filled: base item, every attachment slot, skin and theme
pub fn completion(loadout: &Loadout) -> u8 {
    let slots = loadout.attachments();
    let total = 1 + slots.slot_count() + 1 + 1;
    let filled = usize::from(loadout.base_item().is_some())
        + slots.filled_count()
        + usize::from(loadout.skin().is_some())
        + usize::from(loadout.color_theme().is_some());

    // Round half up, as a float round would for positive values
    ((filled * 100 + total / 2) / total) as u8
}

/// Presentation-only view of how far along a loadout is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// No base item chosen
    Empty,
    Incomplete,
    Complete,
}

pub fn readiness(loadout: &Loadout) -> Readiness {
    if loadout.base_item().is_none() {
        Readiness::Empty
    } else if completion(loadout) < 100 {
        Readiness::Incomplete
    } else {
        Readiness::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Attachment, BaseItem, ColorTheme, Skin};
    use crate::types::{Rarity, SlotCategory, StatMap};

    fn base() -> BaseItem {
        BaseItem {
            id: "carbine".to_string(),
            name: "Carbine".to_string(),
            kind: "rifle".to_string(),
            rarity: Rarity::Common,
            base_stats: StatMap::new(),
            energy_capacity: 100,
            description: String::new(),
        }
    }

    fn attachment(category: SlotCategory) -> Attachment {
        Attachment {
            id: format!("{}-1", category),
            category,
            name: category.to_string(),
            rarity: Rarity::Common,
            tier: 1,
            stat_modifiers: StatMap::new(),
            energy_cost: 1,
            locked: false,
            description: String::new(),
        }
    }

    fn skin() -> Skin {
        Skin {
            id: "camo".to_string(),
            name: "Camo".to_string(),
            rarity: Rarity::Common,
            description: String::new(),
        }
    }

    fn theme() -> ColorTheme {
        ColorTheme {
            id: "blue".to_string(),
            name: "Blue".to_string(),
            primary: "#00d4ff".to_string(),
            accent: "#0066ff".to_string(),
            glow: "#00ffff".to_string(),
        }
    }

    #[test]
    fn test_new_loadout_is_zero() {
        let loadout = Loadout::new();
        assert_eq!(completion(&loadout), 0);
        assert_eq!(readiness(&loadout), Readiness::Empty);
    }

    #[test]
    fn test_fully_filled_is_hundred() {
        let mut loadout = Loadout::new();
        loadout.set_base_item(base());
        for category in SlotCategory::all() {
            loadout.equip(*category, attachment(*category));
        }
        loadout.set_skin(Some(skin()));
        loadout.set_color_theme(Some(theme()));

        assert_eq!(completion(&loadout), 100);
        assert_eq!(readiness(&loadout), Readiness::Complete);
    }

    #[test]
    fn test_base_plus_two_attachments_is_27() {
        // 3 of 11 slots: round(27.27) = 27
        let mut loadout = Loadout::new();
        loadout.set_base_item(base());
        loadout.equip(SlotCategory::Optic, attachment(SlotCategory::Optic));
        loadout.equip(SlotCategory::Grip, attachment(SlotCategory::Grip));

        assert_eq!(completion(&loadout), 27);
        assert_eq!(readiness(&loadout), Readiness::Incomplete);
    }

    #[test]
    fn test_rounds_half_up() {
        // 5 of 11 = 45.45 -> 45; 6 of 11 = 54.54 -> 55
        let mut loadout = Loadout::new();
        loadout.set_base_item(base());
        for category in &SlotCategory::all()[..4] {
            loadout.equip(*category, attachment(*category));
        }
        assert_eq!(completion(&loadout), 45);

        loadout.set_skin(Some(skin()));
        assert_eq!(completion(&loadout), 55);
    }

    #[test]
    fn test_attachments_without_base_are_still_empty() {
        let mut loadout = Loadout::new();
        loadout.equip(SlotCategory::Laser, attachment(SlotCategory::Laser));
        assert_eq!(completion(&loadout), 9);
        assert_eq!(readiness(&loadout), Readiness::Empty);
    }
}

//! AttachmentSlots - one optional attachment per slot category

use crate::catalog::Attachment;
use crate::types::SlotCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Candidate contents for every slot, as produced by the randomizer or a preset
pub type SlotAssignment = BTreeMap<SlotCategory, Option<Attachment>>;

/// Attachments equipped on a loadout, keyed by slot category
///
/// Serializes with every category present (empty slots as `null`), so exported
/// documents always show the full slot layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SlotAssignment", into = "SlotAssignment")]
pub struct AttachmentSlots {
    equipped: BTreeMap<SlotCategory, Attachment>,
}

impl AttachmentSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the attachment in a slot
    pub fn get(&self, category: SlotCategory) -> Option<&Attachment> {
        self.equipped.get(&category)
    }

    /// Put an attachment in a slot, returning whatever it replaced
    pub fn insert(&mut self, category: SlotCategory, attachment: Attachment) -> Option<Attachment> {
        self.equipped.insert(category, attachment)
    }

    /// Empty a slot, returning its attachment if present
    pub fn remove(&mut self, category: SlotCategory) -> Option<Attachment> {
        self.equipped.remove(&category)
    }

    /// Clear every slot
    pub fn clear(&mut self) {
        self.equipped.clear();
    }

    /// All equipped attachments
    pub fn equipped(&self) -> impl Iterator<Item = &Attachment> {
        self.equipped.values()
    }

    /// Every declared slot with its contents, in category order
    pub fn iter(&self) -> impl Iterator<Item = (SlotCategory, Option<&Attachment>)> + '_ {
        SlotCategory::all()
            .iter()
            .map(move |c| (*c, self.equipped.get(c)))
    }

    /// Number of declared slots
    pub fn slot_count(&self) -> usize {
        SlotCategory::all().len()
    }

    /// Number of slots holding an attachment
    pub fn filled_count(&self) -> usize {
        self.equipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equipped.is_empty()
    }
}

impl From<SlotAssignment> for AttachmentSlots {
    fn from(assignment: SlotAssignment) -> Self {
        AttachmentSlots {
            equipped: assignment
                .into_iter()
                .filter_map(|(category, attachment)| attachment.map(|a| (category, a)))
                .collect(),
        }
    }
}

impl From<AttachmentSlots> for SlotAssignment {
    fn from(slots: AttachmentSlots) -> Self {
        let mut equipped = slots.equipped;
        SlotCategory::all()
            .iter()
            .map(|c| (*c, equipped.remove(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rarity, StatMap};

    fn attachment(id: &str, category: SlotCategory) -> Attachment {
        Attachment {
            id: id.to_string(),
            category,
            name: id.to_string(),
            rarity: Rarity::Common,
            tier: 1,
            stat_modifiers: StatMap::new(),
            energy_cost: 1,
            locked: false,
            description: String::new(),
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut slots = AttachmentSlots::new();
        assert!(slots.insert(SlotCategory::Optic, attachment("a", SlotCategory::Optic)).is_none());
        let previous = slots.insert(SlotCategory::Optic, attachment("b", SlotCategory::Optic));

        assert_eq!(previous.map(|a| a.id), Some("a".to_string()));
        assert_eq!(slots.filled_count(), 1);
        assert_eq!(slots.get(SlotCategory::Optic).map(|a| a.id.as_str()), Some("b"));
    }

    #[test]
    fn test_iter_covers_every_slot() {
        let mut slots = AttachmentSlots::new();
        slots.insert(SlotCategory::Grip, attachment("grip", SlotCategory::Grip));

        let listed: Vec<_> = slots.iter().collect();
        assert_eq!(listed.len(), slots.slot_count());
        assert_eq!(listed.iter().filter(|(_, a)| a.is_some()).count(), 1);
    }

    #[test]
    fn test_serializes_empty_slots_as_null() {
        let mut slots = AttachmentSlots::new();
        slots.insert(SlotCategory::Stock, attachment("folding", SlotCategory::Stock));

        let value = serde_json::to_value(&slots).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 8);
        assert!(object["optic"].is_null());
        assert_eq!(object["stock"]["id"], "folding");

        let back: AttachmentSlots = serde_json::from_value(value).unwrap();
        assert_eq!(back, slots);
    }

    #[test]
    fn test_partial_document_deserializes() {
        let slots: AttachmentSlots = serde_json::from_str(r#"{"optic": null}"#).unwrap();
        assert!(slots.is_empty());
    }
}

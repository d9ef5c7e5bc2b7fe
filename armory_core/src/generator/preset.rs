//! Preset-driven attachment assignment

use super::PRESET_FALLBACK_CHANCE;
use crate::catalog::{Attachment, AttachmentsByCategory, Preset};
use crate::loadout::SlotAssignment;
use rand::Rng;

/// Fill every category from a preset's preferences
///
/// Per category: the first unlocked attachment whose id the preset prefers.
/// Without a match, the first unlocked attachment with probability 0.5,
/// otherwise nothing.
pub fn apply_preset<R: Rng + ?Sized>(
    preset: &Preset,
    by_category: &AttachmentsByCategory,
    rng: &mut R,
) -> SlotAssignment {
    by_category
        .iter()
        .map(|(category, attachments)| {
            let mut unlocked = attachments
                .iter()
                .filter(|a| !a.locked && a.category == *category);

            let preferred = unlocked.clone().find(|a| is_preferred(preset, a));

            let pick = match preferred {
                Some(attachment) => Some(attachment.clone()),
                None => match unlocked.next() {
                    Some(first) if rng.gen_bool(PRESET_FALLBACK_CHANCE) => Some(first.clone()),
                    _ => None,
                },
            };
            (*category, pick)
        })
        .collect()
}

/// True when `attachment` is one the preset asks for
pub fn is_preferred(preset: &Preset, attachment: &Attachment) -> bool {
    preset.preferred_attachment_ids.iter().any(|id| *id == attachment.id)
}

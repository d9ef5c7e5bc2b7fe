//! Random attachment assignment

use super::RANDOMIZE_FILL_CHANCE;
use crate::catalog::{Attachment, AttachmentsByCategory};
use crate::loadout::SlotAssignment;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a random unlocked attachment (or nothing) for every category
///
/// A category with unlocked candidates is filled with probability 0.7, the
/// attachment chosen uniformly. Categories with no unlocked candidates stay empty.
pub fn randomize<R: Rng + ?Sized>(by_category: &AttachmentsByCategory, rng: &mut R) -> SlotAssignment {
    by_category
        .iter()
        .map(|(category, attachments)| {
            let candidates: Vec<&Attachment> = attachments
                .iter()
                .filter(|a| !a.locked && a.category == *category)
                .collect();

            let pick = if !candidates.is_empty() && rng.gen_bool(RANDOMIZE_FILL_CHANCE) {
                candidates.choose(rng).map(|a| (*a).clone())
            } else {
                None
            };
            (*category, pick)
        })
        .collect()
}

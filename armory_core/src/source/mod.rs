//! StatSource - Trait and implementations for stat providers

mod attachment;
mod base_item;

use crate::stats::StatAccumulator;

/// Trait for anything that contributes stats to a loadout
///
/// Contributions are plain additions, so sources can be applied in any order.
pub trait StatSource {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}

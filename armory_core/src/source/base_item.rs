//! Base item stats

use crate::catalog::BaseItem;
use crate::source::StatSource;
use crate::stats::StatAccumulator;
use crate::types::StatMap;

impl StatSource for BaseItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_all(&self.base_stats);
    }
}

/// Bare base stats, as used by a loadout with no base item
impl StatSource for StatMap {
    fn id(&self) -> &str {
        "base"
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_all(self);
    }
}

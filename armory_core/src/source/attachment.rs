//! Attachment stat modifiers

use crate::catalog::Attachment;
use crate::source::StatSource;
use crate::stats::StatAccumulator;

impl StatSource for Attachment {
    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_all(&self.stat_modifiers);
    }
}

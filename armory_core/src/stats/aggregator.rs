//! StatAccumulator - Collects stat contributions before clamping them into final stats

use crate::catalog::Attachment;
use crate::source::StatSource;
use crate::types::{StatMap, STAT_MAX, STAT_MIN};
use std::collections::BTreeMap;

/// Accumulates stat contributions from base items and attachments
///
/// Totals are kept unclamped (and wide) while sources are folded in; clamping
/// happens once in [`StatAccumulator::finish`], which is what makes the result
/// independent of application order.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    totals: BTreeMap<String, i64>,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a delta to one stat, creating it at 0 if new
    pub fn add(&mut self, stat: &str, delta: i32) {
        match self.totals.get_mut(stat) {
            Some(total) => *total += i64::from(delta),
            None => {
                self.totals.insert(stat.to_string(), i64::from(delta));
            }
        }
    }

    /// Add every entry of a stat map
    pub fn add_all(&mut self, stats: &StatMap) {
        for (stat, delta) in stats {
            self.add(stat, *delta);
        }
    }

    /// Fold a source into the running totals
    pub fn apply_source(&mut self, source: &dyn StatSource) {
        source.apply(self);
    }

    /// Unclamped running total for a stat
    pub fn total(&self, stat: &str) -> i64 {
        self.totals.get(stat).copied().unwrap_or(0)
    }

    /// Clamp every total into the valid stat range
    pub fn finish(self) -> StatMap {
        self.totals
            .into_iter()
            .map(|(stat, total)| {
                let clamped = total.clamp(i64::from(STAT_MIN), i64::from(STAT_MAX));
                (stat, clamped as i32)
            })
            .collect()
    }
}

/// Final stats for a set of base stats plus equipped attachments
///
/// Empty slots simply do not appear in `attachments`.
pub fn aggregate<'a, I>(base_stats: &StatMap, attachments: I) -> StatMap
where
    I: IntoIterator<Item = &'a Attachment>,
{
    aggregate_sources(base_stats, attachments)
}

/// Same as [`aggregate`], seeded from any source (usually a base item)
pub fn aggregate_sources<'a, I>(seed: &dyn StatSource, attachments: I) -> StatMap
where
    I: IntoIterator<Item = &'a Attachment>,
{
    let mut acc = StatAccumulator::new();
    acc.apply_source(seed);
    for attachment in attachments {
        acc.apply_source(attachment);
    }
    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rarity, SlotCategory};
    use proptest::prelude::*;

    fn stats(entries: &[(&str, i32)]) -> StatMap {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn attachment(id: &str, modifiers: StatMap) -> Attachment {
        Attachment {
            id: id.to_string(),
            category: SlotCategory::Optic,
            name: id.to_string(),
            rarity: Rarity::Common,
            tier: 1,
            stat_modifiers: modifiers,
            energy_cost: 0,
            locked: false,
            description: String::new(),
        }
    }

    #[test]
    fn test_no_attachments_returns_base() {
        let base = stats(&[("power", 50), ("stealth", 30)]);
        assert_eq!(aggregate(&base, std::iter::empty()), base);
    }

    #[test]
    fn test_modifiers_add_and_create_keys() {
        let base = stats(&[("power", 50)]);
        let scope = attachment("scope", stats(&[("power", 20), ("tech", 5)]));

        let result = aggregate(&base, [&scope]);
        assert_eq!(result, stats(&[("power", 70), ("tech", 5)]));
    }

    #[test]
    fn test_clamps_after_folding() {
        // 90 + 30 - 30 stays 90 because clamping happens once at the end
        let base = stats(&[("power", 90)]);
        let up = attachment("up", stats(&[("power", 30)]));
        let down = attachment("down", stats(&[("power", -30)]));
        assert_eq!(aggregate(&base, [&up, &down])["power"], 90);

        let crush = attachment("crush", stats(&[("power", -500), ("stealth", 500)]));
        let result = aggregate(&base, [&crush]);
        assert_eq!(result["power"], 0);
        assert_eq!(result["stealth"], 100);
    }

    #[test]
    fn test_accumulator_total_is_unclamped() {
        let mut acc = StatAccumulator::new();
        acc.add("power", 80);
        acc.add("power", 80);
        assert_eq!(acc.total("power"), 160);
        assert_eq!(acc.total("unknown"), 0);
        assert_eq!(acc.finish()["power"], 100);
    }

    static STAT_NAMES: [&str; 5] = ["stealth", "mobility", "power", "tech", "armor"];

    fn base_strategy() -> impl Strategy<Value = StatMap> {
        prop::collection::btree_map(
            prop::sample::select(&STAT_NAMES[..]).prop_map(String::from),
            0..=100i32,
            0..5,
        )
    }

    fn modifier_strategy() -> impl Strategy<Value = StatMap> {
        prop::collection::btree_map(
            prop::sample::select(&STAT_NAMES[..]).prop_map(String::from),
            -1000..1000i32,
            0..5,
        )
    }

    fn attachments_strategy() -> impl Strategy<Value = Vec<Attachment>> {
        prop::collection::vec(modifier_strategy(), 0..8).prop_map(|mods| {
            mods.into_iter()
                .enumerate()
                .map(|(i, m)| attachment(&format!("a{}", i), m))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_results_stay_in_range(base in base_strategy(), attachments in attachments_strategy()) {
            let result = aggregate(&base, &attachments);
            for value in result.values() {
                prop_assert!((STAT_MIN..=STAT_MAX).contains(value));
            }
        }

        #[test]
        fn prop_order_independent(
            base in base_strategy(),
            (original, shuffled) in attachments_strategy()
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            prop_assert_eq!(aggregate(&base, &original), aggregate(&base, &shuffled));
        }

        #[test]
        fn prop_keys_are_union_of_inputs(base in base_strategy(), attachments in attachments_strategy()) {
            let result = aggregate(&base, &attachments);
            for key in base.keys() {
                prop_assert!(result.contains_key(key));
            }
            for attachment in &attachments {
                for key in attachment.stat_modifiers.keys() {
                    prop_assert!(result.contains_key(key));
                }
            }
        }
    }
}

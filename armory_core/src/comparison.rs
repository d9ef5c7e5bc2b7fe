//! Side-by-side comparison of two loadouts

use crate::loadout::Loadout;
use crate::stats::EnergyStatus;
use crate::types::SlotCategory;
use std::collections::BTreeSet;

/// One stat on both sides
#[derive(Debug, Clone, PartialEq)]
pub struct StatDelta {
    pub stat: String,
    pub first: i32,
    pub second: i32,
    /// `second - first`
    pub diff: i32,
    /// Change relative to `first`; 0 when `first` is 0
    pub percentage: f64,
}

/// Names of whatever each side has in one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotComparison {
    pub category: SlotCategory,
    pub first: Option<String>,
    pub second: Option<String>,
}

impl SlotComparison {
    pub fn differs(&self) -> bool {
        self.first != self.second
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadoutComparison {
    pub first_name: String,
    pub second_name: String,
    pub stats: Vec<StatDelta>,
    pub energy: (EnergyStatus, EnergyStatus),
    pub slots: Vec<SlotComparison>,
}

/// Compare every stat either loadout has, plus energy and slot contents
pub fn compare(first: &Loadout, second: &Loadout) -> LoadoutComparison {
    let names: BTreeSet<&String> = first.stats().keys().chain(second.stats().keys()).collect();

    let stats = names
        .into_iter()
        .map(|stat| {
            let a = first.stat(stat);
            let b = second.stat(stat);
            let diff = b - a;
            let percentage = if a == 0 {
                0.0
            } else {
                f64::from(diff) / f64::from(a) * 100.0
            };
            StatDelta {
                stat: stat.clone(),
                first: a,
                second: b,
                diff,
                percentage,
            }
        })
        .collect();

    let slots = SlotCategory::all()
        .iter()
        .map(|category| SlotComparison {
            category: *category,
            first: first.attachment(*category).map(|a| a.name.clone()),
            second: second.attachment(*category).map(|a| a.name.clone()),
        })
        .collect();

    LoadoutComparison {
        first_name: first.name().to_string(),
        second_name: second.name().to_string(),
        stats,
        energy: (first.energy(), second.energy()),
        slots,
    }
}

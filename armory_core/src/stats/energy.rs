//! Energy budget of a loadout

use crate::catalog::Attachment;
use serde::{Deserialize, Serialize};

/// Usage above this fraction of capacity is reported as high
const HIGH_USAGE_RATIO: f64 = 0.8;

/// Total energy cost of the equipped attachments
///
/// Not clamped: usage may exceed capacity.
pub fn energy_usage<'a, I>(attachments: I) -> u32
where
    I: IntoIterator<Item = &'a Attachment>,
{
    attachments
        .into_iter()
        .fold(0u32, |total, a| total.saturating_add(a.energy_cost))
}

/// How close usage is to capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Nominal,
    High,
    /// Usage exceeds capacity; a warning, never a blocked state
    Overloaded,
}

/// Usage/capacity pair with derived views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyStatus {
    pub usage: u32,
    pub capacity: u32,
}

impl EnergyStatus {
    pub fn new(usage: u32, capacity: u32) -> Self {
        EnergyStatus { usage, capacity }
    }

    /// Remaining budget, negative when over capacity
    pub fn remaining(&self) -> i64 {
        i64::from(self.capacity) - i64::from(self.usage)
    }

    pub fn is_over_budget(&self) -> bool {
        self.usage > self.capacity
    }

    /// Usage as a fraction of capacity (0.0 when capacity is 0 and nothing is used)
    pub fn ratio(&self) -> f64 {
        if self.capacity == 0 {
            if self.usage == 0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            f64::from(self.usage) / f64::from(self.capacity)
        }
    }

    pub fn level(&self) -> EnergyLevel {
        if self.is_over_budget() {
            EnergyLevel::Overloaded
        } else if self.ratio() > HIGH_USAGE_RATIO {
            EnergyLevel::High
        } else {
            EnergyLevel::Nominal
        }
    }
}

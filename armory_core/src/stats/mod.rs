//! Derived values of a loadout: stats, energy and completion

mod aggregator;
mod completion;
mod energy;

pub use aggregator::{aggregate, aggregate_sources, StatAccumulator};
pub use completion::{completion, readiness, Readiness};
pub use energy::{energy_usage, EnergyLevel, EnergyStatus};

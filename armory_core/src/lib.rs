//! armory_core - Loadout building core for the agent armory
//!
//! This library provides:
//! - Catalog: base items, attachments, skins, color themes and presets loaded from TOML
//! - Loadout: a composed build with derived stats, energy usage and completion
//! - Generator: random and preset-driven attachment assignment, build names
//! - LoadoutEngine: the stateful core with injected catalog, storage and clock
//! - Export: JSON documents for sharing and re-import

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod export;
pub mod generator;
pub mod loadout;
pub mod persistence;
pub mod prelude;
pub mod profile;
pub mod source;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Attachment, AttachmentsByCategory, BaseItem, Catalog, ColorTheme, Preset, Skin};
pub use comparison::{compare, LoadoutComparison, SlotComparison, StatDelta};
pub use config::{default_catalog, load_catalog, ArmoryConfig, ConfigError};
pub use engine::{Clock, LoadoutEngine, ManualClock, ReferenceKind, StaleReference, SystemClock};
pub use export::ExportError;
pub use loadout::{AttachmentSlots, Loadout, SlotAssignment};
pub use persistence::{JsonFileStorage, MemoryStorage, NullStorage, PersistedState, PersistenceError, Storage};
pub use profile::{Achievement, AchievementKind, AgentProfile};
pub use source::StatSource;
pub use stats::{aggregate, completion, energy_usage, EnergyLevel, EnergyStatus, Readiness, StatAccumulator};
pub use types::{LoadoutId, Rarity, SlotCategory, StatMap};

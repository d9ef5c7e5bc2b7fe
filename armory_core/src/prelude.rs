//! Prelude module for convenient imports
//!
//! ```rust
//! use armory_core::prelude::*;
//! ```

// Core types
pub use crate::loadout::Loadout;
pub use crate::types::{LoadoutId, Rarity, SlotCategory, StatMap};

// Catalog
pub use crate::catalog::{Attachment, BaseItem, Catalog, ColorTheme, Preset, Skin};
pub use crate::config::{default_catalog, ArmoryConfig};

// Engine
pub use crate::engine::LoadoutEngine;
pub use crate::persistence::{JsonFileStorage, NullStorage, Storage};
pub use crate::stats::{EnergyLevel, EnergyStatus, Readiness};

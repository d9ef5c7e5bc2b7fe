//! Candidate attachment assignments and build names
//!
//! Every function takes its random source as a parameter; pass a seeded RNG
//! for reproducible results.

mod names;
mod preset;
mod randomizer;

pub use names::generate_build_name;
pub use preset::{apply_preset, is_preferred};
pub use randomizer::randomize;

/// Chance that the randomizer fills a slot that has unlocked candidates
pub const RANDOMIZE_FILL_CHANCE: f64 = 0.7;

/// Chance that a preset falls back to the first unlocked attachment
pub const PRESET_FALLBACK_CHANCE: f64 = 0.5;

//! LoadoutEngine - the stateful core
//!
//! Owns the in-progress loadout, the saved collection, the agent profile and
//! the dark-mode preference. Catalog, storage and clock are injected. Every
//! mutation returns with the loadout's derived values already recomputed and
//! bumps [`LoadoutEngine::revision`], which is how a front end notices change.
//!
//! Reference problems (unknown ids, locked or misplaced attachments) are
//! no-ops, never errors. Storage failures are logged and retried on the next
//! mutation; in-memory state stays authoritative for the session.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use crate::catalog::{Attachment, BaseItem, Catalog, ColorTheme, Preset, Skin};
use crate::comparison::{compare, LoadoutComparison};
use crate::generator;
use crate::loadout::Loadout;
use crate::persistence::{PersistedState, PersistenceError, Storage};
use crate::profile::{Achievement, AgentProfile};
use crate::stats::{self, Readiness};
use crate::types::{LoadoutId, SlotCategory};
use rand::Rng;
use std::sync::Arc;

/// What a stale reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    BaseItem,
    Attachment(SlotCategory),
    Skin,
    ColorTheme,
}

/// A catalog id held by a loadout that the catalog no longer defines
///
/// The embedded value is kept as-is for display and export. A stale
/// attachment adds nothing to stats or energy usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleReference {
    pub kind: ReferenceKind,
    pub id: String,
}

pub struct LoadoutEngine {
    catalog: Arc<Catalog>,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,

    current: Loadout,
    saved: Vec<Loadout>,
    profile: AgentProfile,
    dark_mode: bool,

    /// Persisted state differs from what storage last accepted
    dirty: bool,
    revision: u64,
}

impl LoadoutEngine {
    /// Build an engine from whatever `storage` holds, using the system clock
    pub fn hydrate(catalog: Arc<Catalog>, storage: Box<dyn Storage>) -> Self {
        Self::new(catalog, storage, Box::new(SystemClock), AgentProfile::default())
    }

    /// Build an engine; `fallback_profile` is used when storage holds nothing usable
    pub fn new(
        catalog: Arc<Catalog>,
        storage: Box<dyn Storage>,
        clock: Box<dyn Clock>,
        fallback_profile: AgentProfile,
    ) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => {
                tracing::info!(saved = state.saved_loadouts.len(), "hydrated armory state");
                state
            }
            Ok(None) => {
                tracing::info!("no stored state, starting fresh");
                PersistedState {
                    agent_profile: fallback_profile,
                    ..PersistedState::default()
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load stored state, starting fresh");
                PersistedState {
                    agent_profile: fallback_profile,
                    ..PersistedState::default()
                }
            }
        };

        let mut engine = LoadoutEngine {
            catalog,
            storage,
            clock,
            current: Loadout::new(),
            saved: Vec::with_capacity(state.saved_loadouts.len()),
            profile: state.agent_profile,
            dark_mode: state.dark_mode,
            dirty: false,
            revision: 0,
        };

        let stored = state.saved_loadouts;
        engine.merge(stored.clone());
        if engine.saved != stored {
            tracing::info!(
                stored = stored.len(),
                kept = engine.saved.len(),
                "normalized stored loadouts"
            );
            engine.dirty = true;
        }
        engine.sync_total_builds();
        engine
    }

    // === Queries ===

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current(&self) -> &Loadout {
        &self.current
    }

    pub fn saved(&self) -> &[Loadout] {
        &self.saved
    }

    pub fn find_saved(&self, id: &str) -> Option<&Loadout> {
        self.saved
            .iter()
            .find(|l| l.id().map(LoadoutId::as_str) == Some(id))
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn completion(&self) -> u8 {
        stats::completion(&self.current)
    }

    pub fn readiness(&self) -> Readiness {
        stats::readiness(&self.current)
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        self.profile.achievements(self.saved.len())
    }

    /// Increases on every change to engine state
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True while a write to storage is still owed
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Compare two saved loadouts; `None` unless both ids resolve
    pub fn compare_saved(&self, first: &str, second: &str) -> Option<LoadoutComparison> {
        let a = self.find_saved(first)?;
        let b = self.find_saved(second)?;
        Some(compare(a, b))
    }

    /// Catalog ids held by the current loadout that the catalog no longer has
    pub fn stale_references(&self) -> Vec<StaleReference> {
        let mut stale = Vec::new();
        if let Some(item) = self.current.base_item() {
            if self.catalog.base_item(&item.id).is_none() {
                stale.push(StaleReference {
                    kind: ReferenceKind::BaseItem,
                    id: item.id.clone(),
                });
            }
        }
        for (category, attachment) in self.current.attachments().iter() {
            if let Some(attachment) = attachment {
                if self.catalog.attachment(&attachment.id).is_none() {
                    stale.push(StaleReference {
                        kind: ReferenceKind::Attachment(category),
                        id: attachment.id.clone(),
                    });
                }
            }
        }
        if let Some(skin) = self.current.skin() {
            if self.catalog.skin(&skin.id).is_none() {
                stale.push(StaleReference {
                    kind: ReferenceKind::Skin,
                    id: skin.id.clone(),
                });
            }
        }
        if let Some(theme) = self.current.color_theme() {
            if self.catalog.color_theme(&theme.id).is_none() {
                stale.push(StaleReference {
                    kind: ReferenceKind::ColorTheme,
                    id: theme.id.clone(),
                });
            }
        }
        stale
    }

    /// Suggest a name for the current loadout without applying it
    pub fn suggest_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        generator::generate_build_name(self.current.base_item(), rng)
    }

    // === Current loadout ===

    pub fn set_base_item(&mut self, item: BaseItem) -> &Loadout {
        tracing::debug!(base = %item.id, "set base item");
        self.current.set_base_item(item);
        self.touch_current()
    }

    /// Select a base item from the catalog; unknown ids are ignored
    pub fn set_base_item_by_id(&mut self, id: &str) -> &Loadout {
        match self.catalog.base_item(id).cloned() {
            Some(item) => self.set_base_item(item),
            None => {
                tracing::debug!(id, "unknown base item ignored");
                &self.current
            }
        }
    }

    /// Equip an attachment in its slot
    ///
    /// Locked attachments and attachments belonging to another category are
    /// ignored. Energy capacity is not enforced. An attachment the catalog
    /// does not define is kept in the slot but not counted.
    pub fn set_attachment(&mut self, category: SlotCategory, attachment: Attachment) -> &Loadout {
        if attachment.locked {
            tracing::debug!(id = %attachment.id, "locked attachment ignored");
            return &self.current;
        }
        if attachment.category != category {
            tracing::debug!(
                id = %attachment.id,
                slot = %category,
                belongs_to = %attachment.category,
                "attachment does not fit slot"
            );
            return &self.current;
        }

        self.current.equip(category, attachment);
        self.touch_current()
    }

    pub fn set_attachment_by_id(&mut self, category: SlotCategory, id: &str) -> &Loadout {
        match self.catalog.attachment(id).cloned() {
            Some(attachment) => self.set_attachment(category, attachment),
            None => {
                tracing::debug!(id, "unknown attachment ignored");
                &self.current
            }
        }
    }

    pub fn remove_attachment(&mut self, category: SlotCategory) -> &Loadout {
        self.current.unequip(category);
        self.touch_current()
    }

    pub fn clear_attachments(&mut self) -> &Loadout {
        self.current.assign(Default::default());
        self.touch_current()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &Loadout {
        self.current.set_name(name.into());
        self.touch_current()
    }

    pub fn set_skin(&mut self, skin: Skin) -> &Loadout {
        self.current.set_skin(Some(skin));
        self.touch_current()
    }

    pub fn set_skin_by_id(&mut self, id: &str) -> &Loadout {
        match self.catalog.skin(id).cloned() {
            Some(skin) => self.set_skin(skin),
            None => {
                tracing::debug!(id, "unknown skin ignored");
                &self.current
            }
        }
    }

    pub fn clear_skin(&mut self) -> &Loadout {
        self.current.set_skin(None);
        self.touch_current()
    }

    pub fn set_color_theme(&mut self, theme: ColorTheme) -> &Loadout {
        self.current.set_color_theme(Some(theme));
        self.touch_current()
    }

    pub fn set_color_theme_by_id(&mut self, id: &str) -> &Loadout {
        match self.catalog.color_theme(id).cloned() {
            Some(theme) => self.set_color_theme(theme),
            None => {
                tracing::debug!(id, "unknown color theme ignored");
                &self.current
            }
        }
    }

    pub fn clear_color_theme(&mut self) -> &Loadout {
        self.current.set_color_theme(None);
        self.touch_current()
    }

    /// Refill every slot at random from the catalog
    pub fn randomize_attachments<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Loadout {
        let assignment = generator::randomize(self.catalog.attachments_by_category(), rng);
        self.current.assign(assignment);
        tracing::debug!(filled = self.current.attachments().filled_count(), "randomized attachments");
        self.touch_current()
    }

    /// Refill every slot from a preset's preferences
    pub fn apply_preset<R: Rng + ?Sized>(&mut self, preset: &Preset, rng: &mut R) -> &Loadout {
        let assignment = generator::apply_preset(preset, self.catalog.attachments_by_category(), rng);
        self.current.assign(assignment);
        tracing::debug!(preset = %preset.name, "applied preset");
        self.touch_current()
    }

    pub fn apply_preset_by_name<R: Rng + ?Sized>(&mut self, name: &str, rng: &mut R) -> &Loadout {
        match self.catalog.preset(name).cloned() {
            Some(preset) => self.apply_preset(&preset, rng),
            None => {
                tracing::debug!(name, "unknown preset ignored");
                &self.current
            }
        }
    }

    /// Replace the current loadout with an empty one
    pub fn reset(&mut self) -> &Loadout {
        self.current = Loadout::new();
        self.changed();
        &self.current
    }

    // === Saved collection ===

    /// Save the current loadout into the collection
    ///
    /// A loadout without an id gets a fresh one and its creation time. An id
    /// already in the collection replaces that entry where it stands.
    pub fn save(&mut self) -> &Loadout {
        let now = self.clock.now();

        if self.current.id().is_none() {
            let id = self.unused_id();
            self.current.set_id(id);
            self.current.set_created_at(now);
        } else if self.current.created_at().is_none() {
            self.current.set_created_at(now);
        }
        self.current.touch(now);

        let snapshot = self.current.clone();
        match self.position(snapshot.id()) {
            Some(index) => {
                tracing::info!(id = ?snapshot.id(), "updated saved loadout");
                self.saved[index] = snapshot;
            }
            None => {
                tracing::info!(id = ?snapshot.id(), "saved new loadout");
                self.saved.push(snapshot);
            }
        }

        self.sync_total_builds();
        self.mark_dirty();
        &self.current
    }

    /// Make a copy of a saved loadout current
    ///
    /// Returns false and leaves the current loadout untouched if `id` is not
    /// saved.
    pub fn load(&mut self, id: &str) -> bool {
        match self.find_saved(id).cloned() {
            Some(mut loadout) => {
                tracing::info!(id, "loaded saved loadout");
                resolve(&self.catalog, &mut loadout);
                self.current = loadout;
                self.changed();
                true
            }
            None => {
                tracing::debug!(id, "load of unknown loadout ignored");
                false
            }
        }
    }

    /// Remove a saved loadout; false if nothing had that id
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.saved.len();
        self.saved.retain(|l| l.id().map(LoadoutId::as_str) != Some(id));
        if self.saved.len() == before {
            tracing::debug!(id, "delete of unknown loadout ignored");
            return false;
        }

        tracing::info!(id, "deleted saved loadout");
        self.sync_total_builds();
        self.mark_dirty();
        true
    }

    /// Merge loadouts from an exported collection
    ///
    /// Entries whose id is already saved replace it; the rest are appended,
    /// minting ids where missing. Returns how many were imported.
    pub fn import_collection(&mut self, loadouts: Vec<Loadout>) -> usize {
        let count = loadouts.len();
        self.merge(loadouts);

        tracing::info!(count, "imported loadouts");
        self.sync_total_builds();
        self.mark_dirty();
        count
    }

    // === Profile and preferences ===

    pub fn add_xp(&mut self, amount: u64) -> &AgentProfile {
        self.profile.add_xp(amount);
        tracing::debug!(xp = self.profile.xp(), level = self.profile.level(), "added xp");
        self.mark_dirty();
        &self.profile
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
        self.mark_dirty();
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.set_dark_mode(!self.dark_mode);
        self.dark_mode
    }

    // === Persistence ===

    /// Write persisted state to storage if anything changed since the last write
    pub fn flush(&mut self) -> Result<(), PersistenceError> {
        if !self.dirty {
            return Ok(());
        }

        let state = PersistedState {
            saved_loadouts: self.saved.clone(),
            agent_profile: self.profile.clone(),
            dark_mode: self.dark_mode,
        };
        self.storage.save(&state)?;
        self.dirty = false;
        tracing::debug!(saved = self.saved.len(), "flushed state");
        Ok(())
    }

    // === Internal ===

    fn touch_current(&mut self) -> &Loadout {
        resolve(&self.catalog, &mut self.current);
        self.current.touch(self.clock.now());
        self.changed();
        &self.current
    }

    /// Record a change; retries any storage write that failed earlier
    fn changed(&mut self) {
        self.revision += 1;
        if self.dirty {
            self.flush_logged();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
        self.changed();
    }

    fn flush_logged(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!(error = %e, "failed to persist state, will retry");
        }
    }

    /// Add loadouts to the collection, minting missing ids and re-deriving
    /// their values; a later entry replaces an earlier one with the same id
    fn merge(&mut self, loadouts: Vec<Loadout>) {
        for mut loadout in loadouts {
            if loadout.id().is_none() {
                let id = self.unused_id();
                loadout.set_id(id);
            }
            resolve(&self.catalog, &mut loadout);
            match self.position(loadout.id()) {
                Some(index) => self.saved[index] = loadout,
                None => self.saved.push(loadout),
            }
        }
    }

    fn position(&self, id: Option<&LoadoutId>) -> Option<usize> {
        let id = id?;
        self.saved.iter().position(|l| l.id() == Some(id))
    }

    fn unused_id(&self) -> LoadoutId {
        loop {
            let id = LoadoutId::generate();
            if self.position(Some(&id)).is_none() {
                return id;
            }
        }
    }

    fn sync_total_builds(&mut self) {
        self.profile.total_builds = self.saved.len();
    }
}

/// Recompute `loadout` counting only attachments the catalog still defines
fn resolve(catalog: &Catalog, loadout: &mut Loadout) {
    loadout.recompute_with(|a| catalog.attachment(&a.id).is_some());
}

//! Application state

use armory_core::{
    export::{collection_file_name, export_collection, import_collection, loadout_file_name, share_text, write_export},
    ArmoryConfig, Attachment, LoadoutEngine, LoadoutId, SlotCategory,
};
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

/// Lab panel focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabFocus {
    Slots,
    Attachments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Bases,
    Lab,
    Compare,
    Profile,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Dashboard, Tab::Bases, Tab::Lab, Tab::Compare, Tab::Profile, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Bases => "Bases",
            Tab::Lab => "Lab",
            Tab::Compare => "Compare",
            Tab::Profile => "Profile",
            Tab::Help => "Help",
        }
    }
}

/// An action waiting for `y` to confirm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    Delete(LoadoutId),
}

pub struct App {
    pub engine: LoadoutEngine,
    pub config: ArmoryConfig,
    pub current_tab: Tab,
    pub rng: rand::rngs::StdRng,
    pub show_help: bool,
    /// Last message shown in the footer
    pub status: Option<String>,
    pub pending: Option<Pending>,
    /// Name being typed, when editing
    pub edit_buffer: Option<String>,

    // Dashboard
    pub selected_saved: usize,
    // Bases
    pub selected_base: usize,
    // Lab
    pub lab_focus: LabFocus,
    pub selected_slot: usize,
    pub selected_attachment: usize,
    pub preset_index: usize,
    pub skin_index: Option<usize>,
    pub theme_index: Option<usize>,
    // Compare
    pub compare_first: usize,
    pub compare_second: usize,
}

impl App {
    pub fn new(engine: LoadoutEngine, config: ArmoryConfig) -> Self {
        App {
            engine,
            config,
            current_tab: Tab::Dashboard,
            rng: rand::rngs::StdRng::from_entropy(),
            show_help: false,
            status: None,
            pending: None,
            edit_buffer: None,
            selected_saved: 0,
            selected_base: 0,
            lab_focus: LabFocus::Slots,
            selected_slot: 0,
            selected_attachment: 0,
            preset_index: 0,
            skin_index: None,
            theme_index: None,
            compare_first: 0,
            compare_second: 1,
        }
    }

    // === Tabs ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.current_tab = Tab::Help;
        }
    }

    // === Navigation ===

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Dashboard => self.selected_saved = self.selected_saved.saturating_sub(1),
            Tab::Bases => self.selected_base = self.selected_base.saturating_sub(1),
            Tab::Lab => match self.lab_focus {
                LabFocus::Slots => {
                    if self.selected_slot > 0 {
                        self.selected_slot -= 1;
                        self.selected_attachment = 0;
                    }
                }
                LabFocus::Attachments => {
                    self.selected_attachment = self.selected_attachment.saturating_sub(1)
                }
            },
            Tab::Compare => self.compare_first = self.compare_first.saturating_sub(1),
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Dashboard => {
                if self.selected_saved + 1 < self.engine.saved().len() {
                    self.selected_saved += 1;
                }
            }
            Tab::Bases => {
                if self.selected_base + 1 < self.engine.catalog().base_items().len() {
                    self.selected_base += 1;
                }
            }
            Tab::Lab => match self.lab_focus {
                LabFocus::Slots => {
                    if self.selected_slot + 1 < SlotCategory::all().len() {
                        self.selected_slot += 1;
                        self.selected_attachment = 0;
                    }
                }
                LabFocus::Attachments => {
                    if self.selected_attachment + 1 < self.slot_attachments().len() {
                        self.selected_attachment += 1;
                    }
                }
            },
            Tab::Compare => {
                if self.compare_first + 1 < self.engine.saved().len() {
                    self.compare_first += 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_left(&mut self) {
        match self.current_tab {
            Tab::Lab => self.lab_focus = LabFocus::Slots,
            Tab::Compare => self.compare_second = self.compare_second.saturating_sub(1),
            _ => {}
        }
    }

    pub fn on_right(&mut self) {
        match self.current_tab {
            Tab::Lab => {
                self.lab_focus = LabFocus::Attachments;
                // Reset attachment selection when switching
                self.selected_attachment = 0;
            }
            Tab::Compare => {
                if self.compare_second + 1 < self.engine.saved().len() {
                    self.compare_second += 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Dashboard => self.load_selected(),
            Tab::Bases => self.choose_selected_base(),
            Tab::Lab => {
                if self.lab_focus == LabFocus::Attachments {
                    self.equip_selected();
                }
            }
            _ => {}
        }
    }

    // === Dashboard ===

    pub fn selected_saved_id(&self) -> Option<LoadoutId> {
        self.engine
            .saved()
            .get(self.selected_saved)
            .and_then(|l| l.id().cloned())
    }

    fn load_selected(&mut self) {
        if let Some(id) = self.selected_saved_id() {
            if self.engine.load(id.as_str()) {
                self.sync_cosmetic_indices();
                self.set_status(format!("Loaded {}", self.engine.current().name()));
                self.current_tab = Tab::Lab;
            }
        }
    }

    pub fn request_delete(&mut self) {
        if self.current_tab != Tab::Dashboard {
            return;
        }
        if let Some(id) = self.selected_saved_id() {
            self.pending = Some(Pending::Delete(id));
            self.set_status("Delete this loadout? [y] confirm  [Esc] cancel".to_string());
        }
    }

    pub fn confirm_pending(&mut self) {
        match self.pending.take() {
            Some(Pending::Delete(id)) => {
                if self.engine.delete(id.as_str()) {
                    self.set_status("Loadout deleted".to_string());
                }
                self.clamp_selections();
            }
            None => {}
        }
    }

    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            self.set_status("Cancelled".to_string());
        }
    }

    pub fn export_selected(&mut self) {
        let loadout = match self.current_tab {
            Tab::Dashboard => self.engine.saved().get(self.selected_saved),
            _ => Some(self.engine.current()),
        };
        let Some(loadout) = loadout else {
            return;
        };

        let result = share_text(loadout)
            .and_then(|doc| write_export(&self.config.export_dir(), &loadout_file_name(loadout), &doc));
        self.report_export(result);
    }

    pub fn export_all(&mut self) {
        let file_name = collection_file_name(unix_millis());
        let result = export_collection(self.engine.saved())
            .and_then(|doc| write_export(&self.config.export_dir(), &file_name, &doc));
        self.report_export(result);
    }

    fn report_export(&mut self, result: Result<PathBuf, armory_core::ExportError>) {
        match result {
            Ok(path) => self.set_status(format!("Exported to {}", path.display())),
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.set_status(format!("Export failed: {}", e));
            }
        }
    }

    /// Import the newest collection export found in the export directory
    pub fn import_latest(&mut self) {
        let Some(path) = latest_collection_export(&self.config.export_dir()) else {
            self.set_status("No collection export to import".to_string());
            return;
        };

        let loaded = fs::read_to_string(&path)
            .map_err(armory_core::ExportError::from)
            .and_then(|doc| import_collection(&doc));
        match loaded {
            Ok(loadouts) => {
                let count = self.engine.import_collection(loadouts);
                self.set_status(format!("Imported {} loadouts from {}", count, path.display()));
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "import failed");
                self.set_status(format!("Import failed: {}", e));
            }
        }
    }

    // === Bases ===

    fn choose_selected_base(&mut self) {
        let Some(id) = self
            .engine
            .catalog()
            .base_items()
            .get(self.selected_base)
            .map(|b| b.id.clone())
        else {
            return;
        };
        self.engine.set_base_item_by_id(&id);
        self.current_tab = Tab::Lab;
    }

    // === Lab ===

    pub fn current_slot(&self) -> SlotCategory {
        SlotCategory::all()[self.selected_slot.min(SlotCategory::all().len() - 1)]
    }

    pub fn slot_attachments(&self) -> &[Attachment] {
        self.engine.catalog().attachments_for(self.current_slot())
    }

    fn equip_selected(&mut self) {
        let slot = self.current_slot();
        let Some(attachment) = self.slot_attachments().get(self.selected_attachment).cloned() else {
            return;
        };
        if attachment.locked {
            self.set_status(format!("{} is locked", attachment.name));
            return;
        }
        self.engine.set_attachment(slot, attachment);
    }

    pub fn unequip_current_slot(&mut self) {
        if self.current_tab == Tab::Lab {
            self.engine.remove_attachment(self.current_slot());
        }
    }

    pub fn clear_attachments(&mut self) {
        if self.current_tab == Tab::Lab {
            self.engine.clear_attachments();
        }
    }

    pub fn randomize(&mut self) {
        if self.current_tab == Tab::Lab {
            self.engine.randomize_attachments(&mut self.rng);
            self.set_status("Randomized attachments".to_string());
        }
    }

    /// Apply presets in catalog order, one per key press
    pub fn apply_next_preset(&mut self) {
        if self.current_tab != Tab::Lab {
            return;
        }
        let presets = self.engine.catalog().presets();
        if presets.is_empty() {
            return;
        }
        let preset = presets[self.preset_index % presets.len()].clone();
        self.preset_index = (self.preset_index + 1) % presets.len();

        self.engine.apply_preset(&preset, &mut self.rng);
        self.set_status(format!("Applied preset: {}", preset.name));
    }

    /// Step through skins, then back to none
    pub fn cycle_skin(&mut self) {
        if self.current_tab != Tab::Lab {
            return;
        }
        let count = self.engine.catalog().skins().len();
        self.skin_index = next_index(self.skin_index, count);
        match self.skin_index.and_then(|i| self.engine.catalog().skins().get(i).cloned()) {
            Some(skin) => self.engine.set_skin(skin),
            None => self.engine.clear_skin(),
        };
    }

    pub fn cycle_theme(&mut self) {
        if self.current_tab != Tab::Lab {
            return;
        }
        let count = self.engine.catalog().color_themes().len();
        self.theme_index = next_index(self.theme_index, count);
        match self
            .theme_index
            .and_then(|i| self.engine.catalog().color_themes().get(i).cloned())
        {
            Some(theme) => self.engine.set_color_theme(theme),
            None => self.engine.clear_color_theme(),
        };
    }

    pub fn suggest_name(&mut self) {
        if self.current_tab == Tab::Lab {
            let name = self.engine.suggest_name(&mut self.rng);
            self.engine.set_name(name);
        }
    }

    pub fn save(&mut self) {
        let name = self.engine.save().name().to_string();
        self.set_status(format!("Saved {}", name));
    }

    pub fn new_loadout(&mut self) {
        self.engine.reset();
        self.skin_index = None;
        self.theme_index = None;
        self.set_status("Started a new loadout".to_string());
    }

    // === Name editing ===

    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    pub fn start_edit(&mut self) {
        if self.current_tab == Tab::Lab {
            self.edit_buffer = Some(self.engine.current().name().to_string());
        }
    }

    pub fn edit_push(&mut self, c: char) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.pop();
        }
    }

    pub fn finish_edit(&mut self) {
        if let Some(name) = self.edit_buffer.take() {
            let name = name.trim().to_string();
            if !name.is_empty() {
                self.engine.set_name(name);
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
    }

    // === Profile ===

    pub fn toggle_dark_mode(&mut self) {
        let dark = self.engine.toggle_dark_mode();
        self.set_status(format!("Dark mode {}", if dark { "on" } else { "off" }));
    }

    // === Helpers ===

    fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }

    fn clamp_selections(&mut self) {
        let saved = self.engine.saved().len();
        let last = saved.saturating_sub(1);
        self.selected_saved = self.selected_saved.min(last);
        self.compare_first = self.compare_first.min(last);
        self.compare_second = self.compare_second.min(last);
    }

    /// Point the skin/theme cycles at whatever the loaded loadout uses
    fn sync_cosmetic_indices(&mut self) {
        let catalog = self.engine.catalog();
        let current = self.engine.current();
        self.skin_index = current
            .skin()
            .and_then(|s| catalog.skins().iter().position(|c| c.id == s.id));
        self.theme_index = current
            .color_theme()
            .and_then(|t| catalog.color_themes().iter().position(|c| c.id == t.id));
    }
}

/// None -> 0 -> 1 -> ... -> count-1 -> None
fn next_index(current: Option<usize>, count: usize) -> Option<usize> {
    match current {
        _ if count == 0 => None,
        None => Some(0),
        Some(i) if i + 1 < count => Some(i + 1),
        Some(_) => None,
    }
}

fn unix_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn latest_collection_export(dir: &std::path::Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("armory-loadouts-") && n.ends_with(".json"))
        })
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_core::{default_catalog, MemoryStorage};
    use std::sync::Arc;

    fn app() -> App {
        let engine = LoadoutEngine::hydrate(Arc::new(default_catalog()), Box::new(MemoryStorage::new()));
        App::new(engine, ArmoryConfig::default())
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = app();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Dashboard);
    }

    #[test]
    fn test_choose_base_then_equip() {
        let mut app = app();
        app.set_tab(1);
        app.on_enter();
        assert_eq!(app.current_tab, Tab::Lab);
        assert!(app.engine.current().base_item().is_some());

        app.on_right();
        app.on_enter();
        let slot = app.current_slot();
        assert!(app.engine.current().attachment(slot).is_some());
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut app = app();
        app.save();
        app.set_tab(0);

        app.request_delete();
        assert_eq!(app.engine.saved().len(), 1);
        app.cancel_pending();
        assert_eq!(app.engine.saved().len(), 1);

        app.request_delete();
        app.confirm_pending();
        assert!(app.engine.saved().is_empty());
    }

    #[test]
    fn test_name_editing() {
        let mut app = app();
        app.set_tab(2);
        app.start_edit();
        app.edit_buffer = Some(String::new());
        for c in "Ghost".chars() {
            app.edit_push(c);
        }
        app.finish_edit();
        assert_eq!(app.engine.current().name(), "Ghost");
        assert!(!app.is_editing());
    }

    #[test]
    fn test_next_index_wraps_to_none() {
        assert_eq!(next_index(None, 2), Some(0));
        assert_eq!(next_index(Some(0), 2), Some(1));
        assert_eq!(next_index(Some(1), 2), None);
        assert_eq!(next_index(None, 0), None);
    }
}

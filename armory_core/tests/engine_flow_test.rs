//! Integration test: Catalog -> Build -> Save -> Export -> Restart
//!
//! This test validates the full flow from the bundled catalog through the
//! engine to a JSON save file and back.

use armory_core::{
    default_catalog,
    export::{collection_file_name, export_collection, export_loadout, import_collection, import_loadout, write_export},
    aggregate, energy_usage, Catalog, JsonFileStorage, Loadout, LoadoutEngine, ReferenceKind, Readiness, SlotCategory,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::sync::Arc;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print loadout details
fn print_loadout(loadout: &Loadout) {
    println!("  Name: {}", loadout.name());
    if let Some(base) = loadout.base_item() {
        println!("  Base: {} ({:?})", base.name, base.rarity);
    }
    for (category, attachment) in loadout.attachments().iter() {
        match attachment {
            Some(a) => println!("    - {}: {} ({} energy)", category, a.name, a.energy_cost),
            None => println!("    - {}: empty", category),
        }
    }
    println!("  Stats: {:?}", loadout.stats());
    println!("  Energy: {}/{}", loadout.energy_usage(), loadout.energy_capacity());
}

#[test]
fn test_full_build_save_restart_flow() {
    separator("INTEGRATION TEST: Catalog -> Build -> Save -> Export -> Restart");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let save_path = dir.path().join("armory-storage.json");

    // =========================================================================
    // STEP 1: Load the bundled catalog
    // =========================================================================
    separator("STEP 1: Loading Catalog");

    let catalog = Arc::new(default_catalog());
    println!("  Loaded {} base items", catalog.base_items().len());
    println!("  Loaded {} attachments", catalog.all_attachments().count());
    println!("  Loaded {} presets", catalog.presets().len());
    assert!(!catalog.base_items().is_empty());
    assert_eq!(catalog.presets().len(), 5);

    // =========================================================================
    // STEP 2: Build a loadout from a preset
    // =========================================================================
    separator("STEP 2: Building From Preset");

    let mut engine = LoadoutEngine::hydrate(catalog.clone(), Box::new(JsonFileStorage::new(&save_path)));
    assert!(engine.saved().is_empty());

    let base_id = catalog.base_items()[0].id.clone();
    let skin_id = catalog.skins()[0].id.clone();
    let theme_id = catalog.color_themes()[0].id.clone();

    engine.set_base_item_by_id(&base_id);
    assert_eq!(engine.readiness(), Readiness::Incomplete);

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    engine.apply_preset_by_name("Stealth Operative", &mut rng);
    engine.set_skin_by_id(&skin_id);
    engine.set_color_theme_by_id(&theme_id);
    engine.set_name("Night Shift");

    print_loadout(engine.current());
    let current = engine.current();
    assert!(current.attachments().equipped().all(|a| !a.locked));
    assert!(current.stats().values().all(|v| (0..=100).contains(v)));
    assert_eq!(
        current.energy_usage(),
        current.attachments().equipped().map(|a| a.energy_cost).sum::<u32>()
    );
    assert!(current.attachment(SlotCategory::Muzzle).is_some());

    // =========================================================================
    // STEP 3: Save twice and check the file
    // =========================================================================
    separator("STEP 3: Saving");

    let id = engine.save().id().cloned().expect("Saved loadout should have an id");
    engine.save();
    println!("  Saved as {}", id);
    assert_eq!(engine.saved().len(), 1);
    assert_eq!(engine.profile().total_builds, 1);
    assert!(save_path.exists(), "Save file should be written");

    engine.add_xp(1500);
    assert_eq!(engine.profile().level(), 2);

    // =========================================================================
    // STEP 4: Export and re-import
    // =========================================================================
    separator("STEP 4: Export / Import");

    let document = export_loadout(engine.current()).expect("Failed to export loadout");
    let restored = import_loadout(&document).expect("Failed to import loadout");
    assert_eq!(&restored, engine.current());

    let collection = export_collection(engine.saved()).expect("Failed to export collection");
    let path = write_export(dir.path(), &collection_file_name(1_700_000_000_000), &collection)
        .expect("Failed to write export");
    println!("  Collection written to {:?}", path);
    let reread = import_collection(&fs::read_to_string(&path).expect("Failed to read export"))
        .expect("Failed to parse export");
    assert_eq!(reread.as_slice(), engine.saved());

    // =========================================================================
    // STEP 5: Restart from the save file
    // =========================================================================
    separator("STEP 5: Restarting");

    drop(engine);
    let mut engine = LoadoutEngine::hydrate(catalog.clone(), Box::new(JsonFileStorage::new(&save_path)));
    assert_eq!(engine.saved().len(), 1);
    assert_eq!(engine.profile().level(), 2);
    assert_eq!(engine.current(), &Loadout::new(), "Current loadout is not persisted");

    assert!(engine.load(id.as_str()));
    print_loadout(engine.current());
    assert_eq!(engine.current().name(), "Night Shift");
    // Base, skin, theme and the four preferred slots are filled
    assert!(engine.completion() >= 64, "completion was {}", engine.completion());
    assert!(engine.stale_references().is_empty());

    // =========================================================================
    // STEP 6: Restart against a catalog that dropped the muzzle
    // =========================================================================
    separator("STEP 6: Catalog Drift");

    let muzzle = engine
        .current()
        .attachment(SlotCategory::Muzzle)
        .cloned()
        .expect("Preset should fill the muzzle");
    drop(engine);

    let trimmed = Arc::new(Catalog::new(
        catalog.base_items().to_vec(),
        catalog.all_attachments().filter(|a| a.id != muzzle.id).cloned().collect(),
        catalog.skins().to_vec(),
        catalog.color_themes().to_vec(),
        catalog.presets().to_vec(),
    ));
    let mut engine = LoadoutEngine::hydrate(trimmed, Box::new(JsonFileStorage::new(&save_path)));
    assert!(engine.load(id.as_str()));
    let stale = engine.stale_references();
    println!("  Stale references: {:?}", stale);
    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0].kind, ReferenceKind::Attachment(SlotCategory::Muzzle));

    let loadout = engine.set_base_item_by_id(&base_id);
    assert_eq!(loadout.attachment(SlotCategory::Muzzle), Some(&muzzle), "Stale entry kept for export");
    let resolvable: Vec<_> = loadout.attachments().equipped().filter(|a| a.id != muzzle.id).collect();
    let base_stats = &loadout.base_item().expect("Base item should be set").base_stats;
    assert_eq!(loadout.stats(), &aggregate(base_stats, resolvable.iter().copied()));
    assert_eq!(loadout.energy_usage(), energy_usage(resolvable.iter().copied()));
    let exported = import_loadout(&export_loadout(loadout).expect("Failed to export")).expect("Failed to import");
    assert_eq!(exported.attachment(SlotCategory::Muzzle), Some(&muzzle));

    // =========================================================================
    // STEP 7: Delete
    // =========================================================================
    separator("STEP 7: Deleting");

    assert!(engine.delete(id.as_str()));
    assert!(!engine.load(id.as_str()));
    assert_eq!(engine.profile().total_builds, 0);
}

#[test]
fn test_corrupt_save_file_starts_fresh() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let save_path = dir.path().join("armory-storage.json");
    fs::write(&save_path, "{ not json").expect("Failed to write corrupt file");

    let mut engine = LoadoutEngine::hydrate(Arc::new(default_catalog()), Box::new(JsonFileStorage::new(&save_path)));
    assert!(engine.saved().is_empty());
    assert_eq!(engine.profile().level(), 1);
    assert!(engine.dark_mode());

    // The unreadable document survives next to the fresh one
    let corrupt = JsonFileStorage::new(&save_path).corrupt_path();
    assert_eq!(fs::read_to_string(&corrupt).expect("Corrupt file kept"), "{ not json");

    engine.save();
    let reloaded = LoadoutEngine::hydrate(Arc::new(default_catalog()), Box::new(JsonFileStorage::new(&save_path)));
    assert_eq!(reloaded.saved().len(), 1);
    assert_eq!(fs::read_to_string(&corrupt).expect("Corrupt file kept"), "{ not json");
}

//! armory_tui - Interactive TUI for building, saving and comparing loadouts

mod app;
mod ui;

use app::App;
use armory_core::{
    config::{default_catalog, load_catalog},
    ArmoryConfig, Catalog, JsonFileStorage, LoadoutEngine, NullStorage, Storage,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> io::Result<()> {
    let config = ArmoryConfig::from_env();
    setup_logging(&config)?;

    let catalog = build_catalog(&config);
    let storage = build_storage(&config);
    let engine = LoadoutEngine::new(
        catalog,
        storage,
        Box::new(armory_core::SystemClock),
        armory_core::AgentProfile::new(config.agent_name.clone()),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine, config);

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.is_editing() {
                    match key.code {
                        KeyCode::Enter => app.finish_edit(),
                        KeyCode::Esc => app.cancel_edit(),
                        KeyCode::Backspace => app.edit_backspace(),
                        KeyCode::Char(c) => app.edit_push(c),
                        _ => {}
                    }
                    continue;
                }

                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) => app.set_tab(3),
                    (KeyCode::Char('5'), _) => app.set_tab(4),
                    (KeyCode::Char('6'), _) => app.set_tab(5),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::Enter, _) => app.on_enter(),
                    (KeyCode::Esc, _) => app.cancel_pending(),
                    (KeyCode::Char('y'), _) => app.confirm_pending(),
                    (KeyCode::Char('n'), _) => app.new_loadout(),
                    (KeyCode::Char('s'), _) => app.save(),
                    (KeyCode::Char('d'), _) => app.request_delete(),
                    (KeyCode::Char('x'), _) => app.export_selected(),
                    (KeyCode::Char('X'), _) => app.export_all(),
                    (KeyCode::Char('i'), _) => app.import_latest(),
                    (KeyCode::Char('u'), _) => app.unequip_current_slot(),
                    (KeyCode::Char('c'), _) => app.clear_attachments(),
                    (KeyCode::Char('r'), _) => app.randomize(),
                    (KeyCode::Char('p'), _) => app.apply_next_preset(),
                    (KeyCode::Char('v'), _) => app.cycle_skin(),
                    (KeyCode::Char('t'), _) => app.cycle_theme(),
                    (KeyCode::Char('g'), _) => app.suggest_name(),
                    (KeyCode::Char('e'), _) => app.start_edit(),
                    (KeyCode::Char('m'), _) => app.toggle_dark_mode(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }

    if let Err(e) = app.engine.flush() {
        tracing::warn!(error = %e, "final flush failed");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn build_catalog(config: &ArmoryConfig) -> Arc<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), "loaded catalog");
                catalog
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to load catalog, using built-in");
                default_catalog()
            }
        },
        None => default_catalog(),
    };
    Arc::new(catalog)
}

fn build_storage(config: &ArmoryConfig) -> Box<dyn Storage> {
    if config.enable_persistence {
        Box::new(JsonFileStorage::new(config.save_path()))
    } else {
        tracing::info!("persistence disabled, state is kept in memory");
        Box::new(NullStorage)
    }
}

/// Log to a file in the data directory; the terminal belongs to the UI
fn setup_logging(config: &ArmoryConfig) -> io::Result<()> {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "armory.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the whole process
    std::mem::forget(guard);

    tracing::info!("Log file: {}/armory.log", log_dir.display());
    Ok(())
}

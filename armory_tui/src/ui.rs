//! UI rendering

mod base_view;
mod compare_view;
mod dashboard_view;
mod help_view;
mod lab_view;
mod profile_view;

use crate::app::{App, Tab};
use armory_core::{EnergyLevel, EnergyStatus, Rarity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Foreground colors for the active display mode
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
}

pub fn palette(app: &App) -> Palette {
    if app.engine.dark_mode() {
        Palette {
            text: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
        }
    } else {
        Palette {
            text: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
        }
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Dashboard => dashboard_view::draw(f, app, chunks[1]),
        Tab::Bases => base_view::draw(f, app, chunks[1]),
        Tab::Lab => lab_view::draw(f, app, chunks[1]),
        Tab::Compare => compare_view::draw(f, app, chunks[1]),
        Tab::Profile => profile_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_footer(f, app, chunks[2]);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app);

    // Status messages and prompts replace the key list
    if let Some(buffer) = &app.edit_buffer {
        let line = Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}_", buffer), Style::default().fg(colors.text)),
            Span::styled("   [Enter] Confirm  [Esc] Cancel", Style::default().fg(colors.muted)),
        ]);
        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Rename "));
        f.render_widget(paragraph, area);
        return;
    }

    let common_keys = vec![("Tab", "Next tab"), ("n", "New"), ("s", "Save"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Dashboard => vec![
            ("↑/↓", "Select"),
            ("Enter", "Load"),
            ("d", "Delete"),
            ("x/X", "Export one/all"),
            ("i", "Import"),
        ],
        Tab::Bases => vec![("↑/↓", "Select"), ("Enter", "Use base")],
        Tab::Lab => vec![
            ("←/→", "Focus"),
            ("Enter", "Equip"),
            ("u", "Unequip"),
            ("r", "Random"),
            ("p", "Preset"),
            ("v/t", "Skin/Theme"),
            ("e/g", "Rename/Suggest"),
        ],
        Tab::Compare => vec![("↑/↓", "First"), ("←/→", "Second")],
        Tab::Profile => vec![("m", "Dark mode")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(colors.muted)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(colors.text)));
    }

    // Add separator if we have tab-specific keys
    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(colors.muted)));
    }

    // Add common keys
    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(colors.muted)));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(colors.accent)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    let title = match &app.status {
        Some(status) => format!(" {} ", status),
        None => " Keys ".to_string(),
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let title = format!(" Agent Armory · {} ", app.engine.profile().name);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn progress_bar(current: f64, max: f64, width: u16, filled_color: Color) -> Paragraph<'static> {
    let percent = if max > 0.0 { (current / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (percent * width as f64) as usize;
    let empty = width as usize - filled;

    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

    Paragraph::new(bar).style(Style::default().fg(filled_color))
}

/// `name  ██████░░░░ 60`
pub fn stat_bar_line(name: &str, value: i32, width: usize, color: Color) -> Line<'static> {
    let filled = (value.clamp(0, 100) as usize * width) / 100;
    Line::from(vec![
        Span::styled(format!("{:10}", name), Style::default().fg(Color::Gray)),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(width - filled), Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {:>3}", value), Style::default().fg(Color::White)),
    ])
}

pub fn energy_line(energy: &EnergyStatus) -> Line<'static> {
    let (label, color) = match energy.level() {
        EnergyLevel::Nominal => ("nominal", Color::Green),
        EnergyLevel::High => ("high", Color::Yellow),
        EnergyLevel::Overloaded => ("OVERLOADED", Color::Red),
    };
    Line::from(vec![
        Span::styled(format!("{:10}", "energy"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", energy.usage, energy.capacity),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({}, {} left)", label, energy.remaining()), Style::default().fg(color)),
    ])
}

pub fn rarity_to_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::White,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Rgb(255, 165, 0),
    }
}

/// Parse `#rrggbb`
pub fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let rgb = u32::from_str_radix(hex, 16).ok()?;
    let [_, r, g, b] = rgb.to_be_bytes();
    Some(Color::Rgb(r, g, b))
}

//! Help tab view

use crate::app::App;
use crate::ui::palette;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app);
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        heading("═══ Navigation ═══"),
        key_line("1-6", "Jump to tab (Dashboard/Bases/Lab/Compare/Profile/Help)", colors.text),
        key_line("Tab / Shift+Tab", "Next/previous tab", colors.text),
        key_line("↑/k  ↓/j", "Navigate lists", colors.text),
        key_line("q / Ctrl+C", "Quit (state is saved)", colors.text),
        key_line("?", "Toggle help", colors.text),
        Line::from(""),
        heading("═══ Loadouts ═══"),
        key_line("n", "Start a new loadout", colors.text),
        key_line("s", "Save the current loadout", colors.text),
        key_line("Enter (Dashboard)", "Load the selected loadout", colors.text),
        key_line("d then y", "Delete the selected loadout", colors.text),
        key_line("x / X", "Export selected loadout / whole collection", colors.text),
        key_line("i", "Import the newest collection export", colors.text),
        Line::from(""),
        heading("═══ Lab ═══"),
        key_line("←/→", "Switch between slots and attachments", colors.text),
        key_line("Enter", "Equip selected attachment", colors.text),
        key_line("u / c", "Unequip slot / clear all slots", colors.text),
        key_line("r", "Randomize attachments", colors.text),
        key_line("p", "Apply the next preset", colors.text),
        key_line("v / t", "Cycle skin / color theme", colors.text),
        key_line("e / g", "Rename / suggest a name", colors.text),
        Line::from(""),
        heading("═══ Rules ═══"),
        Line::from("  Stats = base stats + every attachment's modifiers, clamped to 0-100"),
        Line::from("  Energy = sum of attachment costs; going over capacity is allowed but flagged"),
        Line::from("  Completion = filled slots (base, 8 attachments, skin, theme) out of 11"),
        Line::from("  Locked attachments cannot be equipped"),
        Line::from("  Level = xp / 1000 + 1"),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colors.text))
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str, text: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(text)),
    ])
}

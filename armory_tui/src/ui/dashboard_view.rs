//! Dashboard tab view - saved loadouts and the build in progress

use crate::app::App;
use crate::ui::{energy_line, palette, rarity_to_color};
use armory_core::Readiness;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_saved(f, app, chunks[0]);
    draw_current(f, app, chunks[1]);
}

fn draw_saved(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app);
    let saved = app.engine.saved();
    let mut lines: Vec<Line> = vec![];

    if saved.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No saved loadouts yet. Build one in the Lab and press [s].",
            Style::default().fg(colors.muted),
        )));
    }

    for (i, loadout) in saved.iter().enumerate() {
        let is_selected = i == app.selected_saved;
        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(colors.text))
        };

        let base = loadout.base_item().map(|b| b.name.as_str()).unwrap_or("(no base)");
        let updated = loadout
            .updated_at()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:24}", loadout.name()), style),
            Span::styled(
                format!("{:18}", base),
                Style::default().fg(rarity_to_color(loadout.rarity_tier())),
            ),
            Span::styled(
                format!("{:>3}/{:<3} ", loadout.energy_usage(), loadout.energy_capacity()),
                Style::default().fg(if loadout.energy().is_over_budget() { Color::Red } else { colors.text }),
            ),
            Span::styled(updated, Style::default().fg(colors.muted)),
        ]));
    }

    let title = format!(" Saved Loadouts ({}) ", saved.len());
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}

fn draw_current(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app);
    let current = app.engine.current();

    let (readiness, color) = match app.engine.readiness() {
        Readiness::Empty => ("EMPTY", Color::DarkGray),
        Readiness::Incomplete => ("INCOMPLETE", Color::Yellow),
        Readiness::Complete => ("COMPLETE", Color::Green),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            current.name().to_string(),
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:10}", "status"), Style::default().fg(Color::Gray)),
            Span::styled(readiness, Style::default().fg(color)),
            Span::styled(format!("  {}%", app.engine.completion()), Style::default().fg(colors.text)),
        ]),
        energy_line(&current.energy()),
        Line::from(""),
    ];

    for (stat, value) in current.stats() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:10}", stat), Style::default().fg(Color::Gray)),
            Span::styled(value.to_string(), Style::default().fg(colors.text)),
        ]));
    }

    let stale = app.engine.stale_references();
    if !stale.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} reference(s) no longer in the catalog", stale.len()),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Current Build "));
    f.render_widget(paragraph, area);
}

//! Bases tab view - pick the item a loadout is built on

use crate::app::App;
use crate::ui::{palette, rarity_to_color, stat_bar_line};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let colors = palette(app);
    let items = app.engine.catalog().base_items();
    let current_id = app.engine.current().base_item().map(|b| b.id.as_str());

    let mut lines: Vec<Line> = vec![];
    for (i, item) in items.iter().enumerate() {
        let is_selected = i == app.selected_base;
        let prefix = if is_selected { "> " } else { "  " };
        let marker = if current_id == Some(item.id.as_str()) { " *" } else { "" };
        let mut style = Style::default().fg(rarity_to_color(item.rarity));
        if is_selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}{}", item.name, marker), style),
        ]));
    }

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Base Items "));
    f.render_widget(list, chunks[0]);

    let mut details: Vec<Line> = vec![];
    if let Some(item) = items.get(app.selected_base) {
        details.push(Line::from(Span::styled(
            item.name.clone(),
            Style::default().fg(rarity_to_color(item.rarity)).add_modifier(Modifier::BOLD),
        )));
        details.push(Line::from(Span::styled(
            format!("{} · {}", item.kind, item.rarity.name()),
            Style::default().fg(colors.muted),
        )));
        details.push(Line::from(""));
        details.push(Line::from(Span::styled(item.description.clone(), Style::default().fg(colors.text))));
        details.push(Line::from(""));
        for (stat, value) in &item.base_stats {
            details.push(stat_bar_line(stat, *value, 20, colors.accent));
        }
        details.push(Line::from(""));
        details.push(Line::from(vec![
            Span::styled(format!("{:10}", "capacity"), Style::default().fg(Color::Gray)),
            Span::styled(item.energy_capacity.to_string(), Style::default().fg(colors.text)),
        ]));
    }

    let paragraph = Paragraph::new(details)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    f.render_widget(paragraph, chunks[1]);
}

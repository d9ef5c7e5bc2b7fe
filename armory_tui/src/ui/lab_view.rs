//! Lab tab view - slots, attachments and the live result

use crate::app::{App, LabFocus};
use crate::ui::{energy_line, hex_color, palette, progress_bar, rarity_to_color, stat_bar_line};
use armory_core::{Attachment, SlotCategory};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    // Split into three columns: slots, attachments, result
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    draw_slots(f, app, chunks[0]);
    draw_attachments(f, app, chunks[1]);
    draw_result(f, app, chunks[2]);
}

fn draw_slots(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app);
    let current = app.engine.current();
    let is_focused = app.lab_focus == LabFocus::Slots;

    let base = current.base_item().map(|b| b.name.as_str()).unwrap_or("(choose on Bases tab)");
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("  {:12}", "base"), Style::default().fg(Color::Gray)),
            Span::styled(base.to_string(), Style::default().fg(rarity_to_color(current.rarity_tier()))),
        ]),
        Line::from(""),
    ];

    for (i, category) in SlotCategory::all().iter().enumerate() {
        let is_selected = i == app.selected_slot && is_focused;
        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(colors.text))
        };

        let contents = match current.attachment(*category) {
            Some(a) => Span::styled(a.name.clone(), Style::default().fg(rarity_to_color(a.rarity))),
            None => Span::styled("(empty)", Style::default().fg(colors.muted)),
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:12}", category.name()), style),
            contents,
        ]));
    }

    lines.push(Line::from(""));
    let skin = current.skin().map(|s| s.name.clone()).unwrap_or_else(|| "(none)".to_string());
    lines.push(Line::from(vec![
        Span::styled(format!("  {:12}", "skin"), Style::default().fg(Color::Gray)),
        Span::styled(skin, Style::default().fg(colors.text)),
    ]));

    let theme = match current.color_theme() {
        Some(theme) => Span::styled(
            theme.name.clone(),
            Style::default().fg(hex_color(&theme.primary).unwrap_or(colors.text)),
        ),
        None => Span::styled("(none)", Style::default().fg(colors.muted)),
    };
    lines.push(Line::from(vec![
        Span::styled(format!("  {:12}", "theme"), Style::default().fg(Color::Gray)),
        theme,
    ]));

    let border_color = if is_focused { Color::Yellow } else { colors.text };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", current.name())),
    );
    f.render_widget(paragraph, area);
}

fn draw_attachments(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app);
    let is_focused = app.lab_focus == LabFocus::Attachments;
    let slot = app.current_slot();
    let equipped_id = app.engine.current().attachment(slot).map(|a| a.id.as_str());

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("  Attachments for: {}", slot.name()),
            Style::default().fg(colors.accent),
        )),
        Line::from(""),
    ];

    let attachments = app.slot_attachments();
    if attachments.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Nothing available for this slot",
            Style::default().fg(colors.muted),
        )));
    }

    for (i, attachment) in attachments.iter().enumerate() {
        let is_selected = i == app.selected_attachment && is_focused;
        let rarity_color = if attachment.locked { Color::DarkGray } else { rarity_to_color(attachment.rarity) };
        let name_style = if is_selected {
            Style::default().fg(rarity_color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(rarity_color)
        };

        let mut spans = vec![
            Span::styled(if is_selected { "> " } else { "  " }, Style::default().fg(Color::Yellow)),
            Span::styled(attachment.name.clone(), name_style),
        ];
        if attachment.locked {
            spans.push(Span::styled(" [locked]", Style::default().fg(Color::Red)));
        }
        if equipped_id == Some(attachment.id.as_str()) {
            spans.push(Span::styled(" *", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(spans));

        // Show brief stats for selected attachment
        if is_selected {
            lines.push(Line::from(Span::styled(
                format!("    {}", modifier_summary(attachment)),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let border_color = if is_focused { Color::Yellow } else { colors.text };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Attachments "),
    );
    f.render_widget(paragraph, area);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app);
    let current = app.engine.current();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = vec![];
    for (stat, value) in current.stats() {
        lines.push(stat_bar_line(stat, *value, 16, colors.accent));
    }
    lines.push(Line::from(""));
    lines.push(energy_line(&current.energy()));

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Stats "));
    f.render_widget(paragraph, chunks[0]);

    let completion = app.engine.completion();
    let inner_width = chunks[1].width.saturating_sub(2);
    let bar = progress_bar(f64::from(completion), 100.0, inner_width, Color::Green).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Completion {}% ", completion)),
    );
    f.render_widget(bar, chunks[1]);
}

/// `+5 mobility, -2 stealth, 8 energy`
fn modifier_summary(attachment: &Attachment) -> String {
    let mut parts: Vec<String> = attachment
        .stat_modifiers
        .iter()
        .map(|(stat, delta)| format!("{:+} {}", delta, stat))
        .collect();
    parts.push(format!("{} energy", attachment.energy_cost));
    parts.join(", ")
}

//! Compare tab view - two saved loadouts side by side

use crate::app::App;
use crate::ui::palette;
use armory_core::LoadoutComparison;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app);
    let saved = app.engine.saved();

    let comparison = match (saved.get(app.compare_first), saved.get(app.compare_second)) {
        (Some(a), Some(b)) => match (a.id(), b.id()) {
            (Some(a), Some(b)) => app.engine.compare_saved(a.as_str(), b.as_str()),
            _ => None,
        },
        _ => None,
    };

    let lines = match comparison {
        Some(comparison) => comparison_lines(&comparison, colors.text, colors.muted),
        None => vec![Line::from(Span::styled(
            "  Save at least two loadouts to compare them.",
            Style::default().fg(colors.muted),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Compare "));
    f.render_widget(paragraph, area);
}

fn comparison_lines(comparison: &LoadoutComparison, text: Color, muted: Color) -> Vec<Line<'static>> {
    let header = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("  {:14}", ""), header),
            Span::styled(format!("{:>20}", comparison.first_name), header),
            Span::styled(format!("{:>20}", comparison.second_name), header),
            Span::styled(format!("{:>16}", "change"), header),
        ]),
        Line::from(""),
    ];

    for delta in &comparison.stats {
        let color = match delta.diff {
            d if d > 0 => Color::Green,
            d if d < 0 => Color::Red,
            _ => muted,
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:14}", delta.stat), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:>20}", delta.first), Style::default().fg(text)),
            Span::styled(format!("{:>20}", delta.second), Style::default().fg(text)),
            Span::styled(
                format!("{:>8} ({:+.0}%)", format!("{:+}", delta.diff), delta.percentage),
                Style::default().fg(color),
            ),
        ]));
    }

    let (a, b) = comparison.energy;
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:14}", "energy"), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:>20}", format!("{}/{}", a.usage, a.capacity)), Style::default().fg(text)),
        Span::styled(format!("{:>20}", format!("{}/{}", b.usage, b.capacity)), Style::default().fg(text)),
    ]));

    lines.push(Line::from(""));
    for slot in &comparison.slots {
        let style = if slot.differs() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(muted)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:14}", slot.category.name()), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:>20}", slot.first.as_deref().unwrap_or("-")), style),
            Span::styled(format!("{:>20}", slot.second.as_deref().unwrap_or("-")), style),
        ]));
    }

    lines
}

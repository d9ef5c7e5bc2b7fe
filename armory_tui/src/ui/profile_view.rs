//! Profile tab view - level, experience and achievements

use crate::app::App;
use crate::ui::{palette, progress_bar};
use armory_core::profile::XP_PER_LEVEL;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let colors = palette(app);
    let profile = app.engine.profile();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let summary = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("  Level        {}", profile.level())),
        Line::from(format!("  XP           {}", profile.xp())),
        Line::from(format!("  Total builds {}", profile.total_builds)),
    ];
    let paragraph = Paragraph::new(summary)
        .style(Style::default().fg(colors.text))
        .block(Block::default().borders(Borders::ALL).title(" Agent "));
    f.render_widget(paragraph, chunks[0]);

    let bar = progress_bar(
        profile.xp_into_level() as f64,
        XP_PER_LEVEL as f64,
        chunks[1].width.saturating_sub(2),
        Color::Cyan,
    )
    .block(Block::default().borders(Borders::ALL).title(format!(
        " {} XP to level {} ",
        profile.xp_to_next_level(),
        profile.level() + 1
    )));
    f.render_widget(bar, chunks[1]);

    let mut lines: Vec<Line> = vec![];
    for achievement in app.engine.achievements() {
        let (mark, style) = if achievement.completed {
            ("[x]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            ("[ ]", Style::default().fg(colors.muted))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", mark), style),
            Span::styled(format!("{:18}", achievement.kind.name()), style),
            Span::styled(achievement.kind.description(), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  Dark mode: {}  [m] toggle", if app.engine.dark_mode() { "on" } else { "off" }),
        Style::default().fg(colors.muted),
    )));

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Achievements "));
    f.render_widget(paragraph, chunks[2]);
}

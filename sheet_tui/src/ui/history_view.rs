//! History tab view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use sheet_core::summarize;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_entries(f, app, chunks[0]);
    draw_detail(f, app, chunks[1]);
}

fn draw_entries(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .history()
        .recent()
        .enumerate()
        .map(|(i, entry)| {
            let selected = i == app.selected_history;
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if selected { "► " } else { "  " };
            let headline = summarize(&entry.payload).headline;

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}{} ", prefix, entry.time_label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.label.clone(), style),
                Span::styled(
                    format!("  {} {}", super::headline_name(headline.label), headline.value),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let title = format!(
        " Histórico ({} no total, últimos {}) ",
        app.session.history().len(),
        app.history_window()
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}

fn draw_detail(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match app.selected_history_entry() {
        None => vec![Line::from(Span::styled(
            "Nada rolado ainda",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(entry) if app.history_expanded => entry
            .payload
            .to_json_pretty()
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect(),
        Some(entry) => super::result_card(Some(entry)),
    };

    let title = if app.history_expanded { " JSON " } else { " Detalhe " };
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

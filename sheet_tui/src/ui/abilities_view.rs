//! Abilities tab view

use super::result_card;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use sheet_core::Ability;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_ability_list(f, app, chunks[0]);
    draw_result(f, app, chunks[1]);
}

fn draw_ability_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Ability::ALL
        .iter()
        .enumerate()
        .map(|(i, ability)| {
            let style = if i == app.selected_ability {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let prefix = if i == app.selected_ability { "► " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", prefix, ability.name()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Habilidades (↑/↓ seleciona, Enter/Espaço usa) "),
    );

    f.render_widget(list, area);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(result_card(app.session.last_ability()))
        .block(Block::default().borders(Borders::ALL).title(" Resultado "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

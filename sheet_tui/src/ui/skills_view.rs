//! Skills tab view

use super::result_card;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use sheet_core::SkillTotal;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let (left, right) = app.session.character().skills.halves();
    let offset = left.len();

    draw_column(f, app, &left, 0, chunks[0]);
    draw_column(f, app, &right, offset, chunks[1]);
    draw_result(f, app, chunks[2]);
}

fn draw_column(f: &mut Frame, app: &App, skills: &[&SkillTotal], offset: usize, area: Rect) {
    let items: Vec<ListItem> = skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let selected = offset + i == app.selected_skill;
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let prefix = if selected { "► " } else { "  " };
            let width = (area.width as usize).saturating_sub(10).max(8);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:width$}", prefix, skill.name, width = width), style),
                Span::styled(
                    format!("{:+3}", skill.total()),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Perícias "));

    f.render_widget(list, area);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(skill) = app
        .session
        .character()
        .skills
        .get_index(app.selected_skill)
    {
        lines.push(Line::from(Span::styled(
            skill.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(breakdown_line(skill));
        lines.push(Line::from(""));
    }

    lines.extend(result_card(app.session.last_skill()));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Teste "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn breakdown_line(skill: &SkillTotal) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "{} {:+}  ½nív {:+}  maes {:+}  esp {:+}  out {:+}/{:+}  = {:+}",
            skill.attribute,
            skill.attribute_mod,
            skill.half_level,
            skill.mastery,
            skill.specialization,
            skill.other1,
            skill.other2,
            skill.total()
        ),
        Style::default().fg(Color::DarkGray),
    ))
}

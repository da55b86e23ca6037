//! Sheet tab view

use super::{progress_bar, section, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sheet_core::{Attribute, Counter};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_resources_and_attributes(f, app, chunks[0]);
    draw_derived(f, app, chunks[1]);
}

fn draw_resources_and_attributes(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Ficha ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Health label
            Constraint::Length(1), // Health bar
            Constraint::Length(1), // Energy label
            Constraint::Length(1), // Energy bar
            Constraint::Length(1),
            Constraint::Min(0), // Attributes
        ])
        .split(inner);

    let health = app.session.health();
    let energy = app.session.energy();

    f.render_widget(Paragraph::new(counter_line("Vida", health, Color::Red)), rows[0]);
    f.render_widget(
        progress_bar(health.current as f64, health.max as f64, rows[1].width, Color::Red),
        rows[1],
    );
    f.render_widget(Paragraph::new(counter_line("Energia", energy, Color::Blue)), rows[2]);
    f.render_widget(
        progress_bar(energy.current as f64, energy.max as f64, rows[3].width, Color::Blue),
        rows[3],
    );

    let attributes = app.session.character().attributes();
    let mut lines = vec![section("Atributos")];
    for attribute in Attribute::all() {
        let score = attributes.score(*attribute);
        let modifier = attributes.modifier(*attribute);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:20}", attribute.abbreviation()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!("{:>3}", score), Style::default().fg(Color::White)),
            Span::styled(
                format!("  ({:+})", modifier),
                Style::default().fg(if modifier >= 0 { Color::Green } else { Color::Red }),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), rows[5]);
}

fn counter_line(name: &str, counter: Counter, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", counter.current, counter.max),
            Style::default().fg(color),
        ),
        Span::styled(
            format!("  {:.0}%", counter.percent()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn draw_derived(f: &mut Frame, app: &App, area: Rect) {
    let character = app.session.character();
    let derived = &character.derived;

    let mut lines = vec![
        section("Personagem"),
        stat_line("Nome", character.name()),
        stat_line("Nível", character.level()),
        Line::from(""),
        section("Derivados"),
        stat_line("Maestria", derived.mastery_rank),
        stat_line("CA", derived.armor_class),
        stat_line("CD de Resistência", derived.save_dc),
        stat_line("Atenção", derived.attention),
        stat_line("Energia máx.", derived.max_energy),
        Line::from(""),
        section("Feitiçaria"),
    ];

    match character.caster() {
        Ok(caster) => {
            lines.push(stat_line("Total", caster.sorcery));
            lines.push(stat_line("Crítico a partir de", caster.crit_threshold()));
        }
        Err(err) => lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Estatísticas "));

    f.render_widget(paragraph, area);
}

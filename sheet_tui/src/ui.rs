//! UI rendering

mod abilities_view;
mod help_view;
mod history_view;
mod sheet_view;
mod skills_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use sheet_core::{summarize, HeadlineLabel, HistoryEntry};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Sheet => sheet_view::draw(f, app, chunks[1]),
        Tab::Skills => skills_view::draw(f, app, chunks[1]),
        Tab::Abilities => abilities_view::draw(f, app, chunks[1]),
        Tab::History => history_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    if let Some(status) = &app.status {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).title(" Erro "))
        .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let common_keys = vec![("Tab", "Próxima aba"), ("?", "Ajuda"), ("q", "Sair")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Sheet => vec![("+/-", "Vida"), ("]/[", "Energia")],
        Tab::Skills => vec![
            ("↑/↓", "Selecionar"),
            ("←/→", "Coluna"),
            ("Enter/Espaço", "Rolar"),
        ],
        Tab::Abilities => vec![("↑/↓", "Selecionar"), ("Enter/Espaço", "Usar")],
        Tab::History => vec![("↑/↓", "Selecionar"), ("Enter", "Ver JSON")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Teclas "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let selected = Tab::all()
        .iter()
        .position(|t| *t == app.current_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.session.character().name())),
        )
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn progress_bar(current: f64, max: f64, width: u16, filled_color: Color) -> Paragraph<'static> {
    let percent = if max > 0.0 { (current / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (percent * width as f64) as usize;
    let empty = (width as usize).saturating_sub(filled);

    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

    Paragraph::new(bar).style(Style::default().fg(filled_color))
}

pub fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn stat_line(name: &str, value: impl ToString) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

/// Display name of a headline kind
pub fn headline_name(label: HeadlineLabel) -> &'static str {
    match label {
        HeadlineLabel::Damage => "Dano",
        HeadlineLabel::Heal => "Cura",
        HeadlineLabel::Result => "Resultado",
    }
}

/// Result card for the latest skill check or ability
pub fn result_card(entry: Option<&HistoryEntry>) -> Vec<Line<'static>> {
    let Some(entry) = entry else {
        return vec![Line::from(Span::styled(
            "Nada rolado ainda",
            Style::default().fg(Color::DarkGray),
        ))];
    };

    let summary = summarize(&entry.payload);
    let title = entry
        .payload
        .get("Habilidade")
        .map(|value| value.to_string())
        .unwrap_or_else(|| entry.label.clone());

    let headline_color = match summary.headline.label {
        HeadlineLabel::Damage => Color::Red,
        HeadlineLabel::Heal => Color::Green,
        HeadlineLabel::Result => Color::Yellow,
    };

    let mut headline = vec![
        Span::styled(
            format!("{}: ", headline_name(summary.headline.label)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            summary.headline.value.to_string(),
            Style::default().fg(headline_color).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(source) = &summary.headline.source {
        headline.push(Span::styled(
            format!("  ({})", source),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", entry.time_label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(headline),
    ];

    if !summary.rolls.is_empty() {
        let faces: Vec<String> = summary.rolls.iter().map(|r| format!("[{}]", r)).collect();
        lines.push(Line::from(vec![
            Span::styled("Dados: ", Style::default().fg(Color::Gray)),
            Span::styled(faces.join(" "), Style::default().fg(Color::White)),
        ]));
    }

    let chips = summary.chips();
    if !chips.is_empty() {
        let mut spans = Vec::new();
        for chip in chips {
            spans.push(Span::styled(
                format!(" {} ", chip),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if let Some(attack) = &summary.attack_total {
        let style = if attack.contains("CRIT") {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled("Ataque: ", Style::default().fg(Color::Gray)),
            Span::styled(attack.clone(), style),
        ]));
    }

    if let Some(save_dc) = &summary.save_dc {
        lines.push(stat_line("CD do TR", save_dc));
    }

    if let Some(description) = &summary.description {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(Color::White),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{History, Payload};

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_result_card_uses_portuguese_labels() {
        let mut history = History::new();
        let payload = Payload::new()
            .with("Habilidade", "Convergência")
            .with("Alcance", "12m")
            .with("Rolagens", vec![8, 8, 8])
            .with("Dano (3d8)", 29);
        let entry = history.record("Convergência", payload);

        let card = text(&result_card(Some(entry)));
        assert!(card.contains("Dano: 29"));
        assert!(card.contains("Dados: [8] [8] [8]"));
        assert!(card.contains("Alcance: 12m"));
        assert!(!card.contains("Damage"));
    }

    #[test]
    fn test_headline_names() {
        assert_eq!(headline_name(HeadlineLabel::Damage), "Dano");
        assert_eq!(headline_name(HeadlineLabel::Heal), "Cura");
        assert_eq!(headline_name(HeadlineLabel::Result), "Resultado");
    }

    #[test]
    fn test_empty_card() {
        assert_eq!(text(&result_card(None)), "Nada rolado ainda");
    }
}

//! Help tab view

use super::section;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let crit_threshold = app
        .session
        .character()
        .caster()
        .map(|caster| caster.crit_threshold().to_string())
        .unwrap_or_else(|_| "-".to_string());

    let lines = vec![
        section("Navegação"),
        key_line("1-5", "Ir para a aba (Ficha/Perícias/Habilidades/Histórico/Ajuda)"),
        key_line("Tab / Shift+Tab", "Próxima/anterior aba"),
        key_line("↑/k  ↓/j", "Navegar nas listas"),
        key_line("←/h  →/l", "Trocar coluna de perícias"),
        key_line("q / Ctrl+C", "Sair"),
        key_line("?", "Mostrar ajuda"),
        Line::from(""),
        section("Ações"),
        key_line("Enter / Espaço", "Rolar perícia, usar habilidade ou abrir entrada do histórico"),
        key_line("+ / -", "Vida +1/-1"),
        key_line("] / [", "Energia +1/-1"),
        Line::from(""),
        section("Regras"),
        Line::from(Span::styled("Modificador:", Style::default().fg(Color::Yellow))),
        Line::from("  floor((valor - 10) / 2)"),
        Line::from(Span::styled("Perícia:", Style::default().fg(Color::Yellow))),
        Line::from("  atributo + floor(nível / 2) + maestria + especialização + outros"),
        Line::from(Span::styled("Teste de perícia:", Style::default().fg(Color::Yellow))),
        Line::from("  d20 + total da perícia"),
        Line::from(Span::styled("Crítico:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  d20 + Feitiçaria >= 20 + Feitiçaria (atualmente {})",
            crit_threshold
        )),
        Line::from(Span::styled("Custo:", Style::default().fg(Color::Yellow))),
        Line::from("  Informativo; a energia é ajustada à mão"),
        Line::from(""),
        Line::from(Span::styled(
            "Logs gravados no diretório temporário do sistema, em sheet_tui/",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Ajuda "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

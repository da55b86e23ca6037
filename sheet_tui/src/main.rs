//! sheet_tui - Interactive TUI for playing a character sheet

mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sheet_core::{default_sheet, load_sheet, Character, Session};
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Flushes buffered log lines when dropped at the end of main
    let _log_guard = setup_logging()?;

    // Optional first argument: path to a sheet TOML
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            load_sheet(&path).with_context(|| format!("loading sheet {}", path.display()))?
        }
        None => default_sheet().context("loading bundled sheet")?,
    };
    let character = Character::from_config(config)?;
    tracing::info!(name = character.name(), level = character.level(), "sheet loaded");

    let mut app = App::new(Session::new(character));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) => app.set_tab(2),
            (KeyCode::Char('4'), _) => app.set_tab(3),
            (KeyCode::Char('5'), _) => app.set_tab(4),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.on_enter(),
            (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => app.adjust_health(1),
            (KeyCode::Char('-'), _) => app.adjust_health(-1),
            (KeyCode::Char(']'), _) => app.adjust_energy(1),
            (KeyCode::Char('['), _) => app.adjust_energy(-1),
            (KeyCode::Char('?'), _) => app.toggle_help(),
            _ => {}
        }
    }
    Ok(())
}

/// Log to a file; the terminal belongs to the UI
///
/// The returned guard must be kept alive for the duration of the application.
fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = std::env::temp_dir().join("sheet_tui");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "sheet_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/sheet_tui.log", log_dir.display());
    Ok(guard)
}

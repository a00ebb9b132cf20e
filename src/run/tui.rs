use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};

use crate::ledger::LedgerStore;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::form::{ExpenseForm, FormField};

pub(crate) fn as_tui(store: &LedgerStore) -> Result<()> {
    info!(ledger = %store.path().display(), "starting TUI");
    let mut app = App::new(ExpenseForm::today());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!("TUI exited with error: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &LedgerStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app, store)?;
        }
    }
    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App, store: &LedgerStore) -> Result<()> {
    if app.dialog.is_some() {
        app.dialog = None;
        return Ok(());
    }
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app, store),
        InputMode::Command => handle_command_input(key, app, store),
        InputMode::Editing => {
            handle_editing_input(key, app, store);
            Ok(())
        }
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, store: &LedgerStore) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
            app.running = false;
        }
        KeyCode::Char('s') if ctrl => {
            app.submit_expense(store);
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('1') => app.switch_screen(store, Screen::Form),
        KeyCode::Char('2') => app.switch_screen(store, Screen::Monthly),
        KeyCode::Char('3') => app.switch_screen(store, Screen::Categories),
        KeyCode::Tab => cycle_screen(app, store, 1),
        KeyCode::BackTab => cycle_screen(app, store, -1),
        _ if app.screen == Screen::Form => handle_form_key(key, app, store),
        _ => {}
    }
    Ok(())
}

fn handle_form_key(key: KeyEvent, app: &mut App, store: &LedgerStore) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.form.focus_next(),
        KeyCode::Char('k') | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.form.adjust(1),
        KeyCode::Char('-') | KeyCode::Left => app.form.adjust(-1),
        KeyCode::Char('[') => app.form.shift_months(-1),
        KeyCode::Char(']') => app.form.shift_months(1),
        KeyCode::Char('t') => app.form.date = chrono::Local::now().date_naive(),
        KeyCode::Enter => match app.form.focus {
            FormField::Amount | FormField::Description => {
                app.input_mode = InputMode::Editing;
            }
            FormField::Submit => app.submit_expense(store),
            FormField::Category | FormField::Date => app.form.focus_next(),
        },
        _ => {}
    }
}

fn cycle_screen(app: &mut App, store: &LedgerStore, step: isize) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0) as isize;
    let next = (idx + step).rem_euclid(screens.len() as isize) as usize;
    app.switch_screen(store, screens[next]);
}

fn handle_command_input(key: KeyEvent, app: &mut App, store: &LedgerStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

/// Keys go straight into the focused text field. Control chords keep their
/// global meaning and never reach the field.
fn handle_editing_input(key: KeyEvent, app: &mut App, store: &LedgerStore) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => app.running = false,
            KeyCode::Char('s') => {
                app.input_mode = InputMode::Normal;
                app.submit_expense(store);
            }
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.form.focus_next();
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            if let Some(text) = app.form.focused_text_mut() {
                text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(text) = app.form.focused_text_mut() {
                text.push(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

use crate::config::Config;
use crate::db::Database;
use crate::store::{ThemeStore, TransactionStore};
use crate::ui::animate::FRAME_INTERVAL;
use crate::ui::app::{App, FormField, InputMode};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_up};

// Rows outside the table body: title, summary, status and command bars,
// table borders and header.
const CHROME_ROWS: u16 = 11;

pub(crate) fn as_tui(config: &Config, db: &mut Database) -> Result<()> {
    let store = TransactionStore::load(db);
    let themes = ThemeStore::load(db);
    let mut app = App::new(store, themes, config.currency.clone(), Instant::now());
    log::info!("starting UI with {} transactions", app.store.len());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("{e:#}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &mut Database,
) -> Result<()> {
    while app.running {
        let now = Instant::now();
        terminal.draw(|f| {
            app.visible_rows = f.area().height.saturating_sub(CHROME_ROWS).max(1) as usize;
            crate::ui::render::render(f, app, now);
        })?;

        // Tick while the counters are moving, otherwise wait for input.
        if app.counters.is_animating(now) && !event::poll(FRAME_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, db)?,
                InputMode::Command => handle_command_input(key, app, db)?,
                InputMode::Form => handle_form_input(key, app, db),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => app.running = false,
        KeyCode::Char('d') if ctrl => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if ctrl => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') | KeyCode::Home => {
            app.transaction_index = 0;
            app.transaction_scroll = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.visible().len();
            scroll_to_bottom(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                len,
                app.visible_rows,
            );
        }
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(db, Instant::now()),
        KeyCode::Char('u') => app.undo_selected(db, Instant::now()),
        KeyCode::Char('X') => app.purge_selected(db, Instant::now()),
        KeyCode::Char('f') => app.cycle_filter(1, Instant::now()),
        KeyCode::Char('F') => app.cycle_filter(-1, Instant::now()),
        KeyCode::Char('t') => app.toggle_theme(db),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, db: &mut Database) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, db)?;
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
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
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

fn handle_form_input(key: event::KeyEvent, app: &mut App, db: &mut Database) {
    let on_category = app.form.focus == FormField::Category;
    match key.code {
        KeyCode::Esc => {
            app.close_form();
            app.set_status("Add cancelled");
        }
        KeyCode::Enter => app.submit_form(db, Instant::now()),
        KeyCode::Tab | KeyCode::Down => app.form.focus = app.form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus = app.form.focus.prev(),
        KeyCode::Left if on_category => app.form.cycle_category(-1),
        KeyCode::Right | KeyCode::Char(' ') if on_category => app.form.cycle_category(1),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.form.focused_input() {
                input.clear();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.form.focused_input() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.form.focused_input() {
                input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_move_down(app: &mut App) {
    let len = app.visible().len();
    scroll_down(
        &mut app.transaction_index,
        &mut app.transaction_scroll,
        len,
        app.visible_rows,
    );
}

fn handle_move_up(app: &mut App) {
    scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
}

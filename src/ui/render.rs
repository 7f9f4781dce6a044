use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::theme::{palette, Palette};
use crate::models::Theme;

pub(crate) fn render(f: &mut Frame, app: &App, now: Instant) {
    let p = palette(app.themes.current());
    f.render_widget(Block::default().style(p.base_style()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(5), // Summary counters
            Constraint::Min(5),    // Transaction list
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app, p);
    super::screens::summary::render(f, chunks[1], app, p, now);
    super::screens::transactions::render(f, chunks[2], app, p);
    render_status_bar(f, chunks[3], app, p);
    render_command_bar(f, chunks[4], app, p);

    if app.input_mode == InputMode::Form {
        super::screens::form::render(f, f.area(), app, p);
    }
    if app.show_help {
        render_help_overlay(f, f.area(), p);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let theme_label = match app.themes.current() {
        Theme::Light => " ☀ light ",
        Theme::Dark => " ☾ dark ",
    };
    let left = format!(" SpendTUI  filter: {} ", app.filter);

    let pad = (area.width as usize).saturating_sub(left.chars().count() + theme_label.chars().count());
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(left, p.header_style()),
        Span::styled(" ".repeat(pad), p.header_style()),
        Span::styled(theme_label, Style::default().fg(p.accent).bg(p.header_bg)),
    ]));
    f.render_widget(bar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => p.accent,
        InputMode::Command => p.green,
        InputMode::Form => p.yellow,
    };
    let mode_style = Style::default()
        .fg(p.bg)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(" {} shown | {} total", app.visible().len(), app.store.len());

    let right = match (app.input_mode, app.selected()) {
        (InputMode::Form, _) => " Tab next | ←/→ category | Enter add | Esc cancel ",
        (_, Some(txn)) if txn.is_pending() => " u undo | X delete | a add | ? help ",
        (_, Some(_)) => " d delete | a add | f filter | t theme | ? help ",
        (_, None) => " a add | f filter | t theme | ? help ",
    };

    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = (area.width as usize).saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, p.status_bar_style()),
        Span::styled(" ".repeat(pad), p.status_bar_style()),
        Span::styled(right, p.status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(p.accent)),
                Span::styled(&app.command_input, p.command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal | InputMode::Form => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press a to add, : for commands, ? for help",
                    p.dim_style(),
                ))
            } else {
                Line::from(Span::styled(&app.status_message, p.command_bar_style()))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(p.command_bg));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect, p: &Palette) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),
        ))
    };
    let mut help_text = vec![
        Line::from(Span::styled(
            " SpendTUI Help ",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Navigation"),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           g/G        Top/Bottom",
            p.normal_style(),
        )),
        Line::from(Span::styled(
            "  Ctrl-d/u         Half page down/up     q, Ctrl-q  Quit",
            p.normal_style(),
        )),
        Line::from(""),
        section(" Actions"),
        Line::from(Span::styled(
            "  a               Add transaction        d          Mark for deletion",
            p.normal_style(),
        )),
        Line::from(Span::styled(
            "  u               Undo deletion          X          Delete permanently",
            p.normal_style(),
        )),
        Line::from(Span::styled(
            "  f/F             Next/previous filter   t          Toggle theme",
            p.normal_style(),
        )),
        Line::from(Span::styled(
            "  :               Command mode           ?          This help",
            p.normal_style(),
        )),
        Line::from(""),
        section(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 1 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<10} {desc}"),
            p.normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        p.dim_style(),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let popup_area = centered(area, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .style(Style::default().bg(p.header_bg)),
    );
    f.render_widget(help, popup_area);
}

pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

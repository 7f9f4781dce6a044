use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::animate::AnimatedValue;
use crate::ui::app::App;
use crate::ui::theme::Palette;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, p: &Palette, now: Instant) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let counters = &app.counters;
    let balance_color = if counters.balance.target() < 0.0 {
        p.red
    } else {
        p.accent
    };

    render_card(f, cards[0], app, p, "Balance", &counters.balance, balance_color, now);
    render_card(f, cards[1], app, p, "Income", &counters.income, p.green, now);
    render_card(f, cards[2], app, p, "Expenses", &counters.expenses, p.red, now);
}

#[allow(clippy::too_many_arguments)]
fn render_card(
    f: &mut Frame,
    area: Rect,
    app: &App,
    p: &Palette,
    title: &str,
    value: &AnimatedValue,
    color: Color,
    now: Instant,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(format!(" {title} "), p.title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            app.money(value.value_at(now)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::store::Filter;
use crate::ui::app::App;
use crate::ui::theme::Palette;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let list = app.visible();

    if list.is_empty() {
        let msg = match &app.filter {
            Filter::All => vec![
                Line::from(""),
                Line::from(Span::styled("No transactions yet", p.dim_style())),
                Line::from(""),
                Line::from(Span::styled("Press a to add one", p.dim_style())),
            ],
            Filter::Category(c) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No transactions in '{c}'"),
                    p.dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press f to change the filter",
                    p.dim_style(),
                )),
            ],
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(p.border_style())
            .title(Span::styled(" Transactions (0) ", p.title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Title", "Category • Date", "Amount", ""]
        .iter()
        .map(|h| Cell::from(*h).style(p.header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = list
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let is_cursor = i == app.transaction_index;

            let amount_style = if txn.is_pending() {
                p.pending_style()
            } else if txn.is_income() {
                p.income_style()
            } else {
                p.expense_style()
            };

            let (marker, hint) = if txn.is_pending() {
                ("pending", "u undo · X delete")
            } else {
                ("", "d delete")
            };

            let style = if is_cursor {
                p.selected_style()
            } else if txn.is_pending() {
                p.pending_style()
            } else if i % 2 == 1 {
                p.alt_row_style()
            } else {
                p.normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&txn.title, 40)),
                Cell::from(format!("{} • {}", txn.category, txn.date_str())),
                Cell::from(Span::styled(app.money(txn.amount), amount_style)),
                Cell::from(if is_cursor { hint } else { marker }),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(28),
        Constraint::Length(16),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(p.border_style())
            .title(Span::styled(
                format!(" Transactions ({}) ", list.len()),
                p.title_style(),
            )),
    );

    f.render_widget(table, area);
}

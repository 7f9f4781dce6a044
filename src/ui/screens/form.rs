use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::app::{App, FormField};
use crate::ui::render::centered;
use crate::ui::theme::Palette;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let form = &app.form;
    let mut lines = vec![Line::from("")];

    for &field in FormField::all() {
        let focused = field == form.focus;
        let label_style = if focused {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            p.dim_style()
        };
        let value = match field {
            FormField::Category => format!("◀ {} ▶", form.value(field)),
            _ if focused => format!("{}▏", form.value(field)),
            _ => form.value(field).to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", field.label()), label_style),
            Span::styled(value, p.normal_style()),
        ]));
    }

    lines.push(Line::from(""));
    match &form.error {
        Some(msg) => lines.push(Line::from(Span::styled(format!("  {msg}"), p.error_style()))),
        None => lines.push(Line::from(Span::styled(
            "  Sign comes from the category: only Income is positive",
            p.dim_style(),
        ))),
    }

    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 60.min(area.width.saturating_sub(4));
    let popup = centered(area, width, height);

    f.render_widget(Clear, popup);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .title(Span::styled(" Add transaction ", p.title_style()))
            .style(Style::default().bg(p.header_bg)),
    );
    f.render_widget(widget, popup);
}

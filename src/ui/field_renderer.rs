//! Field rendering utilities for the intake form

use crate::state::{FieldId, FieldKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a single form field with its label, current value and focus state
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldId, value: &str, is_active: bool) {
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let is_select = matches!(field.kind(), FieldKind::Select(_));
    let cursor = if is_active && !is_select { "▌" } else { "" };

    let content = if value.is_empty() {
        let hint = match field.kind() {
            FieldKind::Select(_) => "◂ ▸ to choose",
            _ => field.placeholder().unwrap_or(""),
        };
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(hint, hint_style),
        ]))
    } else if field.kind() == FieldKind::Multiline {
        let mut lines: Vec<Line> = value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    // Every field in this form is required.
    let block = Block::default()
        .title(format!(" {} * ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Height a field needs on screen, including its borders
pub fn field_height(field: FieldId) -> u16 {
    match field.kind() {
        FieldKind::Multiline => 6,
        _ => 3,
    }
}

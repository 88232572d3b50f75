//! Rendering for the three-step application form

use crate::app::App;
use crate::state::{Step, SubmissionStatus};
use crate::ui::field_renderer::{draw_field, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PROGRESS_CELLS: usize = 30;

/// Percent complete shown in the header; a step counts once it is left
pub fn progress_percent(step: Step) -> u16 {
    (((step.number() - 1) * 100) / 3) as u16
}

/// Draw the form for the current step
pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_column(frame.area(), 76);
    let fields = app.current_fields();

    let mut constraints = vec![Constraint::Length(4)];
    if app.session.error_text.is_some() {
        constraints.push(Constraint::Length(4));
    }
    for field in fields {
        constraints.push(Constraint::Length(field_height(*field)));
    }
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    draw_header(frame, chunks[next], app);
    next += 1;

    if let Some(error) = &app.session.error_text {
        draw_error_banner(frame, chunks[next], error);
        next += 1;
    }

    for (index, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[next],
            *field,
            app.session.record.get(*field),
            index == app.active_field,
        );
        next += 1;
    }

    draw_help_line(frame, chunks[next], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.session.current_step;
    let percent = progress_percent(step);
    let filled = percent as usize * PROGRESS_CELLS / 100;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_CELLS - filled)
    );

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Step {} of 3", step.number()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  ·  "),
            Span::styled(step.title(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled(bar, Style::default().fg(Color::Green)),
            Span::styled(
                format!(" {percent}% complete"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let paragraph = Paragraph::new(Span::styled(error, Style::default().fg(Color::Red)))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_help_line(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.session.submission_status == SubmissionStatus::Submitting {
        "Sending your application...".to_string()
    } else {
        let action = match app.session.current_step {
            Step::ChallengeAndUrgency => "Enter/Ctrl+S submit",
            _ => "Enter continue",
        };
        format!("Tab next · Shift+Tab prev · ◂ ▸ choose · {action} · Esc back · Ctrl+C quit")
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}

/// Clamp the drawing area to a centered column of at most `max_width`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_per_step() {
        assert_eq!(progress_percent(Step::Identity), 0);
        assert_eq!(progress_percent(Step::CompanyProfile), 33);
        assert_eq!(progress_percent(Step::ChallengeAndUrgency), 66);
    }

    #[test]
    fn test_centered_column_clamps_to_area() {
        let area = Rect::new(0, 0, 100, 40);
        let column = centered_column(area, 76);
        assert_eq!(column.width, 76);
        assert_eq!(column.x, 12);

        let narrow = Rect::new(0, 0, 50, 40);
        assert_eq!(centered_column(narrow, 76).width, 50);
    }
}

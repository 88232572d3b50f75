//! Terminal views for the two workflow outcomes

use crate::app::App;
use crate::ui::form::centered_column;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Acknowledgement for leads routed to manual review
pub fn draw_acknowledgement(frame: &mut Frame, app: &App) {
    let area = centered_column(frame.area(), 72);
    let lines = vec![
        Line::from(Span::styled(
            "Application received successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "Our team will review your answers. If your profile is a fit for the \
             program, we will reach out on WhatsApp within the next business day.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            format!("Prefer not to wait? {}", app.session.deployment().escalation_link()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[W] Talk to a specialist now · [R] Start over · [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Application received ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

/// Handoff view for qualified leads after the scheduling redirect
pub fn draw_scheduling_handoff(frame: &mut Frame, app: &App) {
    let area = centered_column(frame.area(), 72);
    let lines = vec![
        Line::from(Span::styled(
            "Application sent — let's schedule your session.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("The scheduling page was opened in your browser:"),
        Line::from(Span::styled(
            app.session.deployment().scheduling_url.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[O] Open again · [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" You're in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

//! UI module for rendering the TUI

mod field_renderer;
mod form;
mod outcome;

use crate::app::{App, Outcome};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    match app.outcome {
        None => form::draw(frame, app),
        Some(Outcome::Acknowledged) => outcome::draw_acknowledgement(frame, app),
        Some(Outcome::SchedulingHandoff) => outcome::draw_scheduling_handoff(frame, app),
    }
}

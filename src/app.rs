//! Application state and key handling for the intake wizard

use crate::collector::traits::OutcomePresenter;
use crate::collector::{CollectorClient, SubmissionPipeline, TracingTracker};
use crate::config::Deployment;
use crate::platform;
use crate::state::{step_fields, FieldId, FieldKind, FormSession, Step};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Terminal realization of the workflow's terminal outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Qualified: the browser was pointed at the scheduling page
    SchedulingHandoff,
    /// Not qualified: the acknowledgement view with the escalation action
    Acknowledged,
}

/// Captures which outcome the state machine signalled during a submit
#[derive(Default)]
struct RecordedOutcome {
    scheduling_url: Option<String>,
    acknowledged: bool,
}

impl OutcomePresenter for RecordedOutcome {
    fn redirect_to_scheduling(&mut self, url: &str) {
        self.scheduling_url = Some(url.to_string());
    }

    fn show_acknowledgement(&mut self) {
        self.acknowledged = true;
    }
}

/// Main application struct
pub struct App {
    /// The live workflow session
    pub session: FormSession,
    /// Index of the focused field within the current step
    pub active_field: usize,
    /// Set once the workflow reaches a terminal outcome
    pub outcome: Option<Outcome>,
    /// Submission pipeline wired to the deployment's collector
    pipeline: SubmissionPipeline,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(deployment: Deployment) -> Self {
        let collector = CollectorClient::new(deployment.collector_url.clone());
        let pipeline = SubmissionPipeline::new(
            Box::new(collector),
            Some(Box::new(TracingTracker)),
            deployment.tracking_event.clone(),
        );
        Self {
            session: FormSession::new(deployment),
            active_field: 0,
            outcome: None,
            pipeline,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Fields of the step currently on screen
    pub fn current_fields(&self) -> &'static [FieldId] {
        step_fields(self.session.current_step)
    }

    /// The field that has input focus
    pub fn active_field_id(&self) -> FieldId {
        let fields = self.current_fields();
        fields[self.active_field.min(fields.len() - 1)]
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.outcome {
            Some(Outcome::Acknowledged) => self.handle_acknowledged_key(key),
            Some(Outcome::SchedulingHandoff) => self.handle_handoff_key(key),
            None => self.handle_form_key(key).await,
        }
        Ok(())
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.session.current_step == Step::ChallengeAndUrgency {
                    self.submit().await;
                }
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset();
            }
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Left => self.cycle_select(-1),
            KeyCode::Right => self.cycle_select(1),
            KeyCode::Enter => {
                if self.active_field_id().kind() == FieldKind::Multiline {
                    self.push_char('\n');
                } else if self.session.current_step == Step::ChallengeAndUrgency {
                    self.submit().await;
                } else {
                    self.advance();
                }
            }
            KeyCode::Esc => {
                if self.session.go_back() {
                    self.active_field = 0;
                }
            }
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
    }

    fn handle_acknowledged_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('w') | KeyCode::Char('W') => {
                // The escalation link may be opened any number of times.
                platform::open_url(&self.session.deployment().escalation_link());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_handoff_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('o') | KeyCode::Char('O') => {
                platform::open_url(&self.session.deployment().scheduling_url);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    async fn submit(&mut self) {
        let mut recorded = RecordedOutcome::default();
        self.session.submit(&self.pipeline, &mut recorded).await;

        if let Some(url) = recorded.scheduling_url {
            platform::open_url(&url);
            self.outcome = Some(Outcome::SchedulingHandoff);
        } else if recorded.acknowledged {
            self.outcome = Some(Outcome::Acknowledged);
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.active_field = 0;
        self.outcome = None;
    }

    fn advance(&mut self) {
        if self.session.go_next() {
            self.active_field = 0;
        }
    }

    fn next_field(&mut self) {
        let count = self.current_fields().len();
        self.active_field = (self.active_field + 1) % count;
    }

    fn prev_field(&mut self) {
        let count = self.current_fields().len();
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
    }

    fn push_char(&mut self, c: char) {
        let field = self.active_field_id();
        match field.kind() {
            FieldKind::Text | FieldKind::Multiline => {
                let mut value = self.session.record.get(field).to_string();
                value.push(c);
                self.session.edit_field(field, value);
            }
            FieldKind::Select(_) => {}
        }
    }

    fn pop_char(&mut self) {
        let field = self.active_field_id();
        match field.kind() {
            FieldKind::Text | FieldKind::Multiline => {
                let mut value = self.session.record.get(field).to_string();
                value.pop();
                self.session.edit_field(field, value);
            }
            FieldKind::Select(_) => {}
        }
    }

    /// Move a selection field to its next or previous option, wrapping
    /// around; an empty field starts at the first option either way.
    fn cycle_select(&mut self, direction: isize) {
        let field = self.active_field_id();
        let FieldKind::Select(options) = field.kind() else {
            return;
        };
        let current = self.session.record.get(field);
        let selected = options.iter().position(|option| *option == current);
        let next = match selected {
            None => 0,
            Some(index) => {
                let count = options.len() as isize;
                ((index as isize + direction).rem_euclid(count)) as usize
            }
        };
        self.session.edit_field(field, options[next].to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ROLE_OPTIONS;
    use tokio_test::block_on;

    fn app() -> App {
        App::new(Deployment::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_fills_the_focused_field() {
        let mut app = app();
        for c in "Jane".chars() {
            block_on(app.handle_key(key(KeyCode::Char(c)))).unwrap();
        }
        assert_eq!(app.session.record.name, "Jane");

        block_on(app.handle_key(key(KeyCode::Backspace))).unwrap();
        assert_eq!(app.session.record.name, "Jan");
    }

    #[test]
    fn test_tab_cycles_field_focus() {
        let mut app = app();
        assert_eq!(app.active_field_id(), FieldId::Name);
        block_on(app.handle_key(key(KeyCode::Tab))).unwrap();
        assert_eq!(app.active_field_id(), FieldId::Role);
        for _ in 0..3 {
            block_on(app.handle_key(key(KeyCode::Tab))).unwrap();
        }
        // Wrapped past phone back to the first field.
        assert_eq!(app.active_field_id(), FieldId::Name);
    }

    #[test]
    fn test_arrows_cycle_selection_options() {
        let mut app = app();
        block_on(app.handle_key(key(KeyCode::Tab))).unwrap(); // focus role
        block_on(app.handle_key(key(KeyCode::Right))).unwrap();
        assert_eq!(app.session.record.role, ROLE_OPTIONS[0]);
        block_on(app.handle_key(key(KeyCode::Right))).unwrap();
        assert_eq!(app.session.record.role, ROLE_OPTIONS[1]);
        block_on(app.handle_key(key(KeyCode::Left))).unwrap();
        assert_eq!(app.session.record.role, ROLE_OPTIONS[0]);
    }

    #[test]
    fn test_typing_into_selection_field_is_ignored() {
        let mut app = app();
        block_on(app.handle_key(key(KeyCode::Tab))).unwrap(); // focus role
        block_on(app.handle_key(key(KeyCode::Char('x')))).unwrap();
        assert_eq!(app.session.record.role, "");
    }

    #[test]
    fn test_enter_on_incomplete_step_blocks_and_reports() {
        let mut app = app();
        block_on(app.handle_key(key(KeyCode::Enter))).unwrap();
        assert_eq!(app.session.current_step, Step::Identity);
        assert!(app.session.error_text.is_some());
    }

    #[test]
    fn test_esc_returns_to_previous_step() {
        let mut app = app();
        app.session.edit_field(FieldId::Name, "Jane".to_string());
        app.session.edit_field(FieldId::Role, ROLE_OPTIONS[0].to_string());
        app.session.edit_field(FieldId::Email, "j@c.com".to_string());
        app.session.edit_field(FieldId::Phone, "123".to_string());
        block_on(app.handle_key(key(KeyCode::Enter))).unwrap();
        assert_eq!(app.session.current_step, Step::CompanyProfile);

        block_on(app.handle_key(key(KeyCode::Esc))).unwrap();
        assert_eq!(app.session.current_step, Step::Identity);
        assert_eq!(app.active_field, 0);
    }

    #[test]
    fn test_ctrl_r_resets_the_session() {
        let mut app = app();
        app.session.edit_field(FieldId::Name, "Jane".to_string());
        app.active_field = 2;
        block_on(app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)))
            .unwrap();
        assert_eq!(app.session.record.name, "");
        assert_eq!(app.active_field, 0);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn test_quit_from_acknowledgement_view() {
        let mut app = app();
        app.outcome = Some(Outcome::Acknowledged);
        block_on(app.handle_key(key(KeyCode::Char('q')))).unwrap();
        assert!(app.should_quit());
    }
}

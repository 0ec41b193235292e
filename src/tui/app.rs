//! Main TUI application state machine.
//!
//! Handles:
//! - Tab navigation (gated until the first assessment)
//! - Input event handling
//! - Form submission through the assessment service

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::adapters::HeuristicModel;
use crate::application::{Assessment, AssessmentService};
use crate::config::AppConfig;

use super::ui::{
    features::render_features,
    metrics::render_metrics,
    patient::{render_patient_form, PatientFormState},
    render_disclaimer, render_tabs,
    results::render_results,
};

/// Current tab in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    PatientInput,
    Results,
    Metrics,
    Features,
}

impl Screen {
    pub const ALL: [Self; 4] = [Self::PatientInput, Self::Results, Self::Metrics, Self::Features];

    pub fn title(self) -> &'static str {
        match self {
            Self::PatientInput => "Patient Input",
            Self::Results => "Prediction Results",
            Self::Metrics => "Model Metrics",
            Self::Features => "Feature Importance",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    fn from_function_key(n: u8) -> Option<Self> {
        (n as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Scores submitted records
    assessment_service: AssessmentService<HeuristicModel>,

    /// Patient form state
    patient_form_state: PatientFormState,

    /// Most recent scored submission
    last_assessment: Option<Assessment>,
}

impl App {
    /// Create a new application instance using the default heuristic model.
    ///
    /// # Errors
    /// Returns error if services cannot be initialized.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let service = AssessmentService::new(Arc::new(HeuristicModel::new()));
        let mut app = Self::with_dependencies(service)?;

        if config.start_with_sample {
            app.patient_form_state.load_sample_data();
        }
        tracing::info!("Using model: {}", app.assessment_service.model_label());

        Ok(app)
    }

    /// Create application with an injected assessment service.
    ///
    /// # Errors
    /// Returns error if initialization fails.
    pub fn with_dependencies(assessment_service: AssessmentService<HeuristicModel>) -> Result<Self> {
        Ok(Self {
            screen: Screen::PatientInput,
            should_quit: false,
            assessment_service,
            patient_form_state: PatientFormState::default(),
            last_assessment: None,
        })
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases as well as presses
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Disclaimer
            ])
            .split(f.area());

        let titles: Vec<&str> = Screen::ALL.iter().map(|s| s.title()).collect();
        let enabled: Vec<bool> = Screen::ALL.iter().map(|s| self.is_enabled(*s)).collect();
        render_tabs(f, chunks[0], &titles, &enabled, self.screen.index());

        match self.screen {
            Screen::PatientInput => render_patient_form(f, chunks[1], &self.patient_form_state),
            Screen::Results => render_results(f, chunks[1], self.last_assessment.as_ref()),
            Screen::Metrics => render_metrics(f, chunks[1]),
            Screen::Features => render_features(f, chunks[1]),
        }

        render_disclaimer(f, chunks[2]);
    }

    fn is_enabled(&self, screen: Screen) -> bool {
        screen == Screen::PatientInput || self.last_assessment.is_some()
    }

    fn switch_to(&mut self, screen: Screen) {
        if self.is_enabled(screen) {
            self.screen = screen;
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if let KeyCode::F(n) = key {
            if let Some(screen) = Screen::from_function_key(n) {
                self.switch_to(screen);
            }
            return;
        }

        match self.screen {
            Screen::PatientInput => self.handle_patient_form_key(key),
            _ => self.handle_view_key(key),
        }
    }

    fn handle_view_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::PatientInput;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                if let Some(screen) = Screen::from_digit(c) {
                    self.switch_to(screen);
                }
            }
            _ => {}
        }
    }

    fn handle_patient_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::BackTab => {
                self.patient_form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.patient_form_state.next_field();
            }
            KeyCode::Left => {
                self.patient_form_state.cycle(-1);
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                self.patient_form_state.cycle(1);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.patient_form_state.load_sample_data();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.patient_form_state.clear_sensitive();
            }
            KeyCode::Char(c) => {
                self.patient_form_state.input_char(c);
            }
            KeyCode::Backspace => {
                self.patient_form_state.delete_char();
            }
            KeyCode::Delete => {
                self.patient_form_state.clear_field();
            }
            KeyCode::Enter => {
                self.submit_patient_form();
            }
            _ => {}
        }
    }

    fn submit_patient_form(&mut self) {
        let record = match self.patient_form_state.to_patient_record() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Form submission rejected: unparsable field");
                self.patient_form_state.error_message = Some(e);
                return;
            }
        };

        match self.assessment_service.assess_validated(record) {
            Ok(assessment) => {
                self.last_assessment = Some(assessment);
                // Clear plaintext buffers from the UI immediately.
                self.patient_form_state.clear_sensitive();
                self.screen = Screen::Results;
            }
            Err(e) => {
                self.patient_form_state.error_message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskLevel;
    use crate::tui::ui::patient::FieldInput;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(&AppConfig::default()).expect("Should create app")
    }

    fn press(app: &mut App, key: KeyCode) {
        app.handle_key(key, KeyModifiers::NONE);
    }

    #[test]
    fn test_tabs_locked_until_first_assessment() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.screen, Screen::PatientInput);
        press(&mut app, KeyCode::F(4));
        assert_eq!(app.screen, Screen::PatientInput);
    }

    #[test]
    fn test_submit_opens_results_and_resets_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Results);
        let assessment = app.last_assessment.as_ref().expect("Should be assessed");
        assert_eq!(assessment.record.age, 63);
        assert_eq!(assessment.result.risk_level, RiskLevel::High);

        // Form is back to defaults
        let record = app
            .patient_form_state
            .to_patient_record()
            .expect("Defaults parse");
        assert_eq!(record, crate::PatientRecord::default());

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen, Screen::Metrics);
        press(&mut app, KeyCode::F(4));
        assert_eq!(app.screen, Screen::Features);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::PatientInput);
    }

    #[test]
    fn test_invalid_submission_sets_error() {
        let mut app = app();
        // Age field is selected first; clear it and type an out-of-range value.
        press(&mut app, KeyCode::Delete);
        for c in "150".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::PatientInput);
        assert!(app.last_assessment.is_none());
        let message = app
            .patient_form_state
            .error_message
            .as_deref()
            .expect("Should report error");
        assert!(message.contains("Age"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        // Plain 'q' on the form is ignored as text input
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_form_navigation_and_cycling() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.patient_form_state.selected_field, 1);

        let before = app.patient_form_state.fields[1].input.clone();
        press(&mut app, KeyCode::Right);
        assert_ne!(app.patient_form_state.fields[1].input, before);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.patient_form_state.fields[1].input, before);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.patient_form_state.selected_field, 12);
        assert!(matches!(
            app.patient_form_state.fields[12].input,
            FieldInput::Choice { .. }
        ));
    }

    #[test]
    fn test_start_with_sample() {
        let config = AppConfig {
            start_with_sample: true,
            ..AppConfig::default()
        };
        let app = App::new(&config).expect("Should create app");
        let record = app
            .patient_form_state
            .to_patient_record()
            .expect("Sample parses");
        assert_eq!(record.age, 63);
    }

    #[test]
    fn test_draw_all_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(160, 50)).expect("Should create terminal");
        for screen in Screen::ALL {
            app.switch_to(screen);
            assert_eq!(app.screen, screen);
            terminal.draw(|f| app.draw(f)).expect("Should draw");

            let text: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect();
            assert!(text.contains("Clinical Decision Support Tool"));
            assert!(text.contains(screen.title()));
        }
    }
}

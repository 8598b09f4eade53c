//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Service integration

use std::io;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::memory::InMemoryHistory;
use crate::application::{AssessmentService, TrendSummary};

use super::ui::{
    dashboard::{render_dashboard, HistorySummary},
    form::{render_form, MeasurementFormState},
    history::render_history,
    render_disclaimer,
    results::{render_results, AssessmentView, ResultsViewState},
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    MeasurementForm,
    Results,
    History,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Assessment service owning this session's history
    service: AssessmentService<InMemoryHistory>,

    /// Measurement form state
    form_state: MeasurementFormState,

    /// Results screen state
    results_state: ResultsViewState,
}

impl App {
    /// Create a new application instance with its own session history.
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(AssessmentService::new(InMemoryHistory::new()))
    }

    /// Create an application around a pre-built service.
    ///
    /// Lets tests or alternative entry points inject a service (and through
    /// it, a history store) of their own.
    #[must_use]
    pub fn with_service(service: AssessmentService<InMemoryHistory>) -> Self {
        Self {
            screen: Screen::Dashboard,
            should_quit: false,
            service,
            form_state: MeasurementFormState::default(),
            results_state: ResultsViewState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(4)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match self.screen {
                    Screen::Dashboard => {
                        let records = self.service.history();
                        let summary = HistorySummary::from_records(records);
                        render_dashboard(f, content_area, &summary, records.last());
                    }
                    Screen::MeasurementForm => render_form(f, content_area, &self.form_state),
                    Screen::Results => render_results(f, content_area, &self.results_state),
                    Screen::History => {
                        let records = self.service.history();
                        let trends = TrendSummary::from_records(records);
                        render_history(f, content_area, records, &trends);
                    }
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            // Everything is synchronous, so blocking on the next event is fine.
            if let Event::Key(key) = event::read()? {
                self.handle_key(key.code, key.modifiers);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::MeasurementForm => self.handle_form_key(key),
            Screen::Results => self.handle_results_key(key),
            Screen::History => self.handle_history_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state = MeasurementFormState::default();
                self.screen = Screen::MeasurementForm;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.screen = Screen::History;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
            }
            KeyCode::Up => {
                self.form_state.prev_field();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
            }
            KeyCode::Left | KeyCode::Right => {
                self.form_state.toggle_sex();
            }
            KeyCode::F(2) => {
                self.form_state.load_sample_data();
            }
            KeyCode::Char(c) => {
                self.form_state.input_char(c);
            }
            KeyCode::Backspace => {
                self.form_state.delete_char();
            }
            KeyCode::Delete => {
                self.form_state.clear_field();
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.save_current_result();
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form_state = MeasurementFormState::default();
                self.screen = Screen::MeasurementForm;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.screen = Screen::History;
            }
            KeyCode::Esc | KeyCode::Enter => {
                self.screen = Screen::Dashboard;
            }
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.service.clear_history();
            }
            KeyCode::Esc => {
                self.screen = Screen::Dashboard;
            }
            _ => {}
        }
    }

    /// Parse, validate and compute the form's measurement.
    ///
    /// On any failure the error is surfaced in the form footer and nothing
    /// else changes; history is only ever written by an explicit save.
    fn submit_form(&mut self) {
        let measurement = match self.form_state.to_measurement() {
            Ok(m) => m,
            Err(e) => {
                self.form_state.error_message = Some(e);
                return;
            }
        };

        if let Err(errors) = measurement.validate() {
            self.form_state.error_message = Some(errors.join(", "));
            return;
        }

        match self.service.assess(&measurement) {
            Ok(computed) => {
                self.results_state = ResultsViewState {
                    assessment: Some(AssessmentView {
                        name: self.form_state.name.clone(),
                        measurement,
                        computed,
                    }),
                    saved: false,
                };
                self.form_state.clear_sensitive();
                self.screen = Screen::Results;
            }
            Err(e) => {
                self.form_state.error_message = Some(e.to_string());
            }
        }
    }

    fn save_current_result(&mut self) {
        if self.results_state.saved {
            return;
        }

        if let Some(view) = &self.results_state.assessment {
            self.service
                .save(&view.name, &view.measurement, &view.computed, Utc::now());
            self.results_state.saved = true;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Measurement, Sex};

    fn submit(app: &mut App) {
        app.form_state.load_sample_data();
        app.submit_form();
    }

    #[test]
    fn test_submit_moves_to_results_without_saving() {
        let mut app = App::new();
        app.screen = Screen::MeasurementForm;

        submit(&mut app);

        assert_eq!(app.screen, Screen::Results);
        assert!(app.results_state.assessment.is_some());
        assert!(!app.results_state.saved);
        assert_eq!(app.service.record_count(), 0);
    }

    #[test]
    fn test_save_appends_once() {
        let mut app = App::new();
        app.screen = Screen::MeasurementForm;
        submit(&mut app);

        app.save_current_result();
        assert!(app.results_state.saved);
        assert_eq!(app.service.record_count(), 1);

        // A second save of the same result is a no-op.
        app.save_current_result();
        assert_eq!(app.service.record_count(), 1);
    }

    #[test]
    fn test_invalid_form_stays_on_form() {
        let mut app = App::new();
        app.screen = Screen::MeasurementForm;
        app.form_state.load_sample_data();
        app.form_state.age = "5".to_string();

        app.submit_form();

        assert_eq!(app.screen, Screen::MeasurementForm);
        assert!(app.form_state.error_message.is_some());
        assert_eq!(app.service.record_count(), 0);
    }

    #[test]
    fn test_validation_rejects_out_of_range_before_compute() {
        let measurement = Measurement {
            age: 30,
            sex: Sex::Female,
            height_cm: 90.0,
            weight_kg: 70.0,
            waist_cm: 80.0,
            hip_cm: 100.0,
        };
        assert!(measurement.validate().is_err());
    }
}

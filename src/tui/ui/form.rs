//! Measurement input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{Measurement, Sex};
use crate::tui::styles::HealthTheme;

/// Form fields in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Age,
    Sex,
    Height,
    Weight,
    Waist,
    Hip,
}

impl FormFocus {
    const ORDER: [FormFocus; 7] = [
        FormFocus::Name,
        FormFocus::Age,
        FormFocus::Sex,
        FormFocus::Height,
        FormFocus::Weight,
        FormFocus::Waist,
        FormFocus::Hip,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// One field prepared for rendering.
struct FieldView {
    label: &'static str,
    hint: &'static str,
    value: String,
}

/// Measurement form state.
pub struct MeasurementFormState {
    pub name: String,
    pub age: String,
    pub sex: Sex,
    pub height_cm: String,
    pub weight_kg: String,
    pub waist_cm: String,
    pub hip_cm: String,
    pub focus: FormFocus,
    pub error_message: Option<String>,
}

impl Default for MeasurementFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            sex: Sex::Male,
            height_cm: String::new(),
            weight_kg: String::new(),
            waist_cm: String::new(),
            hip_cm: String::new(),
            focus: FormFocus::Name,
            error_message: None,
        }
    }
}

impl MeasurementFormState {
    /// Move to the next field.
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move to the previous field.
    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Add a character to the focused field.
    ///
    /// The name field accepts free text; numeric fields accept digits and a
    /// decimal point; Space on the sex field toggles it.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormFocus::Name => {
                if !c.is_control() {
                    self.name.push(c);
                    self.error_message = None;
                }
            }
            FormFocus::Sex => {
                if c == ' ' {
                    self.toggle_sex();
                }
            }
            FormFocus::Age => {
                if c.is_ascii_digit() {
                    self.age.push(c);
                    self.error_message = None;
                }
            }
            _ => {
                if c.is_ascii_digit() || c == '.' {
                    if let Some(buffer) = self.active_buffer() {
                        buffer.push(c);
                    }
                    self.error_message = None;
                }
            }
        }
    }

    /// Delete the last character of the focused field.
    pub fn delete_char(&mut self) {
        if let Some(buffer) = self.active_buffer() {
            buffer.pop();
        }
    }

    /// Clear the focused field.
    pub fn clear_field(&mut self) {
        if let Some(buffer) = self.active_buffer() {
            buffer.clear();
        }
    }

    /// Toggle the sex selection when it has focus.
    pub fn toggle_sex(&mut self) {
        if self.focus == FormFocus::Sex {
            self.sex = self.sex.toggled();
        }
    }

    /// Wipe all field buffers from memory and reset the form.
    ///
    /// Called after a submission so personal data does not linger in the UI
    /// state.
    pub fn clear_sensitive(&mut self) {
        self.name.zeroize();
        self.age.zeroize();
        self.height_cm.zeroize();
        self.weight_kg.zeroize();
        self.waist_cm.zeroize();
        self.hip_cm.zeroize();
        self.sex = Sex::Male;
        self.error_message = None;
        self.focus = FormFocus::Name;
    }

    /// Parse the buffers into a `Measurement`.
    ///
    /// Range validation is the domain's job (`Measurement::validate`); this
    /// only reports unparseable numbers.
    pub fn to_measurement(&self) -> Result<Measurement, String> {
        Ok(Measurement {
            age: parse_field(&self.age, "Age")?,
            sex: self.sex,
            height_cm: parse_field(&self.height_cm, "Height")?,
            weight_kg: parse_field(&self.weight_kg, "Weight")?,
            waist_cm: parse_field(&self.waist_cm, "Waist circumference")?,
            hip_cm: parse_field(&self.hip_cm, "Hip circumference")?,
        })
    }

    /// Load sample data (the typical reference measurement).
    pub fn load_sample_data(&mut self) {
        self.age = "30".to_string();
        self.sex = Sex::Male;
        self.height_cm = "170".to_string();
        self.weight_kg = "70".to_string();
        self.waist_cm = "80".to_string();
        self.hip_cm = "100".to_string();
    }

    fn active_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Age => Some(&mut self.age),
            FormFocus::Sex => None,
            FormFocus::Height => Some(&mut self.height_cm),
            FormFocus::Weight => Some(&mut self.weight_kg),
            FormFocus::Waist => Some(&mut self.waist_cm),
            FormFocus::Hip => Some(&mut self.hip_cm),
        }
    }

    fn field_views(&self) -> Vec<FieldView> {
        vec![
            FieldView {
                label: "Name",
                hint: "optional",
                value: self.name.clone(),
            },
            FieldView {
                label: "Age",
                hint: "years (10-100)",
                value: self.age.clone(),
            },
            FieldView {
                label: "Sex",
                hint: "",
                value: self.sex.to_string(),
            },
            FieldView {
                label: "Height",
                hint: "cm (100-250)",
                value: self.height_cm.clone(),
            },
            FieldView {
                label: "Weight",
                hint: "kg (30-300)",
                value: self.weight_kg.clone(),
            },
            FieldView {
                label: "Waist",
                hint: "cm (40-200)",
                value: self.waist_cm.clone(),
            },
            FieldView {
                label: "Hip",
                hint: "cm (40-200)",
                value: self.hip_cm.clone(),
            },
        ]
    }
}

fn parse_field<T: std::str::FromStr>(value: &str, label: &str) -> Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{label}: Invalid number"))
}

/// Render the measurement input form.
pub fn render_form(f: &mut Frame, area: Rect, state: &MeasurementFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", HealthTheme::text()),
        Span::styled("New Measurement", HealthTheme::title()),
        Span::styled(" │ Body Measurements", HealthTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(HealthTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &MeasurementFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let views = state.field_views();
    let selected = state.focus.index();
    let mid = (views.len() + 1) / 2;

    render_field_column(f, columns[0], &views[..mid], 0, selected);
    render_field_column(f, columns[1], &views[mid..], mid, selected);
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FieldView],
    offset: usize,
    selected: usize,
) {
    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            HealthTheme::border_focused()
        } else {
            HealthTheme::border()
        };

        let title_style = if is_selected {
            HealthTheme::focused()
        } else {
            HealthTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value_display = if field.value.is_empty() {
            Span::styled(field.hint, HealthTheme::text_muted())
        } else {
            Span::styled(field.value.clone(), HealthTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected {
                Span::styled("▌", HealthTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &MeasurementFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", HealthTheme::danger()),
            Span::styled(err.clone(), HealthTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", HealthTheme::key_hint()),
            Span::styled("Navigate ", HealthTheme::key_desc()),
            Span::styled("[Space] ", HealthTheme::key_hint()),
            Span::styled("Toggle Sex ", HealthTheme::key_desc()),
            Span::styled("[Enter] ", HealthTheme::key_hint()),
            Span::styled("Compute ", HealthTheme::key_desc()),
            Span::styled("[F2] ", HealthTheme::key_hint()),
            Span::styled("Sample Data ", HealthTheme::key_desc()),
            Span::styled("[Esc] ", HealthTheme::key_hint()),
            Span::styled("Cancel", HealthTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(HealthTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_measurement_parses_buffers() {
        let mut state = MeasurementFormState::default();
        state.load_sample_data();

        let measurement = state.to_measurement().expect("Should parse");
        assert_eq!(measurement.age, 30);
        assert!((measurement.height_cm - 170.0).abs() < f64::EPSILON);
        assert!(measurement.validate().is_ok());
    }

    #[test]
    fn test_unparseable_field_is_reported_by_label() {
        let mut state = MeasurementFormState::default();
        state.load_sample_data();
        state.weight_kg = "7..0".to_string();

        let err = state.to_measurement().expect_err("Should fail");
        assert!(err.contains("Weight"));
    }

    #[test]
    fn test_numeric_fields_reject_letters() {
        let mut state = MeasurementFormState::default();
        state.focus = FormFocus::Height;
        state.input_char('1');
        state.input_char('x');
        state.input_char('7');
        assert_eq!(state.height_cm, "17");
    }

    #[test]
    fn test_clear_sensitive_wipes_buffers() {
        let mut state = MeasurementFormState::default();
        state.name = "Ana".to_string();
        state.load_sample_data();

        state.clear_sensitive();
        assert!(state.name.is_empty());
        assert!(state.height_cm.is_empty());
        assert_eq!(state.focus, FormFocus::Name);
    }
}

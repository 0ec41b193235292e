//! Patient data input form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{ChestPainType, PatientRecord, RestingEcg, Sex, StSlope, Thalassemia};
use crate::tui::styles::MedicalTheme;

const AGE: usize = 0;
const SEX: usize = 1;
const CHEST_PAIN: usize = 2;
const RESTING_BP: usize = 3;
const CHOLESTEROL: usize = 4;
const FASTING_BS: usize = 5;
const RESTING_ECG: usize = 6;
const MAX_HR: usize = 7;
const EXERCISE_ANGINA: usize = 8;
const ST_DEPRESSION: usize = 9;
const ST_SLOPE: usize = 10;
const MAJOR_VESSELS: usize = 11;
const THALASSEMIA: usize = 12;

/// How a field is edited.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Free text, parsed and range-checked on submit
    Number {
        value: String,
        min: f64,
        max: f64,
        integer: bool,
    },
    /// One of a closed set of options
    Choice {
        options: Vec<&'static str>,
        selected: usize,
    },
    /// Yes / no
    Toggle(bool),
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub input: FieldInput,
}

impl FormField {
    fn number(label: &'static str, hint: &'static str, min: f64, max: f64, integer: bool) -> Self {
        Self {
            label,
            hint,
            input: FieldInput::Number {
                value: String::new(),
                min,
                max,
                integer,
            },
        }
    }

    fn choice(label: &'static str, hint: &'static str, options: Vec<&'static str>) -> Self {
        Self {
            label,
            hint,
            input: FieldInput::Choice {
                options,
                selected: 0,
            },
        }
    }

    fn toggle(label: &'static str, hint: &'static str) -> Self {
        Self {
            label,
            hint,
            input: FieldInput::Toggle(false),
        }
    }

    /// Text shown in the field box.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.input {
            FieldInput::Number { value, .. } => value.clone(),
            FieldInput::Choice { options, selected } => format!("◂ {} ▸", options[*selected]),
            FieldInput::Toggle(on) => (if *on { "[x] Yes" } else { "[ ] No" }).to_string(),
        }
    }
}

/// Patient form state
pub struct PatientFormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for PatientFormState {
    fn default() -> Self {
        let mut state = Self {
            fields: vec![
                FormField::number("Age", "years (1-120)", 1.0, 120.0, true),
                FormField::choice("Sex", "←/→ to change", Sex::ALL.iter().map(|s| s.label()).collect()),
                FormField::choice(
                    "Chest Pain Type",
                    "←/→ to change",
                    ChestPainType::ALL.iter().map(|c| c.label()).collect(),
                ),
                FormField::number("Resting BP", "mmHg (80-200)", 80.0, 200.0, true),
                FormField::number("Cholesterol", "mg/dl (100-600)", 100.0, 600.0, true),
                FormField::toggle("Fasting Blood Sugar > 120 mg/dl", "space to toggle"),
                FormField::choice(
                    "Resting ECG",
                    "←/→ to change",
                    RestingEcg::ALL.iter().map(|e| e.label()).collect(),
                ),
                FormField::number("Max Heart Rate", "bpm (60-220)", 60.0, 220.0, true),
                FormField::toggle("Exercise Induced Angina", "space to toggle"),
                FormField::number("ST Depression", "0.0-6.0", 0.0, 6.0, false),
                FormField::choice(
                    "ST Slope",
                    "←/→ to change",
                    StSlope::ALL.iter().map(|s| s.label()).collect(),
                ),
                FormField::choice("Major Vessels", "0-3", vec!["0", "1", "2", "3"]),
                FormField::choice(
                    "Thalassemia",
                    "←/→ to change",
                    Thalassemia::ALL.iter().map(|t| t.label()).collect(),
                ),
            ],
            selected_field: 0,
            error_message: None,
        };
        state.load_record(&PatientRecord::default());
        state
    }
}

fn option_index<T: PartialEq>(all: &[T], value: &T) -> usize {
    all.iter().position(|v| v == value).unwrap_or(0)
}

impl PatientFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current numeric field
    pub fn input_char(&mut self, c: char) {
        if let FieldInput::Number { value, .. } = &mut self.fields[self.selected_field].input {
            if c.is_ascii_digit() || c == '.' || c == '-' {
                value.push(c);
                self.error_message = None;
            }
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        if let FieldInput::Number { value, .. } = &mut self.fields[self.selected_field].input {
            value.pop();
        }
    }

    /// Clear the current numeric field
    pub fn clear_field(&mut self) {
        if let FieldInput::Number { value, .. } = &mut self.fields[self.selected_field].input {
            value.clear();
        }
    }

    /// Step the current choice by `delta`, or flip the current toggle.
    pub fn cycle(&mut self, delta: isize) {
        match &mut self.fields[self.selected_field].input {
            FieldInput::Choice { options, selected } => {
                let len = options.len() as isize;
                *selected = (*selected as isize + delta).rem_euclid(len) as usize;
                self.error_message = None;
            }
            FieldInput::Toggle(on) => {
                *on = !*on;
                self.error_message = None;
            }
            FieldInput::Number { .. } => {}
        }
    }

    /// Wipe all text buffers and restore the default record.
    ///
    /// Called once a record has been scored so typed values do not linger in
    /// the form.
    pub fn clear_sensitive(&mut self) {
        for field in self.fields.iter_mut() {
            if let FieldInput::Number { value, .. } = &mut field.input {
                value.zeroize();
            }
        }
        self.load_record(&PatientRecord::default());
        self.error_message = None;
        self.selected_field = 0;
    }

    /// Fill every field from a record.
    pub fn load_record(&mut self, record: &PatientRecord) {
        self.set_number(AGE, record.age.to_string());
        self.set_choice(SEX, option_index(&Sex::ALL, &record.sex));
        self.set_choice(
            CHEST_PAIN,
            option_index(&ChestPainType::ALL, &record.chest_pain_type),
        );
        self.set_number(RESTING_BP, record.resting_bp.to_string());
        self.set_number(CHOLESTEROL, record.cholesterol.to_string());
        self.set_toggle(FASTING_BS, record.fasting_blood_sugar_high);
        self.set_choice(RESTING_ECG, option_index(&RestingEcg::ALL, &record.resting_ecg));
        self.set_number(MAX_HR, record.max_heart_rate.to_string());
        self.set_toggle(EXERCISE_ANGINA, record.exercise_angina);
        self.set_number(ST_DEPRESSION, record.st_depression.to_string());
        self.set_choice(ST_SLOPE, option_index(&StSlope::ALL, &record.st_slope));
        self.set_choice(MAJOR_VESSELS, record.major_vessels.clamp(0, 3) as usize);
        self.set_choice(THALASSEMIA, option_index(&Thalassemia::ALL, &record.thalassemia));
    }

    /// Load sample data for testing (typical high-risk patient)
    pub fn load_sample_data(&mut self) {
        // Sample: 63yo male, hypertensive, diabetic, LV hypertrophy, marked ST depression
        self.load_record(&PatientRecord {
            age: 63,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::Asymptomatic,
            resting_bp: 145,
            cholesterol: 233,
            fasting_blood_sugar_high: true,
            resting_ecg: RestingEcg::LvHypertrophy,
            max_heart_rate: 150,
            exercise_angina: false,
            st_depression: 2.3,
            st_slope: StSlope::Downsloping,
            major_vessels: 0,
            thalassemia: Thalassemia::FixedDefect,
        });
        self.error_message = None;
    }

    fn set_number(&mut self, idx: usize, text: String) {
        if let FieldInput::Number { value, .. } = &mut self.fields[idx].input {
            value.zeroize();
            *value = text;
        }
    }

    fn set_choice(&mut self, idx: usize, index: usize) {
        if let FieldInput::Choice { selected, .. } = &mut self.fields[idx].input {
            *selected = index;
        }
    }

    fn set_toggle(&mut self, idx: usize, on: bool) {
        if let FieldInput::Toggle(state) = &mut self.fields[idx].input {
            *state = on;
        }
    }

    fn parse_number(&self, idx: usize) -> Result<f64, String> {
        let field = &self.fields[idx];
        let FieldInput::Number {
            value,
            min,
            max,
            integer,
        } = &field.input
        else {
            return Err(format!("{}: Not a numeric field", field.label));
        };

        let parsed: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("{}: Invalid number", field.label))?;

        if !parsed.is_finite() || (*integer && parsed.fract() != 0.0) {
            return Err(format!("{}: Invalid number", field.label));
        }

        if parsed < *min || parsed > *max {
            return Err(format!(
                "{}: Value must be between {} and {}",
                field.label, min, max
            ));
        }

        Ok(parsed)
    }

    fn parse_int(&self, idx: usize) -> Result<i32, String> {
        // Range-checked against small bounds, so the cast is exact.
        self.parse_number(idx).map(|v| v as i32)
    }

    fn choice(&self, idx: usize) -> usize {
        match &self.fields[idx].input {
            FieldInput::Choice { selected, .. } => *selected,
            _ => 0,
        }
    }

    fn toggle(&self, idx: usize) -> bool {
        matches!(self.fields[idx].input, FieldInput::Toggle(true))
    }

    /// Validate and convert to a PatientRecord
    pub fn to_patient_record(&self) -> Result<PatientRecord, String> {
        Ok(PatientRecord {
            age: self.parse_int(AGE)?,
            sex: Sex::ALL[self.choice(SEX)],
            chest_pain_type: ChestPainType::ALL[self.choice(CHEST_PAIN)],
            resting_bp: self.parse_int(RESTING_BP)?,
            cholesterol: self.parse_int(CHOLESTEROL)?,
            fasting_blood_sugar_high: self.toggle(FASTING_BS),
            resting_ecg: RestingEcg::ALL[self.choice(RESTING_ECG)],
            max_heart_rate: self.parse_int(MAX_HR)?,
            exercise_angina: self.toggle(EXERCISE_ANGINA),
            st_depression: self.parse_number(ST_DEPRESSION)?,
            st_slope: StSlope::ALL[self.choice(ST_SLOPE)],
            major_vessels: self.choice(MAJOR_VESSELS) as i32,
            thalassemia: Thalassemia::ALL[self.choice(THALASSEMIA)],
        })
    }
}

/// Render the patient data input form
pub fn render_patient_form(f: &mut Frame, area: Rect, state: &PatientFormState) {
    // Split into header and form
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
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Patient Risk Assessment", MedicalTheme::title()),
        Span::styled(
            " │ Enter clinical data to assess heart disease risk",
            MedicalTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let (border_style, title_style) = if is_selected {
            (MedicalTheme::border_focused(), MedicalTheme::focused())
        } else {
            (MedicalTheme::border(), MedicalTheme::text_secondary())
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let shown = field.display();
        let value_display = if shown.is_empty() {
            Span::styled(field.hint, MedicalTheme::text_muted())
        } else {
            Span::styled(shown, MedicalTheme::text())
        };

        let mut spans = vec![Span::raw(" "), value_display];
        if is_selected {
            if matches!(field.input, FieldInput::Number { .. }) {
                spans.push(Span::styled("▌", MedicalTheme::focused()));
            } else {
                spans.push(Span::styled(format!("  {}", field.hint), MedicalTheme::text_muted()));
            }
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &PatientFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(err.clone(), MedicalTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", MedicalTheme::key_hint()),
            Span::styled("Navigate ", MedicalTheme::key_desc()),
            Span::styled("[←→/Space] ", MedicalTheme::key_hint()),
            Span::styled("Change ", MedicalTheme::key_desc()),
            Span::styled("[Enter] ", MedicalTheme::key_hint()),
            Span::styled("Assess Risk ", MedicalTheme::key_desc()),
            Span::styled("[S] ", MedicalTheme::key_hint()),
            Span::styled("Sample ", MedicalTheme::key_desc()),
            Span::styled("[R] ", MedicalTheme::key_hint()),
            Span::styled("Reset", MedicalTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

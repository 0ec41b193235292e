//! Prediction results view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::application::Assessment;
use crate::domain::{PatientRecord, PredictionResult, RiskLevel};
use crate::tui::styles::MedicalTheme;

/// Render the results of the latest assessment
pub fn render_results(f: &mut Frame, area: Rect, assessment: Option<&Assessment>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Prediction card
            Constraint::Min(0),    // Details
            Constraint::Length(3), // Footer
        ])
        .split(area);

    match assessment {
        Some(assessment) => {
            render_prediction_card(f, chunks[0], assessment);
            render_details(f, chunks[1], assessment);
        }
        None => render_empty(f, chunks[0].union(chunks[1])),
    }
    render_results_footer(f, chunks[2]);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No assessment yet",
            MedicalTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter patient data to begin",
            MedicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_prediction_card(f: &mut Frame, area: Rect, assessment: &Assessment) {
    let result = &assessment.result;
    let risk_style = MedicalTheme::risk_level(result.risk_level);

    let block = Block::default()
        .title(Span::styled(" Risk Assessment Results ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(risk_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Risk level
            Constraint::Percentage(35), // Probability
            Constraint::Percentage(30), // Confidence / model
        ])
        .split(inner);

    let risk_icon = match result.risk_level {
        RiskLevel::Low => "OK",
        RiskLevel::Moderate | RiskLevel::High => "!",
    };

    let risk_display = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {} RISK", risk_icon, result.risk_level),
            risk_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            result.risk_level.description(),
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(risk_display, columns[0]);

    let prob_gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" Disease Probability ", MedicalTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .gauge_style(risk_style)
        .ratio(result.probability.clamp(0.0, 1.0))
        .label(format!("{:.1}%", result.probability * 100.0));
    f.render_widget(prob_gauge, columns[1]);

    let details = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" Confidence: ", MedicalTheme::text_secondary()),
            Span::styled(
                format!("{:.1}%", result.confidence * 100.0),
                MedicalTheme::text(),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Model: ", MedicalTheme::text_secondary()),
            Span::styled(result.model_used.clone(), MedicalTheme::text()),
        ]),
        Line::from(vec![
            Span::styled(" Assessed: ", MedicalTheme::text_secondary()),
            Span::styled(
                assessment.assessed_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                MedicalTheme::text_muted(),
            ),
        ]),
    ]);
    f.render_widget(details, columns[2]);
}

fn render_details(f: &mut Frame, area: Rect, assessment: &Assessment) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_contributions(f, columns[0], &assessment.result);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(8)])
        .split(columns[1]);

    render_recommendations(f, right[0], &assessment.result);
    render_patient_summary(f, right[1], &assessment.record);
}

fn render_contributions(f: &mut Frame, area: Rect, result: &PredictionResult) {
    let header = Row::new(vec!["Feature", "Value", "Impact", "Weight"])
        .style(MedicalTheme::text_secondary().add_modifier(Modifier::BOLD));

    let rows = result.feature_contributions.iter().map(|c| {
        let style = MedicalTheme::impact(c.impact);
        Row::new(vec![
            Cell::from(Span::styled(c.feature.clone(), MedicalTheme::text())),
            Cell::from(Span::styled(c.value.to_string(), MedicalTheme::text_secondary())),
            Cell::from(Span::styled(c.impact.symbol(), style)),
            Cell::from(Span::styled(
                format!("{:.1}%", c.importance * 100.0),
                style,
            )),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Min(14),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled(" Feature Contributions ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(table, area);
}

fn render_recommendations(f: &mut Frame, area: Rect, result: &PredictionResult) {
    let lines: Vec<Line> = result
        .recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), MedicalTheme::key_hint()),
                Span::styled(rec.clone(), MedicalTheme::text()),
            ])
        })
        .collect();

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(" Clinical Recommendations ", MedicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

fn summary_item(label: &str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!(" {label}: "), MedicalTheme::text_secondary()),
        Span::styled(value, MedicalTheme::text()),
    ]
}

fn render_patient_summary(f: &mut Frame, area: Rect, record: &PatientRecord) {
    let pair = |a: Vec<Span<'static>>, b: Vec<Span<'static>>| {
        let mut spans = a;
        spans.push(Span::raw("   "));
        spans.extend(b);
        Line::from(spans)
    };

    let lines = vec![
        pair(
            summary_item("Age", format!("{} years", record.age)),
            summary_item("Sex", record.sex.label().to_string()),
        ),
        pair(
            summary_item("BP", format!("{} mmHg", record.resting_bp)),
            summary_item("Cholesterol", format!("{} mg/dl", record.cholesterol)),
        ),
        pair(
            summary_item("Max HR", format!("{} bpm", record.max_heart_rate)),
            summary_item("Chest Pain", record.chest_pain_type.label().to_string()),
        ),
        pair(
            summary_item(
                "Exercise Angina",
                if record.exercise_angina { "Yes" } else { "No" }.to_string(),
            ),
            summary_item("Major Vessels", record.major_vessels.to_string()),
        ),
    ];

    let p = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Patient Summary ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(p, area);
}

fn render_results_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[Esc] ", MedicalTheme::key_hint()),
        Span::styled("New Assessment ", MedicalTheme::key_desc()),
        Span::styled("[3] ", MedicalTheme::key_hint()),
        Span::styled("Model Metrics ", MedicalTheme::key_desc()),
        Span::styled("[4] ", MedicalTheme::key_hint()),
        Span::styled("Feature Importance ", MedicalTheme::key_desc()),
        Span::styled("[Q] ", MedicalTheme::key_hint()),
        Span::styled("Quit", MedicalTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

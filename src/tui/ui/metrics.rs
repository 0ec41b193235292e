//! Model metrics view: Published evaluation figures.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::domain::metrics::{
    CrossValidationSummary, CROSS_VALIDATION_SCORES, HEADLINE_METRICS, MODEL_COMPARISON,
    TRAINING_INFO,
};
use crate::tui::styles::MedicalTheme;
use crate::tui::ui::text_bar;

const FOLD_BAR_WIDTH: usize = 20;

/// Render the model metrics view
pub fn render_metrics(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Headline gauges
            Constraint::Min(0),    // Tables
        ])
        .split(area);

    render_metrics_header(f, chunks[0]);
    render_headline_metrics(f, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(columns[0]);

    render_model_comparison(f, left[0]);
    render_training_info(f, left[1]);
    render_cross_validation(f, columns[1]);
}

fn render_metrics_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Model Performance", MedicalTheme::title()),
        Span::styled(
            format!(" │ Random Forest {} evaluation", TRAINING_INFO.model_version),
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

fn render_headline_metrics(f: &mut Frame, area: Rect) {
    let constraints = vec![Constraint::Ratio(1, HEADLINE_METRICS.len() as u32); HEADLINE_METRICS.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (metric, cell) in HEADLINE_METRICS.iter().zip(cells.iter()) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(*cell);

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(Span::styled(format!(" {} ", metric.name), MedicalTheme::text_secondary()))
                    .borders(Borders::ALL)
                    .border_style(MedicalTheme::border()),
            )
            .gauge_style(MedicalTheme::gauge(metric.value))
            .ratio(metric.value.clamp(0.0, 1.0))
            .label(format!("{:.1}%", metric.value * 100.0));
        f.render_widget(gauge, rows[0]);

        let description = Paragraph::new(Span::styled(
            format!(" {}", metric.description),
            MedicalTheme::text_muted(),
        ));
        f.render_widget(description, rows[1]);
    }
}

fn render_model_comparison(f: &mut Frame, area: Rect) {
    let header = Row::new(vec!["Algorithm", "Accuracy", "Precision", "Recall", "F1", ""])
        .style(MedicalTheme::text_secondary().add_modifier(Modifier::BOLD));

    let rows = MODEL_COMPARISON.iter().enumerate().map(|(i, model)| {
        let (name_style, badge) = if i == 0 {
            (MedicalTheme::focused(), Span::styled("Best", MedicalTheme::success()))
        } else {
            (MedicalTheme::text(), Span::raw(""))
        };
        let pct = |v: f64| Cell::from(format!("{:.1}%", v * 100.0));

        Row::new(vec![
            Cell::from(Span::styled(model.name, name_style)),
            pct(model.accuracy),
            pct(model.precision),
            pct(model.recall),
            pct(model.f1),
            Cell::from(badge),
        ])
        .style(MedicalTheme::text())
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Min(4),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled(" Algorithm Comparison ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(table, area);
}

fn render_cross_validation(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = CROSS_VALIDATION_SCORES
        .iter()
        .enumerate()
        .map(|(i, score)| {
            Line::from(vec![
                Span::styled(format!(" Fold {:>2} ", i + 1), MedicalTheme::text_secondary()),
                Span::styled(text_bar(*score, FOLD_BAR_WIDTH), MedicalTheme::gauge(*score)),
                Span::styled(format!(" {:.1}%", score * 100.0), MedicalTheme::text()),
            ])
        })
        .collect();

    if let Some(summary) = CrossValidationSummary::from_scores(&CROSS_VALIDATION_SCORES) {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Mean: ", MedicalTheme::text_secondary()),
            Span::styled(
                format!("{:.1}% ± {:.1}%", summary.mean * 100.0, summary.std_dev * 100.0),
                MedicalTheme::text(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" Best: ", MedicalTheme::text_secondary()),
            Span::styled(format!("{:.1}%", summary.best * 100.0), MedicalTheme::success()),
            Span::styled("   Worst: ", MedicalTheme::text_secondary()),
            Span::styled(format!("{:.1}%", summary.worst * 100.0), MedicalTheme::warning()),
        ]));
    }

    let p = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" 10-Fold Cross-Validation ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(p, area);
}

fn render_training_info(f: &mut Frame, area: Rect) {
    let item = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {label}: "), MedicalTheme::text_secondary()),
            Span::styled(value, MedicalTheme::text()),
        ])
    };

    let p = Paragraph::new(vec![
        item("Training Samples", TRAINING_INFO.samples.to_string()),
        item("Features", TRAINING_INFO.features.to_string()),
        item("Training Time", TRAINING_INFO.training_time.to_string()),
        item("Model Version", TRAINING_INFO.model_version.to_string()),
    ])
    .block(
        Block::default()
            .title(Span::styled(" Training Details ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(p, area);
}

//! Feature importance view.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::domain::metrics::{category_importance, top_features, FEATURE_IMPORTANCE};
use crate::tui::styles::MedicalTheme;
use crate::tui::ui::text_bar;

const TOP_N: usize = 5;
const RANK_BAR_WIDTH: usize = 16;
const CATEGORY_BAR_WIDTH: usize = 20;

/// Render the feature importance view
pub fn render_features(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
        ])
        .split(area);

    render_features_header(f, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_ranking(f, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TOP_N as u16 * 2 + 2), Constraint::Min(0)])
        .split(columns[1]);

    render_top_features(f, right[0]);
    render_categories(f, right[1]);
}

fn render_features_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled("Feature Importance", MedicalTheme::title()),
        Span::styled(
            " │ Global influence of each clinical variable",
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

fn render_top_features(f: &mut Frame, area: Rect) {
    let mut lines = Vec::with_capacity(TOP_N * 2);
    for (rank, feature) in top_features(TOP_N).iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", rank + 1), MedicalTheme::key_hint()),
            Span::styled(feature.feature, MedicalTheme::text().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {:.1}%", feature.importance * 100.0),
                MedicalTheme::info(),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", feature.description),
            MedicalTheme::text_muted(),
        )));
    }

    let p = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Top Risk Factors ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(p, area);
}

fn render_ranking(f: &mut Frame, area: Rect) {
    let max = FEATURE_IMPORTANCE
        .first()
        .map(|top| top.importance)
        .unwrap_or(1.0);

    let header = Row::new(vec!["#", "Feature", "Importance", "", "Category"])
        .style(MedicalTheme::text_secondary().add_modifier(Modifier::BOLD));

    let rows = FEATURE_IMPORTANCE.iter().enumerate().map(|(i, feature)| {
        Row::new(vec![
            Cell::from(Span::styled(format!("{}", i + 1), MedicalTheme::text_muted())),
            Cell::from(Span::styled(feature.feature, MedicalTheme::text())),
            Cell::from(Span::styled(
                text_bar(feature.importance / max, RANK_BAR_WIDTH),
                MedicalTheme::focused(),
            )),
            Cell::from(format!("{:.1}%", feature.importance * 100.0)),
            Cell::from(Span::styled(
                feature.category.label(),
                MedicalTheme::text_secondary(),
            )),
        ])
        .style(MedicalTheme::text())
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(20),
            Constraint::Length(RANK_BAR_WIDTH as u16 + 1),
            Constraint::Length(6),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled(" Feature Ranking ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(table, area);
}

fn render_categories(f: &mut Frame, area: Rect) {
    let totals = category_importance();
    let max = totals.first().map(|(_, v)| *v).unwrap_or(1.0);

    let lines: Vec<Line> = totals
        .iter()
        .map(|(category, total)| {
            Line::from(vec![
                Span::styled(format!(" {:<13}", category.label()), MedicalTheme::text_secondary()),
                Span::styled(text_bar(total / max, CATEGORY_BAR_WIDTH), MedicalTheme::info()),
                Span::styled(format!(" {:.1}%", total * 100.0), MedicalTheme::text()),
            ])
        })
        .collect();

    let p = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" By Category ", MedicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(p, area);
}

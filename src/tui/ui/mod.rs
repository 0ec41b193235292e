//! UI module: View components for the TUI.

pub mod features;
pub mod metrics;
pub mod patient;
pub mod results;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::tui::styles::MedicalTheme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "Clinical Decision Support Tool: this system assists healthcare professionals and does not replace clinical judgment.",
            MedicalTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Always consult qualified medical professionals for diagnosis and treatment decisions.",
            MedicalTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Render the tab bar. Tabs with `enabled[i] == false` are dimmed.
pub fn render_tabs(f: &mut Frame, area: Rect, titles: &[&str], enabled: &[bool], selected: usize) {
    let lines: Vec<Line> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let style = if enabled.get(i).copied().unwrap_or(false) {
                MedicalTheme::text_secondary()
            } else {
                MedicalTheme::disabled()
            };
            Line::from(Span::styled(format!("F{} {}", i + 1, title), style))
        })
        .collect();

    let tabs = Tabs::new(lines)
        .block(
            Block::default()
                .title(Span::styled(" CardioPredict │ Heart Disease Risk Assessment ", MedicalTheme::title()))
                .borders(Borders::BOTTOM)
                .border_style(MedicalTheme::border()),
        )
        .select(selected)
        .highlight_style(MedicalTheme::selected())
        .divider(Span::styled("│", MedicalTheme::text_muted()));

    f.render_widget(tabs, area);
}

/// Horizontal bar of `width` cells, filled in proportion to `fraction`.
#[must_use]
pub fn text_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

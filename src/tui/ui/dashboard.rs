//! Dashboard view: Session overview and reference bands.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{HistoryRecord, WhrRisk};
use crate::tui::styles::HealthTheme;

/// Per-risk tallies of the saved records.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistorySummary {
    pub total: usize,
    pub low: u32,
    pub moderate: u32,
    pub high: u32,
}

impl HistorySummary {
    /// Tally the waist-to-hip risk bands across saved records.
    #[must_use]
    pub fn from_records(records: &[HistoryRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.whr_risk {
                WhrRisk::Low => summary.low += 1,
                WhrRisk::Moderate => summary.moderate += 1,
                WhrRisk::High => summary.high += 1,
            }
        }
        summary
    }
}

/// Render the main dashboard view.
pub fn render_dashboard(
    f: &mut Frame,
    area: Rect,
    summary: &HistorySummary,
    last: Option<&HistoryRecord>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_main_content(f, chunks[1], summary, last);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", HealthTheme::text()),
        Span::styled("Healthtrack", HealthTheme::title()),
        Span::styled(" │ ", HealthTheme::text_muted()),
        Span::styled(
            "BMI and Waist-to-Hip Ratio Calculator",
            HealthTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(HealthTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_main_content(
    f: &mut Frame,
    area: Rect,
    summary: &HistorySummary,
    last: Option<&HistoryRecord>,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_session_panels(f, chunks[0], summary, last);
    render_reference_bands(f, chunks[1]);
}

fn render_session_panels(
    f: &mut Frame,
    area: Rect,
    summary: &HistorySummary,
    last: Option<&HistoryRecord>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Session status
            Constraint::Min(0),    // Quick actions
        ])
        .margin(1)
        .split(area);

    let mut status_items = vec![Line::from(vec![
        Span::styled("  Saved this session: ", HealthTheme::text_secondary()),
        Span::styled(summary.total.to_string(), HealthTheme::text()),
    ])];

    if summary.total > 0 {
        status_items.push(Line::from(vec![
            Span::styled("  Low: ", HealthTheme::text_secondary()),
            Span::styled(summary.low.to_string(), HealthTheme::whr_risk(WhrRisk::Low)),
            Span::styled("  Moderate: ", HealthTheme::text_secondary()),
            Span::styled(
                summary.moderate.to_string(),
                HealthTheme::whr_risk(WhrRisk::Moderate),
            ),
            Span::styled("  High: ", HealthTheme::text_secondary()),
            Span::styled(
                summary.high.to_string(),
                HealthTheme::whr_risk(WhrRisk::High),
            ),
        ]));
    }

    match last {
        Some(record) => {
            status_items.push(Line::from(""));
            status_items.push(Line::from(vec![
                Span::styled("  Last saved: ", HealthTheme::text_secondary()),
                Span::styled(record.display_timestamp(), HealthTheme::text_muted()),
            ]));
            status_items.push(Line::from(vec![
                Span::styled("  BMI ", HealthTheme::text_secondary()),
                Span::styled(format!("{:.2} ", record.bmi), HealthTheme::text()),
                Span::styled(
                    record.bmi_category.to_string(),
                    HealthTheme::bmi_category(record.bmi_category),
                ),
                Span::styled("  WHR ", HealthTheme::text_secondary()),
                Span::styled(format!("{:.2} ", record.whr), HealthTheme::text()),
                Span::styled(
                    record.whr_risk.to_string(),
                    HealthTheme::whr_risk(record.whr_risk),
                ),
            ]));
        }
        None => {
            status_items.push(Line::from(vec![Span::styled(
                "  Nothing saved yet. Press [N] to start.",
                HealthTheme::text_muted(),
            )]));
        }
    }

    let status_block = Block::default()
        .title(Span::styled(" Session ", HealthTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(HealthTheme::border());

    f.render_widget(Paragraph::new(status_items).block(status_block), chunks[0]);

    let actions = vec![
        Line::from(vec![
            Span::styled("[N] ", HealthTheme::key_hint()),
            Span::styled("New Measurement", HealthTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[H] ", HealthTheme::key_hint()),
            Span::styled("History", HealthTheme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[Q] ", HealthTheme::key_hint()),
            Span::styled("Quit", HealthTheme::key_desc()),
        ]),
    ];

    let actions_block = Block::default()
        .title(Span::styled(" Quick Actions ", HealthTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(HealthTheme::border());

    f.render_widget(Paragraph::new(actions).block(actions_block), chunks[1]);
}

fn render_reference_bands(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Reference Bands ", HealthTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(HealthTheme::border());

    let lines = vec![
        Line::from(Span::styled("BMI (kg/m²), WHO bands:", HealthTheme::text())),
        Line::from(vec![
            Span::styled("  Underweight ", HealthTheme::info()),
            Span::styled("below 18.5", HealthTheme::text_secondary()),
        ]),
        Line::from(vec![
            Span::styled("  Normal      ", HealthTheme::success()),
            Span::styled("18.5 to 24.9", HealthTheme::text_secondary()),
        ]),
        Line::from(vec![
            Span::styled("  Overweight  ", HealthTheme::warning()),
            Span::styled("25 to 29.9", HealthTheme::text_secondary()),
        ]),
        Line::from(vec![
            Span::styled("  Obese       ", HealthTheme::danger()),
            Span::styled("30 and above", HealthTheme::text_secondary()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Waist-to-hip ratio:", HealthTheme::text())),
        Line::from(vec![
            Span::styled("  Men    ", HealthTheme::text_secondary()),
            Span::styled("low below 0.90, ", HealthTheme::success()),
            Span::styled("moderate 0.90 to 0.99, ", HealthTheme::warning()),
            Span::styled("high at 1.00", HealthTheme::danger()),
        ]),
        Line::from(vec![
            Span::styled("  Women  ", HealthTheme::text_secondary()),
            Span::styled("low below 0.80, ", HealthTheme::success()),
            Span::styled("moderate 0.80 to 0.84, ", HealthTheme::warning()),
            Span::styled("high at 0.85", HealthTheme::danger()),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

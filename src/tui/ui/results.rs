//! Results view: Gauges, classifications and recommendations.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::{ComputedMetrics, Measurement, Sex};
use crate::tui::styles::HealthTheme;

/// Upper end of the BMI gauge display band (kg/m²).
const BMI_GAUGE_MAX: f64 = 40.0;

/// A computed result pending display and optional save.
#[derive(Debug, Clone)]
pub struct AssessmentView {
    pub name: String,
    pub measurement: Measurement,
    pub computed: ComputedMetrics,
}

/// Results screen state.
#[derive(Debug, Clone, Default)]
pub struct ResultsViewState {
    /// The assessment being shown, if any
    pub assessment: Option<AssessmentView>,
    /// Whether the shown assessment has been saved to the history
    pub saved: bool,
}

/// Render the results view.
pub fn render_results(f: &mut Frame, area: Rect, state: &ResultsViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_results_header(f, chunks[0]);
    match &state.assessment {
        Some(view) => render_assessment(f, chunks[1], view),
        None => render_idle(f, chunks[1]),
    }
    render_results_footer(f, chunks[2], state);
}

fn render_results_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", HealthTheme::text()),
        Span::styled("Results", HealthTheme::title()),
        Span::styled(" │ BMI and Waist-to-Hip Ratio", HealthTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(HealthTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_idle(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No result to show yet",
            HealthTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter a measurement to begin",
            HealthTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(HealthTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_assessment(f: &mut Frame, area: Rect, view: &AssessmentView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .margin(1)
        .split(area);

    render_gauges(f, columns[0], view);
    render_recommendations(f, columns[1], view);
}

fn render_gauges(f: &mut Frame, area: Rect, view: &AssessmentView) {
    let computed = &view.computed;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // BMI classification
            Constraint::Length(3), // BMI gauge
            Constraint::Length(2), // WHR classification
            Constraint::Length(3), // WHR gauge
            Constraint::Min(0),
        ])
        .split(area);

    let bmi_style = HealthTheme::bmi_category(computed.bmi_category);
    let bmi_line = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("BMI: ", HealthTheme::text_secondary()),
            Span::styled(format!("{:.2} kg/m²  ", computed.bmi), HealthTheme::text()),
            Span::styled(
                computed.bmi_category.to_string(),
                bmi_style.add_modifier(ratatui::style::Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            computed.bmi_category.description(),
            HealthTheme::text_muted(),
        )),
    ]);
    f.render_widget(bmi_line, chunks[0]);

    let bmi_gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" BMI (0-40) ", HealthTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(HealthTheme::border()),
        )
        .gauge_style(bmi_style)
        .ratio((computed.bmi / BMI_GAUGE_MAX).clamp(0.0, 1.0))
        .label(format!("{:.2}", computed.bmi));
    f.render_widget(bmi_gauge, chunks[1]);

    let whr_style = HealthTheme::whr_risk(computed.whr_risk);
    let whr_line = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Waist-to-hip ratio: ", HealthTheme::text_secondary()),
            Span::styled(format!("{:.2}  ", computed.whr), HealthTheme::text()),
            Span::styled(
                computed.whr_risk.to_string(),
                whr_style.add_modifier(ratatui::style::Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            computed.whr_risk.description(),
            HealthTheme::text_muted(),
        )),
    ]);
    f.render_widget(whr_line, chunks[2]);

    // The display band depends on sex so the thresholds sit at comparable
    // positions on the gauge.
    let whr_max = match view.measurement.sex {
        Sex::Male => 1.2,
        Sex::Female => 1.0,
    };
    let whr_gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Waist-to-Hip Ratio (0-{whr_max:.1}) "),
                    HealthTheme::text_secondary(),
                ))
                .borders(Borders::ALL)
                .border_style(HealthTheme::border()),
        )
        .gauge_style(whr_style)
        .ratio((computed.whr / whr_max).clamp(0.0, 1.0))
        .label(format!("{:.2}", computed.whr));
    f.render_widget(whr_gauge, chunks[3]);
}

fn render_recommendations(f: &mut Frame, area: Rect, view: &AssessmentView) {
    let block = Block::default()
        .title(Span::styled(" Recommendations ", HealthTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(HealthTheme::border());

    let computed = &view.computed;
    let lines = vec![
        Line::from(Span::styled(
            computed.bmi_category.advice(),
            HealthTheme::bmi_category(computed.bmi_category),
        )),
        Line::from(""),
        Line::from(Span::styled(
            computed.whr_risk.advice(),
            HealthTheme::whr_risk(computed.whr_risk),
        )),
    ];

    let p = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

fn render_results_footer(f: &mut Frame, area: Rect, state: &ResultsViewState) {
    let mut spans = Vec::new();

    if state.assessment.is_some() {
        if state.saved {
            spans.push(Span::styled("Saved ", HealthTheme::success()));
        } else {
            spans.push(Span::styled("[S] ", HealthTheme::key_hint()));
            spans.push(Span::styled("Save to History ", HealthTheme::key_desc()));
        }
        spans.push(Span::styled("[N] ", HealthTheme::key_hint()));
        spans.push(Span::styled("New Measurement ", HealthTheme::key_desc()));
        spans.push(Span::styled("[H] ", HealthTheme::key_hint()));
        spans.push(Span::styled("History ", HealthTheme::key_desc()));
    }
    spans.push(Span::styled("[Esc] ", HealthTheme::key_hint()));
    spans.push(Span::styled("Dashboard", HealthTheme::key_desc()));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(HealthTheme::border()),
    );

    f.render_widget(footer, area);
}

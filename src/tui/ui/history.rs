//! History view: Saved records table and trend charts.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};

use crate::application::TrendSummary;
use crate::domain::HistoryRecord;
use crate::tui::styles::HealthTheme;

/// Render the history view.
pub fn render_history(f: &mut Frame, area: Rect, records: &[HistoryRecord], trends: &TrendSummary) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_history_header(f, chunks[0], records.len());
    render_history_content(f, chunks[1], records, trends);
    render_history_footer(f, chunks[2], records.is_empty());
}

fn render_history_header(f: &mut Frame, area: Rect, count: usize) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", HealthTheme::text()),
        Span::styled("Measurement History", HealthTheme::title()),
        Span::styled(
            format!(" │ {count} saved"),
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

fn render_history_content(
    f: &mut Frame,
    area: Rect,
    records: &[HistoryRecord],
    trends: &TrendSummary,
) {
    if records.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No saved measurements yet",
                HealthTheme::text_secondary(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Save a result to start tracking trends",
                HealthTheme::text_muted(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(HealthTheme::border()),
        );
        f.render_widget(empty, area);
        return;
    }

    let constraints = if trends.has_trend() {
        vec![Constraint::Min(6), Constraint::Length(12)]
    } else {
        vec![Constraint::Min(6), Constraint::Length(3)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    render_records_table(f, chunks[0], records);

    if trends.has_trend() {
        render_trend_charts(f, chunks[1], trends);
    } else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Trends appear once two or more measurements are saved.",
            HealthTheme::text_muted(),
        )));
        f.render_widget(hint, chunks[1]);
    }
}

fn render_records_table(f: &mut Frame, area: Rect, records: &[HistoryRecord]) {
    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Date"),
        Cell::from("Age"),
        Cell::from("Sex"),
        Cell::from("BMI"),
        Cell::from("Category"),
        Cell::from("WHR"),
        Cell::from("Risk"),
    ])
    .style(HealthTheme::subtitle());

    let rows: Vec<Row> = records
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(Span::styled(r.name.clone(), HealthTheme::text())),
                Cell::from(Span::styled(
                    r.display_timestamp(),
                    HealthTheme::text_secondary(),
                )),
                Cell::from(Span::styled(
                    r.measurement.age.to_string(),
                    HealthTheme::text_secondary(),
                )),
                Cell::from(Span::styled(
                    r.measurement.sex.to_string(),
                    HealthTheme::text_secondary(),
                )),
                Cell::from(Span::styled(format!("{:.2}", r.bmi), HealthTheme::text())),
                Cell::from(Span::styled(
                    r.bmi_category.to_string(),
                    HealthTheme::bmi_category(r.bmi_category),
                )),
                Cell::from(Span::styled(format!("{:.2}", r.whr), HealthTheme::text())),
                Cell::from(Span::styled(
                    r.whr_risk.to_string(),
                    HealthTheme::whr_risk(r.whr_risk),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(16),
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled(" Saved Measurements ", HealthTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(HealthTheme::border()),
    );

    f.render_widget(table, area);
}

fn render_trend_charts(f: &mut Frame, area: Rect, trends: &TrendSummary) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_series_chart(
        f,
        columns[0],
        " BMI over time ",
        &trends.bmi_series,
        trends.bmi_min,
        trends.bmi_max,
        1.0,
        HealthTheme::PRIMARY_LIGHT,
    );
    render_series_chart(
        f,
        columns[1],
        " Waist-to-hip ratio over time ",
        &trends.whr_series,
        trends.whr_min,
        trends.whr_max,
        0.05,
        HealthTheme::INFO,
    );
}

#[allow(clippy::too_many_arguments)]
fn render_series_chart(
    f: &mut Frame,
    area: Rect,
    title: &str,
    series: &[(f64, f64)],
    min: f64,
    max: f64,
    pad: f64,
    color: ratatui::style::Color,
) {
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let y_bounds = [min - pad, max + pad];

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(ratatui::style::Style::default().fg(color))
        .data(series);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(Span::styled(title, HealthTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(HealthTheme::border()),
        )
        .x_axis(
            Axis::default()
                .style(HealthTheme::text_muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled("1", HealthTheme::text_muted()),
                    Span::styled(series.len().to_string(), HealthTheme::text_muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(HealthTheme::text_muted())
                .bounds(y_bounds)
                .labels(vec![
                    Span::styled(format!("{:.2}", y_bounds[0]), HealthTheme::text_muted()),
                    Span::styled(format!("{:.2}", y_bounds[1]), HealthTheme::text_muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_history_footer(f: &mut Frame, area: Rect, empty: bool) {
    let mut spans = Vec::new();

    if !empty {
        spans.push(Span::styled("[C] ", HealthTheme::key_hint()));
        spans.push(Span::styled("Clear History ", HealthTheme::key_desc()));
    }
    spans.push(Span::styled("[Esc] ", HealthTheme::key_hint()));
    spans.push(Span::styled("Back", HealthTheme::key_desc()));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(HealthTheme::border()),
    );

    f.render_widget(footer, area);
}

//! Chart widget for displaying the force history.

use crate::config::ChartConfig;
use crate::history::History;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Most grid labels drawn before falling back to evenly spaced labels
const MAX_GRID_LABELS: usize = 8;
const EVEN_LABEL_COUNT: usize = 5;

/// Render the force chart
pub fn render_chart(frame: &mut Frame, area: Rect, history: &History, config: &ChartConfig) {
    let block = Block::default()
        .title(" Real-time Force Measurement ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let points = history.points();
    let datasets = if history.is_empty() {
        vec![]
    } else {
        vec![Dataset::default()
            .name("Force")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&points)]
    };

    let x_bounds = x_bounds(history, config);
    let (y_bounds, y_labels) = y_axis(history, config);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time (s)")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(vec![
                    format!("{:.0}", x_bounds[0]),
                    format!("{:.1}", (x_bounds[0] + x_bounds[1]) / 2.0),
                    format!("{:.1}", x_bounds[1]),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Force (N)")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Horizontal bounds: the initial range until data arrives, then zero to the
/// newest elapsed time with a minimum span.
pub fn x_bounds(history: &History, config: &ChartConfig) -> [f64; 2] {
    match history.latest_elapsed() {
        Some(elapsed) => [0.0, elapsed.max(config.min_x_span)],
        None => [0.0, config.initial_x_max],
    }
}

/// Vertical bounds and labels.
///
/// With no data the initial range is labelled on the grid step. Otherwise the
/// data range is padded by 5%; when snapping it outward to the grid step keeps
/// the chart readable the grid is used, else labels are spread evenly.
pub fn y_axis(history: &History, config: &ChartConfig) -> ([f64; 2], Vec<String>) {
    let step = config.y_grid_step;
    let Some((min, max)) = history.force_range() else {
        let bounds = [0.0, config.initial_y_max];
        return (bounds, grid_labels(bounds, step));
    };

    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    let (lo, hi) = (min - pad, max + pad);

    let snapped = [(lo / step).floor() * step, (hi / step).ceil() * step];
    let intervals = ((snapped[1] - snapped[0]) / step).round() as usize;
    if intervals < MAX_GRID_LABELS && snapped[1] - snapped[0] <= 2.0 * (hi - lo) {
        return (snapped, grid_labels(snapped, step));
    }

    let labels = (0..EVEN_LABEL_COUNT)
        .map(|i| lo + (hi - lo) * i as f64 / (EVEN_LABEL_COUNT - 1) as f64)
        .map(|v| format!("{:.2}", v))
        .collect();
    ([lo, hi], labels)
}

fn grid_labels(bounds: [f64; 2], step: f64) -> Vec<String> {
    let intervals = ((bounds[1] - bounds[0]) / step).round() as usize;
    let decimals = if step.fract() == 0.0 { 0 } else { 2 };
    (0..=intervals)
        .map(|i| format!("{:.*}", decimals, bounds[0] + step * i as f64))
        .collect()
}

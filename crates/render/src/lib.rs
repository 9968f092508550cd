//! Drawing engine for the live chart.
//!
//! Renders one frame from a [`FrameView`]: a line chart with the raw and
//! averaged series plotted against absolute sample indices, and a one-line
//! status bar underneath. Hidden series are omitted; with nothing to draw
//! the chart area shows a placeholder so the status line stays visible.

use chrono::Local;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;
use tailplot_theme::Theme;

/// Everything the renderer needs for one frame. Derived per tick by the
/// refresh loop and discarded after drawing.
#[derive(Debug)]
pub struct FrameView<'a> {
    /// Absolute index of the first visible sample (the x axis does not
    /// restart at zero when scrolled).
    pub start_index: usize,
    /// Visible raw samples.
    pub raw: &'a [f64],
    /// Trailing average of the visible samples, same length as `raw`.
    pub avg: &'a [f64],
    pub show_raw: bool,
    pub show_avg: bool,
    /// Status text: window sizes, follow state, sample count.
    pub legend: &'a str,
}

/// Draw one frame.
pub fn draw(frame: &mut Frame, view: &FrameView, theme: &Theme) {
    let area = frame.area();
    let [chart_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background())),
        area,
    );
    draw_chart(frame, chart_area, view, theme);
    draw_status(frame, status_area, view, theme);
}

fn draw_chart(frame: &mut Frame, area: Rect, view: &FrameView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" tailplot ")
        .style(Style::default().fg(theme.text()).bg(theme.background()));

    let raw_points = series_points(view.start_index, view.raw);
    let avg_points = series_points(view.start_index, view.avg);

    let mut datasets = Vec::new();
    if view.show_raw && !raw_points.is_empty() {
        datasets.push(
            Dataset::default()
                .name("data")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.raw()))
                .data(&raw_points),
        );
    }
    if view.show_avg && !avg_points.is_empty() {
        datasets.push(
            Dataset::default()
                .name("average")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.avg()))
                .data(&avg_points),
        );
    }

    if datasets.is_empty() {
        let message = if view.raw.is_empty() {
            "no data available in file"
        } else {
            "both series hidden — press d or a"
        };
        let placeholder = Paragraph::new(message)
            .centered()
            .block(block)
            .style(Style::default().fg(theme.text()).bg(theme.background()));
        frame.render_widget(placeholder, area);
        return;
    }

    let (x_min, x_max) = x_bounds(view.start_index, view.raw.len());
    let (y_min, y_max) = y_bounds(view.raw.iter().chain(view.avg.iter()).copied());

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("index")
                .style(Style::default().fg(theme.text()))
                .bounds([x_min, x_max])
                .labels(vec![
                    Line::from(format!("{}", x_min as usize)),
                    Line::from(format!("{}", x_max as usize)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("value")
                .style(Style::default().fg(theme.text()))
                .bounds([y_min, y_max])
                .labels(vec![
                    Line::from(format!("{y_min:.2}")),
                    Line::from(format!("{y_max:.2}")),
                ]),
        );

    frame.render_widget(chart, area);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &FrameView, theme: &Theme) {
    let clock = Local::now().format("%H:%M:%S");
    let status = Paragraph::new(format!(" {}  {clock}", view.legend))
        .style(Style::default().fg(theme.text()).bg(theme.background()));
    frame.render_widget(status, area);
}

/// Pair each value with its absolute sample index for plotting.
fn series_points(start_index: usize, values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ((start_index + i) as f64, v))
        .collect()
}

/// X axis bounds covering the visible window. A single point still gets a
/// non-degenerate axis.
fn x_bounds(start_index: usize, len: usize) -> (f64, f64) {
    let start = start_index as f64;
    (start, start + (len.max(2) - 1) as f64)
}

/// Y axis bounds padded around the visible extremes so the traces never sit
/// on the border. Non-finite values are ignored; a flat series gets a unit
/// band around it.
fn y_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

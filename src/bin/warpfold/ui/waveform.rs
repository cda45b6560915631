//! Oscilloscope widget with the current fold threshold drawn in

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Render the scope. `threshold` is the level the folder reflects at.
pub fn render_waveform(frame: &mut Frame, area: Rect, scope: &[f32], threshold: f64) {
    let block = Block::default().title(" Scope ").borders(Borders::ALL);

    let len = scope.len().max(1) as f64;
    let trace: Vec<(f64, f64)> = scope
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / len, sample as f64))
        .collect();
    let upper = [(0.0, threshold), (1.0, threshold)];
    let lower = [(0.0, -threshold), (1.0, -threshold)];

    let guide = Style::default().fg(Color::DarkGray);
    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(guide)
            .data(&upper),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(guide)
            .data(&lower),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&trace),
    ];

    // DC blocking can push a warped wave past unity
    let y_max = scope
        .iter()
        .fold(1.0f64, |acc, &s| acc.max((s as f64).abs()))
        .min(2.0);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(Axis::default().bounds([0.0, 1.0]).style(guide))
        .y_axis(Axis::default().bounds([-y_max, y_max]).style(guide));

    frame.render_widget(chart, area);
}

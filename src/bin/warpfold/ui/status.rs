//! Parameter readout and output level

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use warpfold::dsp::fold;
use warpfold::{ControlHandle, Param};

/// Scalar targets as last written by the UI
#[derive(Debug, Clone, Copy)]
pub struct ParamSnapshot {
    pub frequency: f64,
    pub fold: f64,
    pub warp: f64,
}

impl ParamSnapshot {
    pub fn read(control: &ControlHandle) -> Self {
        Self {
            frequency: control.scalar(Param::Frequency),
            fold: control.scalar(Param::Fold),
            warp: control.scalar(Param::Warp),
        }
    }

    /// Reflecting level for the current fold amount
    pub fn threshold(&self) -> f64 {
        fold::threshold(self.fold)
    }
}

pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

fn warp_direction(warp: f64) -> &'static str {
    if warp > 0.0 {
        "◀"
    } else if warp < 0.0 {
        "▶"
    } else {
        "·"
    }
}

pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    params: &ParamSnapshot,
    stats: &AudioStats,
    sample_rate: f32,
) {
    let block = Block::default().title(" warpfold ").borders(Borders::ALL);

    let line = Line::from(vec![
        Span::styled(
            format!(" {:>8.2} Hz  ", params.frequency),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("fold {:.2} (±{:.3})  ", params.fold, params.threshold()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("warp {:+.2} {}  ", params.warp, warp_direction(params.warp)),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("{:.1}kHz  ", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

//! Spectrum widget
//!
//! Folding spreads energy over many harmonics (and their aliases), so each
//! displayed band shows the loudest FFT bin it covers rather than a single
//! sampled bin. Bands are log-spaced and plotted against log10(frequency).

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Number of displayed bands
const BANDS: usize = 64;
const FLOOR_DB: f64 = -100.0;
/// Per-frame fall of the display when a band gets quieter
const FALL_DB: f64 = 3.0;

pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    buffer: Vec<Complex<f32>>,
    /// FFT bin range `[start, end)` covered by each band
    bands: Vec<(usize, usize)>,
    /// (log10 Hz, dB) per band
    display: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    pub fn new(size: usize, sample_rate: f32) -> Self {
        let size = size.max(8);
        let fft = FftPlanner::new().plan_fft_forward(size);

        // Blackman window: lower sidelobes than Hann, which keeps quiet
        // harmonics between loud ones readable
        let n = (size - 1) as f32;
        let window = (0..size)
            .map(|i| {
                let x = std::f32::consts::TAU * i as f32 / n;
                0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos()
            })
            .collect();

        let nyquist = (sample_rate as f64 / 2.0).max(40.0);
        let hz_per_bin = sample_rate as f64 / size as f64;
        let half = size / 2;
        let (lo, hi) = (20.0f64.log10(), nyquist.min(20_000.0).log10());

        let mut bands = Vec::with_capacity(BANDS);
        let mut display = Vec::with_capacity(BANDS);
        for band in 0..BANDS {
            let edge = |k: usize| 10f64.powf(lo + (hi - lo) * k as f64 / BANDS as f64);
            let start = ((edge(band) / hz_per_bin).floor() as usize).clamp(1, half - 1);
            let end = ((edge(band + 1) / hz_per_bin).ceil() as usize).clamp(start + 1, half);
            bands.push((start, end));

            let centre = (edge(band) * edge(band + 1)).sqrt();
            display.push((centre.log10(), FLOOR_DB));
        }

        Self {
            fft,
            window,
            buffer: vec![Complex::new(0.0, 0.0); size],
            bands,
            display,
        }
    }

    /// Analyse a full scope buffer. Buffers of the wrong length are ignored.
    pub fn update(&mut self, samples: &[f32]) {
        if samples.len() != self.window.len() {
            return;
        }

        for ((slot, &s), &w) in self.buffer.iter_mut().zip(samples).zip(&self.window) {
            *slot = Complex::new(s * w, 0.0);
        }
        self.fft.process(&mut self.buffer);

        let norm = 2.0 / self.buffer.len() as f32;
        for (&(start, end), point) in self.bands.iter().zip(self.display.iter_mut()) {
            let loudest = self.buffer[start..end]
                .iter()
                .map(|bin| bin.norm() * norm)
                .fold(0.0f32, f32::max);
            let db = (20.0 * (loudest as f64).max(1e-9).log10()).max(FLOOR_DB);

            // Rise instantly, fall slowly
            point.1 = db.max(point.1 - FALL_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.display
    }
}

pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let x_min = spectrum.first().map_or(1.0, |p| p.0);
    let x_max = spectrum.last().map_or(4.3, |p| p.0).max(x_min + 0.1);
    let axis_style = Style::default().fg(Color::DarkGray);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([x_min, x_max])
                .labels(["20", "200", "2k", "20k"])
                .style(axis_style),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, 0.0])
                .labels(["-100", "-50", "0"])
                .style(axis_style),
        );

    frame.render_widget(chart, area);
}

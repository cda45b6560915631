//! TUI module for warpfold
//!
//! Oscilloscope, spectrum and parameter readout, with keyboard control of the
//! running oscillator.

mod spectrum;
mod status;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use warpfold::{ControlHandle, Param};

use spectrum::{render_spectrum, SpectrumAnalyzer};
use status::{render_status, AudioStats, ParamSnapshot};
use waveform::render_waveform;

/// Samples kept for the scope and the FFT
const VIS_BUFFER_SIZE: usize = 2048;

/// One semitone
const PITCH_STEP: f64 = 1.059_463_094_359_295_3;
const SHAPE_STEP: f64 = 0.05;

/// UI application state
pub struct UiApp {
    control: ControlHandle,
    scope_rx: Consumer<f32>,
    scope: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    sample_rate: f32,
    should_quit: bool,
}

impl UiApp {
    pub fn new(control: ControlHandle, scope_rx: Consumer<f32>, sample_rate: f32) -> Self {
        Self {
            control,
            scope_rx,
            scope: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            sample_rate,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.spectrum.update(&self.scope);

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Shift everything the audio thread produced into the tail of the scope
    fn poll_audio(&mut self) {
        let available = self.scope_rx.slots();
        if available == 0 {
            return;
        }

        let keep = available.min(VIS_BUFFER_SIZE);
        let skip = available - keep;
        for _ in 0..skip {
            let _ = self.scope_rx.pop();
        }

        self.scope.rotate_left(keep);
        let tail = VIS_BUFFER_SIZE - keep;
        for slot in &mut self.scope[tail..] {
            *slot = self.scope_rx.pop().unwrap_or(0.0);
        }
    }

    fn nudge(&self, param: Param, f: impl Fn(f64) -> f64) {
        let current = self.control.scalar(param);
        self.control.set_scalar(param, f(current));
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Right => self.nudge(Param::Frequency, |hz| hz * PITCH_STEP),
            KeyCode::Left => self.nudge(Param::Frequency, |hz| hz / PITCH_STEP),
            KeyCode::Up => self.nudge(Param::Fold, |fold| fold + SHAPE_STEP),
            KeyCode::Down => self.nudge(Param::Fold, |fold| fold - SHAPE_STEP),
            KeyCode::Char(']') => self.nudge(Param::Warp, |warp| warp + SHAPE_STEP),
            KeyCode::Char('[') => self.nudge(Param::Warp, |warp| warp - SHAPE_STEP),
            KeyCode::Char('0') => {
                self.control.set_fold(0.0);
                self.control.set_warp(0.0);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.control.reset(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Parameter readout
                Constraint::Min(8),     // Scope
                Constraint::Length(10), // Spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        let params = ParamSnapshot::read(&self.control);
        let stats = AudioStats::from_buffer(&self.scope);

        render_status(frame, chunks[0], &params, &stats, self.sample_rate);
        render_waveform(frame, chunks[1], &self.scope, params.threshold());
        render_spectrum(frame, chunks[2], self.spectrum.data());

        let help = Paragraph::new(
            " [Q] Quit  [←/→] Pitch  [↑/↓] Fold  [ [ / ] ] Warp  [0] Neutral  [R] Reset phase",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}

//! Audio setup and the realtime callback

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use warpfold::{BlockInputs, Bindings, WarpFoldOsc, MAX_BLOCK_SIZE};

use super::ui::UiApp;

/// Samples buffered between the audio callback and the scope
const SCOPE_RING_CAPACITY: usize = 16_384;

/// Application builder: initial oscillator settings
pub struct WarpFoldApp {
    frequency: f64,
    fold: f64,
    warp: f64,
}

impl WarpFoldApp {
    pub fn new() -> Self {
        Self {
            frequency: 220.0,
            fold: 0.0,
            warp: 0.0,
        }
    }

    pub fn frequency(mut self, hz: f64) -> Self {
        self.frequency = hz;
        self
    }

    pub fn fold(mut self, fold: f64) -> Self {
        self.fold = fold;
        self
    }

    pub fn warp(mut self, warp: f64) -> Self {
        self.warp = warp;
        self
    }

    /// Open the default output device, start the stream and hand over to the UI
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        if config.sample_format() != cpal::SampleFormat::F32 {
            return Err(eyre!(
                "unsupported sample format {:?}, expected f32",
                config.sample_format()
            ));
        }

        let sample_rate = config.sample_rate().0 as f64;
        let channels = config.channels() as usize;

        let mut osc = WarpFoldOsc::new();
        osc.configure(sample_rate, Bindings::scalar())
            .wrap_err("failed to configure oscillator")?;

        let control = osc.control_handle();
        control.set_frequency(self.frequency);
        control.set_fold(self.fold);
        control.set_warp(self.warp);

        let (mut scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_RING_CAPACITY);
        let mut render_buf = vec![0.0f64; MAX_BLOCK_SIZE];
        let inputs = BlockInputs::default();

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames];
                    osc.process_block(&inputs, block);

                    // Mono to all channels, and a copy for the scope
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        let s = s as f32;
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                        // Scope falls behind rather than blocking audio
                        let _ = scope_tx.push(s);
                    }

                    frames_written += frames;
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )?;

        stream.play().wrap_err("failed to start output stream")?;

        log::info!("playing on {channels} channel(s) at {sample_rate} Hz");

        // Anything logged from here on would tear the terminal UI
        log::set_max_level(log::LevelFilter::Off);

        let mut terminal = ratatui::init();
        let mut ui = UiApp::new(control, scope_rx, sample_rate as f32);
        let result = ui.run(&mut terminal);
        ratatui::restore();

        drop(stream);
        result
    }
}

impl Default for WarpFoldApp {
    fn default() -> Self {
        Self::new()
    }
}

//! Render a four-second sweep through every shape to a WAV file.
//!
//! Run with: cargo run --example offline_render [path]
//!
//! Frequency follows a continuous signal (a slow exponential glide), fold and
//! warp follow audio-rate ramps, so every binding path of the block driver is
//! exercised. Output is 32-bit float mono.

use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use warpfold::{render_offline, BlockInputs, Bindings, WarpFoldOsc};

const SAMPLE_RATE: u32 = 48_000;
const BLOCK_SIZE: usize = 64;
const SECONDS: usize = 4;

fn main() -> Result<()> {
    color_eyre::install()?;
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out/warpfold_sweep.wav"));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }

    let frames = SAMPLE_RATE as usize * SECONDS;
    let t = |n: usize| n as f64 / frames as f64;

    // 55 Hz → 880 Hz, exponential
    let frequency: Vec<f64> = (0..frames).map(|n| 55.0 * 16f64.powf(t(n))).collect();
    // fold ramps up over the first half and stays
    let fold: Vec<f64> = (0..frames).map(|n| (2.0 * t(n)).min(1.0)).collect();
    // warp swings once from -1 to 1 and back
    let warp: Vec<f64> = (0..frames)
        .map(|n| -(std::f64::consts::TAU * t(n)).cos())
        .collect();

    let mut osc = WarpFoldOsc::new();
    osc.configure(SAMPLE_RATE as f64, Bindings::from_connections(true, true, true))
        .wrap_err("failed to configure oscillator")?;

    let inputs = BlockInputs::default()
        .with_frequency(&frequency)
        .with_fold(&fold)
        .with_warp(&warp);
    let samples = render_offline(&mut osc, &inputs, frames, BLOCK_SIZE);

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(&path, spec)
        .wrap_err_with(|| format!("failed to create {}", path.display()))?;
    for &sample in &samples {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;

    let peak = samples.iter().fold(0.0f64, |acc, &s| acc.max(s.abs()));
    log::info!("wrote {frames} frames to {} (peak {peak:.3})", path.display());
    Ok(())
}

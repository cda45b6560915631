//! Drive an oscillator from a separate control thread.
//!
//! Run with: cargo run --example control_thread
//!
//! A "host" thread plays the role of the audio callback and renders blocks
//! continuously. The main thread turns knobs two ways: directly through a
//! `ControlHandle`, and as queued `ParamEvent`s that the audio side drains at
//! block boundaries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use simple_logger::SimpleLogger;

use warpfold::synth::message::{event_queue, try_send};
use warpfold::{BlockInputs, Bindings, Param, ParamEvent, WarpFoldOsc};

const SAMPLE_RATE: f64 = 48_000.0;
const BLOCK_SIZE: usize = 128;

fn main() -> Result<()> {
    color_eyre::install()?;
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let mut osc = WarpFoldOsc::new();
    osc.configure(SAMPLE_RATE, Bindings::scalar())?;
    let control = osc.control_handle();
    let (mut tx, mut rx) = event_queue();

    let running = Arc::new(AtomicBool::new(true));
    let audio_running = Arc::clone(&running);

    let audio = thread::spawn(move || {
        let mut block = [0.0f64; BLOCK_SIZE];
        let mut blocks = 0u64;
        let mut peak = 0.0f64;
        while audio_running.load(Ordering::Relaxed) {
            osc.drain_events(&mut rx);
            osc.process_block(&BlockInputs::default(), &mut block);
            peak = block.iter().fold(peak, |acc, &s| acc.max(s.abs()));
            blocks += 1;
            // Roughly real time
            thread::sleep(Duration::from_micros(
                (BLOCK_SIZE as f64 / SAMPLE_RATE * 1e6) as u64,
            ));
        }
        (blocks, peak, osc.smoothed(Param::Fold))
    });

    control.set_frequency(220.0);
    for step in 0..=20 {
        let amount = step as f64 / 20.0;
        control.set_fold(amount);
        try_send(&mut tx, ParamEvent::scalar(Param::Warp, 1.0 - 2.0 * amount));
        if step == 10 {
            try_send(&mut tx, ParamEvent::Reset);
        }
        thread::sleep(Duration::from_millis(25));
    }

    running.store(false, Ordering::Relaxed);
    let (blocks, peak, fold) = audio
        .join()
        .map_err(|_| eyre!("audio thread panicked"))?;

    log::info!("rendered {blocks} blocks, peak {peak:.3}, final smoothed fold {fold:.3}");
    Ok(())
}

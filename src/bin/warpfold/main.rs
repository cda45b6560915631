//! warpfold - play the warp-fold oscillator live in the terminal
//!
//! Run with: cargo run --release
//!
//! Keys: ←/→ pitch, ↑/↓ fold, [ / ] warp, 0 neutral shape, r reset phase, q quit

mod app;
mod ui;

use app::WarpFoldApp;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    WarpFoldApp::new()
        .frequency(110.0)
        .fold(0.2)
        .warp(0.0)
        .run()
}

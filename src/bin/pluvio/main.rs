//! pluvio - ambient rain in your terminal
//!
//! Run with: cargo run

mod rainfield;
mod ui;

use std::sync::{Arc, Mutex};

use clap::Parser;
use color_eyre::eyre::Result as EyreResult;
use tracing_subscriber::EnvFilter;

use pluvio::{RainConfig, RainEngine};
use rainfield::RainField;
use ui::UiApp;

/// Ambient rain synthesizer.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Rain loudness; amplitude scale is intensity / 10000
    #[arg(long, default_value_t = 400)]
    intensity: i32,

    /// Rain distance: low-pass cutoff in Hz (lower = farther away)
    #[arg(long, default_value_t = 8000)]
    distance: i32,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = RainConfig::new(args.intensity, args.distance)?;
    let mut engine = RainEngine::new(config)?;

    let field = Arc::new(Mutex::new(RainField::new()));
    engine.set_visualization(field.clone());
    let levels = engine.take_level_feed();

    let mut terminal = ratatui::init();
    let result = UiApp::new(engine, field, levels).run(&mut terminal);
    ratatui::restore();
    result
}

//! Audio stream lifecycle.
//!
//! The engine owns the cpal output stream and walks a three-state machine:
//! Idle (no stream built yet) → Active (callback pulling blocks) ⇄ Suspended
//! (stream exists but is paused). There is no terminal state; the engine
//! lives until the process exits.
//!
//! The stream — and with it the renderer's noise and filter state — is built
//! once, lazily, on the first `resume`. Suspend and resume only pause and
//! restart the host callback; they never touch synthesis state, so sound is
//! continuous across a suspend/resume cycle with no click at the seam.

mod ticker;

pub use ticker::Visualization;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Consumer, Producer, RingBuffer};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, RainConfig};
use crate::render::BlockRenderer;
use crate::SAMPLE_RATE;

use ticker::VizTicker;

/// Capacity of the audio → UI level feed. Levels arrive one per callback;
/// the UI drains much faster, so a small ring is plenty.
const LEVEL_RING_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Active,
    Suspended,
}

/// Lifecycle failures, always surfaced to the caller. A host that refuses
/// to open or start a stream is reported, never silently swallowed.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no default audio output device available")]
    NoOutputDevice,
    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start playback: {0}")]
    Play(#[from] cpal::PlayStreamError),
    #[error("failed to pause playback: {0}")]
    Pause(#[from] cpal::PauseStreamError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub struct RainEngine {
    config: RainConfig,
    state: EngineState,
    stream: Option<cpal::Stream>,
    viz: Option<Arc<Mutex<dyn Visualization>>>,
    ticker: Option<VizTicker>,
    level_tx: Option<Producer<f32>>,
    level_rx: Option<Consumer<f32>>,
}

impl RainEngine {
    /// Validates the configuration up front; no audio resources are touched
    /// until the first [`resume`](Self::resume).
    pub fn new(config: RainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (level_tx, level_rx) = RingBuffer::new(LEVEL_RING_CAPACITY);
        Ok(Self {
            config,
            state: EngineState::Idle,
            stream: None,
            viz: None,
            ticker: None,
            level_tx: Some(level_tx),
            level_rx: Some(level_rx),
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Attach the thing that animates while rain is audible. Its `rotate`
    /// starts firing on the next `resume`.
    pub fn set_visualization(&mut self, viz: Arc<Mutex<dyn Visualization>>) {
        self.viz = Some(viz);
    }

    /// Hand the per-block peak level feed to the UI. Yields `Some` once.
    pub fn take_level_feed(&mut self) -> Option<Consumer<f32>> {
        self.level_rx.take()
    }

    /// Start (or restart) playback. Builds the stream on first use.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        if self.state == EngineState::Active {
            return Ok(());
        }
        if self.stream.is_none() {
            self.stream = Some(self.build_stream()?);
        }
        // Stream exists from here on; unwrap-free access via as_ref.
        if let Some(stream) = self.stream.as_ref() {
            stream.play()?;
        }
        if let (Some(viz), None) = (&self.viz, &self.ticker) {
            self.ticker = Some(VizTicker::start(Arc::clone(viz)));
        }
        self.state = EngineState::Active;
        info!("rain engine active");
        Ok(())
    }

    /// Pause playback and stop the visualization cadence. Synthesis state
    /// is left untouched; a later `resume` continues the same streams.
    pub fn suspend(&mut self) -> Result<(), EngineError> {
        if self.state != EngineState::Active {
            debug!(state = ?self.state, "suspend ignored");
            return Ok(());
        }
        if let Some(stream) = self.stream.as_ref() {
            stream.pause()?;
        }
        self.ticker = None; // drop joins the ticker thread
        self.state = EngineState::Suspended;
        info!("rain engine suspended");
        Ok(())
    }

    /// The single user gesture: flip between audible and silent.
    pub fn toggle(&mut self) -> Result<EngineState, EngineError> {
        match self.state {
            EngineState::Active => self.suspend()?,
            EngineState::Idle | EngineState::Suspended => self.resume()?,
        }
        Ok(self.state)
    }

    fn build_stream(&mut self) -> Result<cpal::Stream, EngineError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(EngineError::NoOutputDevice)?;

        let stream_config = cpal::StreamConfig {
            channels: 2,
            sample_rate: cpal::SampleRate(SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Default,
        };
        debug!(?stream_config, "building output stream");

        let mut renderer = BlockRenderer::new(&self.config)?;
        let mut level_tx = self.level_tx.take();

        let stream = device.build_output_stream(
            &stream_config,
            move |data: &mut [f32], _| {
                renderer.render_interleaved(data);
                if let Some(tx) = level_tx.as_mut() {
                    // Wait-free; a full ring just drops this reading.
                    let _ = tx.push(renderer.last_peak());
                }
            },
            |err| warn!("audio stream error: {err}"),
            None,
        )?;
        Ok(stream)
    }
}

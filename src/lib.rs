pub mod config;
pub mod dsp;
pub mod engine; // Audio stream lifecycle and visualization cadence
pub mod render; // Fixed-size block rendering into host buffers
pub mod voice;

pub use config::{ConfigError, RainConfig};
pub use engine::{EngineState, RainEngine, Visualization};
pub use render::BlockRenderer;
pub use voice::RainVoice;

/// Samples per internal render block. Host buffers longer than this wrap
/// around; shorter ones use a prefix.
pub const BLOCK_SIZE: usize = 256;

/// Fixed output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 48_000;

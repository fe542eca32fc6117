use std::f32::consts::TAU;
use std::time::{SystemTime, UNIX_EPOCH};

/// Period of one full loudness swell, in milliseconds.
const PERIOD_MS: u64 = 20_000;

/// Depth of the swell: ±10% around unity gain.
const DEPTH: f32 = 0.1;

/// Slow sinusoidal amplitude variation, phased off the wall clock.
///
/// Real rain does not hold a perfectly constant level; it swells and fades
/// over tens of seconds. This models that with a 20-second sine read from
/// wall-clock time rather than from a sample counter, which makes the drift
/// independent of buffer size and of how often the host calls us — two
/// engines started at the same moment swell together.
///
/// There is no instance state: the factor is a pure function of the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmplitudeDrift;

impl AmplitudeDrift {
    pub fn new() -> Self {
        Self
    }

    /// Raw modulation factor in [-1, 1] for a given epoch-millisecond
    /// reading. Periodic: `factor_at(t) == factor_at(t + 20_000)`.
    #[inline]
    pub fn factor_at(self, millis: u64) -> f32 {
        let angle = (millis % PERIOD_MS) as f32 / PERIOD_MS as f32 * TAU;
        angle.sin()
    }

    /// Gain to multiply into a sample, in [0.9, 1.1].
    #[inline]
    pub fn gain_at(self, millis: u64) -> f32 {
        1.0 + self.factor_at(millis) * DEPTH
    }

    /// Gain for the current wall-clock instant.
    #[inline]
    pub fn gain(self) -> f32 {
        self.gain_at(epoch_millis())
    }
}

fn epoch_millis() -> u64 {
    // Pre-1970 clocks are not a supported configuration; fall back to phase
    // zero rather than panicking in the audio callback.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

//! Rain parameters and their validation.
//!
//! Two knobs control the whole sound: how hard it rains and how far away it
//! is. Everything downstream (amplitude scale, filter cutoff) is derived from
//! these at construction time and never changes afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use thiserror::Error;

/// Configuration rejected before any audio state is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: rain_intensity must be >= 0, got {0}")]
    NegativeIntensity(i32),
    #[error("invalid configuration: rain_distance must be > 0 Hz, got {0}")]
    NonPositiveDistance(i32),
}

/// User-facing rain parameters.
///
/// `rain_intensity` controls loudness: the amplitude scale is
/// `intensity / 10_000`, so the default 400 yields 0.04. `rain_distance`
/// is the low-pass cutoff in Hz: lower values muffle the noise like rain
/// heard through a closed window, higher values bring it up close.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct RainConfig {
    pub rain_intensity: i32,
    pub rain_distance: i32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            rain_intensity: 400,
            rain_distance: 8000,
        }
    }
}

impl RainConfig {
    pub fn new(rain_intensity: i32, rain_distance: i32) -> Result<Self, ConfigError> {
        let config = Self {
            rain_intensity,
            rain_distance,
        };
        config.validate()?;
        Ok(config)
    }

    /// A zero cutoff would divide by zero in the filter's coefficient
    /// derivation, so it is rejected here rather than guarded downstream.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rain_intensity < 0 {
            return Err(ConfigError::NegativeIntensity(self.rain_intensity));
        }
        if self.rain_distance <= 0 {
            return Err(ConfigError::NonPositiveDistance(self.rain_distance));
        }
        Ok(())
    }

    /// Linear amplitude scale applied to every noise sample.
    pub fn amplitude(&self) -> f32 {
        self.rain_intensity as f32 / 10_000.0
    }

    /// Low-pass cutoff in Hz.
    pub fn cutoff_hz(&self) -> f32 {
        self.rain_distance as f32
    }
}

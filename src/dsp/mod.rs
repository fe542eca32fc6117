//! Low-level DSP primitives for the rain signal chain.
//!
//! These components are allocation-free and realtime-safe, so they can live
//! directly inside the audio callback. Each one is a small numeric recurrence
//! with private mutable state; the voice layer composes them into the full
//! noise → drift → low-pass chain.

/// Slow wall-clock amplitude variation.
pub mod drift;
/// Single-pole IIR smoothing filter.
pub mod lowpass;
/// Pink noise generator.
pub mod noise;

pub use drift::AmplitudeDrift;
pub use lowpass::OnePole;
pub use noise::PinkNoise;

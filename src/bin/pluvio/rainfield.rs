//! The falling-rain visualization state.
//!
//! A fixed population of drops lives in a unit square; every `rotate` tick
//! moves each drop down by its depth-dependent speed and wraps it back to
//! the top when it falls off the bottom. The UI maps the unit square onto
//! whatever terminal area is available each frame, so resizing never
//! disturbs the field. No audio data flows in here — the cadence of
//! `rotate` is the only coupling to the engine.

use pluvio::Visualization;
use rand::Rng;

/// Number of drops on screen. Dense enough to read as rain in a typical
/// 80x24 terminal without turning into a solid wall.
const DROP_COUNT: usize = 140;

/// Depth layers, nearest first. Near drops fall faster and draw brighter.
const LAYER_SPEEDS: [f32; 3] = [0.020, 0.012, 0.007];

#[derive(Debug, Clone, Copy)]
pub struct Drop {
    /// Horizontal position in [0, 1).
    pub x: f32,
    /// Vertical position in [0, 1); 0 is the top of the sky.
    pub y: f32,
    /// Depth layer index into [`LAYER_SPEEDS`].
    pub layer: usize,
}

pub struct RainField {
    drops: Vec<Drop>,
}

impl RainField {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let drops = (0..DROP_COUNT)
            .map(|_| Drop {
                x: rng.random::<f32>(),
                y: rng.random::<f32>(),
                layer: rng.random_range(0..LAYER_SPEEDS.len()),
            })
            .collect();
        Self { drops }
    }

    pub fn drops(&self) -> &[Drop] {
        &self.drops
    }
}

impl Visualization for RainField {
    fn rotate(&mut self) {
        for drop in &mut self.drops {
            drop.y += LAYER_SPEEDS[drop.layer];
            if drop.y >= 1.0 {
                drop.y -= 1.0;
            }
        }
    }
}

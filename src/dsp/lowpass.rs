use std::f32::consts::TAU;

/*
One-Pole Low-Pass Filter
========================

The classic RC smoothing filter, discretized:

    rc    = 1 / (2π · cutoff)
    dt    = 1 / sample_rate
    alpha = dt / (rc + dt)

    y[n] = y[n-1] + alpha · (x[n] - y[n-1])

alpha sits in (0, 1]: near 1 the filter tracks its input almost exactly
(cutoff up at Nyquist, rain falling right next to you), near 0 it barely
moves (cutoff toward DC, rain behind a thick wall). This single pole is what
turns the bright pink-noise hiss into a distant, muffled rain wash.

The accumulator persists across blocks. Resetting it between callbacks would
put a click at every block boundary, so nothing in the render path ever
calls `reset`.
*/

pub struct OnePole {
    alpha: f32,
    y: f32,
}

impl OnePole {
    /// `cutoff_hz` must be positive; configuration validation guarantees
    /// this before a filter is ever constructed.
    pub fn new(cutoff_hz: f32, sample_rate: f32) -> Self {
        let rc = 1.0 / (TAU * cutoff_hz);
        let dt = 1.0 / sample_rate;
        Self {
            alpha: dt / (rc + dt),
            y: 0.0,
        }
    }

    #[inline]
    pub fn next_sample(&mut self, input: f32) -> f32 {
        self.y += self.alpha * (input - self.y);
        self.y
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.y = 0.0;
    }
}

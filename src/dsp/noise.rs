use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/*
Pink Noise (Paul Kellet's economy filter)
=========================================

Rain does not sound like white noise. White noise has equal energy at every
frequency, which reads as harsh static; rain is closer to pink noise, where
energy falls off at roughly 3 dB per octave (a 1/f spectrum) and the result
is a softer, deeper wash.

True 1/f noise cannot be produced by any finite filter, but Paul Kellet's
well-known approximation gets within ±0.05 dB above 9.2 Hz by summing seven
first-order filters driven by the same white sample:

    b0 =  0.99886*b0 + w*0.0555179     (slowest pole, deepest rumble)
    b1 =  0.89332*b1 + w*0.0750759
    b2 =  0.96900*b2 + w*0.1538520
    b3 =  0.86650*b3 + w*0.3104856
    b4 =  0.55000*b4 + w*0.5329522
    b5 = -0.7616*b5  - w*0.0168980
    out = b0+b1+b2+b3+b4+b5+b6 + w*0.5362
    b6 =  w*0.115926                   (one-sample delay tap)

The coefficients are load-bearing: change one and the spectrum tilts. The sum
of taps can exceed 1.0 momentarily, so callers scale the output down (the
rain voice applies its amplitude well below unity).

The white source is a PCG generator rather than a hardware RNG: it is
wait-free, needs no syscalls in the audio callback, and can be seeded for
reproducible tests.
*/

/// Stateful pink noise generator. One uniform white sample in [-1, 1) is
/// drawn per call; the seven filter taps persist across calls and are never
/// reset, so each instance produces one continuous noise stream.
pub struct PinkNoise {
    rng: Pcg64Mcg,
    b: [f32; 7],
}

impl PinkNoise {
    pub fn new() -> Self {
        Self::from_rng(Pcg64Mcg::from_rng(&mut rand::rng()))
    }

    /// Deterministic stream for tests and offline rendering.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Pcg64Mcg::seed_from_u64(seed))
    }

    fn from_rng(rng: Pcg64Mcg) -> Self {
        Self { rng, b: [0.0; 7] }
    }

    /// Next raw pink sample, unscaled. Mutates the filter taps in place, so
    /// calls must stay in chronological order (`&mut self` enforces this).
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let w = self.rng.random::<f32>() * 2.0 - 1.0;
        let b = &mut self.b;

        b[0] = 0.99886 * b[0] + w * 0.0555179;
        b[1] = 0.89332 * b[1] + w * 0.0750759;
        b[2] = 0.96900 * b[2] + w * 0.1538520;
        b[3] = 0.86650 * b[3] + w * 0.3104856;
        b[4] = 0.55000 * b[4] + w * 0.5329522;
        b[5] = -0.7616 * b[5] - w * 0.0168980;

        let out = b[0] + b[1] + b[2] + b[3] + b[4] + b[5] + b[6] + w * 0.5362;
        b[6] = w * 0.115926;

        out
    }
}

impl Default for PinkNoise {
    fn default() -> Self {
        Self::new()
    }
}

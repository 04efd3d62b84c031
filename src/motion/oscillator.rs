//! Simple harmonic motion and angular wave samplers

use noise::{NoiseFn, Perlin};

use crate::io::error::{Result, invalid_parameter};

// Wave angle advances per tick and per sample
const TICK_STEP: f32 = 0.02;
const SAMPLE_STEP: f32 = 0.2;

/// Simple harmonic motion around a center point
#[derive(Clone, Copy, Debug)]
pub struct Oscillator {
    amplitude: f32,
    period: f32,
}

impl Oscillator {
    /// Build an oscillator swinging `amplitude` units either side of center
    ///
    /// # Errors
    ///
    /// Returns an error when `period` is not a positive finite value or
    /// `amplitude` is not finite.
    pub fn new(amplitude: f32, period: f32) -> Result<Self> {
        if !amplitude.is_finite() {
            return Err(invalid_parameter("amplitude", &amplitude, &"must be finite"));
        }
        if !(period.is_finite() && period > 0.0) {
            return Err(invalid_parameter("period", &period, &"must be positive"));
        }
        Ok(Self { amplitude, period })
    }

    /// Displacement from center at the given tick
    pub fn displacement(&self, tick: f32) -> f32 {
        self.amplitude * (std::f32::consts::TAU * tick / self.period).sin()
    }
}

/// Amplitude source for a wave sampler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveSource {
    /// Pure sine of the sample angle
    Sine,
    /// Perlin noise along the sample angle
    Noise,
}

/// Angular wave: a row of heights read off a slowly advancing angle
///
/// Each sample reads the source at the start angle plus a fixed per-sample
/// stride; advancing the wave nudges the start angle so the whole row rolls
/// sideways over time.
#[derive(Clone, Debug)]
pub struct Wave {
    source: WaveSource,
    start_angle: f32,
    noise: Perlin,
}

impl Wave {
    /// Build a wave reading from the given source
    pub fn new(source: WaveSource, seed: u64) -> Self {
        Self {
            source,
            start_angle: 0.0,
            noise: Perlin::new(seed as u32),
        }
    }

    /// Roll the wave one tick sideways
    pub fn advance(&mut self) {
        self.start_angle += TICK_STEP;
    }

    /// Normalized height in `[0, 1]` at the given sample index
    pub fn sample(&self, index: usize) -> f32 {
        let angle = (index as f32).mul_add(SAMPLE_STEP, self.start_angle);
        let value = match self.source {
            WaveSource::Sine => f64::from(angle.sin()),
            WaveSource::Noise => self.noise.get([f64::from(angle), 0.0]),
        };
        value.mul_add(0.5, 0.5) as f32
    }

    /// Amplitude source in use
    pub const fn source(&self) -> WaveSource {
        self.source
    }
}

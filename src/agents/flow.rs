//! Perlin-sampled field of unit direction vectors

use glam::Vec2;
use ndarray::Array2;
use noise::{NoiseFn, Perlin};

use crate::io::error::{Result, invalid_parameter};
use crate::math::sampling::map_noise;

// Noise-space stride between adjacent field cells
const NOISE_STEP: f64 = 0.1;
// Depth advance per regeneration, scrolling the field over time
const SCROLL_STEP: f64 = 0.01;
const ANGLE_SPAN: f64 = 2.0 * std::f64::consts::TAU;

/// Grid of unit vectors steering anything that samples it
///
/// Directions come from a Perlin noise slice: each cell's angle is the noise
/// value at that cell mapped across two full turns. Regenerating advances the
/// slice depth so the field drifts smoothly between ticks.
#[derive(Clone, Debug)]
pub struct FlowField {
    directions: Array2<Vec2>,
    resolution: f32,
    noise: Perlin,
    scroll: f64,
}

impl FlowField {
    /// Build a field covering a `width` by `height` world at cell size `resolution`
    ///
    /// # Errors
    ///
    /// Returns an error when the world dimensions or resolution are not
    /// positive finite values.
    pub fn new(width: f32, height: f32, resolution: f32, seed: u64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(invalid_parameter(
                "resolution",
                &resolution,
                &"must be positive",
            ));
        }

        let cols = ((width / resolution).floor() as usize).max(1);
        let rows = ((height / resolution).floor() as usize).max(1);
        let mut field = Self {
            directions: Array2::from_elem((rows, cols), Vec2::X),
            resolution,
            noise: Perlin::new(seed as u32),
            scroll: 0.0,
        };
        field.fill();
        Ok(field)
    }

    /// Resample every cell at the next noise depth
    pub fn regenerate(&mut self) {
        self.scroll += SCROLL_STEP;
        self.fill();
    }

    fn fill(&mut self) {
        let scroll = self.scroll;
        let noise = &self.noise;
        for ((row, col), direction) in self.directions.indexed_iter_mut() {
            let x = col as f64 * NOISE_STEP;
            let y = row as f64 * NOISE_STEP;
            let angle = map_noise(noise.get([x, y, scroll]), ANGLE_SPAN);
            *direction = Vec2::from_angle(angle as f32);
        }
    }

    /// Direction under a world position, clamped to the field border
    pub fn lookup(&self, position: Vec2) -> Vec2 {
        let col = ((position.x / self.resolution).floor() as usize).min(self.cols() - 1);
        let row = ((position.y / self.resolution).floor() as usize).min(self.rows() - 1);
        self.directions.get((row, col)).copied().unwrap_or(Vec2::X)
    }

    /// Number of field rows
    pub fn rows(&self) -> usize {
        self.directions.nrows()
    }

    /// Number of field columns
    pub fn cols(&self) -> usize {
        self.directions.ncols()
    }

    /// World-space side length of one field cell
    pub const fn resolution(&self) -> f32 {
        self.resolution
    }
}

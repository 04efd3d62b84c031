//! Random walkers with a palette of step distributions

use std::cmp::Ordering;

use glam::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::math::sampling::standard_normal;

const GAUSSIAN_DEVIATION: f64 = 3.0;
const ACCEPT_REJECT_STEP: f32 = 2.0;

/// How a walker draws its next step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepRule {
    /// Both axes move by a uniform draw in the unit range
    Uniform,
    /// Uniform draws skewed toward the lower left
    Biased,
    /// Four-way die weighted toward stepping right
    Roll,
    /// Usually drifts one unit toward a fixed target
    Toward(Vec2),
    /// Normally distributed steps, deviation 3
    Gaussian,
    /// Step magnitudes accepted with probability proportional to their square
    AcceptReject,
}

/// A point wandering the plane one random step at a time
#[derive(Clone, Debug)]
pub struct Walker {
    position: Vec2,
    rng: StdRng,
}

impl Walker {
    /// Start a walker at `origin`
    pub fn new(origin: Vec2, seed: u64) -> Self {
        Self {
            position: origin,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance one step under the given rule
    pub fn step(&mut self, rule: StepRule) {
        match rule {
            StepRule::Uniform => {
                self.position.x += self.rng.random_range(-1.0..1.0);
                self.position.y += self.rng.random_range(-1.0..1.0);
            }
            StepRule::Biased => {
                self.position.x += self.rng.random_range(-3.0..2.75);
                self.position.y += self.rng.random_range(-2.75..3.0);
            }
            StepRule::Roll => {
                let roll = self.rng.random::<f32>();
                if roll < 0.4 {
                    self.position.x += 1.0;
                } else if roll < 0.6 {
                    self.position.x -= 1.0;
                } else if roll < 0.8 {
                    self.position.y += 1.0;
                } else {
                    self.position.y -= 1.0;
                }
            }
            StepRule::Toward(target) => {
                let roll = self.rng.random::<f32>();
                if roll < 0.25 {
                    self.position.x += unit_toward(target.x - self.position.x);
                } else if roll < 0.5 {
                    self.position.y += unit_toward(target.y - self.position.y);
                } else {
                    self.position.x += self.rng.random_range(-1.0..1.0);
                    self.position.y += self.rng.random_range(-1.0..1.0);
                }
            }
            StepRule::Gaussian => {
                self.position.x += (standard_normal(&mut self.rng) * GAUSSIAN_DEVIATION) as f32;
                self.position.y += (standard_normal(&mut self.rng) * GAUSSIAN_DEVIATION) as f32;
            }
            StepRule::AcceptReject => {
                let x_magnitude = self.quadratic_magnitude() * ACCEPT_REJECT_STEP;
                self.position.x += if self.rng.random::<bool>() {
                    -x_magnitude
                } else {
                    x_magnitude
                };
                let y_magnitude = self.quadratic_magnitude() * ACCEPT_REJECT_STEP;
                self.position.y += if self.rng.random::<bool>() {
                    -y_magnitude
                } else {
                    y_magnitude
                };
            }
        }
    }

    // Accept-reject sampling of a magnitude in [0, 1) weighted by its square
    fn quadratic_magnitude(&mut self) -> f32 {
        loop {
            let candidate = self.rng.random::<f32>();
            let threshold = self.rng.random::<f32>();
            if threshold < candidate * candidate {
                return candidate;
            }
        }
    }

    /// Current position
    pub const fn position(&self) -> Vec2 {
        self.position
    }
}

// Unit step toward a delta, or no step when already aligned
fn unit_toward(delta: f32) -> f32 {
    match delta.partial_cmp(&0.0) {
        Some(Ordering::Greater) => 1.0,
        Some(Ordering::Less) => -1.0,
        _ => 0.0,
    }
}

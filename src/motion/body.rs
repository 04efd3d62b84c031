//! Point bodies under Newtonian forces

use glam::Vec2;
use noise::{NoiseFn, Perlin};

use crate::io::error::{Result, invalid_parameter};
use crate::math::sampling::map_noise;

// Balloon tuning from the wind sketch
const BUOYANCY: f32 = -0.05;
const CEILING_MARGIN: f32 = 4.0;
const DRAG: f32 = -0.01;
const WIND_STEP: f64 = 0.01;
const WIND_STRENGTH: f64 = 0.01;
const BOUNCE_DAMPING: f32 = 0.9;

/// A point mass accumulating forces between updates
#[derive(Clone, Copy, Debug)]
pub struct Body {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    mass: f32,
}

impl Body {
    /// Build a body at rest
    ///
    /// # Errors
    ///
    /// Returns an error when `mass` is not a positive finite value.
    pub fn new(position: Vec2, mass: f32) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(invalid_parameter("mass", &mass, &"must be positive"));
        }
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass,
        })
    }

    /// Accumulate a force, scaled down by the body's mass
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.mass;
    }

    /// Integrate one tick and clear the accumulated forces
    pub fn update(&mut self) {
        self.damped_update(1.0);
    }

    /// Integrate one tick, bleeding off velocity by `damping`
    pub fn damped_update(&mut self, damping: f32) {
        self.velocity = (self.velocity + self.acceleration) * damping;
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    /// Pin the body at `position` and zero its velocity
    pub const fn halt_at(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
    }

    /// Current position
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Body mass
    pub const fn mass(&self) -> f32 {
        self.mass
    }
}

/// A buoyant ball drifting on Perlin wind inside a box
///
/// Combines four influences per tick: constant lift while below the ceiling,
/// drag opposing the current velocity, a horizontal wind read off a scrolling
/// noise line, and a damped bounce off the box walls.
#[derive(Clone, Debug)]
pub struct Balloon {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    radius: f32,
    noise: Perlin,
    tick: u32,
}

impl Balloon {
    /// Release a balloon at `position`
    ///
    /// # Errors
    ///
    /// Returns an error when `radius` is not a positive finite value.
    pub fn new(position: Vec2, radius: f32, seed: u64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(invalid_parameter("radius", &radius, &"must be positive"));
        }
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
            noise: Perlin::new(seed as u32),
            tick: 0,
        })
    }

    /// Accumulate an external force for the next update
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Advance one tick inside a `width` by `height` box
    pub fn update(&mut self, width: f32, height: f32) {
        let wind = map_noise(
            self.noise.get([f64::from(self.tick) * WIND_STEP, 0.0]),
            WIND_STRENGTH,
        );
        self.tick += 1;
        self.apply_force(Vec2::new(wind as f32, 0.0));

        // Lift shuts off once the top of the balloon reaches the ceiling
        if self.position.y - self.radius / 2.0 > CEILING_MARGIN {
            self.apply_force(Vec2::new(0.0, BUOYANCY));
        }

        let drag = self.velocity * DRAG;
        self.apply_force(drag);

        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;

        self.bounce(width, height);
    }

    fn bounce(&mut self, width: f32, height: f32) {
        let half = self.radius / 2.0;
        if self.position.x + half > width || self.position.x - half < 0.0 {
            self.velocity.x *= -BOUNCE_DAMPING;
        }
        if self.position.y + half > height || self.position.y - half < 0.0 {
            self.velocity.y *= -BOUNCE_DAMPING;
        }
        self.position.x = self.position.x.clamp(half, width - half);
        self.position.y = self.position.y.clamp(half, height - half);
    }

    /// Current position
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

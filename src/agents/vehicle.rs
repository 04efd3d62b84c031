//! Steering behaviors for autonomous vehicles

use glam::Vec2;
use rand::{Rng, rngs::StdRng};

use crate::agents::flow::FlowField;
use crate::io::error::{Result, invalid_parameter};

// Stock body used when callers do not tune their own
const STANDARD_MASS: f32 = 15.0;
const STANDARD_MAX_SPEED: f32 = 3.0;
const STANDARD_MAX_FORCE: f32 = 0.5;
const STANDARD_RADIUS: f32 = 6.0;

// Targets closer than this are treated as reached
const ARRIVAL_THRESHOLD: f32 = 1.0;
// Distance inside which an arriving vehicle ramps its speed down
const SLOWING_RADIUS: f32 = 100.0;

// Wander circle projected ahead of the vehicle
const WANDER_DISTANCE: f32 = 80.0;
const WANDER_RADIUS: f32 = 25.0;
const WANDER_JITTER: f32 = 0.3;

/// A steerable body with capped speed and steering force
#[derive(Clone, Copy, Debug)]
pub struct Vehicle {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    mass: f32,
    max_speed: f32,
    max_force: f32,
    radius: f32,
    wander_theta: f32,
}

impl Vehicle {
    /// Build a vehicle with explicit physical limits
    ///
    /// # Errors
    ///
    /// Returns an error when `mass` is not a positive finite value, or when
    /// any of the caps are negative.
    pub fn new(
        position: Vec2,
        mass: f32,
        max_speed: f32,
        max_force: f32,
        radius: f32,
    ) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(invalid_parameter("mass", &mass, &"must be positive"));
        }
        if !(max_speed.is_finite() && max_speed >= 0.0) {
            return Err(invalid_parameter(
                "max_speed",
                &max_speed,
                &"must not be negative",
            ));
        }
        if !(max_force.is_finite() && max_force >= 0.0) {
            return Err(invalid_parameter(
                "max_force",
                &max_force,
                &"must not be negative",
            ));
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(invalid_parameter(
                "radius",
                &radius,
                &"must not be negative",
            ));
        }
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass,
            max_speed,
            max_force,
            radius,
            wander_theta: 0.0,
        })
    }

    /// Build a vehicle with the stock mass and caps
    pub const fn standard(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass: STANDARD_MASS,
            max_speed: STANDARD_MAX_SPEED,
            max_force: STANDARD_MAX_FORCE,
            radius: STANDARD_RADIUS,
            wander_theta: 0.0,
        }
    }

    /// Steer toward `target` at full speed
    pub fn seek(&mut self, target: Vec2) {
        self.approach(target, false, false);
    }

    /// Steer directly away from `target`
    pub fn flee(&mut self, target: Vec2) {
        self.approach(target, true, false);
    }

    /// Steer toward `target`, slowing down inside the approach radius
    pub fn arrive(&mut self, target: Vec2) {
        self.approach(target, false, true);
    }

    fn approach(&mut self, target: Vec2, away: bool, cautious: bool) {
        let offset = target - self.position;
        let distance = offset.length();
        if distance < ARRIVAL_THRESHOLD {
            self.velocity = Vec2::ZERO;
            return;
        }

        let direction = if away { -offset } else { offset } / distance;
        let speed = if cautious && distance < SLOWING_RADIUS {
            self.max_speed * distance / SLOWING_RADIUS
        } else {
            self.max_speed
        };
        let steer = (direction * speed - self.velocity).clamp_length_max(self.max_force);
        self.apply_force(steer);
    }

    /// Meander by seeking a jittered point on a circle projected ahead
    pub fn wander(&mut self, rng: &mut StdRng) {
        self.wander_theta += rng.random_range(-WANDER_JITTER..WANDER_JITTER);
        let circle_center = self.velocity.normalize_or_zero() * WANDER_DISTANCE + self.position;
        let heading = self.velocity.y.atan2(self.velocity.x);
        let target = circle_center + Vec2::from_angle(self.wander_theta + heading) * WANDER_RADIUS;
        self.seek(target);
    }

    /// Push along the flow field direction under the vehicle
    pub fn follow(&mut self, field: &FlowField, strength: f32) {
        let force = field.lookup(self.position) * strength;
        self.apply_force(force);
    }

    /// Accumulate a force, scaled down by the vehicle's mass
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.mass;
    }

    /// Integrate one tick and wrap around the world border
    ///
    /// Wrapping waits until the whole body radius has left the world, so a
    /// vehicle slides fully off one edge before reappearing at the other.
    pub fn update(&mut self, width: f32, height: f32) {
        self.velocity = (self.velocity + self.acceleration).clamp_length_max(self.max_speed);
        self.position += self.velocity;

        if self.position.x < -self.radius {
            self.position.x = width + self.radius;
        }
        if self.position.y < -self.radius {
            self.position.y = height + self.radius;
        }
        if self.position.x > width + self.radius {
            self.position.x = -self.radius;
        }
        if self.position.y > height + self.radius {
            self.position.y = -self.radius;
        }

        self.acceleration = Vec2::ZERO;
    }

    /// Current position
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Body radius used for border wrapping
    pub const fn radius(&self) -> f32 {
        self.radius
    }
}

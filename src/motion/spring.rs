//! Hooke's-law spring connecting an anchor to a bob

use glam::Vec2;

use crate::io::error::{Result, invalid_parameter};
use crate::motion::body::Body;

/// Stiffness used when callers do not tune their own
pub const DEFAULT_STIFFNESS: f32 = 0.2;
/// Velocity retained by a bob each tick while hanging from a spring
pub const BOB_DAMPING: f32 = 0.98;

/// A spring with a fixed anchor and rest length
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    anchor: Vec2,
    rest_length: f32,
    stiffness: f32,
}

impl Spring {
    /// Build a spring anchored at `anchor`
    ///
    /// # Errors
    ///
    /// Returns an error when `rest_length` is not positive or `stiffness` is
    /// negative.
    pub fn new(anchor: Vec2, rest_length: f32, stiffness: f32) -> Result<Self> {
        if !(rest_length.is_finite() && rest_length > 0.0) {
            return Err(invalid_parameter(
                "rest_length",
                &rest_length,
                &"must be positive",
            ));
        }
        if !(stiffness.is_finite() && stiffness >= 0.0) {
            return Err(invalid_parameter(
                "stiffness",
                &stiffness,
                &"must not be negative",
            ));
        }
        Ok(Self {
            anchor,
            rest_length,
            stiffness,
        })
    }

    /// Pull the bob toward rest length with a Hooke's-law force
    pub fn apply(&self, bob: &mut Body) {
        let offset = bob.position() - self.anchor;
        let stretch = offset.length() - self.rest_length;
        let force = offset.normalize_or_zero() * (-self.stiffness * stretch);
        bob.apply_force(force);
    }

    /// Clamp the spring length, stopping the bob dead when it hits a limit
    pub fn constrain_length(&self, bob: &mut Body, min_length: f32, max_length: f32) {
        let offset = bob.position() - self.anchor;
        let length = offset.length();
        if length < min_length {
            bob.halt_at(self.anchor + offset.normalize_or_zero() * min_length);
        } else if length > max_length {
            bob.halt_at(self.anchor + offset.normalize_or_zero() * max_length);
        }
    }

    /// Anchor point
    pub const fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Rest length
    pub const fn rest_length(&self) -> f32 {
        self.rest_length
    }
}

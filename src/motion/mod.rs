//! Motion primitives: walkers, forces, springs, and oscillators

/// Point bodies and the buoyant balloon
pub mod body;
/// Simple harmonic motion and wave samplers
pub mod oscillator;
/// Anchored Hooke's-law spring
pub mod spring;
/// Random walkers
pub mod walker;

pub use body::{Balloon, Body};
pub use oscillator::{Oscillator, Wave, WaveSource};
pub use spring::Spring;
pub use walker::{StepRule, Walker};

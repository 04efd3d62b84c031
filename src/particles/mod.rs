//! Particle systems and the particle-life simulation

/// Color-matrix force simulation with spatial partitioning
pub mod life;
/// Lifespan particles and emitters
pub mod system;

pub use life::{EdgeMode, LifeConfig, ParticleLife};
pub use system::{Emitter, INITIAL_LIFESPAN, LIFESPAN_DECAY, Particle};

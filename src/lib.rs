//! Headless simulation cores for classic creative-coding sketches
//!
//! Each module is an independent, tick-driven model: a wave-function-collapse
//! tile solver, a spatially partitioned particle-life simulation, steering
//! agents over a noise flow field, cellular automata, random walkers, and a
//! handful of force and oscillation toys. Rendering and input belong to the
//! host; the cores expose explicit step calls and read accessors, and the
//! bundled CLI exports still images and animations as artifacts.

#![forbid(unsafe_code)]

/// Steering vehicles and noise-driven flow fields
pub mod agents;
/// Cellular automata
pub mod automata;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for sampling and angle mapping
pub mod math;
/// Walkers, force-driven bodies, springs, and oscillators
pub mod motion;
/// Particle systems and the particle-life simulation
pub mod particles;
/// Spatial partitioning for neighbor queries
pub mod spatial;
/// Wave-function-collapse tile solver
pub mod wfc;

pub use io::error::{Result, SketchError};

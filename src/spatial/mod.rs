//! Spatial data structures for neighbor queries

/// Uniform-bin spatial hash over the unit square
pub mod hash;

pub use hash::SpatialHash;

//! Grid-based cellular automata

/// Conway's Game of Life
pub mod life;

pub use life::LifeBoard;

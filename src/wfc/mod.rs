//! Wave-function-collapse tile solver
//!
//! A catalog of edge-coded tiles is analyzed once into per-direction
//! compatibility sets; a grid of cells then collapses one position per step,
//! always at the lowest entropy, and re-derives every open cell's options
//! from its neighbors. Contradictions restart the whole grid rather than
//! backtracking.

/// Catalog construction and adjacency analysis
pub mod catalog;
/// Per-position option state
pub mod cell;
/// Bitset over tile indices
pub mod options;
/// The collapse/propagate state machine
pub mod solver;
/// Tile records, directions, and the edge comparison rule
pub mod tile;

pub use catalog::{TileCatalog, TileDef, train_track};
pub use cell::Cell;
pub use options::OptionSet;
pub use solver::{StepOutcome, WaveGrid};
pub use tile::{Direction, Tile};

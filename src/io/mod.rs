//! Input/output operations and error handling

/// Command-line interface and subcommand runners
pub mod cli;
/// Simulation constants and runtime defaults
pub mod configuration;
/// Error types for construction and export
pub mod error;
/// PNG export for grids, boards, paths, and scatters
pub mod image;
/// Progress display for long runs
pub mod progress;
/// Collapse capture and GIF generation
pub mod visualization;

//! Mathematical utilities shared by the sketch cores

/// Random draws beyond the uniform generator
pub mod sampling;

//! Autonomous steering agents and the noise field that drives them

/// Perlin-sampled direction field
pub mod flow;
/// Steering vehicle with seek, flee, arrive, wander, and follow behaviors
pub mod vehicle;

pub use flow::FlowField;
pub use vehicle::Vehicle;

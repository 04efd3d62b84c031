//! Simulation constants and runtime configuration defaults

// Wave solver settings
/// Default side length for the wave grid
pub const DEFAULT_WAVE_GRID_SIZE: usize = 24;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed wave grid dimension
pub const MAX_WAVE_DIMENSION: usize = 512;

/// Step budget multiplier over one collapse per cell, covering restarts
pub const WAVE_STEP_LIMIT_FACTOR: usize = 16;

// Particle-life defaults, tuned for the unit square
/// Default number of particles
pub const DEFAULT_PARTICLE_COUNT: usize = 1500;
/// Default number of particle colors
pub const DEFAULT_COLOR_COUNT: usize = 6;
/// Default inner repulsion radius
pub const DEFAULT_MIN_RADIUS: f32 = 0.02;
/// Default interaction cutoff radius
pub const DEFAULT_MAX_RADIUS: f32 = 0.15;
/// Default attraction strength multiplier
pub const DEFAULT_ATTRACTION_STRENGTH: f32 = 8.0;
/// Default per-tick velocity friction
pub const DEFAULT_FRICTION: f32 = 0.2;
/// Default integration time step
pub const DEFAULT_TIME_STEP: f32 = 0.000_2;
/// Default target occupancy per spatial bin
pub const DEFAULT_BIN_OCCUPANCY: usize = 6;

// Cellular automaton settings
/// Default probability that a randomized cell starts alive
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.7;
/// Default board height in cells
pub const DEFAULT_BOARD_ROWS: usize = 75;
/// Default board width in cells
pub const DEFAULT_BOARD_COLS: usize = 100;
/// Default generations advanced per life run
pub const DEFAULT_LIFE_TICKS: usize = 100;

// Walker settings
/// Default walk canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 640;
/// Default walk canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;
/// Default steps taken per walk run
pub const DEFAULT_WALK_STEPS: usize = 5000;

// Flow field settings
/// Default flow world width in pixels
pub const DEFAULT_FLOW_WIDTH: f32 = 800.0;
/// Default flow world height in pixels
pub const DEFAULT_FLOW_HEIGHT: f32 = 400.0;
/// Default world-space side length of one field cell
pub const DEFAULT_FIELD_RESOLUTION: f32 = 16.0;
/// Default number of vehicles riding the field
pub const DEFAULT_VEHICLE_COUNT: usize = 10;
/// Default multiplier on the sampled field direction
pub const DEFAULT_FIELD_STRENGTH: f32 = 0.5;
/// Default ticks simulated per flow run
pub const DEFAULT_FLOW_TICKS: usize = 600;

// Default values for configurable parameters
/// Fixed seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;
/// Default ticks simulated per particle-life run
pub const DEFAULT_PARTICLE_TICKS: usize = 400;

// Output settings
/// Pixels rendered per wave grid cell
pub const DEFAULT_TILE_PIXELS: u32 = 12;
/// Pixels rendered per life board cell
pub const DEFAULT_CELL_PIXELS: u32 = 8;
/// Side length of particle scatter exports in pixels
pub const DEFAULT_SCATTER_SIZE: u32 = 800;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

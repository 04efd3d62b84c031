//! Command-line interface running each sketch core and exporting artifacts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use glam::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::agents::{FlowField, Vehicle};
use crate::automata::LifeBoard;
use crate::io::configuration::{
    DEFAULT_ALIVE_PROBABILITY, DEFAULT_BOARD_COLS, DEFAULT_BOARD_ROWS, DEFAULT_CANVAS_HEIGHT,
    DEFAULT_CANVAS_WIDTH, DEFAULT_CELL_PIXELS, DEFAULT_COLOR_COUNT, DEFAULT_FIELD_RESOLUTION,
    DEFAULT_FIELD_STRENGTH, DEFAULT_FLOW_HEIGHT, DEFAULT_FLOW_TICKS, DEFAULT_FLOW_WIDTH,
    DEFAULT_LIFE_TICKS, DEFAULT_PARTICLE_COUNT, DEFAULT_PARTICLE_TICKS, DEFAULT_SCATTER_SIZE,
    DEFAULT_SEED, DEFAULT_TILE_PIXELS, DEFAULT_VEHICLE_COUNT, DEFAULT_WALK_STEPS,
    DEFAULT_WAVE_GRID_SIZE, GIF_FRAME_DELAY_MS, WAVE_STEP_LIMIT_FACTOR,
};
use crate::io::error::Result;
use crate::io::image::{export_board_png, export_path_png, export_scatter_png, export_wave_png};
use crate::io::progress::RunProgress;
use crate::io::visualization::CollapseCapture;
use crate::motion::{StepRule, Walker};
use crate::particles::{EdgeMode, LifeConfig, ParticleLife};
use crate::wfc::{StepOutcome, WaveGrid, train_track};

// Flow vehicles spawn with a random radius; mass scales with it
const FLOW_VEHICLE_RADIUS: std::ops::Range<f32> = 12.0..64.0;
const FLOW_MASS_PER_RADIUS: f32 = 16.0;
const FLOW_VEHICLE_MAX_SPEED: f32 = 5.0;
const FLOW_VEHICLE_MAX_FORCE: f32 = 0.5;

/// Command-line arguments for the sketch runner
#[derive(Parser)]
#[command(name = "sketchkit")]
#[command(
    author,
    version,
    about = "Run headless creative-coding sketches and export PNG/GIF artifacts"
)]
pub struct Cli {
    /// Which sketch to run
    #[command(subcommand)]
    pub command: Command,

    /// Random seed for reproducible runs
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// The available sketches
#[derive(Subcommand)]
pub enum Command {
    /// Collapse a wave grid over the train-track tile catalog
    Wave(WaveArgs),
    /// Advance Conway's Game of Life from a random seeding
    Life(LifeArgs),
    /// Run the colored particle-life force simulation
    ParticleLife(ParticleLifeArgs),
    /// Trace a random walker across a canvas
    Walk(WalkArgs),
    /// Drive vehicles through a Perlin flow field
    Flow(FlowArgs),
}

/// Arguments for the wave subcommand
#[derive(Args)]
pub struct WaveArgs {
    /// Grid height in cells
    #[arg(short, long, default_value_t = DEFAULT_WAVE_GRID_SIZE)]
    pub rows: usize,

    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_WAVE_GRID_SIZE)]
    pub cols: usize,

    /// Pixels rendered per cell
    #[arg(short, long, default_value_t = DEFAULT_TILE_PIXELS)]
    pub tile_pixels: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "wave.png")]
    pub output: PathBuf,

    /// Also replay the collapse as an animated GIF at this path
    #[arg(short, long)]
    pub gif: Option<PathBuf>,
}

/// Arguments for the life subcommand
#[derive(Args)]
pub struct LifeArgs {
    /// Board height in cells
    #[arg(short, long, default_value_t = DEFAULT_BOARD_ROWS)]
    pub rows: usize,

    /// Board width in cells
    #[arg(short, long, default_value_t = DEFAULT_BOARD_COLS)]
    pub cols: usize,

    /// Generations to advance
    #[arg(short, long, default_value_t = DEFAULT_LIFE_TICKS)]
    pub ticks: usize,

    /// Probability that a cell starts alive
    #[arg(short, long, default_value_t = DEFAULT_ALIVE_PROBABILITY)]
    pub alive_probability: f64,

    /// Pixels rendered per cell
    #[arg(short = 'p', long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "life.png")]
    pub output: PathBuf,
}

/// Arguments for the particle-life subcommand
#[derive(Args)]
pub struct ParticleLifeArgs {
    /// Number of particles
    #[arg(short = 'n', long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    pub count: usize,

    /// Number of particle colors
    #[arg(short = 'c', long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Ticks to simulate
    #[arg(short, long, default_value_t = DEFAULT_PARTICLE_TICKS)]
    pub ticks: usize,

    /// Reflect particles at the edges instead of wrapping
    #[arg(long)]
    pub contain: bool,

    /// Output image side length in pixels
    #[arg(long, default_value_t = DEFAULT_SCATTER_SIZE)]
    pub size: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "particles.png")]
    pub output: PathBuf,
}

/// Step distribution selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WalkStrategy {
    /// Uniform steps in the unit range
    Uniform,
    /// Uniform steps skewed toward the lower left
    Biased,
    /// Weighted four-way die
    Roll,
    /// Drift toward a target point
    Toward,
    /// Normally distributed steps
    Gaussian,
    /// Quadratically weighted step magnitudes
    AcceptReject,
}

/// Arguments for the walk subcommand
#[derive(Args)]
pub struct WalkArgs {
    /// Step distribution to walk with
    #[arg(short = 'm', long, value_enum, default_value_t = WalkStrategy::Uniform)]
    pub strategy: WalkStrategy,

    /// Steps to take
    #[arg(short = 'n', long, default_value_t = DEFAULT_WALK_STEPS)]
    pub steps: usize,

    /// Canvas width in pixels
    #[arg(short, long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// Target x for the toward strategy, defaulting to the canvas center
    #[arg(long)]
    pub target_x: Option<f32>,

    /// Target y for the toward strategy, defaulting to the canvas center
    #[arg(long)]
    pub target_y: Option<f32>,

    /// Output PNG path
    #[arg(short, long, default_value = "walk.png")]
    pub output: PathBuf,
}

/// Arguments for the flow subcommand
#[derive(Args)]
pub struct FlowArgs {
    /// World width in pixels
    #[arg(short, long, default_value_t = DEFAULT_FLOW_WIDTH)]
    pub width: f32,

    /// World height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_FLOW_HEIGHT)]
    pub height: f32,

    /// World-space side length of one field cell
    #[arg(short, long, default_value_t = DEFAULT_FIELD_RESOLUTION)]
    pub resolution: f32,

    /// Number of vehicles riding the field
    #[arg(short = 'n', long, default_value_t = DEFAULT_VEHICLE_COUNT)]
    pub vehicles: usize,

    /// Multiplier on the sampled field direction
    #[arg(short = 'f', long, default_value_t = DEFAULT_FIELD_STRENGTH)]
    pub strength: f32,

    /// Ticks to simulate
    #[arg(short, long, default_value_t = DEFAULT_FLOW_TICKS)]
    pub ticks: usize,

    /// Output PNG path
    #[arg(short, long, default_value = "flow.png")]
    pub output: PathBuf,
}

/// Runs the selected sketch and writes its artifacts
pub struct SketchRunner {
    cli: Cli,
}

impl SketchRunner {
    /// Create a runner from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected sketch to completion
    ///
    /// # Errors
    ///
    /// Returns an error if simulation parameters fail validation or artifact
    /// export fails.
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Wave(args) => self.run_wave(args),
            Command::Life(args) => self.run_life(args),
            Command::ParticleLife(args) => self.run_particle_life(args),
            Command::Walk(args) => self.run_walk(args),
            Command::Flow(args) => self.run_flow(args),
        }
    }

    // Allow print for user feedback when a wave run hits its step budget
    #[allow(clippy::print_stderr)]
    fn run_wave(&self, args: &WaveArgs) -> Result<()> {
        let mut grid = WaveGrid::new(train_track(), args.rows, args.cols, self.cli.seed)?;
        let step_limit = args.rows * args.cols * WAVE_STEP_LIMIT_FACTOR;
        let mut capture = args.gif.is_some().then(|| CollapseCapture::new(&grid));
        let progress = RunProgress::new("wave", args.rows * args.cols, self.cli.quiet);

        for _ in 0..step_limit {
            match grid.step() {
                StepOutcome::Collapsed { row, col, tile } => {
                    if let Some(ref mut capture) = capture {
                        capture.record_placement(row, col, tile);
                    }
                }
                StepOutcome::Restarted => {
                    if let Some(ref mut capture) = capture {
                        capture.record_restart();
                    }
                    progress.note_restarts(grid.restarts());
                }
                StepOutcome::Resolved => break,
            }
            progress.set_position(grid.collapsed_count());
            if grid.is_resolved() {
                break;
            }
        }
        progress.finish();

        if !grid.is_resolved() && !self.cli.quiet {
            eprintln!(
                "Wave unresolved after {step_limit} steps ({} restarts); exporting partial grid",
                grid.restarts()
            );
        }

        export_wave_png(&grid, args.tile_pixels, &args.output)?;
        if let (Some(capture), Some(gif_path)) = (capture, args.gif.as_ref()) {
            capture.export_gif(gif_path, args.tile_pixels, GIF_FRAME_DELAY_MS)?;
        }
        Ok(())
    }

    fn run_life(&self, args: &LifeArgs) -> Result<()> {
        let mut board = LifeBoard::new(args.rows, args.cols)?;
        board.randomize(self.cli.seed, args.alive_probability)?;

        let progress = RunProgress::new("life", args.ticks, self.cli.quiet);
        for _ in 0..args.ticks {
            board.tick();
            progress.tick();
        }
        progress.finish();

        export_board_png(&board, args.cell_pixels, &args.output)
    }

    fn run_particle_life(&self, args: &ParticleLifeArgs) -> Result<()> {
        let config = LifeConfig {
            particle_count: args.count,
            color_count: args.colors,
            edge_mode: if args.contain {
                EdgeMode::Contain
            } else {
                EdgeMode::Wrap
            },
            ..LifeConfig::default()
        };
        let mut life = ParticleLife::new(config, self.cli.seed)?;

        let progress = RunProgress::new("particle-life", args.ticks, self.cli.quiet);
        for _ in 0..args.ticks {
            life.tick();
            progress.tick();
        }
        progress.finish();

        export_scatter_png(life.positions(), life.colors(), args.size, &args.output)
    }

    fn run_walk(&self, args: &WalkArgs) -> Result<()> {
        let center = Vec2::new(args.width as f32 / 2.0, args.height as f32 / 2.0);
        let target = Vec2::new(
            args.target_x.unwrap_or(center.x),
            args.target_y.unwrap_or(center.y),
        );
        let rule = match args.strategy {
            WalkStrategy::Uniform => StepRule::Uniform,
            WalkStrategy::Biased => StepRule::Biased,
            WalkStrategy::Roll => StepRule::Roll,
            WalkStrategy::Toward => StepRule::Toward(target),
            WalkStrategy::Gaussian => StepRule::Gaussian,
            WalkStrategy::AcceptReject => StepRule::AcceptReject,
        };

        let mut walker = Walker::new(center, self.cli.seed);
        let mut trail = Vec::with_capacity(args.steps + 1);
        trail.push(walker.position());

        let progress = RunProgress::new("walk", args.steps, self.cli.quiet);
        for _ in 0..args.steps {
            walker.step(rule);
            trail.push(walker.position());
            progress.tick();
        }
        progress.finish();

        export_path_png(&trail, args.width, args.height, &args.output)
    }

    fn run_flow(&self, args: &FlowArgs) -> Result<()> {
        let mut field = FlowField::new(args.width, args.height, args.resolution, self.cli.seed)?;

        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut vehicles = Vec::with_capacity(args.vehicles);
        for _ in 0..args.vehicles {
            let position = Vec2::new(
                rng.random_range(0.0..args.width),
                rng.random_range(0.0..args.height),
            );
            let radius = rng.random_range(FLOW_VEHICLE_RADIUS);
            vehicles.push(Vehicle::new(
                position,
                radius / FLOW_MASS_PER_RADIUS,
                FLOW_VEHICLE_MAX_SPEED,
                FLOW_VEHICLE_MAX_FORCE,
                radius,
            )?);
        }

        let mut trail = Vec::with_capacity(args.ticks * args.vehicles);
        let progress = RunProgress::new("flow", args.ticks, self.cli.quiet);
        for _ in 0..args.ticks {
            field.regenerate();
            for vehicle in &mut vehicles {
                vehicle.follow(&field, args.strength);
                vehicle.update(args.width, args.height);
                trail.push(vehicle.position());
            }
            progress.tick();
        }
        progress.finish();

        export_path_png(
            &trail,
            args.width.ceil() as u32,
            args.height.ceil() as u32,
            &args.output,
        )
    }
}

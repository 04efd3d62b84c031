//! Particle life: pairwise color-keyed forces over the unit square
//!
//! Every particle carries one of `k` colors; a `k × k` attraction matrix
//! drives a tent-shaped interaction kernel with universal close-range
//! repulsion. Neighbor search goes through the spatial hash so a tick costs
//! O(n) at practical densities rather than O(n²).

use crate::io::configuration::{
    DEFAULT_ATTRACTION_STRENGTH, DEFAULT_BIN_OCCUPANCY, DEFAULT_COLOR_COUNT, DEFAULT_FRICTION,
    DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS, DEFAULT_PARTICLE_COUNT, DEFAULT_TIME_STEP,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::SpatialHash;
use glam::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

// Attraction matrix entries stay clear of zero so every color pair
// produces visible behavior
const ATTRACTION_FLOOR: f32 = 0.3;
const ATTRACTION_CEILING: f32 = 1.0;

/// How particles behave at the world border
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeMode {
    /// Toroidal world: positions wrap and forces use minimum-image distance
    Wrap,
    /// Walled world: positions reflect off the border
    Contain,
}

/// Tunable parameters for a particle-life run
#[derive(Clone, Debug)]
pub struct LifeConfig {
    /// Number of particles
    pub particle_count: usize,
    /// Number of particle colors
    pub color_count: usize,
    /// Inner radius below which all pairs repel
    pub min_radius: f32,
    /// Interaction cutoff radius
    pub max_radius: f32,
    /// Force multiplier applied after kernel evaluation
    pub attraction_strength: f32,
    /// Fraction of velocity removed each tick
    pub friction: f32,
    /// Integration time step
    pub time_step: f32,
    /// Border behavior
    pub edge_mode: EdgeMode,
    /// Target number of particles per spatial bin
    pub bin_occupancy: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            color_count: DEFAULT_COLOR_COUNT,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            attraction_strength: DEFAULT_ATTRACTION_STRENGTH,
            friction: DEFAULT_FRICTION,
            time_step: DEFAULT_TIME_STEP,
            edge_mode: EdgeMode::Wrap,
            bin_occupancy: DEFAULT_BIN_OCCUPANCY,
        }
    }
}

/// The simulation state: positions, velocities, colors, and the matrix
#[derive(Clone, Debug)]
pub struct ParticleLife {
    config: LifeConfig,
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    colors: Vec<usize>,
    matrix: Vec<f32>,
    hash: SpatialHash,
}

impl ParticleLife {
    /// Create a seeded simulation with random positions, colors, and matrix
    ///
    /// Matrix entries are drawn with equal probability from
    /// `[-1.0, -0.3]` or `[0.3, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns an error if a count is zero, the radii are not ordered
    /// `0 < min < max <= 0.5`, the friction is outside `[0, 1]`, or the
    /// time step is not positive.
    pub fn new(config: LifeConfig, seed: u64) -> Result<Self> {
        if config.particle_count == 0 {
            return Err(invalid_parameter(
                "particle_count",
                &config.particle_count,
                &"at least one particle is required",
            ));
        }
        if config.color_count == 0 {
            return Err(invalid_parameter(
                "color_count",
                &config.color_count,
                &"at least one color is required",
            ));
        }
        if config.min_radius <= 0.0 || config.min_radius >= config.max_radius {
            return Err(invalid_parameter(
                "min_radius",
                &config.min_radius,
                &"must satisfy 0 < min_radius < max_radius",
            ));
        }
        // Above half the world size the minimum-image convention breaks down
        if config.max_radius > 0.5 {
            return Err(invalid_parameter(
                "max_radius",
                &config.max_radius,
                &"must not exceed 0.5",
            ));
        }
        if !(0.0..=1.0).contains(&config.friction) {
            return Err(invalid_parameter(
                "friction",
                &config.friction,
                &"must lie in [0, 1]",
            ));
        }
        if config.time_step <= 0.0 {
            return Err(invalid_parameter(
                "time_step",
                &config.time_step,
                &"must be positive",
            ));
        }
        if config.bin_occupancy == 0 {
            return Err(invalid_parameter(
                "bin_occupancy",
                &config.bin_occupancy,
                &"at least one particle per bin is required",
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..config.particle_count)
            .map(|_| Vec2::new(rng.random::<f32>(), rng.random::<f32>()))
            .collect();
        let velocities = vec![Vec2::ZERO; config.particle_count];
        let colors = (0..config.particle_count)
            .map(|_| rng.random_range(0..config.color_count))
            .collect();
        let matrix = (0..config.color_count * config.color_count)
            .map(|_| {
                let magnitude = rng.random_range(ATTRACTION_FLOOR..=ATTRACTION_CEILING);
                if rng.random::<bool>() {
                    magnitude
                } else {
                    -magnitude
                }
            })
            .collect();

        let hash = SpatialHash::new(
            bins_per_side(&config),
            config.edge_mode == EdgeMode::Wrap,
        );

        Ok(Self {
            config,
            positions,
            velocities,
            colors,
            matrix,
            hash,
        })
    }

    /// Advance the simulation one time step
    pub fn tick(&mut self) {
        self.hash.rebuild(&self.positions);

        let beta = self.config.min_radius / self.config.max_radius;
        let max_radius = self.config.max_radius;
        let strength = self.config.attraction_strength;
        let color_count = self.config.color_count;
        let wrap = self.config.edge_mode == EdgeMode::Wrap;

        let mut forces: Vec<Vec2> = Vec::with_capacity(self.positions.len());
        let mut nearby: Vec<usize> = Vec::new();
        for (index, &position) in self.positions.iter().enumerate() {
            let color = self.colors.get(index).copied().unwrap_or(0);
            let mut force = Vec2::ZERO;
            self.hash.candidates_into(position, &mut nearby);
            for &other in &nearby {
                if other == index {
                    continue;
                }
                let Some(&other_position) = self.positions.get(other) else {
                    continue;
                };
                let mut delta = other_position - position;
                if wrap {
                    delta = minimum_image(delta);
                }
                let distance = delta.length();
                if distance <= 0.0 || distance >= max_radius {
                    continue;
                }
                let other_color = self.colors.get(other).copied().unwrap_or(0);
                let attraction = self
                    .matrix
                    .get(color * color_count + other_color)
                    .copied()
                    .unwrap_or(0.0);
                let magnitude = interaction_force(distance / max_radius, attraction, beta);
                force += delta / distance * magnitude;
            }
            forces.push(force * max_radius * strength);
        }

        let keep = 1.0 - self.config.friction;
        let time_step = self.config.time_step;
        for (velocity, force) in self.velocities.iter_mut().zip(&forces) {
            *velocity *= keep;
            *velocity += *force * time_step;
        }

        match self.config.edge_mode {
            EdgeMode::Wrap => {
                for (position, velocity) in self.positions.iter_mut().zip(&self.velocities) {
                    *position += *velocity;
                    position.x = position.x.rem_euclid(1.0);
                    position.y = position.y.rem_euclid(1.0);
                }
            }
            EdgeMode::Contain => {
                for (position, velocity) in self.positions.iter_mut().zip(self.velocities.iter_mut())
                {
                    *position += *velocity;
                    if position.x < 0.0 {
                        position.x = -position.x;
                        velocity.x = -velocity.x;
                    } else if position.x > 1.0 {
                        position.x = 2.0 - position.x;
                        velocity.x = -velocity.x;
                    }
                    if position.y < 0.0 {
                        position.y = -position.y;
                        velocity.y = -velocity.y;
                    } else if position.y > 1.0 {
                        position.y = 2.0 - position.y;
                        velocity.y = -velocity.y;
                    }
                }
            }
        }
    }

    /// Current particle positions
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Current particle velocities
    pub fn velocities(&self) -> &[Vec2] {
        &self.velocities
    }

    /// Color index per particle
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Attraction coefficient from color `a` toward color `b`
    pub fn attraction(&self, a: usize, b: usize) -> f32 {
        self.matrix
            .get(a * self.config.color_count + b)
            .copied()
            .unwrap_or(0.0)
    }

    /// The configuration this simulation runs with
    pub const fn config(&self) -> &LifeConfig {
        &self.config
    }
}

/// The interaction kernel on normalized distance `r = distance / max_radius`
///
/// Below `beta` every pair repels regardless of color; between `beta` and 1
/// the attraction coefficient scales a tent peaking halfway; beyond 1 the
/// kernel is zero. Continuous at `beta` and at 1.
pub fn interaction_force(r: f32, attraction: f32, beta: f32) -> f32 {
    if r < beta {
        r / beta - 1.0
    } else if r < 1.0 {
        let peak_offset = r.mul_add(2.0, -1.0 - beta).abs();
        attraction * (1.0 - peak_offset / (1.0 - beta))
    } else {
        0.0
    }
}

// Shortest displacement on the torus
fn minimum_image(mut delta: Vec2) -> Vec2 {
    if delta.x > 0.5 {
        delta.x -= 1.0;
    } else if delta.x < -0.5 {
        delta.x += 1.0;
    }
    if delta.y > 0.5 {
        delta.y -= 1.0;
    } else if delta.y < -0.5 {
        delta.y += 1.0;
    }
    delta
}

// Bin side count: fine enough that a bin spans at least the cutoff radius,
// coarse enough to keep bins near the occupancy target
fn bins_per_side(config: &LifeConfig) -> usize {
    let radius_limit = ((1.0 / config.max_radius) as usize).max(1);
    let occupancy_limit = ((config.particle_count as f32 / config.bin_occupancy as f32).sqrt()
        as usize)
        .max(1);
    radius_limit.min(occupancy_limit).max(1)
}

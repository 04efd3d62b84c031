//! Lifespan particles and the emitter that recycles them

use glam::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Starting lifespan for freshly emitted particles
pub const INITIAL_LIFESPAN: f32 = 255.0;
/// Lifespan drained per update
pub const LIFESPAN_DECAY: f32 = 2.0;

const TORQUE: f32 = 0.01;
const SPIN_LIMIT: f32 = 0.5;
const RESPAWN_LIFESPAN_MIN: f32 = 100.0;
const RESPAWN_LIFESPAN_MAX: f32 = 400.0;

/// One short-lived particle with spin
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    angle: f32,
    angular_velocity: f32,
    lifespan: f32,
}

impl Particle {
    /// Emit a particle at `origin` with randomized velocity and spin
    pub fn spawn(origin: Vec2, rng: &mut StdRng) -> Self {
        Self::spawn_with_lifespan(origin, INITIAL_LIFESPAN, rng)
    }

    fn spawn_with_lifespan(origin: Vec2, lifespan: f32, rng: &mut StdRng) -> Self {
        Self {
            position: origin,
            velocity: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-2.0..0.0)),
            acceleration: Vec2::ZERO,
            angle: rng.random_range(-2.0..2.0),
            angular_velocity: rng.random_range(-1.0_f32..1.0).clamp(-SPIN_LIMIT, SPIN_LIMIT),
            lifespan,
        }
    }

    /// Accumulate a force for the next update
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Integrate one tick: motion, spin, and lifespan drain
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
        self.angular_velocity = (self.angular_velocity + TORQUE).clamp(-SPIN_LIMIT, SPIN_LIMIT);
        self.angle += self.angular_velocity;
        self.lifespan -= LIFESPAN_DECAY;
    }

    /// Current position
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current rotation in radians
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// Remaining lifespan
    pub const fn lifespan(&self) -> f32 {
        self.lifespan
    }

    /// Whether the lifespan has drained away
    pub const fn is_dead(&self) -> bool {
        self.lifespan <= 0.0
    }
}

/// Spawns particles at a fixed origin and recycles the dead
///
/// Without a budget the emitter is a steady fountain: dead particles are
/// replaced in place. With a budget, each replacement spends one unit and
/// draws its lifespan from a wider range; once the budget hits zero, dead
/// particles are removed instead.
#[derive(Clone, Debug)]
pub struct Emitter {
    origin: Vec2,
    particles: Vec<Particle>,
    budget: Option<usize>,
    rng: StdRng,
}

impl Emitter {
    /// Create a steady emitter holding `amount` live particles
    pub fn new(origin: Vec2, amount: usize, seed: u64) -> Self {
        Self::build(origin, amount, None, seed)
    }

    /// Create an emitter limited to `budget` replacements
    pub fn with_budget(origin: Vec2, amount: usize, budget: usize, seed: u64) -> Self {
        Self::build(origin, amount, Some(budget), seed)
    }

    fn build(origin: Vec2, amount: usize, budget: Option<usize>, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..amount)
            .map(|_| Particle::spawn(origin, &mut rng))
            .collect();
        Self {
            origin,
            particles,
            budget,
            rng,
        }
    }

    /// Advance every particle one tick under `gravity`, then recycle
    pub fn update(&mut self, gravity: Vec2) {
        for particle in &mut self.particles {
            particle.apply_force(gravity);
            particle.update();
        }

        let mut index = 0;
        while index < self.particles.len() {
            if !self.particles.get(index).is_some_and(Particle::is_dead) {
                index += 1;
                continue;
            }
            match self.budget.as_mut() {
                None => {
                    let fresh = Particle::spawn(self.origin, &mut self.rng);
                    if let Some(slot) = self.particles.get_mut(index) {
                        *slot = fresh;
                    }
                    index += 1;
                }
                Some(0) => {
                    self.particles.swap_remove(index);
                }
                Some(remaining) => {
                    *remaining -= 1;
                    let lifespan =
                        self.rng.random_range(RESPAWN_LIFESPAN_MIN..RESPAWN_LIFESPAN_MAX);
                    let fresh = Particle::spawn_with_lifespan(self.origin, lifespan, &mut self.rng);
                    if let Some(slot) = self.particles.get_mut(index) {
                        *slot = fresh;
                    }
                    index += 1;
                }
            }
        }
    }

    /// The live particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Whether a budgeted emitter has spent every replacement
    pub fn is_exhausted(&self) -> bool {
        self.budget == Some(0)
    }
}

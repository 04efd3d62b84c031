use rand::{Rng, rngs::StdRng};

/// Standard normal draw via the Box-Muller transform
///
/// Used for Gaussian walker steps. The uniform draw is rejected while it is
/// too small to take a logarithm of, so the transform never produces an
/// infinite magnitude.
pub fn standard_normal(rng: &mut StdRng) -> f64 {
    let mut primary = rng.random::<f64>();
    while primary <= f64::MIN_POSITIVE {
        primary = rng.random::<f64>();
    }
    let secondary = rng.random::<f64>();
    (-2.0 * primary.ln()).sqrt() * (std::f64::consts::TAU * secondary).cos()
}

/// Scale a noise sample from `[-1, 1]` onto `[0, span]`
///
/// Noise generators hand back signed values; flow field headings and wind
/// magnitudes want an unsigned range, so the sample is shifted into the unit
/// interval first.
pub fn map_noise(value: f64, span: f64) -> f64 {
    value.mul_add(0.5, 0.5) * span
}

//! Tests for the shared sampling helpers

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use sketchkit::math::sampling::{map_noise, standard_normal};

    // Tests the Box-Muller draws center on zero with unit variance
    // Verified by dropping the square root from the transform
    #[test]
    fn test_standard_normal_statistics() {
        let mut rng = StdRng::seed_from_u64(2);
        let draws: Vec<f64> = (0..10_000).map(|_| standard_normal(&mut rng)).collect();

        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        let variance =
            draws.iter().map(|draw| (draw - mean).powi(2)).sum::<f64>() / draws.len() as f64;

        assert!(mean.abs() < 0.1);
        assert!(variance > 0.8 && variance < 1.2);
    }

    // Tests every draw is finite and of sane magnitude
    // Verified by skipping the small-uniform rejection loop
    #[test]
    fn test_standard_normal_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let draw = standard_normal(&mut rng);
            assert!(draw.is_finite());
            assert!(draw.abs() < 10.0);
        }
    }

    // Tests the same seed replays the same draws
    // Verified by mixing in entropy beyond the seed
    #[test]
    fn test_standard_normal_deterministic() {
        let mut first = StdRng::seed_from_u64(9);
        let mut second = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert!(
                (standard_normal(&mut first) - standard_normal(&mut second)).abs() < f64::EPSILON
            );
        }
    }

    // Tests noise mapping spans exactly zero to the requested span
    // Verified by scaling before the shift into the unit interval
    #[test]
    fn test_map_noise_endpoints() {
        assert!(map_noise(-1.0, 10.0).abs() < f64::EPSILON);
        assert!((map_noise(1.0, 10.0) - 10.0).abs() < f64::EPSILON);
        assert!((map_noise(0.0, 10.0) - 5.0).abs() < f64::EPSILON);
        assert!((map_noise(0.0, 0.01) - 0.005).abs() < f64::EPSILON);
        assert!((map_noise(0.5, 2.0) - 1.5).abs() < f64::EPSILON);
    }

    // Tests mapping preserves ordering across the input range
    // Verified by folding negative samples onto the positive half
    #[test]
    fn test_map_noise_monotonic() {
        let span = 4.0 * std::f64::consts::PI;
        let mut last = -1.0;
        for step in 0..=20 {
            let value = f64::from(step).mul_add(0.1, -1.0);
            let mapped = map_noise(value, span);
            assert!(mapped >= last);
            assert!((0.0..=span).contains(&mapped));
            last = mapped;
        }
    }
}

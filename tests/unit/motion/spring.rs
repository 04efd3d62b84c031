//! Tests for the anchored spring force and length constraint

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use sketchkit::motion::{Body, Spring};
    use sketchkit::motion::spring::BOB_DAMPING;

    // Verifies rest length and stiffness validation
    // Verified by accepting a zero rest length
    #[test]
    fn test_new_rejects_bad_parameters() {
        assert!(Spring::new(Vec2::ZERO, 0.0, 0.2).is_err());
        assert!(Spring::new(Vec2::ZERO, -10.0, 0.2).is_err());
        assert!(Spring::new(Vec2::ZERO, f32::NAN, 0.2).is_err());
        assert!(Spring::new(Vec2::ZERO, 110.0, -0.1).is_err());
        assert!(Spring::new(Vec2::ZERO, 110.0, f32::NAN).is_err());

        let spring = Spring::new(Vec2::new(5.0, 6.0), 110.0, 0.2).expect("spring builds");
        assert_eq!(spring.anchor(), Vec2::new(5.0, 6.0));
        assert!((spring.rest_length() - 110.0).abs() < f32::EPSILON);
    }

    // Tests a stretched spring pulls the bob back with Hooke's law
    // Verified by dropping the stretch term from the force
    #[test]
    fn test_stretched_spring_pulls_in() {
        let spring = Spring::new(Vec2::ZERO, 110.0, 0.2).expect("spring builds");
        let mut bob = Body::new(Vec2::new(0.0, 160.0), 2.0).expect("body builds");

        // Stretch of 50 at stiffness 0.2 is a force of 10 along the spring
        spring.apply(&mut bob);
        bob.update();
        assert_eq!(bob.velocity(), Vec2::new(0.0, -5.0));
        assert_eq!(bob.position(), Vec2::new(0.0, 155.0));
    }

    // Tests a compressed spring pushes the bob away from the anchor
    // Verified by pulling inward regardless of stretch sign
    #[test]
    fn test_compressed_spring_pushes_out() {
        let spring = Spring::new(Vec2::ZERO, 110.0, 0.2).expect("spring builds");
        let mut bob = Body::new(Vec2::new(0.0, 60.0), 2.0).expect("body builds");

        spring.apply(&mut bob);
        bob.update();
        assert_eq!(bob.velocity(), Vec2::new(0.0, 5.0));
    }

    // Tests a spring at rest length exerts no force
    // Verified by applying a residual force at rest
    #[test]
    fn test_spring_at_rest_is_idle() {
        let spring = Spring::new(Vec2::ZERO, 110.0, 0.2).expect("spring builds");
        let mut bob = Body::new(Vec2::new(0.0, 110.0), 2.0).expect("body builds");

        spring.apply(&mut bob);
        bob.update();
        assert_eq!(bob.velocity(), Vec2::ZERO);
        assert_eq!(bob.position(), Vec2::new(0.0, 110.0));
    }

    // Tests length limits snap the bob onto the limit circle and stop it
    // Verified by clamping length while letting the bob keep its speed
    #[test]
    fn test_constrain_length_halts_at_limits() {
        let spring = Spring::new(Vec2::ZERO, 110.0, 0.2).expect("spring builds");

        let mut far = Body::new(Vec2::new(0.0, 300.0), 2.0).expect("body builds");
        far.apply_force(Vec2::new(0.0, 8.0));
        far.update();
        spring.constrain_length(&mut far, 30.0, 200.0);
        assert_eq!(far.position(), Vec2::new(0.0, 200.0));
        assert_eq!(far.velocity(), Vec2::ZERO);

        let mut near = Body::new(Vec2::new(0.0, 10.0), 2.0).expect("body builds");
        spring.constrain_length(&mut near, 30.0, 200.0);
        assert_eq!(near.position(), Vec2::new(0.0, 30.0));

        // Inside the limits nothing changes, motion included
        let mut inside = Body::new(Vec2::new(0.0, 100.0), 2.0).expect("body builds");
        inside.apply_force(Vec2::new(2.0, 0.0));
        inside.update();
        let velocity = inside.velocity();
        let position = inside.position();
        spring.constrain_length(&mut inside, 30.0, 200.0);
        assert_eq!(inside.velocity(), velocity);
        assert_eq!(inside.position(), position);
    }

    // Tests a damped hanging bob settles where spring force balances gravity
    // Verified by settling at rest length instead of the loaded length
    #[test]
    fn test_hanging_bob_settles_at_equilibrium() {
        let spring = Spring::new(Vec2::ZERO, 100.0, 0.2).expect("spring builds");
        let mut bob = Body::new(Vec2::new(0.0, 150.0), 2.0).expect("body builds");
        let gravity = Vec2::new(0.0, 1.0);

        for _ in 0..1000 {
            spring.apply(&mut bob);
            bob.apply_force(gravity);
            bob.damped_update(BOB_DAMPING);
        }

        // Stiffness 0.2 stretches 5 units to carry a unit of gravity
        assert!((bob.position().y - 105.0).abs() < 1.0);
        assert!(bob.position().x.abs() < f32::EPSILON);
        assert!(bob.velocity().length() < 0.1);
    }
}

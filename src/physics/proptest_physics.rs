//! Property-based tests for projectile physics using proptest.
//!
//! These tests verify the gravity step and collision rules across the whole
//! play area rather than at hand-picked points.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::collision::{classify, ProjectileFate};
use crate::projectile::create_projectile;
use crate::test_utils::{assertions, fixtures};
use crate::types::SlingshotConfig;

/// Positions in the play area at least `min` pixels from the body.
fn position_away_from_body(min: f64) -> impl Strategy<Value = DVec2> {
    (0.0f64..800.0, 0.0f64..600.0)
        .prop_map(|(x, y)| DVec2::new(x, y))
        .prop_filter("too close to the body", move |p| {
            p.distance(DVec2::new(400.0, 300.0)) >= min
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// One step adds exactly (a cos θ, a sin θ) to the velocity.
    #[test]
    fn prop_velocity_change_matches_inverse_square(
        pos in position_away_from_body(1.0),
        vx in -5.0f64..5.0,
        vy in -5.0f64..5.0,
    ) {
        let config = SlingshotConfig::default();
        let body = fixtures::default_body(&config);
        let mut projectile = fixtures::moving_projectile(pos, DVec2::new(vx, vy), &config);

        projectile.update_position(&body, &config);

        let d = pos.distance(body.position);
        let a = config.gravity_constant * body.mass / (d * d);
        let theta = (body.position.y - pos.y).atan2(body.position.x - pos.x);
        let dv = projectile.vel - DVec2::new(vx, vy);

        prop_assert!((dv.x - a * theta.cos()).abs() <= 1e-12 * a.max(1.0));
        prop_assert!((dv.y - a * theta.sin()).abs() <= 1e-12 * a.max(1.0));
        prop_assert_eq!(projectile.pos, pos + projectile.vel);
    }

    /// Gravity always pulls toward the body.
    #[test]
    fn prop_gravity_is_attractive(
        pos in position_away_from_body(1.0),
    ) {
        let config = SlingshotConfig::default();
        let body = fixtures::default_body(&config);
        let mut projectile = fixtures::resting_projectile(pos, &config);

        projectile.update_position(&body, &config);

        let toward_body = (body.position - pos).normalize();
        prop_assert!(projectile.vel.dot(toward_body) > 0.0);
    }

    /// A central force leaves angular momentum about the body unchanged
    /// under velocity-then-position Euler stepping.
    #[test]
    fn prop_angular_momentum_conserved(
        pos in position_away_from_body(150.0),
        vx in -2.0f64..2.0,
        vy in -2.0f64..2.0,
    ) {
        let config = SlingshotConfig::default();
        let body = fixtures::default_body(&config);
        let mut projectile = fixtures::moving_projectile(pos, DVec2::new(vx, vy), &config);
        let initial_l = assertions::angular_momentum(&projectile, &body);

        for _ in 0..50 {
            projectile.update_position(&body, &config);
            if projectile.distance_to(&body) <= config.body_radius {
                break;
            }
        }

        let final_l = assertions::angular_momentum(&projectile, &body);
        prop_assert!(
            (final_l - initial_l).abs() <= 1e-9 * initial_l.abs().max(1.0),
            "L drifted from {} to {}", initial_l, final_l
        );
    }

    /// Anything within the body's radius is an impact on its surface.
    #[test]
    fn prop_inside_radius_hits_surface(
        r in 0.0f64..69.99,
        angle in -std::f64::consts::PI..std::f64::consts::PI,
    ) {
        let config = SlingshotConfig::default();
        let body = fixtures::default_body(&config);
        let pos = body.position + r * DVec2::new(angle.cos(), angle.sin());
        let projectile = fixtures::resting_projectile(pos, &config);

        match classify(&projectile, &body, &config) {
            ProjectileFate::Impact { point } => {
                prop_assert!((point.distance(body.position) - config.body_radius).abs() < 1e-9);
            }
            other => prop_assert!(false, "expected impact, got {:?}", other),
        }
    }

    /// Positions off the play area are lost, never exploded.
    #[test]
    fn prop_off_screen_is_out_of_bounds(
        x in -500.0f64..1300.0,
        y in -500.0f64..1100.0,
    ) {
        let config = SlingshotConfig::default();
        prop_assume!(!config.in_bounds(DVec2::new(x, y)));

        let body = fixtures::default_body(&config);
        let projectile = fixtures::resting_projectile(DVec2::new(x, y), &config);

        prop_assert_eq!(classify(&projectile, &body, &config), ProjectileFate::OutOfBounds);
    }

    /// Launch velocity is the drag vector over the velocity scale.
    #[test]
    fn prop_launch_velocity_scales_drag(
        ox in 0.0f64..800.0,
        oy in 0.0f64..600.0,
        tx in 0.0f64..800.0,
        ty in 0.0f64..600.0,
    ) {
        let config = SlingshotConfig::default();
        let origin = DVec2::new(ox, oy);
        let target = DVec2::new(tx, ty);
        let projectile = create_projectile(origin, target, &config);

        let drag = projectile.vel * config.velocity_scale;
        prop_assert!((drag - (target - origin)).length() < 1e-9);
    }
}

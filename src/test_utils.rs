//! Test utilities for slingshot simulation tests.
//!
//! Provides fixtures for the standard scene and assertions for the
//! invariants a central-force Euler step preserves.

use bevy::math::DVec2;

use crate::body::CelestialBody;
use crate::projectile::Projectile;
use crate::types::SlingshotConfig;

/// Fixtures for creating test scenes.
pub mod fixtures {
    use super::*;

    /// The central body a default run starts with: (400, 300), mass 100.
    pub fn default_body(config: &SlingshotConfig) -> CelestialBody {
        CelestialBody::from_config(config)
    }

    /// A projectile at rest at `pos`.
    pub fn resting_projectile(pos: DVec2, config: &SlingshotConfig) -> Projectile {
        Projectile::new(pos, DVec2::ZERO, config.projectile_mass)
    }

    /// A projectile at `pos` moving with `vel` pixels per step.
    pub fn moving_projectile(pos: DVec2, vel: DVec2, config: &SlingshotConfig) -> Projectile {
        Projectile::new(pos, vel, config.projectile_mass)
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Angular momentum per unit mass about the body's center.
    ///
    /// L = r × v (z-component of the 2D cross product)
    pub fn angular_momentum(projectile: &Projectile, body: &CelestialBody) -> f64 {
        let r = projectile.pos - body.position;
        r.x * projectile.vel.y - r.y * projectile.vel.x
    }

    /// Assert that angular momentum is conserved within tolerance.
    ///
    /// # Panics
    /// Panics if relative angular momentum drift exceeds tolerance.
    pub fn assert_angular_momentum_conserved(initial_l: f64, final_l: f64, tolerance: f64) {
        let drift = if initial_l.abs() > 1e-10 {
            ((final_l - initial_l) / initial_l).abs()
        } else {
            (final_l - initial_l).abs()
        };
        assert!(
            drift <= tolerance,
            "Angular momentum not conserved: initial={initial_l:.6e}, final={final_l:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_projectile_has_no_angular_momentum() {
        let config = SlingshotConfig::default();
        let body = fixtures::default_body(&config);
        let projectile = fixtures::resting_projectile(DVec2::new(100.0, 100.0), &config);

        assert_eq!(assertions::angular_momentum(&projectile, &body), 0.0);
    }

    #[test]
    fn test_radial_motion_has_no_angular_momentum() {
        let config = SlingshotConfig::default();
        let body = fixtures::default_body(&config);
        let projectile =
            fixtures::moving_projectile(DVec2::new(100.0, 300.0), DVec2::new(3.0, 0.0), &config);

        assert_eq!(assertions::angular_momentum(&projectile, &body), 0.0);
    }

    #[test]
    fn test_tangential_launch_conserves_angular_momentum() {
        let config = SlingshotConfig::default();
        let body = fixtures::default_body(&config);
        let mut projectile =
            fixtures::moving_projectile(DVec2::new(400.0, 100.0), DVec2::new(1.5, 0.0), &config);
        let initial_l = assertions::angular_momentum(&projectile, &body);

        for _ in 0..100 {
            projectile.update_position(&body, &config);
        }

        assertions::assert_angular_momentum_conserved(
            initial_l,
            assertions::angular_momentum(&projectile, &body),
            1e-9,
        );
    }
}

//! Explicit Euler integration.
//!
//! One step is one rendered frame: velocity is expressed in pixels per step
//! and acceleration in pixels per step squared, so no timestep multiplies in.

use bevy::math::DVec2;

/// Result of advancing a point mass by one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerStep {
    pub pos: DVec2,
    pub vel: DVec2,
}

/// Advance by one step: velocity first, then position with the new velocity.
#[inline]
pub fn euler_step(pos: DVec2, vel: DVec2, acc: DVec2) -> EulerStep {
    let vel = vel + acc;
    EulerStep { pos: pos + vel, vel }
}

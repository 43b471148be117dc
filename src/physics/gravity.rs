//! Inverse-square attraction toward the central body.

use bevy::math::DVec2;

/// Compute the gravitational acceleration a body of mass `body_mass` at
/// `body_pos` imparts on an object of mass `self_mass` at `pos`.
///
/// The force is computed first and then divided by the object's own mass.
/// Analytically the mass cancels (`a = G * M / d²`), but the two-step form
/// keeps results bit-for-bit comparable with the force-based formulation.
///
/// Returns `None` when the object is closer than `min_distance`, where the
/// inverse-square law blows up.
///
/// # Arguments
/// * `pos` - Position of the attracted object (pixels)
/// * `self_mass` - Mass of the attracted object
/// * `body_pos` - Position of the attracting body (pixels)
/// * `body_mass` - Mass of the attracting body
/// * `g` - Gravitational constant
/// * `min_distance` - Smallest distance at which gravity is evaluated
#[inline]
pub fn gravitational_acceleration(
    pos: DVec2,
    self_mass: f64,
    body_pos: DVec2,
    body_mass: f64,
    g: f64,
    min_distance: f64,
) -> Option<DVec2> {
    let distance = pos.distance(body_pos);
    if distance < min_distance {
        return None;
    }

    let force = g * self_mass * body_mass / (distance * distance);
    let acceleration = force / self_mass;

    let angle = bearing(pos, body_pos);

    Some(DVec2::new(
        acceleration * angle.cos(),
        acceleration * angle.sin(),
    ))
}

/// Angle of `to` as seen from `from`, in radians.
#[inline]
pub fn bearing(from: DVec2, to: DVec2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

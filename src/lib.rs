//! Slingshot - Gravitational Slingshot Simulation
//!
//! A library crate providing the simulation components (physics, collision,
//! explosion lifecycle, launch handling) for testing and integration purposes.

pub mod assets;
pub mod body;
pub mod camera;
pub mod collision;
pub mod explosion;
pub mod input;
pub mod launch;
pub mod physics;
pub mod projectile;
pub mod render;
pub mod simulation;
pub mod sound;
pub mod types;

#[cfg(test)]
pub mod test_utils;

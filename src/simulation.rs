//! Per-step simulation ordering.
//!
//! Each step runs physics, then collision resolution, then explosion spawn
//! and expiry, strictly in that order. The schedule is a parameter: the app
//! steps in `FixedUpdate` at the configured frame rate, while headless tests
//! drive the same systems from `Update` one step per `App::update`.

use bevy::ecs::schedule::{InternedScheduleLabel, ScheduleLabel};
use bevy::prelude::*;

use crate::collision::{resolve_projectiles, Impact};
use crate::explosion::{prune_explosions, spawn_explosions};
use crate::physics::advance_projectiles;
use crate::types::SimulationSet;

/// Plugin wiring the simulation systems into a schedule.
pub struct SimulationPlugin {
    schedule: InternedScheduleLabel,
}

impl SimulationPlugin {
    /// Run the simulation in the given schedule.
    pub fn new(schedule: impl ScheduleLabel) -> Self {
        Self {
            schedule: schedule.intern(),
        }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new(FixedUpdate)
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Impact>()
            .configure_sets(
                self.schedule,
                (
                    SimulationSet::Physics,
                    SimulationSet::Resolve,
                    SimulationSet::Effects,
                )
                    .chain(),
            )
            .add_systems(
                self.schedule,
                (
                    advance_projectiles.in_set(SimulationSet::Physics),
                    resolve_projectiles.in_set(SimulationSet::Resolve),
                    (spawn_explosions, prune_explosions)
                        .chain()
                        .in_set(SimulationSet::Effects),
                ),
            );
    }
}

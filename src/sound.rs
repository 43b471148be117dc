//! Impact sound playback.

use bevy::ecs::schedule::{InternedScheduleLabel, ScheduleLabel};
use bevy::prelude::*;

use crate::assets::ImpactSound;
use crate::collision::Impact;
use crate::types::SimulationSet;

/// Plugin playing the impact sound.
///
/// Runs in the same schedule as [`SimulationPlugin`](crate::simulation::SimulationPlugin)
/// so the sound starts in the step that produced the impact.
pub struct SoundPlugin {
    schedule: InternedScheduleLabel,
}

impl SoundPlugin {
    pub fn new(schedule: impl ScheduleLabel) -> Self {
        Self {
            schedule: schedule.intern(),
        }
    }
}

impl Default for SoundPlugin {
    fn default() -> Self {
        Self::new(FixedUpdate)
    }
}

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            self.schedule,
            play_impact_sound.in_set(SimulationSet::Effects),
        );
    }
}

/// Play the impact sound once per impact.
///
/// Each playback is its own entity and despawns when finished, so
/// overlapping impacts overlap their sounds.
pub fn play_impact_sound(
    mut commands: Commands,
    mut impacts: MessageReader<Impact>,
    sound: Option<Res<ImpactSound>>,
) {
    let Some(sound) = sound else {
        // Drain so a late-loaded sound doesn't replay old impacts
        impacts.clear();
        return;
    };

    for _ in impacts.read() {
        commands.spawn((AudioPlayer::new(sound.0.clone()), PlaybackSettings::DESPAWN));
    }
}

use bevy::prelude::*;

/// Ordering for one-time scene construction.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildScene,
    BuildCraft,
    BuildCameras,
}

/// Per-frame ordering: gather input, run the tick, then apply its side effects.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Tick,
    Apply,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildScene,
                StartupStage::BuildCraft,
                StartupStage::BuildCameras,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (FlightSet::Input, FlightSet::Tick, FlightSet::Apply).chain(),
        );
    }
}

mod controller;
mod flight;
mod staging;

pub use controller::{key_code, keyboard_input_system, panel_input_system};
pub use flight::{
    ChaseCamera, CollisionOccurred, CraftMarker, FlightPlugin, FlightSim, LatestReadouts,
    PanelState, PendingInput, SceneWorld, SimCommandEvent, SoundOutput, StepMode,
};
pub use staging::{FlightSet, StartupSequencePlugin, StartupStage};

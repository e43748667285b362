use std::{env, error::Error, time::Duration};

use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};

use jetsim::{
    plugins::{FlightSim, LatestReadouts, PendingInput, SceneWorld, SoundOutput},
    resources::{AudioBridge, SimulationConfig},
    FlightPlugin, InputEvent,
};

const FRAME_RATE: f64 = 60.0;
const FRAMES: u32 = 600;

/// Scripted pilot input for the headless run.
fn scripted_input(frame: u32) -> Option<InputEvent> {
    match frame {
        1 => Some(InputEvent::Takeoff),
        2 => Some(InputEvent::StartRecording),
        120 => Some(InputEvent::ToggleObstacle),
        300 => Some(InputEvent::StopRecording),
        301 => Some(InputEvent::ToggleDayNight),
        360 => Some(InputEvent::StartPlayback),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match env::args().nth(1) {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let (bridge, audio) = AudioBridge::channel();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), FlightPlugin::new(config)))
        .insert_resource(SoundOutput(bridge))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / FRAME_RATE,
        )));

    for frame in 0..FRAMES {
        if let Some(event) = scripted_input(frame) {
            app.world_mut().resource_mut::<PendingInput>().push(event);
        }
        app.update();
    }

    let readouts = app.world().resource::<LatestReadouts>();
    for line in readouts.lines() {
        info!("{}", line);
    }

    let sim = app.world().resource::<FlightSim>();
    info!(
        "Phase {:?}, {} collisions, {} samples recorded",
        sim.phase(),
        sim.state().collision.collision_count,
        sim.state().recorder.path.len()
    );
    info!(
        "Scene objects: {:?}",
        app.world().resource::<SceneWorld>().labels()
    );
    info!("{} audio commands issued", audio.try_iter().count());

    Ok(())
}

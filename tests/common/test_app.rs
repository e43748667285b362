use std::time::Duration;

use bevy::{prelude::*, time::TimeUpdateStrategy};
use crossbeam_channel::Receiver;
use jetsim::{
    plugins::{FlightSim, PendingInput, SceneWorld, SoundOutput},
    resources::{AudioBridge, AudioCommand, SimulationConfig, WorldList},
    FlightPlugin, InputEvent, Simulation,
};

use super::create_test_config;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
    time_step: f64,
    with_audio: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: create_test_config(),
            time_step: 1.0 / 60.0,
            with_audio: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_audio(mut self) -> Self {
        self.with_audio = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightPlugin::new(self.config))
            .insert_resource(TimeUpdateStrategy::ManualDuration(
                Duration::from_secs_f64(self.time_step),
            ));

        let audio = if self.with_audio {
            let (bridge, receiver) = AudioBridge::channel();
            app.insert_resource(SoundOutput(bridge));
            Some(receiver)
        } else {
            None
        };

        // Run an initial update to build the scene
        app.update();

        TestApp { app, audio }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    audio: Option<Receiver<AudioCommand>>,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Queue an input event for the next frame.
    pub fn send_input(&mut self, event: InputEvent) {
        self.app
            .world_mut()
            .resource_mut::<PendingInput>()
            .push(event);
    }

    pub fn simulation(&self) -> &Simulation {
        &self.app.world().resource::<FlightSim>().0
    }

    pub fn scene(&self) -> &WorldList {
        &self.app.world().resource::<SceneWorld>().0
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    /// Audio commands forwarded since the last call.
    pub fn drain_audio(&mut self) -> Vec<AudioCommand> {
        self.audio
            .as_ref()
            .map(|receiver| receiver.try_iter().collect())
            .unwrap_or_default()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }
}

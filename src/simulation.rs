use bevy::log::{debug, info, warn};
use serde::Serialize;

use crate::components::{
    CameraComponent, CollisionEvent, CraftControls, CraftPose, FlightPhase, FlightStats,
};
use crate::input::InputEvent;
use crate::resources::{
    AudioCommand, Clock, HostCommand, SessionState, SimCommand, SimError, SimulationConfig,
};
use crate::systems::{
    advance_flight, check_collision, detect_collision, handle_collision, playback_step,
    record_sample, request_takeoff, reset_flight, spawn_scene, start_playback, start_recording,
    stop_recording, toggle_day_night, toggle_obstacle, toggle_playback, toggle_recording,
    update_camera, update_flight_stats,
};

/// Everything a host needs after one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// Final craft pose, absent when no craft is in the scene
    pub craft: Option<CraftPose>,
    pub camera: CameraComponent,
    /// Collision raised this tick, if any
    pub collision: Option<CollisionEvent>,
    /// Side effects in the order they were raised
    pub commands: Vec<SimCommand>,
}

/// Flight simulation session.
///
/// Owns the single authoritative [`SessionState`]; each call to
/// [`Simulation::tick`] runs one full frame to completion:
/// input, flight, collision, stats, recorder/player, camera.
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SessionState,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        let mut state = SessionState::new(config);
        update_camera(&mut state);
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.state.config
    }

    pub fn phase(&self) -> FlightPhase {
        self.state.phase
    }

    pub fn is_airborne(&self) -> bool {
        self.state.is_airborne()
    }

    pub fn controls(&self) -> &CraftControls {
        &self.state.controls
    }

    pub fn stats(&self) -> &FlightStats {
        &self.state.stats
    }

    pub fn camera(&self) -> &CameraComponent {
        &self.state.camera
    }

    pub fn craft_pose(&self) -> Option<CraftPose> {
        self.state.craft.as_ref().map(|craft| craft.pose())
    }

    /// Scene insertions for the craft and the initial backdrop.
    pub fn startup_commands(&mut self) -> Vec<SimCommand> {
        spawn_scene(&mut self.state);
        self.state.commands.drain()
    }

    /// Commands raised outside a tick (direct operation calls).
    pub fn drain_commands(&mut self) -> Vec<SimCommand> {
        self.state.commands.drain()
    }

    /// Run one frame with a wall-clock delta sampled from `clock`.
    pub fn tick_with_clock(&mut self, clock: &mut Clock, events: &[InputEvent]) -> TickReport {
        let dt = clock.update();
        self.tick(dt, events)
    }

    /// Run one frame.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn tick(&mut self, delta_time: f64, events: &[InputEvent]) -> TickReport {
        let dt = if delta_time.is_finite() && delta_time > 0.0 {
            delta_time
        } else {
            0.0
        };

        for event in events {
            self.handle_input(*event);
        }

        self.state.collision.decay(dt);

        let mut collision = None;
        if self.state.craft.is_some() {
            let airborne = self.state.is_airborne();

            let advanced = advance_flight(&mut self.state);
            self.report(advanced);

            if airborne {
                collision = detect_collision(&mut self.state);
                let updated = update_flight_stats(&mut self.state, dt);
                self.report(updated);
            }

            self.run_recorder();
        } else {
            self.report(Err(SimError::NoCraft));
        }

        update_camera(&mut self.state);

        TickReport {
            craft: self.craft_pose(),
            camera: self.state.camera,
            collision,
            commands: self.state.commands.drain(),
        }
    }

    /// Playback takes precedence: while replaying, no samples are recorded.
    fn run_recorder(&mut self) {
        if self.state.recorder.playing_back {
            if self.state.recorder.recording {
                debug!("Recording paused during playback");
            }
            let played = playback_step(&mut self.state).map(|_| ());
            self.report(played);
        } else if self.state.recorder.recording {
            let recorded = record_sample(&mut self.state);
            self.report(recorded);
        }
    }

    fn report(&mut self, result: Result<(), SimError>) {
        match result {
            Ok(()) => {}
            Err(SimError::TakeoffBlocked { .. }) => {}
            Err(err) => {
                warn!("{}", err);
                self.state.commands.warn(err.to_string());
            }
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        debug!("Input event {:?}", event);
        match event {
            InputEvent::ToggleSingleStep => self.toggle_single_step(),
            // Blocked takeoffs raise their own notice; a missing craft is
            // reported once by the tick.
            InputEvent::Takeoff => {
                if let Err(err) = request_takeoff(&mut self.state) {
                    debug!("Takeoff not performed: {}", err);
                }
            }
            InputEvent::ToggleObstacle => self.toggle_obstacle(),
            InputEvent::StopSounds => self.stop_sounds(),
            InputEvent::ToggleRecording => toggle_recording(&mut self.state),
            InputEvent::TogglePlayback => toggle_playback(&mut self.state),
            InputEvent::Reset | InputEvent::Land => self.reset(),
            InputEvent::StartRecording => start_recording(&mut self.state),
            InputEvent::StopRecording => stop_recording(&mut self.state),
            InputEvent::StartPlayback => start_playback(&mut self.state),
            InputEvent::ToggleDayNight => self.toggle_day_night(),
            InputEvent::SetControls(controls) => self.state.controls = controls,
            InputEvent::SetSlider(slider, value) => {
                slider.apply(&mut self.state.controls, value)
            }
        }
    }

    /// Grounded -> Airborne. See [`request_takeoff`].
    pub fn request_takeoff(&mut self) -> Result<(), SimError> {
        let result = request_takeoff(&mut self.state);
        if let Err(SimError::NoCraft) = result {
            self.report(result.clone());
        }
        result
    }

    pub fn reset(&mut self) {
        reset_flight(&mut self.state);
    }

    /// Whether the craft currently overlaps the obstacle. Pure query.
    pub fn check_collision(&self) -> bool {
        self.state.craft.as_ref().is_some_and(|craft| {
            check_collision(
                &craft.position(),
                self.state.obstacle.as_ref(),
                self.state.collision.threshold,
            )
            .is_some()
        })
    }

    pub fn handle_collision(&mut self) {
        handle_collision(&mut self.state);
    }

    pub fn toggle_obstacle(&mut self) {
        toggle_obstacle(&mut self.state);
    }

    pub fn toggle_day_night(&mut self) {
        toggle_day_night(&mut self.state);
    }

    pub fn stop_sounds(&mut self) {
        self.state.commands.push(AudioCommand::StopAll);
        self.state.flyby_sound = None;
        info!("Stopped all sounds");
    }

    pub fn toggle_single_step(&mut self) {
        self.state.single_step = !self.state.single_step;
        self.state
            .commands
            .push(HostCommand::SetSingleStep(self.state.single_step));
        info!("Single-step physics: {}", self.state.single_step);
    }

    pub fn set_controls(&mut self, controls: CraftControls) {
        self.state.controls = controls;
    }

    pub fn despawn_craft(&mut self) {
        self.state.craft = None;
    }

    /// Put a fresh craft at the configured initial position.
    pub fn spawn_craft(&mut self) {
        let position = self.state.config.flight.initial_position;
        self.state.craft = Some(crate::components::Craft::new(position));
        self.state.stats.reset(position);
        update_camera(&mut self.state);
    }
}

use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::CollisionEvent;
use crate::input::InputEvent;
use crate::panel::{DebugPanel, PanelReadouts};
use crate::plugins::{
    keyboard_input_system, panel_input_system, FlightSet, StartupSequencePlugin, StartupStage,
};
use crate::resources::{
    AudioBridge, HostCommand, SceneRegistry, SimCommand, SimulationConfig, WorldList,
};
use crate::simulation::Simulation;

/// The simulation session owned by the app.
#[derive(Resource, Deref, DerefMut)]
pub struct FlightSim(pub Simulation);

/// Input events gathered this frame, consumed by the next tick.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct PendingInput(pub Vec<InputEvent>);

/// Scene objects placed by the simulation.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct SceneWorld(pub WorldList);

/// Optional sink for audio commands. Without it audio is dropped.
#[derive(Resource, Deref)]
pub struct SoundOutput(pub AudioBridge);

#[derive(Resource, Default, Deref, DerefMut)]
pub struct PanelState(pub DebugPanel);

#[derive(Resource, Default, Deref, DerefMut)]
pub struct LatestReadouts(pub PanelReadouts);

/// Host stepping mode. While `single_step` is on each frame advances the
/// simulation by exactly `fixed_dt` instead of the measured frame delta.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct StepMode {
    pub single_step: bool,
    pub fixed_dt: f64,
}

impl Default for StepMode {
    fn default() -> Self {
        Self {
            single_step: false,
            fixed_dt: 1.0 / 60.0,
        }
    }
}

impl StepMode {
    pub fn delta_time(&self, frame_delta: f64) -> f64 {
        if self.single_step {
            self.fixed_dt
        } else {
            frame_delta
        }
    }
}

#[derive(Event, Debug, Clone, PartialEq)]
pub struct SimCommandEvent(pub SimCommand);

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CollisionOccurred(pub CollisionEvent);

#[derive(Component, Debug, Default)]
pub struct CraftMarker;

#[derive(Component, Debug, Default)]
pub struct ChaseCamera;

pub struct FlightPlugin {
    config: SimulationConfig,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl FlightPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        FlightPlugin { config }
    }

    fn spawn_scene_objects(
        mut sim: ResMut<FlightSim>,
        mut world: ResMut<SceneWorld>,
        mut writer: EventWriter<SimCommandEvent>,
    ) {
        for command in sim.startup_commands() {
            match &command {
                SimCommand::Scene(scene) => {
                    if let Err(err) = world.apply(scene) {
                        warn!("Failed to build scene: {}", err);
                    }
                }
                _ => {
                    writer.send(SimCommandEvent(command));
                }
            }
        }
    }

    fn spawn_craft(mut commands: Commands, sim: Res<FlightSim>) {
        let Some(craft) = sim.state().craft.as_ref() else {
            warn!("No craft configured, skipping craft entity");
            return;
        };
        commands.spawn((
            CraftMarker,
            Name::new(sim.config().scene.craft_label.clone()),
            Transform::from_translation(to_vec3(&craft.position()))
                .with_rotation(to_quat(&craft.spatial.attitude)),
        ));
    }

    fn spawn_camera(mut commands: Commands, sim: Res<FlightSim>) {
        commands.spawn((
            ChaseCamera,
            Name::new("Chase Camera"),
            camera_transform(&sim),
        ));
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }

        app.insert_resource(FlightSim(Simulation::new(self.config.clone())))
            .init_resource::<PendingInput>()
            .init_resource::<SceneWorld>()
            .init_resource::<PanelState>()
            .init_resource::<LatestReadouts>()
            .init_resource::<StepMode>()
            .add_event::<SimCommandEvent>()
            .add_event::<CollisionOccurred>()
            .add_systems(
                Startup,
                (
                    Self::spawn_scene_objects.in_set(StartupStage::BuildScene),
                    Self::spawn_craft.in_set(StartupStage::BuildCraft),
                    Self::spawn_camera.in_set(StartupStage::BuildCameras),
                ),
            )
            .add_systems(
                Update,
                (
                    (keyboard_input_system, panel_input_system)
                        .chain()
                        .in_set(FlightSet::Input),
                    flight_tick_system.in_set(FlightSet::Tick),
                    (
                        apply_scene_commands,
                        forward_audio_commands,
                        apply_host_commands,
                        sync_transforms,
                    )
                        .in_set(FlightSet::Apply),
                ),
            );
    }
}

/// Run one simulation frame with the app's frame delta.
pub fn flight_tick_system(
    time: Res<Time>,
    step: Res<StepMode>,
    mut sim: ResMut<FlightSim>,
    mut pending: ResMut<PendingInput>,
    mut readouts: ResMut<LatestReadouts>,
    mut commands_out: EventWriter<SimCommandEvent>,
    mut collisions_out: EventWriter<CollisionOccurred>,
) {
    let events = std::mem::take(&mut pending.0);
    let report = sim.tick(step.delta_time(time.delta_secs_f64()), &events);

    if let Some(collision) = report.collision {
        collisions_out.send(CollisionOccurred(collision));
    }
    for command in report.commands {
        commands_out.send(SimCommandEvent(command));
    }
    readouts.0 = PanelReadouts::from_simulation(&sim);
}

fn apply_scene_commands(
    mut reader: EventReader<SimCommandEvent>,
    mut world: ResMut<SceneWorld>,
) {
    for SimCommandEvent(command) in reader.read() {
        if let SimCommand::Scene(scene) = command {
            if let Err(err) = world.apply(scene) {
                warn!("Scene update rejected: {}", err);
            }
        }
    }
}

fn forward_audio_commands(
    mut reader: EventReader<SimCommandEvent>,
    output: Option<Res<SoundOutput>>,
) {
    let Some(output) = output else {
        reader.clear();
        return;
    };

    for SimCommandEvent(command) in reader.read() {
        if let SimCommand::Audio(audio) = command {
            if !output.send(audio.clone()) {
                debug!("Audio sink closed, dropping {:?}", audio);
            }
        }
    }
}

fn apply_host_commands(mut reader: EventReader<SimCommandEvent>, mut step: ResMut<StepMode>) {
    for SimCommandEvent(command) in reader.read() {
        if let SimCommand::Host(HostCommand::SetSingleStep(enabled)) = command {
            step.single_step = *enabled;
        }
    }
}

fn sync_transforms(
    sim: Res<FlightSim>,
    mut crafts: Query<&mut Transform, (With<CraftMarker>, Without<ChaseCamera>)>,
    mut cameras: Query<&mut Transform, (With<ChaseCamera>, Without<CraftMarker>)>,
) {
    if let Some(craft) = sim.state().craft.as_ref() {
        for mut transform in crafts.iter_mut() {
            transform.translation = to_vec3(&craft.position());
            transform.rotation = to_quat(&craft.spatial.attitude);
        }
    }

    let target = camera_transform(&sim);
    for mut transform in cameras.iter_mut() {
        *transform = target;
    }
}

fn camera_transform(sim: &Simulation) -> Transform {
    let camera = sim.camera();
    Transform::from_translation(to_vec3(&camera.position))
        .looking_to(to_vec3(&camera.look_direction), Vec3::Z)
}

fn to_vec3(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

fn to_quat(q: &UnitQuaternion<f64>) -> Quat {
    let q = q.quaternion();
    Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32)
}

use crate::common::*;
use bevy::prelude::*;
use jetsim::{
    components::FlightPhase,
    plugins::{ChaseCamera, CraftMarker, LatestReadouts, PanelState, StepMode},
    panel::{PanelButton, Slider},
    resources::AudioCommand,
    InputEvent,
};

#[test]
fn test_startup_builds_scene() {
    let mut app = TestAppBuilder::new().build();

    let labels = app.scene().labels();
    assert!(labels.contains(&"Sky Box"));
    assert!(labels.contains(&"jet1"));

    assert!(app.query_single::<CraftMarker>().is_some());
    assert!(app.query_single::<ChaseCamera>().is_some());
}

#[test]
fn test_takeoff_through_app() {
    let mut app = TestAppBuilder::new().with_audio().build();
    app.send_input(InputEvent::Takeoff);
    app.run_steps(10);

    let sim = app.simulation();
    assert_eq!(sim.phase(), FlightPhase::Airborne);
    let x = sim.craft_pose().expect("pose").position.x;
    assert!(x > 0.5, "craft did not advance: x = {}", x);

    let audio = app.drain_audio();
    assert!(audio
        .iter()
        .any(|c| matches!(c, AudioCommand::PlayPositional { looped: true, .. })));

    let readouts = app.get_state::<LatestReadouts>().expect("readouts");
    assert!(readouts.distance > 0.0);
}

#[test]
fn test_craft_transform_tracks_simulation() {
    let mut app = TestAppBuilder::new().build();
    app.send_input(InputEvent::Takeoff);
    app.run_steps(5);

    let x = app.simulation().craft_pose().expect("pose").position.x as f32;
    let world = app.app.world_mut();
    let mut crafts = world.query_filtered::<&Transform, With<CraftMarker>>();
    let transform = *crafts.get_single(world).expect("craft entity");
    assert!((transform.translation.x - x).abs() < 1e-4);

    let mut cameras = world.query_filtered::<&Transform, With<ChaseCamera>>();
    let camera = *cameras.get_single(world).expect("camera entity");
    assert!(camera.translation.x < transform.translation.x);
}

#[test]
fn test_obstacle_toggle_updates_scene() {
    let mut app = TestAppBuilder::new().build();
    let before = app.scene().len();

    app.send_input(InputEvent::ToggleObstacle);
    app.run_frame();
    assert_eq!(app.scene().len(), before + 1);

    app.send_input(InputEvent::ToggleObstacle);
    app.run_frame();
    assert_eq!(app.scene().len(), before);
}

#[test]
fn test_day_night_swaps_backdrop_in_scene() {
    let mut app = TestAppBuilder::new().build();
    let night = app.simulation().config().scene.night_backdrop.clone();

    app.send_input(InputEvent::ToggleDayNight);
    app.run_frame();

    let backdrops: Vec<_> = app
        .scene()
        .iter()
        .filter(|o| o.label == "Sky Box")
        .collect();
    assert_eq!(backdrops.len(), 1);
    assert_eq!(backdrops[0].asset, night);
}

#[test]
fn test_single_step_reaches_host() {
    let mut app = TestAppBuilder::new().build();
    app.send_input(InputEvent::ToggleSingleStep);
    app.run_frame();
    assert!(app.get_state::<StepMode>().expect("step mode").single_step);
}

#[test]
fn test_panel_drives_simulation() {
    let mut app = TestAppBuilder::new().build();
    {
        let mut panel = app.app.world_mut().resource_mut::<PanelState>();
        panel.set_slider(Slider::Yaw, 0.5);
        panel.press(PanelButton::StartRecording);
    }
    app.run_frame();

    let sim = app.simulation();
    assert!(sim.state().recorder.recording);
    assert_eq!(sim.state().recorder.path.len(), 1);
    // Yaw increment was consumed by the tick
    assert_eq!(sim.controls().yaw, 0.0);
    let look = sim.craft_pose().expect("pose").look_direction;
    assert!(look.y > 0.4);
}

#[test]
fn test_slider_edit_keeps_takeoff_thrust() {
    let mut app = TestAppBuilder::new().build();
    app.send_input(InputEvent::Takeoff);
    app.app
        .world_mut()
        .resource_mut::<PanelState>()
        .set_slider(Slider::Roll, 0.1);
    app.run_frame();

    assert!(app.simulation().is_airborne());
    assert_eq!(app.simulation().controls().thrust, 1.0);

    let x_before = app.simulation().craft_pose().expect("pose").position.x;
    app.run_steps(3);
    let x_after = app.simulation().craft_pose().expect("pose").position.x;
    assert!(x_after > x_before + 0.25);
}

#[test]
fn test_single_step_advances_by_fixed_delta() {
    let mut app = TestAppBuilder::new().with_time_step(0.2).build();
    app.send_input(InputEvent::Takeoff);
    app.run_frame();
    app.run_frame();

    // 0.1 units per frame over a 0.2 s frame
    let speed = app.get_state::<LatestReadouts>().expect("readouts").speed;
    assert!((speed - 0.5).abs() < 1e-6, "speed = {}", speed);

    app.send_input(InputEvent::ToggleSingleStep);
    app.run_frame();
    app.run_frame();

    let step = *app.get_state::<StepMode>().expect("step mode");
    let speed = app.get_state::<LatestReadouts>().expect("readouts").speed;
    assert!(step.single_step);
    assert!((speed - 0.1 / step.fixed_dt).abs() < 1e-6, "speed = {}", speed);
}

use crate::common::*;
use jetsim::{
    components::{CraftControls, FlightPhase},
    resources::{AudioCommand, SimCommand},
    systems::CLIMB_TRIGGER_X,
    InputEvent, Simulation,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

fn positional_sounds(commands: &[SimCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, SimCommand::Audio(AudioCommand::PlayPositional { .. })))
        .count()
}

#[test]
fn test_takeoff_from_rest() {
    let mut sim = Simulation::new(create_test_config());
    let report = sim.tick(FRAME_DT, &[InputEvent::Takeoff]);

    assert_eq!(sim.phase(), FlightPhase::Airborne);
    assert_eq!(sim.controls().thrust, 1.0);
    assert_eq!(positional_sounds(&report.commands), 1);

    // First airborne tick already moves along the nose
    let pose = report.craft.expect("craft pose");
    assert_position_eq(&pose.position, &Vector3::new(0.1, 0.0, 1.1), 1e-12);
}

#[test]
fn test_flyby_plays_on_first_takeoff_only() {
    let mut sim = airborne_simulation();
    sim.tick(FRAME_DT, &[InputEvent::Reset]);

    let report = sim.tick(FRAME_DT, &[InputEvent::Takeoff]);
    assert!(sim.is_airborne());
    assert_eq!(positional_sounds(&report.commands), 0);
    assert_eq!(sim.state().takeoff_count, 2);
}

#[test]
fn test_grounded_craft_does_not_translate() {
    let mut sim = Simulation::new(create_test_config());
    sim.set_controls(CraftControls::with_thrust(1.0));
    run_idle(&mut sim, 10);

    let pose = sim.craft_pose().expect("craft pose");
    assert_position_eq(&pose.position, &Vector3::new(0.0, 0.0, 1.1), 1e-12);
}

#[test]
fn test_attitude_increments_apply_once() {
    let mut sim = Simulation::new(create_test_config());
    let yaw = CraftControls {
        yaw: std::f64::consts::FRAC_PI_2,
        ..Default::default()
    };

    sim.tick(FRAME_DT, &[InputEvent::SetControls(yaw)]);
    assert_eq!(sim.controls().yaw, 0.0);
    let look = sim.craft_pose().expect("craft pose").look_direction;
    assert_position_eq(&look, &Vector3::y(), 1e-12);

    // Cleared increments leave the attitude alone on later ticks
    run_idle(&mut sim, 3);
    let look = sim.craft_pose().expect("craft pose").look_direction;
    assert_position_eq(&look, &Vector3::y(), 1e-12);
    assert_unit_vector(&look);
}

#[test]
fn test_climb_starts_past_trigger() {
    let mut sim = airborne_simulation();

    // 0.1 units per tick: still on the runway after 290 ticks
    run_idle(&mut sim, 289);
    let pose = sim.craft_pose().expect("craft pose");
    assert!(pose.position.x < CLIMB_TRIGGER_X);
    assert_eq!(pose.position.z, 1.1);

    run_idle(&mut sim, 20);
    let pose = sim.craft_pose().expect("craft pose");
    assert!(pose.position.x > CLIMB_TRIGGER_X);
    assert!(pose.position.z > 1.1);
    assert!(sim.stats().altitude > 1.1);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut sim = airborne_simulation();
    sim.tick(FRAME_DT, &[InputEvent::ToggleRecording]);
    run_idle(&mut sim, 30);

    let report = sim.tick(FRAME_DT, &[InputEvent::Reset]);

    assert_grounded_at_start(&sim);
    assert!(report
        .commands
        .contains(&SimCommand::Audio(AudioCommand::StopAll)));
    assert!(sim.state().flyby_sound.is_none());
    assert_eq!(sim.stats().cumulative_distance, 0.0);
    // Reset does not touch the recorder
    assert!(sim.state().recorder.recording);
}

#[test]
fn test_land_is_reset() {
    let mut sim = airborne_simulation();
    run_idle(&mut sim, 5);
    sim.tick(FRAME_DT, &[InputEvent::Land]);
    assert_grounded_at_start(&sim);
}

#[test]
fn test_stats_track_airborne_motion() {
    let mut sim = airborne_simulation();
    run_idle(&mut sim, 9);

    // Ten airborne ticks at 0.1 units per tick
    let stats = sim.stats();
    assert!((stats.cumulative_distance - 1.0).abs() < 1e-9);
    assert!((stats.speed - 0.1 / FRAME_DT).abs() < 1e-6);
    assert_eq!(stats.altitude, 1.1);
}

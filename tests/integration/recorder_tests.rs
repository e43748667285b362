use crate::common::*;
use jetsim::{
    resources::{Notice, SimCommand},
    InputEvent, Simulation,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

#[test]
fn test_recording_captures_one_sample_per_tick() {
    let mut sim = airborne_simulation();
    sim.tick(FRAME_DT, &[InputEvent::StartRecording]);
    run_idle(&mut sim, 4);
    sim.tick(FRAME_DT, &[InputEvent::StopRecording]);
    run_idle(&mut sim, 3);

    let recorder = &sim.state().recorder;
    assert!(!recorder.recording);
    assert_eq!(recorder.path.len(), 5);

    let xs: Vec<f64> = recorder.path.iter().map(|s| s.position.x).collect();
    assert!(xs.windows(2).all(|w| w[1] > w[0]), "samples out of order");
}

#[test]
fn test_restarting_recording_clears_path() {
    let mut sim = Simulation::new(create_test_config());
    sim.tick(FRAME_DT, &[InputEvent::ToggleRecording]);
    run_idle(&mut sim, 9);
    sim.tick(FRAME_DT, &[InputEvent::ToggleRecording]);
    assert_eq!(sim.state().recorder.path.len(), 10);

    sim.tick(FRAME_DT, &[InputEvent::ToggleRecording]);
    assert_eq!(sim.state().recorder.path.len(), 1);
}

#[test]
fn test_replay_visits_samples_then_stops() {
    let mut sim = Simulation::new(create_test_config());
    let points = [
        Vector3::new(1.0, 0.0, 1.1),
        Vector3::new(2.0, 0.5, 1.1),
        Vector3::new(3.0, 1.0, 1.5),
    ];
    for p in &points {
        sim.state_mut()
            .recorder
            .path
            .push(sample(p.x, p.y, p.z));
    }

    let first = sim.tick(FRAME_DT, &[InputEvent::StartPlayback]);
    assert_position_eq(&first.craft.expect("pose").position, &points[0], 1e-12);

    for expected in &points[1..] {
        let report = sim.tick(FRAME_DT, &[]);
        assert_position_eq(&report.craft.expect("pose").position, expected, 1e-12);
        assert!(sim.state().recorder.playing_back);
    }

    let last = sim.tick(FRAME_DT, &[]);
    assert!(!sim.state().recorder.playing_back);
    assert!(last
        .commands
        .contains(&SimCommand::Notice(Notice::Info("Playback finished.".to_string()))));
    // Craft stays at the final sample
    assert_position_eq(&last.craft.expect("pose").position, &points[2], 1e-12);
}

#[test]
fn test_toggle_playback_stops_early() {
    let mut sim = Simulation::new(create_test_config());
    for x in 1..=5 {
        sim.state_mut().recorder.path.push(sample(x as f64, 0.0, 1.1));
    }

    sim.tick(FRAME_DT, &[InputEvent::TogglePlayback]);
    sim.tick(FRAME_DT, &[]);
    sim.tick(FRAME_DT, &[InputEvent::TogglePlayback]);

    let recorder = &sim.state().recorder;
    assert!(!recorder.playing_back);
    assert_eq!(recorder.cursor, 0);
    let pose = sim.craft_pose().expect("pose");
    assert_position_eq(&pose.position, &Vector3::new(2.0, 0.0, 1.1), 1e-12);
}

#[test]
fn test_empty_playback_finishes_immediately() {
    let mut sim = Simulation::new(create_test_config());
    let report = sim.tick(FRAME_DT, &[InputEvent::StartPlayback]);

    assert!(!sim.state().recorder.playing_back);
    assert!(report
        .commands
        .iter()
        .any(|c| matches!(c, SimCommand::Notice(Notice::Info(_)))));
    assert_grounded_at_start(&sim);
}

#[test]
fn test_start_recording_during_replay_keeps_path() {
    let mut sim = Simulation::new(create_test_config());
    for x in 1..=3 {
        sim.state_mut().recorder.path.push(sample(x as f64, 0.0, 1.1));
    }

    sim.tick(FRAME_DT, &[InputEvent::StartPlayback]);
    sim.tick(FRAME_DT, &[]);
    let report = sim.tick(FRAME_DT, &[InputEvent::StartRecording]);

    let recorder = &sim.state().recorder;
    assert!(recorder.playing_back);
    assert!(!recorder.recording);
    assert_eq!(recorder.path.len(), 3);
    assert_position_eq(
        &report.craft.expect("pose").position,
        &Vector3::new(3.0, 0.0, 1.1),
        1e-12,
    );
    assert!(!report
        .commands
        .iter()
        .any(|c| matches!(c, SimCommand::Notice(_))));
}

#[test]
fn test_cursor_stays_within_path_after_rerecording() {
    let mut sim = Simulation::new(create_test_config());
    for x in 1..=3 {
        sim.state_mut().recorder.path.push(sample(x as f64, 0.0, 1.1));
    }

    sim.tick(FRAME_DT, &[InputEvent::StartPlayback]);
    run_idle(&mut sim, 3);
    assert!(!sim.state().recorder.playing_back);

    sim.tick(FRAME_DT, &[InputEvent::StartRecording]);
    let recorder = &sim.state().recorder;
    assert_eq!(recorder.path.len(), 1);
    assert!(recorder.cursor <= recorder.path.len());
}

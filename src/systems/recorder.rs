use bevy::log::{debug, info, warn};

use crate::components::FlightSample;
use crate::resources::{SessionState, SimError};

/// Begin a fresh recording, discarding the previous path.
///
/// Ignored while replaying; the path stays read-only until playback ends.
pub fn start_recording(state: &mut SessionState) {
    if state.recorder.playing_back {
        warn!("Cannot start recording during playback");
        return;
    }
    state.recorder.path.clear();
    state.recorder.cursor = 0;
    state.recorder.recording = true;
    info!("Recording started");
}

pub fn stop_recording(state: &mut SessionState) {
    if state.recorder.recording {
        info!(
            "Recording stopped with {} samples",
            state.recorder.path.len()
        );
    }
    state.recorder.recording = false;
}

pub fn toggle_recording(state: &mut SessionState) {
    if state.recorder.recording {
        stop_recording(state);
    } else {
        start_recording(state);
    }
}

/// Replay the captured path from the first sample.
pub fn start_playback(state: &mut SessionState) {
    state.recorder.playing_back = true;
    state.recorder.cursor = 0;
    info!(
        "Playback started over {} samples",
        state.recorder.path.len()
    );
}

pub fn toggle_playback(state: &mut SessionState) {
    if state.recorder.playing_back {
        state.recorder.playing_back = false;
        state.recorder.cursor = 0;
        info!("Playback stopped");
    } else {
        start_playback(state);
    }
}

/// Append the craft's current pose to the path.
pub fn record_sample(state: &mut SessionState) -> Result<(), SimError> {
    let craft = state.craft()?;
    let sample = FlightSample::new(craft.position(), craft.look_direction());
    state.recorder.path.push(sample);
    debug!("Recorded sample {}", state.recorder.path.len());
    Ok(())
}

/// Drive the craft from the next recorded sample.
///
/// Returns whether playback is still active. Once the cursor reaches the end
/// of the path playback switches off and an informational notice is raised.
/// The stored look direction is converted to pitch/yaw and applied as global
/// X then Z rotations on top of the current attitude.
pub fn playback_step(state: &mut SessionState) -> Result<bool, SimError> {
    state.craft()?;

    let Some(sample) = state.recorder.path.get(state.recorder.cursor).copied() else {
        state.recorder.playing_back = false;
        state.recorder.cursor = 0;
        info!("Playback finished.");
        state.commands.info("Playback finished.");
        if state.recorder.path.is_empty() {
            return Err(SimError::EmptyFlightPath);
        }
        return Ok(false);
    };

    let (pitch, yaw) = sample.rotation_angles();
    let craft = state.craft_mut()?;
    craft.spatial.position = sample.position;
    craft.spatial.rotate_about_global_x(pitch);
    craft.spatial.rotate_about_global_z(yaw);

    state.recorder.cursor += 1;
    Ok(true)
}

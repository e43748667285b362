use bevy::log::{debug, info, warn};
use nalgebra::Vector3;

use crate::components::{CraftControls, FlightPhase};
use crate::resources::{AudioCommand, SessionState, SimError};
use crate::systems::{check_collision, update_camera};

/// Forward distance past which a thrusting craft starts climbing [scene units].
///
/// A fixed spatial trigger standing in for rotation off the runway; it does
/// not depend on control input.
pub const CLIMB_TRIGGER_X: f64 = 30.0;

/// Grounded -> Airborne transition.
///
/// Rejected while the marker obstacle overlaps the craft. The flyby sound is
/// started on the first takeoff of the session only.
pub fn request_takeoff(state: &mut SessionState) -> Result<(), SimError> {
    let craft_position = state.craft()?.position();

    if let Some(distance) = check_collision(
        &craft_position,
        state.obstacle.as_ref(),
        state.collision.threshold,
    ) {
        warn!("Takeoff blocked: obstacle {:.2} units from craft", distance);
        state
            .commands
            .warn("Warning: Collision detected with the obstacle!");
        return Err(SimError::TakeoffBlocked { distance });
    }

    if state.is_airborne() {
        debug!("Takeoff requested while already airborne");
        return Ok(());
    }

    state.phase = FlightPhase::Airborne;
    state.controls.thrust = state.config.flight.takeoff_thrust;
    state.takeoff_count += 1;

    if state.takeoff_count == 1 {
        let handle = state.commands.allocate_sound();
        state.commands.push(AudioCommand::PlayPositional {
            handle,
            asset: state.config.audio.flyby_asset.clone(),
            position: state.camera.position,
            looped: true,
        });
        state.commands.push(AudioCommand::SetSoundPosition {
            handle,
            position: craft_position,
        });
        state.flyby_sound = Some(handle);
    }

    info!(
        "Plane taking off (takeoff #{}, thrust {})",
        state.takeoff_count, state.controls.thrust
    );
    Ok(())
}

/// Integrate one tick of thrust and attitude input.
///
/// Translation only happens while airborne. Pending roll/pitch/yaw
/// increments are applied about global X/Y/Z whenever a craft exists, then
/// cleared.
pub fn advance_flight(state: &mut SessionState) -> Result<(), SimError> {
    let airborne = state.is_airborne();
    let controls = state.controls;
    let flight = &state.config.flight;
    let (thrust_scale, climb_scale) = (flight.thrust_scale, flight.climb_scale);

    let craft = state.craft_mut()?;

    if airborne {
        let thrust_vector = craft.look_direction() * controls.thrust * thrust_scale;
        craft.spatial.translate(thrust_vector);

        if craft.position().x > CLIMB_TRIGGER_X {
            craft
                .spatial
                .translate(Vector3::new(0.0, 0.0, controls.thrust * climb_scale));
        }
    }

    apply_attitude_increments(craft, &controls);
    state.controls.clear_increments();

    if let Some(craft) = state.craft.as_ref() {
        debug!(
            "Craft advanced to {:?}, look {:?}",
            craft.position(),
            craft.look_direction()
        );
    }
    Ok(())
}

fn apply_attitude_increments(craft: &mut crate::components::Craft, controls: &CraftControls) {
    craft.spatial.rotate_about_global_x(controls.roll);
    craft.spatial.rotate_about_global_y(controls.pitch);
    craft.spatial.rotate_about_global_z(controls.yaw);
}

/// Return to the grounded initial state. Always available.
pub fn reset_flight(state: &mut SessionState) {
    state.controls = CraftControls::default();
    state.phase = FlightPhase::Grounded;
    state.collision.reset();

    match state.craft.as_mut() {
        Some(craft) => craft.reset(),
        None => warn!("Reset with no craft in the scene"),
    }

    state.commands.push(AudioCommand::StopAll);
    state.flyby_sound = None;
    state.stats.reset(state.config.flight.initial_position);

    update_camera(state);
    info!("Flight reset");
}

use bevy::log::{debug, info};
use nalgebra::Vector3;

use crate::components::{CollisionEvent, FlightPhase, Obstacle};
use crate::resources::{AudioCommand, SessionState};

/// Distance to the obstacle when it lies strictly inside `threshold`.
pub fn check_collision(
    craft_position: &Vector3<f64>,
    obstacle: Option<&Obstacle>,
    threshold: f64,
) -> Option<f64> {
    let obstacle = obstacle?;
    let distance = (craft_position - obstacle.position).norm();
    (distance < threshold).then_some(distance)
}

/// Test the craft against the obstacle and handle a hit.
///
/// Hits inside the cooldown window are suppressed so a single overlap does
/// not raise repeated events.
pub fn detect_collision(state: &mut SessionState) -> Option<CollisionEvent> {
    let craft_position = state.craft.as_ref()?.position();
    let obstacle = state.obstacle.as_ref()?;
    let distance = check_collision(
        &craft_position,
        Some(obstacle),
        state.collision.threshold,
    )?;
    let obstacle_id = obstacle.id;

    if state.collision.in_cooldown() {
        debug!(
            "Collision suppressed, {:.2}s of cooldown left",
            state.collision.cooldown
        );
        return None;
    }

    handle_collision(state);

    Some(CollisionEvent {
        impact_point: craft_position,
        obstacle: obstacle_id,
        distance,
    })
}

/// Ground the craft after a hit: cut thrust, start the cooldown and play the
/// explosion.
pub fn handle_collision(state: &mut SessionState) {
    state.phase = FlightPhase::Grounded;
    state.collision.register_collision();
    state.controls.thrust = 0.0;
    state.commands.push(AudioCommand::PlayOneShot {
        asset: state.config.audio.explosion_asset.clone(),
    });
    info!(
        "Collision detected! Stopping jet (collision #{})",
        state.collision.collision_count
    );
}

use bevy::log::info;
use uuid::Uuid;

use crate::components::Obstacle;
use crate::resources::{SceneCommand, SceneObject, SessionState};

/// Place the marker obstacle, or remove it if already placed.
pub fn toggle_obstacle(state: &mut SessionState) {
    match state.obstacle.take() {
        Some(obstacle) => {
            state.commands.push(SceneCommand::Remove(obstacle.id));
            info!("Removed obstacle '{}'", obstacle.label);
        }
        None => {
            let scene = &state.config.scene;
            let obstacle = Obstacle::new(scene.obstacle_position, scene.obstacle_label.clone());
            let object = SceneObject::new(
                obstacle.label.clone(),
                scene.obstacle_model.clone(),
                obstacle.position,
            )
            .with_id(obstacle.id);

            state.commands.push(SceneCommand::Insert(object));
            info!(
                "Placed obstacle '{}' at {:?}",
                obstacle.label, obstacle.position
            );
            state.obstacle = Some(obstacle);
        }
    }
}

/// Swap the environment backdrop between the day and night assets.
pub fn toggle_day_night(state: &mut SessionState) {
    state.environment.is_day = !state.environment.is_day;

    if let Some(old) = state.environment.backdrop.take() {
        state.commands.push(SceneCommand::Remove(old));
    }

    let id = insert_backdrop(state);
    state.environment.backdrop = Some(id);
    info!(
        "Switched to {} backdrop",
        if state.environment.is_day { "day" } else { "night" }
    );
}

fn insert_backdrop(state: &mut SessionState) -> Uuid {
    let scene = &state.config.scene;
    let asset = if state.environment.is_day {
        &scene.day_backdrop
    } else {
        &scene.night_backdrop
    };
    let object = SceneObject::new(
        scene.backdrop_label.clone(),
        asset.clone(),
        nalgebra::Vector3::zeros(),
    );
    let id = object.id;
    state.commands.push(SceneCommand::Insert(object));
    id
}

/// One-time placement of the backdrop and the craft.
pub fn spawn_scene(state: &mut SessionState) {
    if state.environment.backdrop.is_none() {
        let id = insert_backdrop(state);
        state.environment.backdrop = Some(id);
    }

    if let Some(craft) = state.craft.as_ref() {
        let scene = &state.config.scene;
        let object = SceneObject::new(
            scene.craft_label.clone(),
            scene.craft_model.clone(),
            craft.position(),
        );
        state.commands.push(SceneCommand::Insert(object));
    }
}

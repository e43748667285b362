use nalgebra::Vector3;

use crate::components::{CameraComponent, ChaseOffset};
use crate::resources::SessionState;

/// Chase camera pose for a craft at `position` looking along `look_direction`.
///
/// The camera sits `trail_distance` behind the craft and `height_offset`
/// above it, looking back at the craft. Pure: no state is read besides the
/// arguments.
pub fn derive_chase_camera(
    position: &Vector3<f64>,
    look_direction: &Vector3<f64>,
    offset: &ChaseOffset,
) -> CameraComponent {
    let camera_position = position - look_direction * offset.trail_distance
        + Vector3::new(0.0, 0.0, offset.height_offset);
    let camera_look = (position - camera_position)
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(|| *look_direction);

    CameraComponent::new(camera_position, camera_look)
}

/// Re-derive the session camera from the craft's final pose for this tick.
/// Leaves the camera untouched when there is no craft.
pub fn update_camera(state: &mut SessionState) {
    if let Some(craft) = state.craft.as_ref() {
        state.camera =
            derive_chase_camera(&craft.position(), &craft.look_direction(), &state.chase);
    }
}

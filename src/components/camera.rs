use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::CameraConfig;

/// Pose of the chase camera, recomputed from the craft every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraComponent {
    pub position: Vector3<f64>,
    /// Unit vector from the camera towards the craft
    pub look_direction: Vector3<f64>,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl CameraComponent {
    pub fn new(position: Vector3<f64>, look_direction: Vector3<f64>) -> Self {
        Self {
            position,
            look_direction,
        }
    }

    /// Free camera parked at the configured start, looking at the origin.
    pub fn from_config(config: &CameraConfig) -> Self {
        let look_direction = (-config.initial_position)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::x);
        Self {
            position: config.initial_position,
            look_direction,
        }
    }
}

/// Offsets that place the chase camera relative to the craft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaseOffset {
    /// Distance behind the craft along its look direction
    pub trail_distance: f64,
    /// Height above the craft along global +Z
    pub height_offset: f64,
}

impl Default for ChaseOffset {
    fn default() -> Self {
        Self {
            trail_distance: 10.0,
            height_offset: 5.0,
        }
    }
}

impl From<&CameraConfig> for ChaseOffset {
    fn from(config: &CameraConfig) -> Self {
        Self {
            trail_distance: config.trail_distance,
            height_offset: config.height_offset,
        }
    }
}

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Distance behind the craft along its look direction
    pub trail_distance: f64,
    /// Height above the craft along global +Z
    pub height_offset: f64,
    /// Camera position before the first chase update
    pub initial_position: Vector3<f64>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            trail_distance: 10.0,
            height_offset: 5.0,
            initial_position: Vector3::new(15.0, 15.0, 10.0),
        }
    }
}

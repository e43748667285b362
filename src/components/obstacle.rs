use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A placeable marker the craft can run into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Scene registry id of the placed object
    pub id: Uuid,
    pub position: Vector3<f64>,
    pub label: String,
}

impl Obstacle {
    pub fn new(position: Vector3<f64>, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            label: label.into(),
        }
    }
}

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;

/// Whether the craft is sitting on the runway or under thrust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightPhase {
    #[default]
    Grounded,
    Airborne,
}

/// Pilot inputs for the craft.
///
/// Thrust is held between ticks. Roll, pitch and yaw are per-tick angular
/// increments [rad]: applied once, then zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CraftControls {
    /// Nominally in [0, 1]; not clamped by the simulation.
    pub thrust: f64,
    /// Rotation about global X this tick.
    pub roll: f64,
    /// Rotation about global Y this tick.
    pub pitch: f64,
    /// Rotation about global Z this tick.
    pub yaw: f64,
}

impl CraftControls {
    pub fn with_thrust(thrust: f64) -> Self {
        Self {
            thrust,
            ..Default::default()
        }
    }

    pub fn clear_increments(&mut self) {
        self.roll = 0.0;
        self.pitch = 0.0;
        self.yaw = 0.0;
    }

    pub fn has_increments(&self) -> bool {
        self.roll != 0.0 || self.pitch != 0.0 || self.yaw != 0.0
    }
}

/// The single controllable vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    pub spatial: SpatialComponent,
    /// Pose restored by reset.
    pub initial_position: Vector3<f64>,
}

impl Craft {
    pub fn new(initial_position: Vector3<f64>) -> Self {
        Self {
            spatial: SpatialComponent::at_position(initial_position),
            initial_position,
        }
    }

    pub fn position(&self) -> Vector3<f64> {
        self.spatial.position
    }

    pub fn look_direction(&self) -> Vector3<f64> {
        self.spatial.look_direction()
    }

    pub fn pose(&self) -> CraftPose {
        CraftPose {
            position: self.position(),
            look_direction: self.look_direction(),
        }
    }

    /// Back to the initial position with identity orientation.
    pub fn reset(&mut self) {
        self.spatial.position = self.initial_position;
        self.spatial.rotate_to_identity();
    }
}

/// Snapshot of the craft published to the host each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraftPose {
    pub position: Vector3<f64>,
    pub look_direction: Vector3<f64>,
}

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightConfig {
    /// Craft start and reset position [scene units]
    pub initial_position: Vector3<f64>,
    /// Thrust applied by a successful takeoff
    pub takeoff_thrust: f64,
    /// Forward translation per tick per unit thrust
    pub thrust_scale: f64,
    /// Vertical translation per tick per unit thrust once past the climb trigger
    pub climb_scale: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            initial_position: Vector3::new(0.0, 0.0, 1.1),
            takeoff_thrust: 1.0,
            thrust_scale: 0.1,
            climb_scale: 0.05,
        }
    }
}

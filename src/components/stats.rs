use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Metrics derived from successive craft positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightStats {
    /// Craft z [scene units]
    pub altitude: f64,
    /// Distance covered last tick over its duration [units/s]
    pub speed: f64,
    /// Total distance flown since reset [scene units]
    pub cumulative_distance: f64,
    /// Reference for the next distance delta
    pub last_position: Vector3<f64>,
}

impl FlightStats {
    pub fn new(origin: Vector3<f64>) -> Self {
        Self {
            altitude: 0.0,
            speed: 0.0,
            cumulative_distance: 0.0,
            last_position: origin,
        }
    }

    pub fn reset(&mut self, origin: Vector3<f64>) {
        *self = Self::new(origin);
    }
}

impl Default for FlightStats {
    fn default() -> Self {
        Self::new(Vector3::zeros())
    }
}

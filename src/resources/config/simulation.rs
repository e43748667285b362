use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{AudioConfig, CameraConfig, CollisionConfig, FlightConfig, SceneConfig};
use crate::resources::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub flight: FlightConfig,
    pub collision: CollisionConfig,
    pub camera: CameraConfig,
    pub audio: AudioConfig,
    pub scene: SceneConfig,
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("flight.thrust_scale", self.flight.thrust_scale),
            ("flight.climb_scale", self.flight.climb_scale),
            ("collision.threshold", self.collision.threshold),
            ("camera.trail_distance", self.camera.trail_distance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.collision.cooldown_seconds.is_finite() && self.collision.cooldown_seconds >= 0.0)
        {
            return Err(ConfigError::Validation(format!(
                "collision.cooldown_seconds must be non-negative, got {}",
                self.collision.cooldown_seconds
            )));
        }

        if self.flight.initial_position.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Validation(
                "flight.initial_position must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

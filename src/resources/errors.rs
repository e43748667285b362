use thiserror::Error;
use uuid::Uuid;

/// Recoverable failures of a simulation operation. None of these end the
/// session; the tick logs them and skips the affected subsystem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("No craft in the scene")]
    NoCraft,
    #[error("Takeoff blocked: obstacle {distance:.2} units away")]
    TakeoffBlocked { distance: f64 },
    #[error("Flight path is empty")]
    EmptyFlightPath,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid simulation configuration: {0}")]
    Validation(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("Scene object not found: {0}")]
    NotFound(Uuid),
    #[error("Scene object already exists: {0}")]
    AlreadyExists(Uuid),
}

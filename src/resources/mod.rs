mod audio;
mod commands;
pub mod config;
mod errors;
mod scene;
mod session;
mod time;

pub use audio::AudioBridge;
pub use commands::{
    AudioCommand, CommandQueue, HostCommand, Notice, RenderOrder, SceneCommand, SceneObject,
    SimCommand, SoundHandle,
};
pub use config::{
    AudioConfig, CameraConfig, CollisionConfig, FlightConfig, SceneConfig, SimulationConfig,
};
pub use errors::{ConfigError, SceneError, SimError};
pub use scene::{SceneRegistry, WorldList};
pub use session::{Environment, SessionState};
pub use time::Clock;

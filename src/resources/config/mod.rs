pub mod audio;
pub mod camera;
pub mod collision;
pub mod flight;
pub mod scene;
pub mod simulation;

pub use audio::AudioConfig;
pub use camera::CameraConfig;
pub use collision::CollisionConfig;
pub use flight::FlightConfig;
pub use scene::SceneConfig;
pub use simulation::SimulationConfig;

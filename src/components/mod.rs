pub mod camera;
pub mod collision;
pub mod craft;
pub mod flight_path;
pub mod obstacle;
pub mod spatial;
pub mod stats;

pub use camera::{CameraComponent, ChaseOffset};
pub use collision::{CollisionComponent, CollisionEvent};
pub use craft::{Craft, CraftControls, CraftPose, FlightPhase};
pub use flight_path::{FlightPath, FlightRecorder, FlightSample};
pub use obstacle::Obstacle;
pub use spatial::SpatialComponent;
pub use stats::FlightStats;

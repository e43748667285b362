pub mod components;
pub mod input;
pub mod panel;
pub mod plugins;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use input::{InputEvent, Key};
pub use plugins::FlightPlugin;
pub use simulation::{Simulation, TickReport};

use serde::{Deserialize, Serialize};

/// Sound assets referenced by the simulation, relative to the asset root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Looping engine sound started on the first takeoff
    pub flyby_asset: String,
    /// One-shot played on collision
    pub explosion_asset: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            flyby_asset: "sounds/airplane-fly-by-01a.wav".to_string(),
            explosion_asset: "sounds/explosion.wav".to_string(),
        }
    }
}

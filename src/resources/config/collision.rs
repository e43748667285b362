use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Craft/obstacle centre distance that counts as a hit [scene units]
    pub threshold: f64,
    /// Suppression window after a hit [s]
    pub cooldown_seconds: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            threshold: 8.0,
            cooldown_seconds: 1.0,
        }
    }
}

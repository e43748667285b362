use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resources::CollisionConfig;

/// Emitted when the craft strikes the obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// Craft position at impact
    pub impact_point: Vector3<f64>,
    /// Obstacle that was struck
    pub obstacle: Uuid,
    /// Distance between craft and obstacle centres at detection
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionComponent {
    /// Centre-to-centre distance below which the craft collides
    pub threshold: f64,
    /// Suppression window started by each collision [s]
    pub cooldown_duration: f64,
    /// Whether a collision has been registered since the last reset
    #[serde(skip)]
    pub has_collided: bool,
    /// Remaining suppression time [s], never negative
    #[serde(skip)]
    pub cooldown: f64,
    /// Collisions registered this session
    #[serde(skip)]
    pub collision_count: u32,
}

impl Default for CollisionComponent {
    fn default() -> Self {
        Self::from_config(&CollisionConfig::default())
    }
}

impl CollisionComponent {
    pub fn new(threshold: f64, cooldown_duration: f64) -> Self {
        Self {
            threshold,
            cooldown_duration,
            has_collided: false,
            cooldown: 0.0,
            collision_count: 0,
        }
    }

    pub fn from_config(config: &CollisionConfig) -> Self {
        Self::new(config.threshold, config.cooldown_seconds)
    }

    pub fn reset(&mut self) {
        self.has_collided = false;
        self.cooldown = 0.0;
    }

    pub fn register_collision(&mut self) {
        self.has_collided = true;
        self.collision_count += 1;
        self.cooldown = self.cooldown_duration;
    }

    pub fn in_cooldown(&self) -> bool {
        self.cooldown > 0.0
    }

    /// Run down the suppression window by one tick.
    pub fn decay(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.cooldown = (self.cooldown - dt).max(0.0);
        }
    }
}

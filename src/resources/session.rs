use uuid::Uuid;

use crate::components::{
    CameraComponent, ChaseOffset, CollisionComponent, Craft, CraftControls, FlightPhase,
    FlightRecorder, FlightStats, Obstacle,
};
use crate::resources::{CommandQueue, SimError, SimulationConfig, SoundHandle};

/// Day/night backdrop currently in the scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    pub is_day: bool,
    pub backdrop: Option<Uuid>,
}

/// All mutable state of one simulation session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub config: SimulationConfig,
    pub craft: Option<Craft>,
    pub controls: CraftControls,
    pub phase: FlightPhase,
    pub collision: CollisionComponent,
    pub obstacle: Option<Obstacle>,
    pub recorder: FlightRecorder,
    pub stats: FlightStats,
    pub camera: CameraComponent,
    pub chase: ChaseOffset,
    pub environment: Environment,
    /// Takeoffs this session; survives reset
    pub takeoff_count: u32,
    pub flyby_sound: Option<SoundHandle>,
    pub single_step: bool,
    pub commands: CommandQueue,
}

impl SessionState {
    pub fn new(config: SimulationConfig) -> Self {
        let craft = Craft::new(config.flight.initial_position);
        Self {
            controls: CraftControls::default(),
            phase: FlightPhase::Grounded,
            collision: CollisionComponent::from_config(&config.collision),
            obstacle: None,
            recorder: FlightRecorder::default(),
            stats: FlightStats::new(config.flight.initial_position),
            camera: CameraComponent::from_config(&config.camera),
            chase: ChaseOffset::from(&config.camera),
            environment: Environment {
                is_day: true,
                backdrop: None,
            },
            takeoff_count: 0,
            flyby_sound: None,
            single_step: false,
            commands: CommandQueue::default(),
            craft: Some(craft),
            config,
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.phase == FlightPhase::Airborne
    }

    pub fn craft(&self) -> Result<&Craft, SimError> {
        self.craft.as_ref().ok_or(SimError::NoCraft)
    }

    pub fn craft_mut(&mut self) -> Result<&mut Craft, SimError> {
        self.craft.as_mut().ok_or(SimError::NoCraft)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

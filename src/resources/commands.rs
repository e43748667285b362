use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session-local handle for a playing sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundHandle(pub u32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AudioCommand {
    PlayPositional {
        handle: SoundHandle,
        asset: String,
        position: Vector3<f64>,
        looped: bool,
    },
    PlayOneShot {
        asset: String,
    },
    SetSoundPosition {
        handle: SoundHandle,
        position: Vector3<f64>,
    },
    StopAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderOrder {
    #[default]
    Opaque,
    Transparent,
}

/// An object the simulation asks the host to place in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: Uuid,
    pub label: String,
    pub asset: String,
    pub position: Vector3<f64>,
    pub render_order: RenderOrder,
}

impl SceneObject {
    pub fn new(label: impl Into<String>, asset: impl Into<String>, position: Vector3<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            asset: asset.into(),
            position,
            render_order: RenderOrder::Opaque,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneCommand {
    Insert(SceneObject),
    Remove(Uuid),
}

/// Requests aimed at the host engine rather than the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostCommand {
    /// Run one physics step per rendered frame while enabled.
    SetSingleStep(bool),
}

/// User-visible message raised during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Info(String),
    Warning(String),
}

/// Side effect emitted by the simulation for a host collaborator to carry out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimCommand {
    Audio(AudioCommand),
    Scene(SceneCommand),
    Host(HostCommand),
    Notice(Notice),
}

impl From<AudioCommand> for SimCommand {
    fn from(command: AudioCommand) -> Self {
        SimCommand::Audio(command)
    }
}

impl From<SceneCommand> for SimCommand {
    fn from(command: SceneCommand) -> Self {
        SimCommand::Scene(command)
    }
}

impl From<HostCommand> for SimCommand {
    fn from(command: HostCommand) -> Self {
        SimCommand::Host(command)
    }
}

impl From<Notice> for SimCommand {
    fn from(notice: Notice) -> Self {
        SimCommand::Notice(notice)
    }
}

/// Ordered outbox of commands produced during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandQueue {
    commands: Vec<SimCommand>,
    next_sound: u32,
}

impl CommandQueue {
    pub fn push(&mut self, command: impl Into<SimCommand>) {
        self.commands.push(command.into());
    }

    /// Reserve a handle for a sound about to be started.
    pub fn allocate_sound(&mut self) -> SoundHandle {
        self.next_sound += 1;
        SoundHandle(self.next_sound)
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notice::Info(message.into()));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Notice::Warning(message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimCommand> {
        self.commands.iter()
    }

    /// Take all pending commands, leaving handle allocation untouched.
    pub fn drain(&mut self) -> Vec<SimCommand> {
        std::mem::take(&mut self.commands)
    }
}

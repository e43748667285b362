use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::resources::AudioCommand;

/// Fire-and-forget channel from the simulation to an audio collaborator.
#[derive(Debug, Clone)]
pub struct AudioBridge {
    sender: Sender<AudioCommand>,
}

impl AudioBridge {
    /// Create a bridge and the receiving end the audio device drains.
    pub fn channel() -> (Self, Receiver<AudioCommand>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self { sender }, receiver)
    }

    /// Returns false if the audio side has gone away. Never blocks.
    pub fn send(&self, command: AudioCommand) -> bool {
        match self.sender.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

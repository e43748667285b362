use serde::{Deserialize, Serialize};

use crate::components::CraftControls;
use crate::panel::Slider;

/// Discrete pilot and panel actions consumed by a tick, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    ToggleSingleStep,
    Takeoff,
    ToggleObstacle,
    StopSounds,
    ToggleRecording,
    /// Starts from the first sample when switching on.
    TogglePlayback,
    Reset,
    /// Alias of reset.
    Land,
    StartRecording,
    StopRecording,
    StartPlayback,
    ToggleDayNight,
    /// Replace thrust and the pending roll/pitch/yaw increments.
    SetControls(CraftControls),
    /// Set a single control field from a panel slider.
    SetSlider(Slider, f64),
}

/// Physical keys the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Digit0,
    Digit1,
    Space,
    C,
    R,
    P,
}

impl Key {
    pub const ALL: [Key; 6] = [Key::Digit0, Key::Digit1, Key::Space, Key::C, Key::R, Key::P];

    /// Default key-down binding.
    pub fn event(self) -> InputEvent {
        match self {
            Key::Digit0 => InputEvent::ToggleSingleStep,
            Key::Digit1 => InputEvent::Takeoff,
            Key::Space => InputEvent::ToggleObstacle,
            Key::C => InputEvent::StopSounds,
            Key::R => InputEvent::ToggleRecording,
            Key::P => InputEvent::TogglePlayback,
        }
    }
}

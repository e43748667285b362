use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::components::CraftControls;
use crate::input::InputEvent;
use crate::simulation::Simulation;

pub const THRUST_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const ATTITUDE_RANGE: RangeInclusive<f64> = -1.0..=1.0;

/// Slider on the debug panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slider {
    Thrust,
    Roll,
    Pitch,
    Yaw,
}

impl Slider {
    pub const ALL: [Slider; 4] = [Slider::Thrust, Slider::Roll, Slider::Pitch, Slider::Yaw];

    pub fn label(self) -> &'static str {
        match self {
            Slider::Thrust => "Thrust",
            Slider::Roll => "Roll",
            Slider::Pitch => "Pitch",
            Slider::Yaw => "Yaw",
        }
    }

    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Slider::Thrust => THRUST_RANGE,
            _ => ATTITUDE_RANGE,
        }
    }

    /// Write `value` into the field this slider drives, leaving the others.
    pub fn apply(self, controls: &mut CraftControls, value: f64) {
        match self {
            Slider::Thrust => controls.thrust = value,
            Slider::Roll => controls.roll = value,
            Slider::Pitch => controls.pitch = value,
            Slider::Yaw => controls.yaw = value,
        }
    }

    pub fn value(self, controls: &CraftControls) -> f64 {
        match self {
            Slider::Thrust => controls.thrust,
            Slider::Roll => controls.roll,
            Slider::Pitch => controls.pitch,
            Slider::Yaw => controls.yaw,
        }
    }
}

/// Button on the debug panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelButton {
    Reset,
    Land,
    StartRecording,
    StopRecording,
    Playback,
    ToggleDayNight,
}

impl PanelButton {
    pub const ALL: [PanelButton; 6] = [
        PanelButton::Reset,
        PanelButton::Land,
        PanelButton::StartRecording,
        PanelButton::StopRecording,
        PanelButton::Playback,
        PanelButton::ToggleDayNight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PanelButton::Reset => "Reset",
            PanelButton::Land => "Land",
            PanelButton::StartRecording => "Start Recording",
            PanelButton::StopRecording => "Stop Recording",
            PanelButton::Playback => "Playback",
            PanelButton::ToggleDayNight => "Toggle Day/Night",
        }
    }

    pub fn event(self) -> InputEvent {
        match self {
            PanelButton::Reset => InputEvent::Reset,
            PanelButton::Land => InputEvent::Land,
            PanelButton::StartRecording => InputEvent::StartRecording,
            PanelButton::StopRecording => InputEvent::StopRecording,
            PanelButton::Playback => InputEvent::StartPlayback,
            PanelButton::ToggleDayNight => InputEvent::ToggleDayNight,
        }
    }
}

/// Read-only flight metrics shown on the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelReadouts {
    pub altitude: f64,
    pub speed: f64,
    pub distance: f64,
}

impl PanelReadouts {
    pub fn from_simulation(sim: &Simulation) -> Self {
        let stats = sim.stats();
        Self {
            altitude: stats.altitude,
            speed: stats.speed,
            distance: stats.cumulative_distance,
        }
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Altitude: {:.2}", self.altitude),
            format!("Speed: {:.2}", self.speed),
            format!("Distance Traveled: {:.2}", self.distance),
        ]
    }
}

/// Immediate-mode debug panel state.
///
/// Slider edits are clamped to the slider range and handed to the simulation
/// as one [`InputEvent::SetSlider`] per moved slider on the next frame, so
/// fields that were not touched keep whatever the simulation holds.
#[derive(Debug, Clone, Default)]
pub struct DebugPanel {
    controls: CraftControls,
    edits: Vec<(Slider, f64)>,
    pending: Vec<InputEvent>,
}

impl DebugPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh slider positions from the simulation before drawing.
    pub fn sync(&mut self, sim: &Simulation) {
        let mut controls = *sim.controls();
        for (slider, value) in &self.edits {
            slider.apply(&mut controls, *value);
        }
        self.controls = controls;
    }

    pub fn slider_value(&self, slider: Slider) -> f64 {
        slider.value(&self.controls)
    }

    pub fn set_slider(&mut self, slider: Slider, value: f64) {
        let range = slider.range();
        let value = value.clamp(*range.start(), *range.end());
        slider.apply(&mut self.controls, value);

        match self.edits.iter_mut().find(|(edited, _)| *edited == slider) {
            Some(edit) => edit.1 = value,
            None => self.edits.push((slider, value)),
        }
    }

    pub fn press(&mut self, button: PanelButton) {
        self.pending.push(button.event());
    }

    /// Events produced since the last frame, slider edits first.
    pub fn take_events(&mut self) -> Vec<InputEvent> {
        let mut events: Vec<InputEvent> = self
            .edits
            .drain(..)
            .map(|(slider, value)| InputEvent::SetSlider(slider, value))
            .collect();
        events.append(&mut self.pending);
        events
    }
}

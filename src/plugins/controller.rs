use bevy::prelude::*;

use crate::input::Key;
use crate::plugins::{FlightSim, PanelState, PendingInput};

pub fn key_code(key: Key) -> KeyCode {
    match key {
        Key::Digit0 => KeyCode::Digit0,
        Key::Digit1 => KeyCode::Digit1,
        Key::Space => KeyCode::Space,
        Key::C => KeyCode::KeyC,
        Key::R => KeyCode::KeyR,
        Key::P => KeyCode::KeyP,
    }
}

/// Translate key-down edges into simulation input events.
///
/// Headless apps have no `ButtonInput<KeyCode>`; the system is then a no-op.
pub fn keyboard_input_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut pending: ResMut<PendingInput>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    for key in Key::ALL {
        if keyboard.just_pressed(key_code(key)) {
            pending.push(key.event());
        }
    }
}

/// Forward slider edits and button presses from the debug panel.
pub fn panel_input_system(
    sim: Res<FlightSim>,
    mut panel: ResMut<PanelState>,
    mut pending: ResMut<PendingInput>,
) {
    panel.sync(&sim);
    let events = panel.take_events();
    pending.extend(events);
}

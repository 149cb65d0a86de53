use log::warn;
use macroquad::prelude::*;

use crate::application::{BoardLayout, Control, GameState};
use crate::ui::Button;

/// Toggle the cell under the pointer on left click while editing.
/// Clicks in the margin or on the controls are ignored.
pub fn handle_mouse_toggle(state: &mut GameState, layout: &BoardLayout, mouse_pos: (f32, f32)) {
    if state.is_running() || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    let (x, y) = layout.screen_to_cell(mouse_pos.0, mouse_pos.1);
    let (width, height) = state.grid().dimensions();
    if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
        return;
    }

    if let Err(err) = state.toggle_cell(x, y) {
        warn!("click rejected: {err}");
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::Right, |s| s.apply(Control::StepOnce)),
        (KeyCode::N, |s| s.apply(Control::StepOnce)),
        (KeyCode::C, |s| s.apply(Control::Clear)),
        (KeyCode::R, |s| s.apply(Control::Randomize)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| s.apply(btn.control()))
}

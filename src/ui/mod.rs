mod button;

pub use button::Button;

use crate::application::{BoardLayout, Control, GameState};

pub const BUTTON_WIDTH: f32 = 70.0;
pub const BUTTON_HEIGHT: f32 = 30.0;
pub const BUTTON_SPACING: f32 = 10.0;
/// Room below the buttons for the status line
pub const STATUS_HEIGHT: f32 = 30.0;

/// Width needed to lay out every control in one row
fn controls_width() -> f32 {
    let count = Control::ALL.len() as f32;
    count * BUTTON_WIDTH + (count - 1.0) * BUTTON_SPACING
}

/// Window size that fits the board, the control row and the status line
pub fn window_size(layout: &BoardLayout, width: usize, height: usize) -> (f32, f32) {
    let (board_w, board_h) = layout.board_size(width, height);
    let w = board_w.max(controls_width() + layout.offset * 2.0);
    let h = board_h + BUTTON_HEIGHT + STATUS_HEIGHT;
    (w, h)
}

/// Top edge of the control row, just below the board
pub fn controls_y(layout: &BoardLayout, height: usize) -> f32 {
    layout.board_size(0, height).1
}

/// Create the control row, right-aligned under the board, with each
/// button enabled according to the current mode
pub fn create_buttons(layout: &BoardLayout, state: &GameState) -> Vec<Button> {
    let (width, height) = state.grid().dimensions();
    let (window_w, _) = window_size(layout, width, height);
    let y = controls_y(layout, height);
    let start_x = window_w - layout.offset - controls_width();

    Control::ALL
        .iter()
        .enumerate()
        .map(|(idx, &control)| {
            let x = start_x + idx as f32 * (BUTTON_WIDTH + BUTTON_SPACING);
            Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, control)
                .with_enabled(state.is_enabled(control))
        })
        .collect()
}

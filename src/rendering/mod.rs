use macroquad::prelude::*;

use crate::application::{BoardLayout, GameState};
use crate::domain::Grid;
use crate::ui::{Button, BUTTON_HEIGHT, controls_y};

const DEAD_COLOR: Color = Color::new(1.0, 250.0 / 255.0, 250.0 / 255.0, 1.0); // Snow
const ALIVE_COLOR: Color = BLACK;
const GRID_LINE_COLOR: Color = GRAY;
const BACKGROUND_COLOR: Color = Color::new(0.94, 0.94, 0.94, 1.0);

/// Cached view of the board, rebuilt only when the grid reports a change.
#[derive(Default)]
pub struct BoardView {
    alive: Vec<(i32, i32)>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull the alive cells out of the grid if it changed since last frame
    pub fn refresh(&mut self, state: &mut GameState) {
        if state.take_changed() {
            self.alive = state.grid().alive_cells().collect();
        }
    }

    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Draw every cell as a bordered square
    pub fn draw(&self, grid: &Grid, layout: &BoardLayout) {
        let (width, height) = grid.dimensions();
        let size = layout.cell_size;

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let (sx, sy) = layout.cell_to_screen(x, y);
                draw_rectangle(sx, sy, size, size, DEAD_COLOR);
            }
        }

        for &(x, y) in &self.alive {
            let (sx, sy) = layout.cell_to_screen(x, y);
            draw_rectangle(sx, sy, size, size, ALIVE_COLOR);
        }

        // Grid lines on top so alive cells keep their outline
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let (sx, sy) = layout.cell_to_screen(x, y);
                draw_rectangle_lines(sx, sy, size, size, 1.0, GRID_LINE_COLOR);
            }
        }
    }
}

/// Draw the whole frame: background, board, control row and status line
pub fn draw_frame(
    view: &BoardView,
    state: &GameState,
    layout: &BoardLayout,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    clear_background(BACKGROUND_COLOR);
    view.draw(state.grid(), layout);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (_, height) = state.grid().dimensions();
    let status_y = controls_y(layout, height) + BUTTON_HEIGHT + 20.0;
    let status = format!(
        "Generation: {}   Alive: {}   {}",
        state.generation,
        view.alive_count(),
        state.mode().name()
    );
    let status_color = if state.is_running() { DARKGREEN } else { DARKGRAY };
    draw_text(&status, layout.offset, status_y, 18.0, status_color);
}

/// BoardLayout maps between window pixels and grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub offset: f32,     // Margin around the board in pixels
    pub cell_size: f32,
}

impl BoardLayout {
    pub const fn new(offset: f32, cell_size: f32) -> Self {
        Self { offset, cell_size }
    }

    /// Convert screen coordinates to grid coordinates.
    /// Pixels left of or above the board give negative cells.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        let x = ((screen_x - self.offset) / self.cell_size).floor() as i32;
        let y = ((screen_y - self.offset) / self.cell_size).floor() as i32;
        (x, y)
    }

    /// Top-left pixel of a cell
    pub fn cell_to_screen(&self, x: i32, y: i32) -> (f32, f32) {
        (
            self.offset + x as f32 * self.cell_size,
            self.offset + y as f32 * self.cell_size,
        )
    }

    /// Pixel size of a board including its margin on both sides
    pub fn board_size(&self, width: usize, height: usize) -> (f32, f32) {
        (
            self.offset * 2.0 + width as f32 * self.cell_size,
            self.offset * 2.0 + height as f32 * self.cell_size,
        )
    }
}

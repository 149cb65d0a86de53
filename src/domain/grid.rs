use std::fmt;

use rand::Rng;

use super::{GridError, rules};

/// Relative positions of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid owns the cell matrix of a fixed-size Game of Life board.
///
/// Cells are stored row-major (`index = y * width + x`). Everything outside
/// the grid reads as dead, so the rule sees the board as if it were
/// surrounded by an endless dead region. There is no wraparound.
///
/// Every mutation raises a "changed" flag which the presentation layer
/// consumes through [`Grid::take_changed`] to decide when to redraw.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    changed: bool,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
            changed: true,
        }
    }

    /// Build a grid from row-major cell states.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height);
        grid.replace_all(cells)?;
        Ok(grid)
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to a 1D index, `None` when off the grid.
    /// x is checked against the width and y against the height.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Cell state at (x, y). Off-grid coordinates are dead.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|idx| self.cells[idx])
    }

    /// Set the cell at (x, y). Off-grid coordinates are rejected and the
    /// grid is left untouched.
    pub fn set(&mut self, x: i32, y: i32, alive: bool) -> Result<(), GridError> {
        let idx = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[idx] = alive;
        self.changed = true;
        Ok(())
    }

    /// Flip the cell at (x, y) between alive and dead.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        self.set(x, y, !self.get(x, y))
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.changed = true;
    }

    /// Replace the whole grid in one step. The new cells must match the
    /// grid's shape exactly, otherwise nothing changes.
    pub fn replace_all(&mut self, cells: Vec<bool>) -> Result<(), GridError> {
        let expected = self.width * self.height;
        if cells.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        self.cells = cells;
        self.changed = true;
        Ok(())
    }

    /// Fill the grid so each cell is alive with probability `density`.
    /// Densities outside 0..=1 are clamped; NaN counts as 0.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells = (0..self.cells.len())
            .map(|_| rng.random_bool(density))
            .collect();
        self.changed = true;
    }

    /// Count live neighbors, treating everything off the grid as dead
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.get(x.saturating_add(dx), y.saturating_add(dy)))
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation and leaves
    /// `self` as it was
    pub fn evolve(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(x, y, alive)| rules::next_state(alive, self.live_neighbors(x, y)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
            changed: true,
        }
    }

    /// Advance one generation in place.
    ///
    /// The next state is computed from the current cells into a separate
    /// buffer and swapped in afterwards, so neighbor counts never see a
    /// half-updated board.
    pub fn next_generation(&mut self) {
        self.cells = self.evolve().cells;
        self.changed = true;
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, bool)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| ((idx % width) as i32, (idx / width) as i32, alive))
    }

    /// Positions of alive cells, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.iter_cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(x, y, _)| (x, y))
    }

    /// Report whether the grid changed since the last call, and reset the flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(width: usize, height: usize, alive: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, true).unwrap();
        }
        grid
    }

    fn alive(grid: &Grid) -> Vec<(i32, i32)> {
        let mut cells: Vec<_> = grid.alive_cells().collect();
        cells.sort();
        cells
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 4);
        assert_eq!(grid.dimensions(), (7, 4));
        assert_eq!(grid.population(), 0);
        assert!(grid.iter_cells().all(|(_, _, alive)| !alive));
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = Grid::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                grid.set(x, y, true).unwrap();
                assert!(grid.get(x, y));
                grid.set(x, y, false).unwrap();
                assert!(!grid.get(x, y));
            }
        }
    }

    #[test]
    fn test_off_grid_reads_are_dead() {
        let grid = Grid::from_cells(3, 3, vec![true; 9]).unwrap();
        for &(x, y) in &[(-1, 0), (0, -1), (3, 0), (0, 3), (-1, -1), (3, 3), (i32::MIN, i32::MAX)] {
            assert!(!grid.get(x, y), "({x}, {y}) should read dead");
        }
    }

    #[test]
    fn test_non_square_bounds_use_height_for_rows() {
        let mut grid = Grid::new(2, 6);
        grid.set(1, 5, true).unwrap();
        assert!(grid.get(1, 5));
        assert!(!grid.get(2, 0));
        assert!(!grid.get(0, 6));

        let mut wide = Grid::new(6, 2);
        assert!(wide.set(5, 1, true).is_ok());
        assert_eq!(
            wide.set(0, 2, true),
            Err(GridError::OutOfBounds { x: 0, y: 2, width: 6, height: 2 })
        );
    }

    #[test]
    fn test_out_of_bounds_set_leaves_grid_untouched() {
        let mut grid = Grid::new(4, 4);
        grid.take_changed();
        assert!(matches!(grid.set(4, 0, true), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.toggle(-1, 2), Err(GridError::OutOfBounds { .. })));
        assert_eq!(grid.population(), 0);
        assert!(!grid.take_changed());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(12, 9);
        grid.randomize(&mut rng, 0.4);
        let before = grid.clone();

        for (x, y, was_alive) in before.iter_cells() {
            grid.toggle(x, y).unwrap();
            assert_eq!(grid.get(x, y), !was_alive);
            grid.toggle(x, y).unwrap();
            assert_eq!(grid.get(x, y), was_alive);
        }
        assert_eq!(alive(&grid), alive(&before));
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut grid = Grid::from_cells(3, 2, vec![true, false, true, true, true, false]).unwrap();
        grid.clear();
        assert_eq!(grid.dimensions(), (3, 2));
        assert!(grid.iter_cells().all(|(_, _, alive)| !alive));
    }

    #[test]
    fn test_replace_all_rejects_wrong_shape() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        grid.take_changed();

        let err = grid.replace_all(vec![true; 8]).unwrap_err();
        assert_eq!(err, GridError::ShapeMismatch { expected: 9, actual: 8 });
        assert_eq!(alive(&grid), vec![(1, 1)]);
        assert!(!grid.take_changed());

        grid.replace_all(vec![true; 9]).unwrap();
        assert_eq!(grid.population(), 9);
    }

    #[test]
    fn test_mutations_raise_changed_flag() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.take_changed());
        assert!(!grid.take_changed());

        grid.toggle(0, 0).unwrap();
        assert!(grid.take_changed());
        grid.clear();
        assert!(grid.take_changed());
        grid.next_generation();
        assert!(grid.take_changed());
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = vec![(1, 2), (2, 2), (3, 2)];
        let vertical = vec![(2, 1), (2, 2), (2, 3)];
        let mut grid = grid_with(5, 5, &horizontal);

        grid.next_generation();
        assert_eq!(alive(&grid), vertical);

        grid.next_generation();
        assert_eq!(alive(&grid), horizontal);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = vec![(2, 2), (2, 3), (3, 2), (3, 3)];
        let mut grid = grid_with(6, 6, &block);
        for _ in 0..10 {
            grid.next_generation();
            assert_eq!(alive(&grid), block);
        }
    }

    #[test]
    fn test_block_in_corner_survives_dead_border() {
        let block = vec![(0, 0), (0, 1), (1, 0), (1, 1)];
        let mut grid = grid_with(4, 4, &block);
        grid.next_generation();
        assert_eq!(alive(&grid), block);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        for (w, h) in [(1, 1), (5, 3), (50, 50)] {
            let mut grid = Grid::new(w, h);
            grid.next_generation();
            assert!(grid.is_extinct());
        }
    }

    #[test]
    fn test_isolated_cell_dies_anywhere() {
        let (w, h) = (5, 4);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let mut grid = grid_with(w, h, &[(x, y)]);
                grid.next_generation();
                assert!(grid.is_extinct(), "single cell at ({x}, {y}) left survivors");
            }
        }
    }

    #[test]
    fn test_no_wraparound() {
        // A vertical line on the left edge would feed the right edge on a torus.
        let mut grid = grid_with(5, 5, &[(0, 1), (0, 2), (0, 3)]);
        grid.next_generation();
        assert_eq!(alive(&grid), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_evolve_does_not_mutate_source() {
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let next = grid.evolve();
        assert_eq!(alive(&grid), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(alive(&next), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_live_neighbors_at_edges() {
        let grid = Grid::from_cells(3, 3, vec![true; 9]).unwrap();
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(1, 0), 5);
        assert_eq!(grid.live_neighbors(1, 1), 8);
        assert_eq!(grid.live_neighbors(-1, -1), 1);
    }

    #[test]
    fn test_zero_sized_grid() {
        let mut grid = Grid::new(0, 0);
        assert!(!grid.get(0, 0));
        assert!(grid.set(0, 0, true).is_err());
        grid.next_generation();
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(10, 10);
        grid.randomize(&mut rng, 1.0);
        assert_eq!(grid.population(), 100);
        grid.randomize(&mut rng, 0.0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_randomize_clamps_odd_densities() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(4, 4);
        grid.randomize(&mut rng, f64::NAN);
        assert_eq!(grid.population(), 0);
        grid.randomize(&mut rng, f64::INFINITY);
        assert_eq!(grid.population(), 16);
        grid.randomize(&mut rng, f64::NEG_INFINITY);
        assert_eq!(grid.population(), 0);
        grid.randomize(&mut rng, 7.5);
        assert_eq!(grid.population(), 16);
    }

    #[test]
    fn test_display() {
        let grid = grid_with(3, 2, &[(0, 0), (2, 1)]);
        assert_eq!(grid.to_string(), "#..\n..#\n");
    }
}

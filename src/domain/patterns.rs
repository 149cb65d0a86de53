use super::{Grid, GridError};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(i32, i32)>,  // Relative coordinates of alive cells
}

/// Cells spanned along one axis, counted from the pattern origin so that
/// negative offsets widen the box instead of wrapping.
fn extent(values: impl Iterator<Item = i32>) -> usize {
    values
        .fold(None, |span: Option<(i32, i32)>, v| match span {
            None => Some((v.min(0), v.max(0))),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .map_or(0, |(lo, hi)| (i64::from(hi) - i64::from(lo) + 1) as usize)
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = extent(cells.iter().map(|&(x, _)| x));
        let height = extent(cells.iter().map(|&(_, y)| y));
        Self { name, description, width, height, cells }
    }

    /// Place pattern with its top-left corner at (x, y).
    ///
    /// Either every cell lands on the grid or nothing is written.
    pub fn place_on(&self, grid: &mut Grid, x: i32, y: i32) -> Result<(), GridError> {
        let (width, height) = grid.dimensions();
        let targets: Vec<(i32, i32)> = self.cells
            .iter()
            .map(|&(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
            .collect();

        if let Some(&(ox, oy)) = targets.iter().find(|&&(tx, ty)| {
            tx < 0 || ty < 0 || tx as usize >= width || ty as usize >= height
        }) {
            return Err(GridError::OutOfBounds { x: ox, y: oy, width, height });
        }

        targets.into_iter().try_for_each(|(tx, ty)| grid.set(tx, ty, true))
    }
}

/// Named starting shapes
pub mod presets {
    use super::*;

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "period 2", vec![(0, 1), (1, 1), (2, 1)])
    }

    pub fn block() -> Pattern {
        Pattern::new("Block", "still", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Heads down and right, one cell every four generations
    pub fn glider() -> Pattern {
        Pattern::new("Glider", "spaceship", vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "period 2",
            vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "period 2",
            vec![(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
        )
    }

    /// Lightweight spaceship, travels left
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "spaceship",
            vec![(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
        )
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::new("R-pentomino", "methuselah", vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), block(), glider(), toad(), beacon(), lwss(), r_pentomino()]
    }

    /// Look a preset up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

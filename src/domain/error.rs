use thiserror::Error;

/// Errors reported by grid mutations.
/// Reading outside the grid is never an error, it just returns dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("expected {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

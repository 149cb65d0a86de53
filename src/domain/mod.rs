mod error;
mod grid;
pub mod rules;
mod patterns;

pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};

use std::time::Duration;

use thiserror::Error;

/// Reference board: 50x50 cells of 10px with a 10px margin, stepping every 300ms.
pub const DEFAULT_GRID_SIZE: usize = 50;
pub const DEFAULT_CELL_SIZE: f32 = 10.0;
pub const DEFAULT_OFFSET: f32 = 10.0;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(300);
pub const DEFAULT_RANDOM_DENSITY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("a {width}x{height} grid has too many cells")]
    TooLarge { width: usize, height: usize },

    #[error("cell size must be positive, got {0}")]
    CellSize(f32),

    #[error("offset must not be negative, got {0}")]
    Offset(f32),

    #[error("tick interval must be non-zero")]
    TickInterval,

    #[error("random density must be between 0 and 1, got {0}")]
    Density(f64),
}

/// Runtime settings shared by the window and headless front ends
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,
    pub offset: f32,
    pub tick_interval: Duration,
    pub random_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            offset: DEFAULT_OFFSET,
            tick_interval: DEFAULT_TICK_INTERVAL,
            random_density: DEFAULT_RANDOM_DENSITY,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if self.offset.is_nan() || self.offset < 0.0 {
            return Err(ConfigError::Offset(self.offset));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::TickInterval);
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(ConfigError::Density(self.random_density));
        }
        Ok(())
    }
}

// Domain layer - Grid engine and rule
pub mod domain;

// Application layer - Modes, stepping schedule, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Grid, GridError, Pattern, presets};
pub use application::{BoardLayout, Config, Control, GameState, Mode};
pub use ui::Button;

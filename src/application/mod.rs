pub mod config;
mod game_state;
pub mod headless;
mod layout;
mod ticker;

pub use config::{Config, ConfigError};
pub use game_state::{Control, GameState, Mode};
pub use layout::BoardLayout;
pub use ticker::Ticker;

use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::domain::{Grid, GridError};
use super::{Config, Ticker};

/// Whether the user is editing the board or watching it run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    Running,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Editing => "Paused",
            Mode::Running => "Running",
        }
    }
}

/// User-facing commands, one per button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    StepOnce,
    Run,
    Pause,
    Clear,
    Randomize,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::StepOnce,
        Control::Run,
        Control::Pause,
        Control::Clear,
        Control::Randomize,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Control::StepOnce => ">",
            Control::Run => ">>",
            Control::Pause => "Pause",
            Control::Clear => "Clear",
            Control::Randomize => "Random",
        }
    }
}

/// GameState orchestrates the simulation.
/// It is the single owner of the grid; rendering borrows it and input
/// mutates it only through the methods below.
pub struct GameState {
    grid: Grid,
    mode: Mode,
    pub generation: u64,
    ticker: Ticker,
    random_density: f64,
}

impl GameState {
    /// Create new game state with given grid dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_config(&Config {
            width,
            height,
            ..Config::default()
        })
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_grid(config, Grid::new(config.width, config.height))
    }

    /// Start from a prepared grid; its dimensions win over the config's
    pub fn with_grid(config: &Config, grid: Grid) -> Self {
        Self {
            grid,
            mode: Mode::Editing,
            generation: 0,
            ticker: Ticker::new(config.tick_interval),
            random_density: config.random_density,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.mode, Mode::Running)
    }

    /// Whether a control is currently usable
    pub const fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Pause => self.is_running(),
            Control::StepOnce | Control::Run | Control::Clear | Control::Randomize => {
                !self.is_running()
            }
        }
    }

    /// Report whether the grid needs a redraw, resetting the flag
    pub fn take_changed(&mut self) -> bool {
        self.grid.take_changed()
    }

    /// Dispatch a control; disabled controls are ignored
    pub fn apply(self, control: Control) -> Self {
        if !self.is_enabled(control) {
            debug!("ignoring {control:?} while {:?}", self.mode);
            return self;
        }
        match control {
            Control::StepOnce => self.step_once(),
            Control::Run => self.run(),
            Control::Pause => self.pause(),
            Control::Clear => self.clear(),
            Control::Randomize => self.randomize(),
        }
    }

    fn advance(&mut self) {
        self.grid.next_generation();
        self.generation += 1;
        debug!("generation {} ({} alive)", self.generation, self.grid.population());
    }

    /// Advance exactly one generation (manual stepping only)
    pub fn step_once(mut self) -> Self {
        if !self.is_running() {
            self.advance();
        }
        self
    }

    /// Start automatic stepping and lock editing
    pub fn run(mut self) -> Self {
        if !self.is_running() {
            self.mode = Mode::Running;
            self.ticker.start();
            debug!("running, one step every {:?}", self.ticker.interval());
        }
        self
    }

    /// Stop automatic stepping and unlock editing
    pub fn pause(mut self) -> Self {
        if self.is_running() {
            self.mode = Mode::Editing;
            self.ticker.stop();
            debug!("paused at generation {}", self.generation);
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running() { self.pause() } else { self.run() }
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        if !self.is_running() {
            self.grid.clear();
            self.generation = 0;
            info!("grid cleared");
        }
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(self) -> Self {
        self.randomize_with(&mut rand::rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        if !self.is_running() {
            self.grid.randomize(rng, self.random_density);
            self.generation = 0;
            info!("grid randomized ({} alive)", self.grid.population());
        }
        self
    }

    /// Flip a cell from user input. Edits are ignored while running.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        if self.is_running() {
            return Ok(());
        }
        self.grid.toggle(x, y)
    }

    /// Update simulation by one frame.
    /// Each due tick applies one whole generation.
    pub fn tick(mut self, elapsed: Duration) -> Self {
        if self.is_running() && self.ticker.advance(elapsed) {
            self.advance();
        }
        self
    }
}

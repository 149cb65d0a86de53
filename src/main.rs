use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use log::info;
use macroquad::prelude::*;
use gridlife::{
    BoardLayout, Config, GameState, presets,
    application::{
        config::{DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, DEFAULT_OFFSET, DEFAULT_RANDOM_DENSITY},
        headless::{self, HeadlessOptions},
    },
    rendering::{self, BoardView},
    ui, input,
};

/// Conway's Game of Life on a fixed grid with a dead border
#[derive(Parser, Debug)]
#[command(name = "gridlife", version, about)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    height: usize,

    /// Cell edge length in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: f32,

    /// Margin around the board in pixels
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    offset: f32,

    /// Delay between generations while running
    #[arg(long, default_value_t = 300)]
    interval_ms: u64,

    /// Share of cells alive after a random fill
    #[arg(long, default_value_t = DEFAULT_RANDOM_DENSITY)]
    density: f64,

    /// Print generations to stdout instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Number of generations to print in headless mode
    #[arg(long, default_value_t = 10)]
    generations: u64,

    /// Preset pattern to start from (blinker, block, glider, toad, beacon, lwss, r-pentomino)
    #[arg(long)]
    pattern: Option<String>,

    /// Cell for the pattern's top-left corner, as X,Y
    #[arg(long, value_parser = parse_position, default_value = "0,0")]
    at: (i32, i32),

    /// Seed for a random initial fill
    #[arg(long)]
    seed: Option<u64>,

    /// Stop printing once every cell is dead
    #[arg(long)]
    stop_when_empty: bool,
}

fn parse_position(s: &str) -> Result<(i32, i32)> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected X,Y, got {s:?}"))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

impl Args {
    fn config(&self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            offset: self.offset,
            tick_interval: Duration::from_millis(self.interval_ms),
            random_density: self.density,
        }
    }

    fn options(&self) -> Result<HeadlessOptions> {
        let pattern = match &self.pattern {
            Some(name) => {
                let Some(pattern) = presets::by_name(name) else {
                    bail!("unknown pattern {name:?}");
                };
                Some((pattern, self.at.0, self.at.1))
            }
            None => None,
        };

        Ok(HeadlessOptions {
            generations: self.generations,
            pattern,
            seed: self.seed,
            stop_when_empty: self.stop_when_empty,
        })
    }
}

fn window_conf(config: &Config) -> Conf {
    let layout = BoardLayout::new(config.offset, config.cell_size);
    let (w, h) = ui::window_size(&layout, config.width, config.height);
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: w.ceil() as i32,
        window_height: h.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run_window(config: Config, mut state: GameState) {
    let layout = BoardLayout::new(config.offset, config.cell_size);
    let mut view = BoardView::new();

    loop {
        let mouse_pos = mouse_position();

        // Buttons reflect the mode of this frame
        let buttons = ui::create_buttons(&layout, &state);

        // Process input
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_mouse_toggle(&mut state, &layout, mouse_pos);
        state = input::process_keyboard_input(state);

        // Update game state
        state = state.tick(Duration::from_secs_f32(get_frame_time().max(0.0)));

        // Render
        view.refresh(&mut state);
        let buttons = ui::create_buttons(&layout, &state);
        rendering::draw_frame(&view, &state, &layout, &buttons, mouse_pos);

        next_frame().await;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();
    config.validate().context("invalid settings")?;
    let options = args.options()?;

    if args.headless {
        let stdout = std::io::stdout();
        return headless::run_headless(&config, &options, &mut stdout.lock());
    }

    let grid = headless::initial_grid(&config, &options).context("could not seed the grid")?;
    let state = GameState::with_grid(&config, grid);
    info!(
        "opening {}x{} board, stepping every {:?}",
        config.width, config.height, config.tick_interval
    );
    macroquad::Window::from_config(window_conf(&config), run_window(config, state));
    Ok(())
}

//! Terminal front end: runs the board without a window and prints each
//! generation as text.

use std::io::{self, Write};

use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};

use crate::domain::{Grid, GridError, Pattern};
use super::Config;

/// How the headless board is seeded and how long it runs
#[derive(Clone, Debug, Default)]
pub struct HeadlessOptions {
    pub generations: u64,
    /// Pattern stamped with its top-left corner at the given cell
    pub pattern: Option<(Pattern, i32, i32)>,
    /// Random fill seed, applied before the pattern
    pub seed: Option<u64>,
    pub stop_when_empty: bool,
}

/// Build the starting grid described by the config and options
pub fn initial_grid(config: &Config, options: &HeadlessOptions) -> Result<Grid, GridError> {
    let mut grid = Grid::new(config.width, config.height);

    if let Some(seed) = options.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        grid.randomize(&mut rng, config.random_density);
    }

    if let Some((pattern, x, y)) = &options.pattern {
        pattern.place_on(&mut grid, *x, *y)?;
        info!("placed {} at ({x}, {y})", pattern.name);
    }

    Ok(grid)
}

/// Print generation 0 through `options.generations`, one snapshot each.
pub fn run_headless<W: Write>(
    config: &Config,
    options: &HeadlessOptions,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut grid = initial_grid(config, options)?;

    for generation in 0..=options.generations {
        if generation > 0 {
            grid.next_generation();
        }
        write_snapshot(out, generation, &grid)?;
        if options.stop_when_empty && grid.is_extinct() {
            warn!("population died out at generation {generation}");
            break;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_snapshot<W: Write>(out: &mut W, generation: u64, grid: &Grid) -> io::Result<()> {
    writeln!(out, "generation {generation} (population {})", grid.population())?;
    write!(out, "{grid}")?;
    writeln!(out)
}

//! One full run: generate, dump, solve.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use mazer_core::{Grid, NoopObserver, ValidConfig};
use mazer_crossterm::{Glyphs, TerminalRenderer, write_maze};
use mazer_gen::{generate_observed, resolve_seed};
use mazer_solve::{Solution, solve_observed};

use crate::config::AppConfig;
use crate::error::AppError;

/// What a run produced.
#[derive(Debug)]
pub struct Report {
    pub config: ValidConfig,
    /// Seed actually used, drawn at random if none was configured.
    pub seed: u64,
    pub grid: Grid,
    pub solution: Solution,
    /// Where the maze was dumped, if it was.
    pub output: Option<PathBuf>,
    /// First terminal drawing failure, if animation hit one.
    pub render_error: Option<io::Error>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.solution.stats;
        write!(
            f,
            "solved {}x{} maze (seed {}) from {} to {}: ",
            self.config.dims.width(),
            self.config.dims.height(),
            self.seed,
            self.config.start,
            self.config.end,
        )?;
        write!(
            f,
            "path of {} cells, {} advances, {} backtracks",
            self.solution.len(),
            stats.advances,
            stats.backtracks,
        )
    }
}

/// Run without a terminal: nothing is drawn while working.
pub fn run(cfg: &AppConfig) -> Result<Report, AppError> {
    run_on::<io::Sink>(cfg, None)
}

/// Run, animating generation and solving on `term` when given.
///
/// Configuration is validated before anything is generated. The maze is
/// dumped to the output file after generation and before solving; with a
/// terminal, the [`saved_message`] is shown under the maze before the solve
/// starts. Drawing failures during animation don't stop the run; the first
/// one is returned in [`Report::render_error`].
pub fn run_on<W: Write>(
    cfg: &AppConfig,
    mut term: Option<&mut TerminalRenderer<W>>,
) -> Result<Report, AppError> {
    let config = cfg.maze.validate()?;
    let seed = resolve_seed(config.seed);

    let grid = match term.as_deref_mut() {
        Some(t) => {
            t.draw_maze(&Grid::new(config.dims))
                .map_err(AppError::Terminal)?;
            generate_observed(config.dims, seed, t)
        }
        None => generate_observed(config.dims, seed, &mut NoopObserver),
    };

    let output = if cfg.output.enabled {
        dump(&grid, &cfg.render.glyphs(), &cfg.output.path)?;
        info!("maze output saved to {}", cfg.output.path.display());
        Some(cfg.output.path.clone())
    } else {
        None
    };

    let (solution, render_error) = match term {
        Some(t) => {
            t.draw_maze(&grid).map_err(AppError::Terminal)?;
            if let Some(path) = &output {
                t.status(&grid, &saved_message(path));
            }
            t.begin_solve(config.start);
            let solution = solve_observed(&grid, config.start, config.end, &mut *t)?;
            t.park_cursor(&grid);
            let err = t.take_error();
            if let Some(e) = &err {
                warn!("animation was cut short: {e}");
            }
            (solution, err)
        }
        None => (
            solve_observed(&grid, config.start, config.end, &mut NoopObserver)?,
            None,
        ),
    };

    Ok(Report {
        config,
        seed,
        grid,
        solution,
        output,
        render_error,
    })
}

/// Confirmation shown once the maze has been dumped to `path`.
pub fn saved_message(path: &Path) -> String {
    format!("Maze output saved to {}", path.display())
}

/// Write the maze as text to `path`, replacing any existing file.
pub fn dump(grid: &Grid, glyphs: &Glyphs, path: &Path) -> Result<(), AppError> {
    let write = || -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        write_maze(grid, glyphs, &mut out)
    };
    write().map_err(|source| AppError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

//! Maze solving for mazer: depth-first search with explicit backtracking.
//!
//! The walk is driven by [`Solver`], which owns its visited map and path
//! stack so it can be reused across solves without reallocating. Cells and
//! their neighbours come from a [`Pather`]; [`mazer_core::Grid`] implements
//! it with the fixed north, east, south, west priority.
//!
//! The path found is simple and connected, not necessarily the shortest.

mod dfs;
mod solver;
mod traits;

pub use solver::{Solution, SolveStats, Solver};
pub use traits::Pather;

use mazer_core::{Grid, MazeError, NoopObserver, Observer, Point};

/// Find a path from `start` to `end` through the open cells of `grid`.
pub fn solve(grid: &Grid, start: Point, end: Point) -> Result<Vec<Point>, MazeError> {
    solve_observed(grid, start, end, &mut NoopObserver).map(|s| s.path)
}

/// Like [`solve`], reporting every advance and backtrack to `observer` and
/// returning the walk counters along with the path.
pub fn solve_observed(
    grid: &Grid,
    start: Point,
    end: Point,
    observer: &mut impl Observer,
) -> Result<Solution, MazeError> {
    let mut solver = Solver::new(grid.dims());
    let path = solver.dfs_path(grid, start, end, observer)?.to_vec();
    Ok(Solution {
        path,
        stats: solver.stats(),
    })
}

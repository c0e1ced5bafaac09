//! Perfect-maze generation for mazer using the hunt-and-kill method.
//!
//! [`generate`] is the one-call entry point; [`MazeGen`] exposes the carve
//! and hunt phases individually and reports every opened cell to an
//! [`Observer`].

pub mod mapgen;

pub use mapgen::{CARVE_ORIGIN, CHAMBER_STEPS, GenStats, MazeGen};

use log::info;
use mazer_core::{Dimensions, Grid, MazeError, NoopObserver, Observer};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Pick the seed for a run: the given one, or a fresh random one.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Build a finished perfect maze of `width × height`.
///
/// Both sides must be odd and at least 3. The same seed always yields the
/// same grid; `None` draws a random seed.
pub fn generate(width: i32, height: i32, seed: Option<u64>) -> Result<Grid, MazeError> {
    let dims = Dimensions::new(width, height)?;
    Ok(generate_observed(dims, resolve_seed(seed), &mut NoopObserver))
}

/// Like [`generate`], with validated dimensions and progress reported to
/// `observer` after every opened cell.
pub fn generate_observed(dims: Dimensions, seed: u64, observer: &mut impl Observer) -> Grid {
    info!(
        "generating {}x{} maze with seed {seed}",
        dims.width(),
        dims.height()
    );
    MazeGen::new(dims, StdRng::seed_from_u64(seed)).generate(observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::{EventLog, Point};

    /// Union-find over chamber indices.
    struct Dsu(Vec<usize>);

    impl Dsu {
        fn new(n: usize) -> Self {
            Self((0..n).collect())
        }

        fn find(&mut self, i: usize) -> usize {
            let mut r = i;
            while self.0[r] != r {
                r = self.0[r];
            }
            self.0[i] = r;
            r
        }

        /// Returns false if `a` and `b` were already joined.
        fn union(&mut self, a: usize, b: usize) -> bool {
            let (ra, rb) = (self.find(a), self.find(b));
            if ra == rb {
                return false;
            }
            self.0[ra] = rb;
            true
        }
    }

    fn chamber_index(grid: &Grid, p: Point) -> usize {
        let cols = ((grid.width() - 1) / 2) as usize;
        (p.y as usize / 2) * cols + p.x as usize / 2
    }

    /// Checks the chamber graph induced by open wall slots is a spanning
    /// tree: n-1 edges, no cycle, one component.
    fn assert_spanning_tree(grid: &Grid) {
        let n = grid.dims().chamber_count();
        let slots = grid.open_wall_slots();
        assert_eq!(slots.len(), n - 1, "edge count");

        let mut dsu = Dsu::new(n);
        for s in slots {
            let (a, b) = if s.x % 2 == 0 {
                (s.shift(-1, 0), s.shift(1, 0))
            } else {
                (s.shift(0, -1), s.shift(0, 1))
            };
            assert!(grid.is_chamber(a) && grid.is_chamber(b));
            assert!(
                dsu.union(chamber_index(grid, a), chamber_index(grid, b)),
                "cycle through {s}"
            );
        }
        let root = dsu.find(0);
        assert!((0..n).all(|i| dsu.find(i) == root), "disconnected");
    }

    #[test]
    fn rejects_invalid_dimensions() {
        assert_eq!(
            generate(4, 5, Some(1)),
            Err(MazeError::InvalidDimensions {
                width: 4,
                height: 5
            })
        );
        assert!(generate(5, 1, Some(1)).is_err());
    }

    #[test]
    fn every_chamber_is_open() {
        for seed in 0..20 {
            let grid = generate(15, 21, Some(seed)).unwrap();
            assert!(grid.chambers().all(|c| grid.is_open(c)), "seed {seed}");
        }
    }

    #[test]
    fn result_is_a_spanning_tree() {
        for seed in 0..30 {
            assert_spanning_tree(&generate(13, 9, Some(seed)).unwrap());
        }
        assert_spanning_tree(&generate(33, 33, Some(99)).unwrap());
        assert_spanning_tree(&generate(3, 3, Some(0)).unwrap());
        assert_spanning_tree(&generate(41, 3, Some(7)).unwrap());
    }

    #[test]
    fn five_by_five_has_four_chambers_and_three_slots() {
        for seed in 0..16 {
            let grid = generate(5, 5, Some(seed)).unwrap();
            assert_eq!(grid.chambers().filter(|&c| grid.is_open(c)).count(), 4);
            assert_eq!(grid.open_wall_slots().len(), 3);
            assert_eq!(grid.open_count(), 7);
            assert_spanning_tree(&grid);
        }
    }

    #[test]
    fn same_seed_same_grid() {
        let a = generate(31, 17, Some(1234)).unwrap();
        let b = generate(31, 17, Some(1234)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seeds_vary_the_layout() {
        let first = generate(21, 21, Some(0)).unwrap();
        assert!((1..8).any(|s| generate(21, 21, Some(s)).unwrap() != first));
    }

    #[test]
    fn observed_run_matches_plain_run() {
        let dims = Dimensions::new(11, 11).unwrap();
        let mut log = EventLog::new();
        let observed = generate_observed(dims, 42, &mut log);
        assert_eq!(observed, generate(11, 11, Some(42)).unwrap());
        assert_eq!(log.len(), observed.open_count());
    }

    #[test]
    fn generators_are_independent() {
        // Two mazes built in one process do not share state.
        let a = generate(9, 9, Some(3)).unwrap();
        let _ = generate(25, 7, Some(4)).unwrap();
        assert_eq!(a, generate(9, 9, Some(3)).unwrap());
    }
}

//! Hunt-and-kill maze generation.
//!
//! The generator alternates two phases over the chamber lattice:
//! - **Carve** ("kill"): a randomized depth-first walk that knocks down the
//!   wall slot to any closed neighbour chamber and continues from there.
//! - **Hunt**: a row-major scan for the first closed chamber that touches the
//!   existing maze; it is joined through one wall slot and carving resumes.
//!
//! Every chamber enters the maze through exactly one new wall slot, so the
//! result is a spanning tree over the chambers: a perfect maze.

use log::debug;
use mazer_core::{Dimensions, Grid, Observer, Point, VisitedMap};
use rand::Rng;
use rand::seq::SliceRandom;

/// Chamber where the first carve starts.
pub const CARVE_ORIGIN: Point = Point::new(1, 1);

/// Offsets from a chamber to its four neighbour chambers. The hunt scan
/// checks them in this order; the carve shuffles them per cell.
pub const CHAMBER_STEPS: [Point; 4] = [
    Point::new(0, 2),
    Point::new(2, 0),
    Point::new(0, -2),
    Point::new(-2, 0),
];

/// Counters collected during one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenStats {
    /// Chambers and wall slots opened.
    pub cells_opened: usize,
    /// Hunt scans that found a chamber to resume from.
    pub hunts: usize,
    /// Deepest carve stack reached.
    pub max_depth: usize,
}

/// One level of the explicit carve stack: a chamber and the neighbour
/// offsets it has yet to try.
#[derive(Debug, Clone, Copy)]
struct CarveFrame {
    cell: Point,
    steps: [Point; 4],
    next: usize,
}

/// Hunt-and-kill generator owning the grid under construction.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    grid: Grid,
    visited: VisitedMap,
    stack: Vec<CarveFrame>,
    stats: GenStats,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator over an all-wall grid of the given size.
    pub fn new(dims: Dimensions, rng: R) -> Self {
        Self {
            rng,
            grid: Grid::new(dims),
            visited: VisitedMap::new(dims),
            stack: Vec::new(),
            stats: GenStats::default(),
        }
    }

    /// The grid in its current state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells carved so far.
    pub fn visited(&self) -> &VisitedMap {
        &self.visited
    }

    pub fn stats(&self) -> GenStats {
        self.stats
    }

    /// Run carve from [`CARVE_ORIGIN`] then hunt until nothing is left, and
    /// return the finished maze.
    pub fn generate(mut self, observer: &mut impl Observer) -> Grid {
        self.carve(CARVE_ORIGIN, observer);
        while self.hunt(observer) {}
        debug!(
            "generated {}x{} maze: {} cells opened, {} hunts, carve depth {}",
            self.grid.width(),
            self.grid.height(),
            self.stats.cells_opened,
            self.stats.hunts,
            self.stats.max_depth
        );
        self.grid
    }

    /// Randomized depth-first carve starting at chamber `start`.
    ///
    /// Behaves like the recursive walk: a neighbour is fully explored before
    /// the next shuffled offset of its parent is tried.
    pub fn carve(&mut self, start: Point, observer: &mut impl Observer) {
        self.open(start, observer);
        self.stack.clear();
        let frame = self.frame(start);
        self.stack.push(frame);

        while let Some(top) = self.stack.last_mut() {
            if top.next == top.steps.len() {
                self.stack.pop();
                continue;
            }
            let cell = top.cell;
            let step = top.steps[top.next];
            top.next += 1;

            let neighbor = cell + step;
            if !self.grid.in_bounds(neighbor) || self.grid.is_open(neighbor) {
                continue;
            }
            let Some(slot) = self.grid.wall_between(cell, neighbor) else {
                continue;
            };
            self.open(slot, observer);
            self.open(neighbor, observer);
            let frame = self.frame(neighbor);
            self.stack.push(frame);
            self.stats.max_depth = self.stats.max_depth.max(self.stack.len());
        }
    }

    /// Scan chambers row-major for the first closed one next to an open
    /// chamber, join it to the maze and carve from it.
    ///
    /// Returns `false` once a full scan finds nothing, i.e. generation is
    /// complete.
    pub fn hunt(&mut self, observer: &mut impl Observer) -> bool {
        let grid = &self.grid;
        let found = grid.chambers().find_map(|cell| {
            if grid.is_open(cell) {
                return None;
            }
            CHAMBER_STEPS
                .iter()
                .map(|&step| cell + step)
                .find(|&n| grid.in_bounds(n) && grid.is_open(n))
                .and_then(|n| grid.wall_between(cell, n))
                .map(|slot| (cell, slot))
        });

        let Some((cell, slot)) = found else {
            return false;
        };
        self.stats.hunts += 1;
        self.open(slot, observer);
        self.carve(cell, observer);
        true
    }

    fn frame(&mut self, cell: Point) -> CarveFrame {
        let mut steps = CHAMBER_STEPS;
        steps.shuffle(&mut self.rng);
        CarveFrame {
            cell,
            steps,
            next: 0,
        }
    }

    fn open(&mut self, p: Point, observer: &mut impl Observer) {
        if self.grid.is_open(p) {
            return;
        }
        self.grid.set_open(p);
        self.visited.visit(p);
        self.stats.cells_opened += 1;
        observer.on_cell_opened(p);
    }
}

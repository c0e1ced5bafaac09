use mazer_core::{Dimensions, Point, Range, VisitedMap};

/// Counters from the last solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    /// Forward moves, including the final move onto the end cell.
    pub advances: usize,
    /// Pops of the path stack that left a cell to retreat to.
    pub backtracks: usize,
    /// Distinct cells marked visited.
    pub visited: usize,
}

/// A finished solve: the path from start to end inclusive, plus counters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub path: Vec<Point>,
    pub stats: SolveStats,
}

impl Solution {
    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Depth-first maze walker.
///
/// `Solver` owns its visited map, path stack and neighbour scratch buffer,
/// so it never sees flags left behind by generation and repeated solves on
/// same-sized grids do not reallocate.
pub struct Solver {
    pub(crate) dims: Dimensions,
    pub(crate) visited: VisitedMap,
    pub(crate) path: Vec<Point>,
    pub(crate) current: Point,
    pub(crate) stats: SolveStats,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Solver {
    /// Create a solver for grids of the given size.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            visited: VisitedMap::new(dims),
            path: Vec::new(),
            current: Point::ZERO,
            stats: SolveStats::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Clear all per-solve state.
    pub fn reset(&mut self) {
        self.visited.reset();
        self.path.clear();
        self.current = Point::ZERO;
        self.stats = SolveStats::default();
    }

    /// Size of grids this solver handles.
    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Addressable cells.
    #[inline]
    pub fn range(&self) -> Range {
        self.dims.range()
    }

    /// Position of the walker.
    #[inline]
    pub fn current(&self) -> Point {
        self.current
    }

    /// The path stack, bottom (start) to top.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Cells visited by the last solve.
    #[inline]
    pub fn visited(&self) -> &VisitedMap {
        &self.visited
    }

    #[inline]
    pub fn stats(&self) -> SolveStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: i32, h: i32) -> Dimensions {
        Dimensions::new(w, h).unwrap()
    }

    #[test]
    fn new_solver_is_empty() {
        let s = Solver::new(dims(7, 5));
        assert!(s.path().is_empty());
        assert_eq!(s.visited().count(), 0);
        assert_eq!(s.stats(), SolveStats::default());
        assert_eq!(s.range(), Range::new(0, 0, 7, 5));
    }

    #[test]
    fn reset_clears_the_last_solve() {
        let mut s = Solver::new(dims(5, 5));
        s.visited.visit(Point::new(1, 1));
        s.path.push(Point::new(1, 1));
        s.stats.advances = 3;

        s.reset();
        assert_eq!(s.visited().count(), 0);
        assert!(s.path().is_empty());
        assert_eq!(s.stats(), SolveStats::default());
        assert_eq!(s.dims(), dims(5, 5));
    }
}

//! The maze [`Grid`] and its parallel [`VisitedMap`].
//!
//! Both are owned, fixed-size boolean grids addressed by [`Point`]. The
//! outer ring of cells is permanent wall: only the *interior* (see
//! [`Grid::in_bounds`]) is ever carved.
//!
//! Cells with two odd coordinates are *chambers*. A cell with exactly one
//! odd coordinate sits between two chambers and is a *wall slot*; cells with
//! two even coordinates are pillars and always stay closed.

use crate::error::MazeError;
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

/// Validated maze size: both sides odd and at least 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dimensions {
    width: i32,
    height: i32,
}

impl Dimensions {
    /// Smallest accepted side length.
    pub const MIN_SIDE: i32 = 3;

    /// Validate a width/height pair.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        let valid = |side: i32| side >= Self::MIN_SIDE && side % 2 == 1;
        if !valid(width) || !valid(height) {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Every addressable cell, `[0, width) × [0, height)`.
    #[inline]
    pub fn range(self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// The carvable cells: the full range minus the outer ring.
    #[inline]
    pub fn interior(self) -> Range {
        self.range().shift(1, 1, -1, -1)
    }

    /// Total cell count.
    #[inline]
    pub(crate) fn len(self) -> usize {
        self.range().len()
    }

    /// Bottom-left chamber, `(1, height - 2)`.
    #[inline]
    pub fn default_start(self) -> Point {
        Point::new(1, self.height - 2)
    }

    /// Top-right chamber, `(width - 2, 1)`.
    #[inline]
    pub fn default_end(self) -> Point {
        Point::new(self.width - 2, 1)
    }

    /// Number of chambers (odd/odd cells inside the outer ring).
    #[inline]
    pub fn chamber_count(self) -> usize {
        (((self.width - 1) / 2) * ((self.height - 1) / 2)) as usize
    }
}

// ---------------------------------------------------------------------------
// Internal buffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
struct CellBuffer {
    cells: Vec<bool>,
    dims: Dimensions,
}

impl CellBuffer {
    fn new(dims: Dimensions) -> Self {
        Self {
            cells: vec![false; dims.len()],
            dims,
        }
    }

    #[inline]
    #[track_caller]
    fn index(&self, p: Point) -> usize {
        assert!(
            self.dims.range().contains(p),
            "cell {p} is outside the {}x{} maze",
            self.dims.width,
            self.dims.height
        );
        (p.y * self.dims.width + p.x) as usize
    }

    #[inline]
    #[track_caller]
    fn get(&self, p: Point) -> bool {
        self.cells[self.index(p)]
    }

    #[inline]
    #[track_caller]
    fn put(&mut self, p: Point, v: bool) {
        let i = self.index(p);
        self.cells[i] = v;
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular maze: each cell is either open floor or wall.
///
/// Reading or writing a cell outside `[0, width) × [0, height)` panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    buf: CellBuffer,
}

impl Grid {
    /// Create a grid with every cell closed.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            buf: CellBuffer::new(dims),
        }
    }

    /// Build a grid from text rows: `#` is wall, any other character is open.
    ///
    /// All rows must have the same length, and the resulting size must be
    /// valid [`Dimensions`].
    pub fn from_ascii(rows: &[&str]) -> Result<Self, MazeError> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let dims = Dimensions::new(width, height)?;
        if rows.iter().any(|r| r.chars().count() as i32 != width) {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let mut grid = Self::new(dims);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '#' {
                    grid.set_open(Point::new(x as i32, y as i32));
                }
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.buf.dims
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.buf.dims.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.buf.dims.height
    }

    /// Every addressable cell.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.buf.dims.range()
    }

    /// Whether `p` is addressable at all (outer ring included).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether `p` lies strictly inside the permanent outer wall:
    /// `1 ≤ x < width - 1` and `1 ≤ y < height - 1`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 1 && p.y >= 1 && p.x < self.width() - 1 && p.y < self.height() - 1
    }

    /// Whether `p` is open floor. Panics if `p` is outside the grid.
    #[inline]
    #[track_caller]
    pub fn is_open(&self, p: Point) -> bool {
        self.buf.get(p)
    }

    /// Open the cell at `p`. Panics if `p` is outside the grid.
    #[inline]
    #[track_caller]
    pub fn set_open(&mut self, p: Point) {
        self.buf.put(p, true);
    }

    /// Close the cell at `p` back into wall. Panics if `p` is outside the grid.
    #[inline]
    #[track_caller]
    pub fn set_closed(&mut self, p: Point) {
        self.buf.put(p, false);
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.buf.count()
    }

    /// Whether `p` is an interior cell with two odd coordinates.
    #[inline]
    pub fn is_chamber(&self, p: Point) -> bool {
        p.is_odd() && self.in_bounds(p)
    }

    /// Whether `p` is an interior cell between two chambers.
    #[inline]
    pub fn is_wall_slot(&self, p: Point) -> bool {
        self.in_bounds(p) && ((p.x % 2 == 0) != (p.y % 2 == 0))
    }

    /// All chambers in row-major order.
    pub fn chambers(&self) -> impl Iterator<Item = Point> + use<> {
        let (w, h) = (self.width(), self.height());
        (1..h - 1)
            .step_by(2)
            .flat_map(move |y| (1..w - 1).step_by(2).map(move |x| Point::new(x, y)))
    }

    /// The wall slot joining chambers `a` and `b`, if they are exactly two
    /// cells apart on one axis.
    pub fn wall_between(&self, a: Point, b: Point) -> Option<Point> {
        let d = b - a;
        if d.manhattan() != 2 || (d.x != 0 && d.y != 0) {
            return None;
        }
        Some(a + d / 2)
    }

    /// Every open wall slot, row-major. In a perfect maze these are exactly
    /// the edges of the chamber spanning tree.
    pub fn open_wall_slots(&self) -> Vec<Point> {
        self.dims()
            .interior()
            .iter()
            .filter(|&p| self.is_wall_slot(p) && self.is_open(p))
            .collect()
    }

    /// Row-major iterator over `(Point, open)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds().iter().map(|p| (p, self.is_open(p)))
    }

    /// Row-major iterator over rows of open flags, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.buf.cells.chunks(self.width() as usize)
    }
}

// ---------------------------------------------------------------------------
// VisitedMap
// ---------------------------------------------------------------------------

/// A per-cell visited flag, parallel to a [`Grid`].
///
/// Each algorithm phase owns its own map, created all-unvisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMap {
    buf: CellBuffer,
}

impl VisitedMap {
    /// Create a map with every cell unvisited.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            buf: CellBuffer::new(dims),
        }
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.buf.dims
    }

    /// Panics if `p` is outside the grid.
    #[inline]
    #[track_caller]
    pub fn is_visited(&self, p: Point) -> bool {
        self.buf.get(p)
    }

    /// Mark `p` visited. Panics if `p` is outside the grid.
    #[inline]
    #[track_caller]
    pub fn visit(&mut self, p: Point) {
        self.buf.put(p, true);
    }

    /// Mark every cell unvisited.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Number of visited cells.
    pub fn count(&self) -> usize {
        self.buf.count()
    }
}

use mazer_core::{Grid, Point};

/// Minimal search interface: which cells can be walked on, and from a cell,
/// which neighbours are reachable.
pub trait Pather {
    /// Whether `p` can be stood on.
    fn passable(&self, p: Point) -> bool;

    /// Append the reachable neighbours of `p` into `buf` in the order the
    /// search should try them. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Open cells are passable; neighbours are the open cardinal cells in
/// north, east, south, west order.
impl Pather for Grid {
    fn passable(&self, p: Point) -> bool {
        self.contains(p) && self.is_open(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }
}

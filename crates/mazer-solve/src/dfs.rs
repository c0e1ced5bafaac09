//! Depth-first search with an explicit backtrack stack.

use log::{debug, trace};
use mazer_core::{Endpoint, MazeError, Observer, Point};

use crate::Solver;
use crate::traits::Pather;

impl Solver {
    /// Walk from `start` to `end`, depth-first, trying neighbours in the
    /// order `pather` lists them.
    ///
    /// Each iteration marks the current cell visited, pushes it, and moves
    /// into its first unvisited passable neighbour. At a dead end the stack
    /// is popped until a cell with an unvisited neighbour comes back on top.
    /// The returned path runs from `start` to `end` inclusive; it is simple
    /// and connected but not necessarily shortest.
    ///
    /// Fails with [`MazeError::InvalidEndpoint`] if an endpoint is outside
    /// the solver's range or not passable, and with [`MazeError::NoPath`] if
    /// the stack empties before `end` is reached.
    pub fn dfs_path<P: Pather>(
        &mut self,
        pather: &P,
        start: Point,
        end: Point,
        observer: &mut impl Observer,
    ) -> Result<&[Point], MazeError> {
        self.reset();
        self.check_endpoint(pather, Endpoint::Start, start)?;
        self.check_endpoint(pather, Endpoint::End, end)?;

        self.current = start;
        while self.current != end {
            self.visit(self.current);
            self.path.push(self.current);
            let next = match self.check(pather, self.current) {
                Some(n) => n,
                None => self.backtrack(pather, start, end, observer)?,
            };
            self.advance(next, observer);
        }
        self.visit(end);
        self.path.push(end);

        debug!(
            "solved {start} -> {end}: path of {} cells, {} advances, {} backtracks",
            self.path.len(),
            self.stats.advances,
            self.stats.backtracks
        );
        Ok(self.path.as_slice())
    }

    /// First neighbour of `p` that is passable and not yet visited.
    fn check<P: Pather>(&mut self, pather: &P, p: Point) -> Option<Point> {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        pather.neighbors(p, &mut nbuf);
        let range = self.range();
        let found = nbuf
            .iter()
            .copied()
            .find(|&n| range.contains(n) && !self.visited.is_visited(n));
        self.nbuf = nbuf;
        found
    }

    /// Pop dead-end cells until the new top has an unvisited neighbour, and
    /// return that neighbour.
    fn backtrack<P: Pather>(
        &mut self,
        pather: &P,
        start: Point,
        end: Point,
        observer: &mut impl Observer,
    ) -> Result<Point, MazeError> {
        loop {
            self.path.pop();
            let Some(&top) = self.path.last() else {
                debug!("no path {start} -> {end} after {} backtracks", self.stats.backtracks);
                return Err(MazeError::NoPath { start, end });
            };
            self.stats.backtracks += 1;
            self.current = top;
            trace!("backtrack to {top}");
            observer.on_backtrack(top);
            if let Some(next) = self.check(pather, top) {
                return Ok(next);
            }
        }
    }

    fn advance(&mut self, next: Point, observer: &mut impl Observer) {
        self.stats.advances += 1;
        self.current = next;
        trace!("advance to {next}");
        observer.on_advance(next);
    }

    fn visit(&mut self, p: Point) {
        if !self.visited.is_visited(p) {
            self.visited.visit(p);
            self.stats.visited += 1;
        }
    }

    fn check_endpoint<P: Pather>(
        &self,
        pather: &P,
        role: Endpoint,
        pos: Point,
    ) -> Result<(), MazeError> {
        if self.range().contains(pos) && pather.passable(pos) {
            Ok(())
        } else {
            Err(MazeError::InvalidEndpoint { role, pos })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::{EventLog, Grid, MazeEvent, NoopObserver};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// The north-first walk from (1,3) runs up the left corridor into a dead
    /// end before finding the bottom route.
    const DEAD_END: [&str; 5] = ["#######", "#   # #", "# ### #", "#     #", "#######"];

    #[test]
    fn backtracks_out_of_a_dead_end() {
        let g = Grid::from_ascii(&DEAD_END).unwrap();
        let mut s = Solver::new(g.dims());
        let mut log = EventLog::new();
        let path = s.dfs_path(&g, p(1, 3), p(5, 1), &mut log).unwrap().to_vec();

        assert_eq!(
            path,
            vec![
                p(1, 3),
                p(2, 3),
                p(3, 3),
                p(4, 3),
                p(5, 3),
                p(5, 2),
                p(5, 1),
            ]
        );
        use MazeEvent::{Advance as A, Backtrack as B};
        assert_eq!(
            log.events,
            vec![
                A(p(1, 2)),
                A(p(1, 1)),
                A(p(2, 1)),
                A(p(3, 1)),
                B(p(2, 1)),
                B(p(1, 1)),
                B(p(1, 2)),
                B(p(1, 3)),
                A(p(2, 3)),
                A(p(3, 3)),
                A(p(4, 3)),
                A(p(5, 3)),
                A(p(5, 2)),
                A(p(5, 1)),
            ]
        );
        assert_eq!(
            s.stats(),
            crate::SolveStats {
                advances: 10,
                backtracks: 4,
                visited: 11,
            }
        );
        assert_eq!(s.current(), p(5, 1));
    }

    #[test]
    fn path_stack_matches_visited_cells_on_path() {
        let g = Grid::from_ascii(&DEAD_END).unwrap();
        let mut s = Solver::new(g.dims());
        s.dfs_path(&g, p(1, 3), p(5, 1), &mut NoopObserver).unwrap();
        assert!(s.path().iter().all(|&c| s.visited().is_visited(c)));
        // Abandoned cells stay visited but leave the stack.
        assert!(s.visited().is_visited(p(3, 1)));
        assert!(!s.path().contains(&p(3, 1)));
    }

    #[test]
    fn start_equal_to_end_is_a_single_cell_path() {
        let g = Grid::from_ascii(&DEAD_END).unwrap();
        let mut s = Solver::new(g.dims());
        let mut log = EventLog::new();
        let path = s.dfs_path(&g, p(3, 3), p(3, 3), &mut log).unwrap();
        assert_eq!(path, &[p(3, 3)]);
        assert!(log.is_empty());
    }

    #[test]
    fn disconnected_endpoints_report_no_path() {
        let g = Grid::from_ascii(&["#####", "#   #", "#####", "#   #", "#####"]).unwrap();
        let mut s = Solver::new(g.dims());
        let mut log = EventLog::new();
        let err = s.dfs_path(&g, p(1, 3), p(3, 1), &mut log).unwrap_err();
        assert_eq!(
            err,
            MazeError::NoPath {
                start: p(1, 3),
                end: p(3, 1)
            }
        );
        assert_eq!(
            log.events,
            vec![
                MazeEvent::Advance(p(2, 3)),
                MazeEvent::Advance(p(3, 3)),
                MazeEvent::Backtrack(p(2, 3)),
                MazeEvent::Backtrack(p(1, 3)),
            ]
        );
    }

    #[test]
    fn isolated_start_reports_no_path() {
        let g = Grid::from_ascii(&["#####", "# # #", "#####"]).unwrap();
        let mut s = Solver::new(g.dims());
        assert!(matches!(
            s.dfs_path(&g, p(1, 1), p(3, 1), &mut NoopObserver),
            Err(MazeError::NoPath { .. })
        ));
    }

    #[test]
    fn rejects_closed_or_outside_endpoints() {
        let g = Grid::from_ascii(&DEAD_END).unwrap();
        let mut s = Solver::new(g.dims());
        assert_eq!(
            s.dfs_path(&g, p(2, 2), p(5, 1), &mut NoopObserver)
                .unwrap_err(),
            MazeError::InvalidEndpoint {
                role: Endpoint::Start,
                pos: p(2, 2)
            }
        );
        assert_eq!(
            s.dfs_path(&g, p(1, 3), p(9, 1), &mut NoopObserver)
                .unwrap_err(),
            MazeError::InvalidEndpoint {
                role: Endpoint::End,
                pos: p(9, 1)
            }
        );
    }

    #[test]
    fn solver_is_reusable() {
        let g = Grid::from_ascii(&DEAD_END).unwrap();
        let mut s = Solver::new(g.dims());
        let first = s
            .dfs_path(&g, p(1, 3), p(5, 1), &mut NoopObserver)
            .unwrap()
            .to_vec();
        let second = s
            .dfs_path(&g, p(1, 3), p(5, 1), &mut NoopObserver)
            .unwrap()
            .to_vec();
        assert_eq!(first, second);
        let back = s
            .dfs_path(&g, p(5, 1), p(1, 3), &mut NoopObserver)
            .unwrap()
            .to_vec();
        assert_eq!(back.first(), Some(&p(5, 1)));
        assert_eq!(back.last(), Some(&p(1, 3)));
    }
}

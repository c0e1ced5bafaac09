//! Progress notifications emitted by the generator and the solver.
//!
//! The algorithms never draw or sleep. Every mutation is reported
//! synchronously through an [`Observer`], so a renderer can animate it and a
//! test can record it with an [`EventLog`].

use crate::geom::Point;

/// Receiver of maze progress notifications. All methods default to no-ops.
pub trait Observer {
    /// A cell (chamber or wall slot) was opened during generation.
    fn on_cell_opened(&mut self, _p: Point) {}

    /// The solver stepped forward into `p`.
    fn on_advance(&mut self, _p: Point) {}

    /// The solver abandoned its current cell and retreated to `p`, the new
    /// top of its path stack.
    fn on_backtrack(&mut self, _p: Point) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_cell_opened(&mut self, p: Point) {
        (**self).on_cell_opened(p);
    }

    fn on_advance(&mut self, p: Point) {
        (**self).on_advance(p);
    }

    fn on_backtrack(&mut self, p: Point) {
        (**self).on_backtrack(p);
    }
}

/// A single recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeEvent {
    CellOpened(Point),
    Advance(Point),
    Backtrack(Point),
}

impl MazeEvent {
    /// The cell the event refers to.
    pub fn pos(self) -> Point {
        match self {
            Self::CellOpened(p) | Self::Advance(p) | Self::Backtrack(p) => p,
        }
    }

    /// Forward this event to `observer`.
    pub fn replay(self, observer: &mut impl Observer) {
        match self {
            Self::CellOpened(p) => observer.on_cell_opened(p),
            Self::Advance(p) => observer.on_advance(p),
            Self::Backtrack(p) => observer.on_backtrack(p),
        }
    }
}

/// Observer that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<MazeEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Positions of all `CellOpened` events, in order.
    pub fn opened(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                MazeEvent::CellOpened(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Number of events matching `pred`.
    pub fn count(&self, pred: impl Fn(&MazeEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Send every recorded event, in order, to `observer`.
    pub fn replay(&self, observer: &mut impl Observer) {
        for e in &self.events {
            e.replay(observer);
        }
    }
}

impl Observer for EventLog {
    fn on_cell_opened(&mut self, p: Point) {
        self.events.push(MazeEvent::CellOpened(p));
    }

    fn on_advance(&mut self, p: Point) {
        self.events.push(MazeEvent::Advance(p));
    }

    fn on_backtrack(&mut self, p: Point) {
        self.events.push(MazeEvent::Backtrack(p));
    }
}

//! **mazer-core**: grid model shared by the maze generator and solver.
//!
//! This crate provides the geometry primitives, the open/wall [`Grid`] with
//! its chamber and wall-slot structure, the [`VisitedMap`] each algorithm
//! phase owns, the [`Observer`] notification hooks, run configuration and the
//! common [`MazeError`] type.

pub mod config;
pub mod error;
pub mod events;
pub mod geom;
pub mod grid;

pub use config::{MazeConfig, ValidConfig};
pub use error::{Endpoint, MazeError};
pub use events::{EventLog, MazeEvent, NoopObserver, Observer};
pub use geom::{Point, Range};
pub use grid::{Dimensions, Grid, VisitedMap};
